//! TOML-based configuration for OmniRoute
//!
//! All settings live in `omniroute.toml`. Every section is optional and falls
//! back to defaults, so an empty file is a valid configuration.
//!
//! # Hot Reloading
//!
//! Changes to the file are picked up at runtime. Use [`ConfigManager`] for
//! thread-safe access to the current configuration.

use crate::assistant::store::DEFAULT_MAX_CONVERSATIONS;
use arc_swap::ArcSwap;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use omniroute_domain::prompt::DEFAULT_MODEL;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Root configuration structure loaded from omniroute.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmniRouteConfig {
    /// `[server]`: bind address, logging, CORS
    pub server: ServerConfig,
    /// `[assistant]`: LLM provider settings
    pub assistant: AssistantConfig,
    /// `[login]`: simulated sign-in
    pub login: LoginConfig,
}

// ============= Server Configuration =============

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, colored when attached to a terminal
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Default tracing filter; `RUST_LOG` wins when set
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Allowed browser origins; empty or `"*"` allows any.
    pub cors_origins: Vec<String>,
    /// Server-held conversations kept before the least recently used is
    /// evicted
    pub max_conversations: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cors_origins: vec!["http://localhost:8080".to_string()],
            max_conversations: DEFAULT_MAX_CONVERSATIONS,
        }
    }
}

// ============= Assistant Configuration =============

/// Which LLM backend answers the assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini `generateContent`
    #[default]
    Gemini,
    /// Local Ollama server
    Ollama,
}

impl ProviderKind {
    /// Lowercase name as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown provider '{}' (expected gemini or ollama)",
                other
            ))),
        }
    }
}

/// LLM provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Backend to call
    pub provider: ProviderKind,
    /// Model name passed to the provider
    pub model: String,
    /// Gemini API root
    pub api_base: String,
    /// Name of the environment variable holding the Gemini key
    pub api_key_env: String,
    /// Ollama server URL
    pub ollama_url: String,
    /// Unset means no local timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: DEFAULT_MODEL.to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            timeout_secs: None,
        }
    }
}

// ============= Login Configuration =============

/// Simulated sign-in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Simulated login latency
    pub delay_ms: u64,
}

impl LoginConfig {
    /// `delay_ms` as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: omniroute_domain::navigation::LOGIN_DELAY.as_millis() as u64,
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Configuration warnings that don't prevent operation but may indicate issues
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// Category
    pub kind: ConfigWarningKind,
    /// Human-readable detail
    pub message: String,
}

/// Category of a [`ConfigWarning`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarningKind {
    /// The provider key variable is unset
    MissingCredential,
    /// Any browser origin may call the API
    PermissiveCors,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The path does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O failure reading or writing the file
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Malformed TOML or wrong value types
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Could not render the config back to TOML
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Well-formed but unusable values
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The file watcher could not be started
    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),
}

impl OmniRouteConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: OmniRouteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(path)) => {
                warn!("{:?} not found, using default configuration", path);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.max_conversations == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_conversations must be positive".to_string(),
            ));
        }
        if self.assistant.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "assistant.model must not be empty".to_string(),
            ));
        }
        if self.assistant.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "assistant.api_key_env must not be empty".to_string(),
            ));
        }
        check_url("assistant.api_base", &self.assistant.api_base)?;
        check_url("assistant.ollama_url", &self.assistant.ollama_url)?;
        for origin in self.server.cors_origins.iter().filter(|o| o.as_str() != "*") {
            check_url("server.cors_origins", origin)?;
        }
        if self.assistant.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "assistant.timeout_secs must be positive when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate configuration and collect non-fatal warnings
    pub fn validate_with_warnings(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.validate()?;

        let mut warnings = Vec::new();

        if self.assistant.provider == ProviderKind::Gemini
            && self.gemini_api_key().is_none()
        {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::MissingCredential,
                message: format!(
                    "Environment variable '{}' is not set; the assistant will reply with a configuration error",
                    self.assistant.api_key_env
                ),
            });
        }

        let cors = &self.server.cors_origins;
        if cors.is_empty() || cors.iter().any(|o| o == "*") {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::PermissiveCors,
                message: "server.cors_origins is empty or contains \"*\"; any origin is allowed"
                    .to_string(),
            });
        }

        Ok(warnings)
    }

    /// The Gemini credential from the environment, if set and non-empty
    pub fn gemini_api_key(&self) -> Option<String> {
        std::env::var(&self.assistant.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must start with http:// or https:// (got '{}')",
            field, value
        )))
    }
}

// ============= Hot Reloading Configuration Manager =============

/// Thread-safe configuration manager with hot reloading support
pub struct ConfigManager {
    config: Arc<ArcSwap<OmniRouteConfig>>,
    config_path: PathBuf,
    watcher: RwLock<Option<RecommendedWatcher>>,
}

impl ConfigManager {
    /// Create a new configuration manager and load the initial config
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = absolute(path.as_ref())?;
        let config = OmniRouteConfig::load(&config_path)?;
        Ok(Self::with_path(config, config_path))
    }

    /// Like [`ConfigManager::new`], but a missing file yields defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = absolute(path.as_ref())?;
        let config = OmniRouteConfig::load_or_default(&config_path)?;
        Ok(Self::with_path(config, config_path))
    }

    /// Create a config manager directly from a config (useful for testing)
    /// This won't have file watching capabilities.
    pub fn from_config(config: OmniRouteConfig) -> Self {
        Self::with_path(config, PathBuf::from("omniroute.toml"))
    }

    fn with_path(config: OmniRouteConfig, config_path: PathBuf) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path,
            watcher: RwLock::new(None),
        }
    }

    /// Get the current configuration (lockless read)
    pub fn config(&self) -> Arc<OmniRouteConfig> {
        self.config.load_full()
    }

    /// File this manager reads from
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Manually reload the configuration from disk
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("Reloading configuration from {:?}", self.config_path);

        let new_config = OmniRouteConfig::load(&self.config_path)?;
        self.config.store(Arc::new(new_config));

        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Start watching for configuration file changes
    ///
    /// Must be called inside a tokio runtime.
    pub fn start_watching(&self) -> Result<(), ConfigError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let file_name = self.config_path.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    let touches_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if touches_config && (event.kind.is_modify() || event.kind.is_create()) {
                        let _ = tx.send(());
                    }
                }
                Err(e) => {
                    error!("Config watcher error: {:?}", e);
                }
            }
        })?;

        if let Some(parent) = self.config_path.parent() {
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        }

        *self.watcher.write() = Some(watcher);

        let config_path = self.config_path.clone();
        let config_arc = Arc::clone(&self.config);
        tokio::spawn(async move {
            let debounce = Duration::from_millis(500);
            let mut last_reload: Option<std::time::Instant> = None;

            while rx.recv().await.is_some() {
                // trailing edge: wait out the window instead of dropping the event
                if let Some(remaining) =
                    last_reload.and_then(|t| debounce.checked_sub(t.elapsed()))
                {
                    tokio::time::sleep(remaining).await;
                }

                // let the writer finish, then fold the burst into one reload
                tokio::time::sleep(Duration::from_millis(100)).await;
                while rx.try_recv().is_ok() {}

                match OmniRouteConfig::load(&config_path) {
                    Ok(new_config) => {
                        config_arc.store(Arc::new(new_config));
                        info!("Configuration hot-reloaded successfully");
                        last_reload = Some(std::time::Instant::now());
                    }
                    Err(e) => {
                        warn!(
                            "Failed to hot-reload config: {}. Keeping previous config.",
                            e
                        );
                    }
                }
            }
        });

        info!("Configuration hot-reload watcher started");
        Ok(())
    }

    /// Stop watching for configuration changes
    pub fn stop_watching(&self) {
        *self.watcher.write() = None;
        info!("Configuration hot-reload watcher stopped");
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> String {
        r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"
log_format = "json"
cors_origins = ["http://localhost:8080", "https://omniroute.example"]

[assistant]
provider = "ollama"
model = "llama3.2"
ollama_url = "http://localhost:11434"
timeout_secs = 30

[login]
delay_ms = 10
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config = OmniRouteConfig::parse(&create_test_config()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.server.cors_origins.len(), 2);
        assert_eq!(config.assistant.provider, ProviderKind::Ollama);
        assert_eq!(config.assistant.timeout_secs, Some(30));
        assert_eq!(config.login.delay(), Duration::from_millis(10));
        // unspecified fields keep their defaults
        assert_eq!(config.assistant.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_defaults() {
        let config = OmniRouteConfig::parse("").unwrap();

        assert_eq!(config, OmniRouteConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.assistant.provider, ProviderKind::Gemini);
        assert_eq!(config.assistant.model, "gemini-flash-latest");
        assert_eq!(config.assistant.timeout_secs, None);
        assert_eq!(config.login.delay_ms, 1500);
        assert_eq!(config.server.max_conversations, 1000);
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let result = OmniRouteConfig::parse("[assistant]\nprovider = \"openai\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        assert!("OpenAI".parse::<ProviderKind>().is_err());
        assert_eq!("Ollama".parse::<ProviderKind>().unwrap(), ProviderKind::Ollama);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        for content in [
            "[server]\nport = 0\n",
            "[server]\nmax_conversations = 0\n",
            "[assistant]\nmodel = \"  \"\n",
            "[assistant]\napi_base = \"generativelanguage.googleapis.com\"\n",
            "[server]\ncors_origins = [\"localhost:8080\"]\n",
            "[assistant]\ntimeout_secs = 0\n",
        ] {
            let result = OmniRouteConfig::parse(content);
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "expected validation error for {content:?}"
            );
        }
    }

    #[test]
    fn test_wildcard_cors_origin_is_valid_but_warned() {
        let config =
            OmniRouteConfig::parse("[server]\ncors_origins = [\"*\"]\n").unwrap();

        let warnings = config.validate_with_warnings().unwrap();
        assert!(warnings
            .iter()
            .any(|w| w.kind == ConfigWarningKind::PermissiveCors));
    }

    #[test]
    fn test_missing_credential_is_a_warning() {
        let mut config = OmniRouteConfig::default();
        config.assistant.api_key_env = "OMNIROUTE_TEST_NEVER_SET".to_string();

        let warnings = config.validate_with_warnings().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, ConfigWarningKind::MissingCredential);
        assert!(warnings[0].to_string().contains("OMNIROUTE_TEST_NEVER_SET"));

        config.assistant.provider = ProviderKind::Ollama;
        assert!(config.validate_with_warnings().unwrap().is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = OmniRouteConfig::parse(&create_test_config()).unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(OmniRouteConfig::parse(&rendered).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = OmniRouteConfig::load("/definitely/not/here/omniroute.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

        let config = OmniRouteConfig::load_or_default("/definitely/not/here/omniroute.toml");
        assert_eq!(config.unwrap(), OmniRouteConfig::default());
    }

    #[test]
    fn test_config_manager_reload() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000").unwrap();

        let manager = ConfigManager::new(file.path()).unwrap();
        assert_eq!(manager.config().server.port, 4000);

        std::fs::write(file.path(), "[server]\nport = 4001\n").unwrap();
        manager.reload().unwrap();
        assert_eq!(manager.config().server.port, 4001);

        // a broken file leaves the previous config in place
        std::fs::write(file.path(), "[server]\nport = 0\n").unwrap();
        assert!(manager.reload().is_err());
        assert_eq!(manager.config().server.port, 4001);
    }

    #[test]
    fn test_config_manager_from_config() {
        let manager = ConfigManager::from_config(OmniRouteConfig::default());
        assert_eq!(manager.config().server.port, 3000);
        assert_eq!(manager.path(), Path::new("omniroute.toml"));
    }
}
