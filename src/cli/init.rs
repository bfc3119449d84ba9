//! Init command implementation
//!
//! Scaffolds a new OmniRoute project: `omniroute.toml`, `.env.example` and a
//! `.gitignore` that keeps the real `.env` out of version control.

use super::{output::Output, InitProvider};
use omniroute_domain::prompt::DEFAULT_MODEL;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (omniroute.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Generation provider to configure
    pub provider: InitProvider,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing OmniRoute Project");

    let base_path = &config.path;
    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    let config_path = base_path.join("omniroute.toml");
    if config_path.exists() && !config.force {
        output.warning("omniroute.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    output.subheader("Creating configuration files");

    let files = [
        ("config", "omniroute.toml", generate_omniroute_toml(&config), config.force),
        ("env", ".env.example", generate_env_example(config.provider), config.force),
    ];
    for (kind, name, content, force) in files {
        if let Err(e) = write_file(&base_path.join(name), &content, force) {
            output.error(&format!("Failed to create {}: {}", name, e));
            return InitResult::Error(e.to_string());
        }
        output.created(kind, name);
    }

    let gitignore_path = base_path.join(".gitignore");
    if gitignore_path.exists() {
        output.skipped(".gitignore", "already exists");
    } else if let Err(e) = write_file(&gitignore_path, GITIGNORE, false) {
        output.warning(&format!("Failed to create .gitignore: {}", e));
    } else {
        output.created("file", ".gitignore");
    }

    output.complete("OmniRoute project initialized successfully!");

    output.header("Next Steps");
    output.newline();
    match config.provider {
        InitProvider::Gemini => {
            output.info("1. Add your Gemini API key:");
            output.command("cp .env.example .env");
            output.command("# Edit .env and set GEMINI_API_KEY");
        }
        InitProvider::Ollama => {
            output.info("1. Start Ollama (if not running):");
            output.command("ollama serve");
            output.command("ollama pull llama3.2:3b  # or your preferred model");
        }
    }
    output.newline();

    output.info("2. Start the server:");
    output.command("omniroute");
    output.newline();

    output.info("3. Or try the assistant in the terminal:");
    output.command("omniroute chat --role driver");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));
    output.hint("OpenAPI document at /api-docs/openapi.json; Swagger UI needs the 'swagger-ui' feature");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, content)
}

fn generate_omniroute_toml(config: &InitConfig) -> String {
    let assistant_section = match config.provider {
        InitProvider::Gemini => format!(
            r#"[assistant]
provider = "gemini"
model = "{DEFAULT_MODEL}"
api_base = "https://generativelanguage.googleapis.com/v1beta"
# The key itself lives in the environment (or .env), never in this file
api_key_env = "GEMINI_API_KEY"
# Unset means no local timeout
# timeout_secs = 30
"#
        ),
        InitProvider::Ollama => r#"[assistant]
provider = "ollama"
model = "llama3.2:3b"
ollama_url = "http://localhost:11434"
# timeout_secs = 120
"#
        .to_string(),
    };

    format!(
        r#"# OmniRoute Configuration
# =======================
# Every section is optional; omitted keys use the defaults shown here.
# Changes are picked up while the server runs.

[server]
host = "{host}"
port = {port}
# trace, debug, info, warn, error (RUST_LOG overrides this)
log_level = "info"
# "pretty" or "json"
log_format = "pretty"
# Browser origins allowed to call the API; empty allows any
cors_origins = ["http://localhost:8080"]

{assistant_section}
[login]
# Simulated sign-in latency shown by the UI and `omniroute chat`
delay_ms = 1500
"#,
        host = config.host,
        port = config.port,
        assistant_section = assistant_section,
    )
}

fn generate_env_example(provider: InitProvider) -> String {
    let key_line = match provider {
        InitProvider::Gemini => "# REQUIRED: Gemini API key\nGEMINI_API_KEY=your-api-key-here\n",
        InitProvider::Ollama => "# Optional: Gemini API key (if you switch provider to gemini)\n# GEMINI_API_KEY=your-api-key-here\n",
    };

    format!(
        r#"# OmniRoute Environment Variables
# ===============================
# Copy this file to .env and fill in the values.

{key_line}
# Optional: Logging filter (overrides [server] log_level)
RUST_LOG=info,omniroute=debug
"#
    )
}

const GITIGNORE: &str = r#"# Environment
.env
.env.local
.env.*.local

# Rust
/target/

# Frontend build output
/ui/dist/

# OS
.DS_Store
Thumbs.db
"#;
