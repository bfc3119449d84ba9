use anyhow::Context;
use omniroute::{
    api,
    cli::{chat, dashboard, init, output::Output, Cli, Commands},
    utils::{
        logging,
        toml_config::{ConfigManager, OmniRouteConfig},
    },
    AppState, ConfigBasedLLMFactory,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // .env is optional; the process environment wins
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        None | Some(Commands::Serve) => serve(&cli.config, cli.verbose).await?,
        Some(Commands::Init {
            path,
            force,
            provider,
            host,
            port,
        }) => {
            let config = init::InitConfig {
                path,
                force,
                provider,
                host,
                port,
            };
            if !matches!(init::run(config, &output), init::InitResult::Success) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Config { validate }) => {
            if !show_config(&cli.config, validate, &output)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Dashboard { role, tab }) => {
            if let Err(e) = dashboard::run(&role, tab.as_deref(), &output) {
                output.error(e.detail());
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Chat { role }) => {
            let manager = Arc::new(ConfigManager::load_or_default(&cli.config)?);
            let config = manager.config();

            // keep the REPL readable unless asked otherwise
            let mut server = config.server.clone();
            if !cli.verbose && std::env::var_os("RUST_LOG").is_none() {
                server.log_level = "warn".to_string();
            }
            logging::init(&server, cli.verbose);

            let factory = Arc::new(ConfigBasedLLMFactory::new(Arc::clone(&manager)));
            let colored = output.colored;
            if let Err(e) = chat::run(factory, role.as_deref(), config.login.delay(), output).await
            {
                Output { colored }.error(e.detail());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn serve(config_path: &Path, verbose: bool) -> anyhow::Result<()> {
    let config_manager = Arc::new(
        ConfigManager::load_or_default(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?,
    );
    let config = config_manager.config();
    logging::init(&config.server, verbose);

    for warning in config.validate_with_warnings()? {
        warn!("{}", warning);
    }

    if config_manager.path().exists() {
        if let Err(e) = config_manager.start_watching() {
            warn!(error = %e, "Config hot-reload disabled");
        }
    }

    let state = AppState::from_config(Arc::clone(&config_manager));
    let provider = state.llm_factory.default_provider();
    let app = api::build_app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        address = %addr,
        provider = provider.name(),
        model = provider.model(),
        "OmniRoute listening"
    );
    #[cfg(feature = "swagger-ui")]
    info!("Swagger UI at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    config_manager.stop_watching();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Print the effective configuration, or validate it. Returns false when
/// validation fails.
fn show_config(path: &Path, validate: bool, output: &Output) -> anyhow::Result<bool> {
    if validate {
        output.header(&format!("Validating {}", path.display()));
        let config = match OmniRouteConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                output.error(&e.to_string());
                return Ok(false);
            }
        };
        match config.validate_with_warnings() {
            Ok(warnings) => {
                for warning in &warnings {
                    output.warning(&warning.message);
                }
                output.success("Configuration is valid");
                Ok(true)
            }
            Err(e) => {
                output.error(&e.to_string());
                Ok(false)
            }
        }
    } else {
        let config = OmniRouteConfig::load_or_default(path)?;
        output.header("Effective configuration");
        output.kv("file", &path.display().to_string());
        output.kv("listen", &config.bind_address());
        output.kv("provider", config.assistant.provider.as_str());
        output.kv("model", &config.assistant.model);
        output.kv(
            "credential",
            if config.gemini_api_key().is_some() {
                "set"
            } else {
                "missing"
            },
        );
        output.newline();
        println!("{}", config.to_toml_string()?);
        Ok(true)
    }
}
