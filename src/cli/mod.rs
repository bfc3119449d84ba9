//! CLI module for OmniRoute
//!
//! Provides command-line interface parsing and handling for the `omniroute` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

/// Interactive assistant session.
pub mod chat;
/// Dashboard rendering for the terminal.
pub mod dashboard;
/// Project scaffolding.
pub mod init;
/// Colored output helpers.
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// OmniRoute - logistics operations portal
///
/// Serves the role dashboards and the AI logistics assistant, and offers a
/// terminal rendition of both.
#[derive(Parser, Debug)]
#[command(
    name = "omniroute",
    author = "OmniRoute <build@omniroute.dev>",
    version,
    about = "OmniRoute - logistics operations portal with an AI assistant",
    long_about = "Role dashboards for customers, drivers, partners and dispatchers,\n\
                  plus a Gemini-backed logistics assistant.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a new project.",
    after_help = "EXAMPLES:\n    \
                  omniroute init                    # Scaffold omniroute.toml and .env.example\n    \
                  omniroute                         # Start the server\n    \
                  omniroute dashboard driver        # Print the driver dashboard\n    \
                  omniroute chat --role dispatcher  # Talk to the assistant as a dispatcher\n    \
                  omniroute --config my.toml        # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "omniroute.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Provider choices offered by `init`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitProvider {
    /// Google Gemini (needs GEMINI_API_KEY)
    Gemini,
    /// Local Ollama server
    Ollama,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (the default)
    Serve,

    /// Initialize a new OmniRoute project
    ///
    /// Creates omniroute.toml and .env.example.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Generation provider to configure
        #[arg(long, value_enum, default_value = "gemini")]
        provider: InitProvider,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file and report warnings
        #[arg(long)]
        validate: bool,
    },

    /// Print a role's dashboard
    Dashboard {
        /// customer, driver, partner or dispatcher
        role: String,

        /// Tab to show (defaults to the role's first tab)
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Interactive terminal session with the logistics assistant
    Chat {
        /// Log straight in as this role instead of starting on the landing page
        #[arg(short, long)]
        role: Option<String>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
