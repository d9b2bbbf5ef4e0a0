//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use hale_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "hale")]
#[command(version)]
#[command(about = "Terminal client for the hale member portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the portal base URL from config
    #[arg(long, value_name = "URL")]
    portal: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the portal home screen (default)
    Home,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Store a portal API token
    Login {
        /// The token issued by the portal
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Clear the stored portal API token
    Logout,

    /// One-shot account operations (no TUI)
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum AccountCommands {
    /// Show the current session
    Whoami,
    /// Resend the verification email for the current account
    Resend,
    /// Request a change of the account's primary email address
    ChangeEmail {
        /// The new email address
        #[arg(value_name = "EMAIL")]
        email: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to ${HALE_HOME}/logs; the guard flushes them on exit.
    let _log_guard = hale_core::logging::init()?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;
    tracing::debug!(base_url = %config.base_url, "loaded config");

    if let Some(portal) = cli.portal.as_deref() {
        let trimmed = portal.trim();
        if !trimmed.is_empty() {
            config.base_url = trimmed.to_string();
        }
    }

    // default to the home screen
    let Some(command) = cli.command else {
        return commands::home::run(&config).await;
    };

    match command {
        Commands::Home => commands::home::run(&config).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Login { token } => commands::auth::login(&token),
        Commands::Logout => commands::auth::logout(),

        Commands::Account { command } => match command {
            AccountCommands::Whoami => commands::account::whoami(&config).await,
            AccountCommands::Resend => commands::account::resend(&config).await,
            AccountCommands::ChangeEmail { email } => {
                commands::account::change_email(&config, &email).await
            }
        },
    }
}
