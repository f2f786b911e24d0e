//! coursedesk - course enrollment from the command line

mod commands;
mod config;
mod logging;
mod session_file;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::{CommandContext, Commands};
use std::path::PathBuf;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "coursedesk")]
#[command(about = "Browse courses and manage your enrollment")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (defaults to <data dir>/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Data directory for the session file and configuration
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Course backend base URL, overriding the configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into())?;

    let data_dir = config::resolve_data_dir(cli.data_dir);
    let config = config::load_config(cli.config.as_deref(), &data_dir, cli.api_url)?;
    debug!(api_url = %config.api_url, data_dir = %data_dir.display(), "Loaded configuration");

    let ctx = CommandContext { config, data_dir };
    if let Err(e) = cli.command.execute(&ctx).await {
        debug!("Command failed: {e:?}");
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
