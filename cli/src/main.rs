use clap::Parser;
use gsflog_cli::commands::{self, RenderOptions, View};
use gsflog_cli::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Split combat logs into Galactic Starfighter matches")]
struct Cli {
    /// Combat log files, relative paths are resolved against the log directory
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print every parsed event instead of matches
    #[arg(long, conflicts_with = "players")]
    events: bool,

    /// Print the ids of the log owner's ships/characters
    #[arg(long)]
    players: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Override the configured log directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Append to GSFLOG_LOG_PATH if set and openable.
fn log_file() -> Option<std::fs::File> {
    let path = std::env::var_os("GSFLOG_LOG_PATH")?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match log_file() {
        Some(file) => subscriber.with_ansi(false).with_writer(file).init(),
        None => subscriber.with_writer(std::io::stderr).init(),
    }
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(dir) = cli.log_dir {
        config.log_directory = dir.to_string_lossy().into_owned();
    }

    let view = if cli.events {
        View::Events
    } else if cli.players {
        View::Players
    } else {
        View::Matches
    };

    commands::run(
        &config,
        &cli.paths,
        RenderOptions {
            view,
            json: cli.json,
        },
    )
}
