mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use courses_sdk::HttpCoursesClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Courses API command-line client
#[derive(Parser, Debug)]
#[command(name = "courses")]
#[command(about = "Query and update courses through the courses API")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend root URL (overrides config and environment)
    #[arg(long)]
    base_url: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref(), cli.base_url.as_deref())?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given; run with --help for usage");
    };

    tracing::debug!(base_url = %config.base_url, "using courses backend");
    let client = HttpCoursesClient::new(&config).context("failed to build courses client")?;

    let output = commands::run(&client, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
