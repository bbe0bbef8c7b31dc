use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod runner;

#[derive(Parser)]
#[command(
    name = "proxyrank",
    about = "Ask language models to rank animal welfare proxies and aggregate their answers"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage API credentials
    Auth(commands::auth::AuthArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// List configured models
    Models(commands::models::ModelsArgs),
    /// Extract a ranking from a response file or stdin
    Parse(commands::parse::ParseArgs),
    /// Render a saved report
    Report(commands::report::ReportArgs),
    /// Query every model and save the aggregated rankings
    Run(commands::run::RunArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Auth(args) => commands::auth::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Models(args) => commands::models::run(args),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Report(args) => commands::report::run(args),
        Commands::Run(args) => commands::run::run(args).await,
    }
}
