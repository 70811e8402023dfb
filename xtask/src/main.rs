//! xtask - Development task runner for bideque
//!
//! Usage:
//!   cargo xtask replay --scenario <yaml> [--backing circular|linked] [--json]
//!   cargo xtask demo

mod demo;
mod replay;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for bideque")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML operation scenario on every deque combination
    Replay(replay::ReplayArgs),
    /// Run the reference showcases on every deque combination
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay(args) => replay::run(&args),
        Commands::Demo => demo::run(),
    }
}
