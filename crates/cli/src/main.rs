//! Command-line driver for arena fights.
//!
//! Run with: `cargo run -p arena-cli -- <command>`

mod commands;
mod content;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Play, Simulate};

/// Turn-based ship duels against an AI opponent
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based ship duels against an AI opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding equipment.json, classes.ron and arena.toml
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List unit classes, weapons and shields
    Catalog(Catalog),

    /// Play an interactive fight
    Play(Play),

    /// Run headless fights and report the results
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_RNG_SEED, AI_SKILL_CHANCE, RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(cmd) => cmd.execute(&cli.data_dir),
        Command::Play(cmd) => cmd.execute(&cli.data_dir),
        Command::Simulate(cmd) => cmd.execute(&cli.data_dir),
    }
}
