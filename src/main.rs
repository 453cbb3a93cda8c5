//! Frontier CLI - Command-line interface for running and watching simulations.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Frontier - A deterministic territorial growth simulation
#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "frontier=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the simulation and print every tick
    Run {
        /// Number of ticks to run (default: until interrupted)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Delay between ticks in milliseconds (default: 1000)
        #[arg(short, long, default_value = "1000")]
        delay: u64,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the final tick
        #[arg(short, long)]
        quiet: bool,
    },

    /// Interactive TUI to watch the simulation in real-time
    Watch {
        /// Stop after this many ticks (default: unlimited)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Tick delay in milliseconds (default: 1000)
        #[arg(long, default_value = "1000")]
        speed: u64,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(&args.log_level);

    let result = match args.command {
        Commands::Run {
            ticks,
            delay,
            format,
            quiet,
        } => cli::run::execute(ticks, delay, format, quiet),

        Commands::Watch { ticks, speed } => cli::watch::execute(ticks, speed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
