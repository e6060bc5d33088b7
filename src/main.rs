//! seqlab - Console walkthroughs of the sequence utilities
//!
//! Usage:
//!   seqlab [numbers|points|filtering|all] [--quiet-headers]
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use seqlab::scenario::{self, Transcript};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seqlab")]
#[command(about = "Console walkthroughs of the sequence utilities")]
struct Cli {
    /// Do not print the `== name ==` heading before each transcript
    #[arg(long, global = true)]
    quiet_headers: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Edit a list of integers
    Numbers,
    /// Edit a list of points
    Points,
    /// Sort, search and deduplicate points
    Filtering,
    /// Run every scenario in order
    All,
}

impl Commands {
    fn run(self) -> Vec<Transcript> {
        match self {
            Self::Numbers => vec![scenario::numbers()],
            Self::Points => vec![scenario::points()],
            Self::Filtering => vec![scenario::filtering()],
            Self::All => scenario::all(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::All);
    tracing::debug!(quiet_headers = cli.quiet_headers, "running scenarios");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for transcript in command.run() {
        if !cli.quiet_headers {
            writeln!(out, "== {} ==", transcript.name())?;
        }
        transcript.write_to(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
