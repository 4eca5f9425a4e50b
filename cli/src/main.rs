mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use mapsplit::{GraphError, MapError};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{color, split};

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Split(args) => split::run(cli, args),
        Commands::Color(args) => color::run(cli, args),
    }
}

/// Log to stderr at a level picked by `-v` count, unless `RUST_LOG` says otherwise.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

/// Process exit code for a failed run.
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<MapError>() {
            return match err {
                MapError::Read { .. }
                | MapError::EmptyInput { .. }
                | MapError::InvalidVertex { .. }
                | MapError::InvalidAabbLine { .. } => 2,
                MapError::MismatchedBrace { .. } | MapError::UnclosedBrace { .. } => 3,
                MapError::WriteGroup { .. } => 4,
                MapError::WriteExports { .. } => 5,
                MapError::Graph(_) | MapError::BrushOutOfRange { .. } => 6,
            };
        }
        if cause.downcast_ref::<GraphError>().is_some() {
            return 6;
        }
    }
    1
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
