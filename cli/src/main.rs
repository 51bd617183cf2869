//! somac - species anatomy compiler.
//!
//! Entry point for the `somac` binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use soma_cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    match cli.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("somac: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(verbose >= 2).with_writer(std::io::stderr))
        .init();
}
