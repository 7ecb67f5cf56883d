use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::{self, CliArgs};

/// Parse arguments, run the inspection, and print results to stdout.
/// Failures are printed to stderr and mapped to the error's exit status.
pub fn run() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match cli::execute(&args) {
        Ok(lines) => write_lines(&lines),
        Err(err) => {
            tracing::debug!(error = ?err, path = %args.csv.display(), "Inspection failed");
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr; stdout carries only results. `RUST_LOG` overrides
/// the verbosity flags.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn write_lines(lines: &[String]) -> ExitCode {
    let mut out = std::io::stdout().lock();
    for line in lines {
        if let Err(e) = writeln!(out, "{}", line) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::from(5);
        }
    }
    ExitCode::SUCCESS
}
