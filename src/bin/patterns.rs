use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use design_patterns::cli::Cli;
use design_patterns::commands::CommandDispatcher;

/// Setup logging based on verbosity level; `RUST_LOG` wins when set.
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut out = io::stdout().lock();
    match CommandDispatcher::execute(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}
