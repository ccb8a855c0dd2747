//! Command handlers for the `patterns` binary

use std::io::Write;

use colored::Colorize;
use tracing::debug;

use crate::catalog::{self, Example, EXAMPLES};
use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Command dispatcher for handling CLI commands
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Execute a CLI command, writing headings and summaries to `out`.
    ///
    /// Settings are only loaded by the commands that run examples.
    pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<(), PatternError> {
        match &cli.command {
            Commands::List => Self::handle_list(out),
            Commands::Run { names } => {
                let settings = Settings::load_or_default(cli.config.as_deref())?;
                let examples = names
                    .iter()
                    .map(|name| catalog::find(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::run_examples(out, &examples, &settings, cli.quiet)
            }
            Commands::All => {
                let settings = Settings::load_or_default(cli.config.as_deref())?;
                let examples: Vec<&Example> = EXAMPLES.iter().collect();
                Self::run_examples(out, &examples, &settings, cli.quiet)
            }
        }
    }

    fn handle_list(out: &mut impl Write) -> Result<(), PatternError> {
        writeln!(out, "{}", "Available examples".bold())?;
        for example in EXAMPLES {
            writeln!(out, "  {:<26} {}", example.name.green(), example.summary)?;
        }
        Ok(())
    }

    /// Runs each example in turn. Quiet mode records the narration and
    /// writes one summary line per example instead.
    pub fn run_examples(
        out: &mut impl Write,
        examples: &[&Example],
        settings: &Settings,
        quiet: bool,
    ) -> Result<(), PatternError> {
        debug!(count = examples.len(), quiet, "running examples");
        for example in examples {
            let console = if quiet {
                Console::recording()
            } else {
                writeln!(out)?;
                writeln!(out, "{}", format!("== {} ==", example.title).bold().cyan())?;
                Console::echoing()
            };

            catalog::run(example, &console, settings)?;

            if quiet {
                writeln!(out, "{} {} ({} lines)", "✓".green(), example.title, console.len())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
