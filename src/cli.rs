//! Command-line interface definitions and parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run classic design-pattern examples", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Record output without printing it; only a summary is shown
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List available examples
    List,
    /// Run one or more examples by name
    Run {
        /// Example names, e.g. `state` or `chain-of-responsibility`
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run every example in catalog order
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_names() {
        let cli = Cli::try_parse_from(["patterns", "run", "state", "proxy"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                names: vec!["state".to_string(), "proxy".to_string()]
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_requires_a_name() {
        assert!(Cli::try_parse_from(["patterns", "run"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["patterns", "all", "--quiet", "--config", "demo.toml"]).unwrap();
        assert_eq!(cli.command, Commands::All);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("demo.toml")));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
