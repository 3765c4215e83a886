use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "chemlib",
    version,
    about = "ChemLib CLI - validate and inspect the chemical item data files the mod registers with the host engine.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full load pass and report what would be registered.
    Validate(ValidateArgs),
    /// Look up one element or compound by name or atomic number.
    Lookup(LookupArgs),
    /// Print item counts by kind and matter state.
    Summary(SummaryArgs),
}

/// Data-file selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to an elements.json to load instead of the bundled data.
    #[arg(long, value_name = "PATH", requires = "compounds")]
    pub elements: Option<PathBuf>,

    /// Path to a compounds.json to load instead of the bundled data.
    #[arg(long, value_name = "PATH", requires = "elements")]
    pub compounds: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// An element or compound name, or an atomic number.
    #[arg(value_name = "NAME_OR_NUMBER")]
    pub query: String,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_parses_query_and_data_paths() {
        let cli = Cli::parse_from([
            "chemlib",
            "lookup",
            "hydrogen",
            "--elements",
            "e.json",
            "--compounds",
            "c.json",
        ]);
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.query, "hydrogen");
                assert!(args.data.elements.is_some());
            }
            _ => panic!("expected lookup subcommand"),
        }
    }

    #[test]
    fn elements_path_requires_compounds_path() {
        let result = Cli::try_parse_from(["chemlib", "validate", "--elements", "e.json"]);
        assert!(result.is_err());
    }
}
