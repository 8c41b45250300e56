use crate::utils::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listing-eda")]
#[command(about = "Exploratory price analysis of New York rental listings")]
#[command(version)]
pub struct Cli {
    /// Defaults to `analyze` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Clean the listings and render all five figures
    Analyze {
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input listings CSV")]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value = DEFAULT_OUTPUT_DIR,
            help = "Directory the PNG figures are written to"
        )]
        output_dir: PathBuf,
    },

    /// Print a summary of the cleaned dataset without rendering
    Info {
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input listings CSV")]
        input: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Analyze {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_default_analysis() {
        let cli = Cli::try_parse_from(["listing-eda"]).unwrap();

        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.command.unwrap_or_default(), Commands::default());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "listing-eda",
            "analyze",
            "--input",
            "data/listings.csv",
            "-o",
            "figures",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Analyze {
                input: PathBuf::from("data/listings.csv"),
                output_dir: PathBuf::from("figures"),
            })
        );
    }

    #[test]
    fn test_info_defaults() {
        let cli = Cli::try_parse_from(["listing-eda", "info"]).unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Info {
                input: PathBuf::from(DEFAULT_INPUT_FILE),
            })
        );
    }
}
