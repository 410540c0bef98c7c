use crate::analysis::{DEFAULT_FILE_LIMIT, DEFAULT_MIN_OCCURRENCES};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "migmap")]
#[command(about = "Migration issue aggregation and reporting for Kantra analysis output", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overview of all migration issues in one analysis run
    Analyze {
        /// Path to the Kantra output.yaml file
        output_file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Print skipped-element diagnostics to stderr
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Detailed issues for a specific file
    File {
        /// Path to the Kantra output.yaml file
        output_file: PathBuf,

        /// File to look up (full path or bare filename)
        target_file: String,

        /// Maximum distinct issues to return
        #[arg(long, default_value_t = DEFAULT_FILE_LIMIT)]
        limit: usize,

        /// Print skipped-element diagnostics to stderr
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Issues recurring across repeated analysis runs
    Persistent {
        /// Directory searched recursively for output.yaml files
        base_dir: PathBuf,

        /// Minimum occurrences to consider an issue persistent
        #[arg(long = "min-occurrences", default_value_t = DEFAULT_MIN_OCCURRENCES)]
        min_occurrences: usize,
    },

    /// Render the migration report for a workspace
    Report {
        /// Migration workspace directory containing report-data.json
        work_dir: PathBuf,

        /// Output path for the HTML report (defaults to <work_dir>/report.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
