use anyhow::Result;
use clap::Parser;
use migmap::cli::{Cli, Commands};
use migmap::commands::{
    handle_analyze, handle_file, handle_persistent, handle_report, AnalyzeConfig, FileConfig,
    PersistentConfig, ReportConfig,
};
use migmap::errors::FatalError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        // Fatal input errors print a one-line cause and a one-line next step.
        eprintln!("Error: {err}");
        if let Some(fatal) = err.downcast_ref::<FatalError>() {
            eprintln!("Suggestion: {}", fatal.suggestion());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            output_file,
            format,
            verbosity,
        } => handle_analyze(AnalyzeConfig {
            output_file,
            format,
            verbosity,
        }),
        Commands::File {
            output_file,
            target_file,
            limit,
            verbosity,
        } => handle_file(FileConfig {
            output_file,
            target_file,
            limit,
            verbosity,
        }),
        Commands::Persistent {
            base_dir,
            min_occurrences,
        } => handle_persistent(PersistentConfig {
            base_dir,
            min_occurrences,
        }),
        Commands::Report { work_dir, output } => handle_report(ReportConfig { work_dir, output }),
    }
}
