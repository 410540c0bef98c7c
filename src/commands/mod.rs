//! CLI command implementations.
//!
//! Each submodule owns one subcommand: a `*Config` struct mirroring its CLI
//! arguments and a `handle_*` entry point. Handlers do the I/O at the edges
//! and delegate the actual work to `core`, `analysis`, and `report`.

pub mod analyze;
pub mod file;
pub mod persistent;
pub mod report;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use file::{handle_file, FileConfig};
pub use persistent::{handle_persistent, PersistentConfig};
pub use report::{handle_report, ReportConfig};

use crate::core::SkipDiagnostic;

/// Surface extraction skip diagnostics on stderr when verbosity is raised.
pub(crate) fn emit_diagnostics(diagnostics: &[SkipDiagnostic], verbosity: u8) {
    if verbosity == 0 {
        return;
    }
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}
