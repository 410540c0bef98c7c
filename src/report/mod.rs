//! Migration report building and rendering.
//!
//! `model` mirrors the `report-data.json` schema produced by the migration
//! workflow; `builder` turns it into presentation fragments; `markdown`
//! handles the restricted subset used by the narrative document; `images`
//! inlines screenshots; `render` assembles the final self-contained HTML
//! artifact from the template.

pub mod builder;
pub mod images;
pub mod markdown;
pub mod model;
pub mod render;

pub use builder::{ReportBuilder, ReportOptions, SectionFragment};
pub use markdown::markdown_to_html;
pub use model::ReportData;
pub use render::render_report;

/// Conventional name of the migration summary document inside a workspace.
pub const REPORT_DATA_NAME: &str = "report-data.json";

/// Default output filename for the rendered report.
pub const REPORT_OUTPUT_NAME: &str = "report.html";
