//! Final report assembly.
//!
//! Pure structural work: fragments from the builder are slotted into the
//! embedded template. The artifact is self-contained (inline styling and
//! images, no external references) with a client-side tab toggle keeping
//! exactly one section visible; print mode reveals all sections, each
//! annotated with its title via `data-title`.

use crate::report::builder::{status_badge, SectionFragment};
use crate::report::model::ReportData;
use chrono::{DateTime, Local};
use html_escape::encode_text;

const TEMPLATE: &str = include_str!("templates/report.html");

/// Render the complete HTML artifact from the document header data and the
/// built section fragments. The first fragment becomes the default-visible
/// tab.
pub fn render_report(data: &ReportData, sections: &[SectionFragment]) -> String {
    let mut tabs = String::new();
    let mut bodies = String::new();

    for (idx, section) in sections.iter().enumerate() {
        let active = if idx == 0 { " active" } else { "" };
        tabs.push_str(&format!(
            "    <button class=\"tab{active}\" onclick=\"switchTab('{}')\">{}</button>\n",
            section.id,
            encode_text(&section.title)
        ));
        bodies.push_str(&format!(
            "  <div id=\"{}\" class=\"tab-content{active}\" data-title=\"{}\">\n{}\n  </div>\n\n",
            section.id,
            encode_text(&section.title),
            section.html
        ));
    }

    TEMPLATE
        .replace("{{{PROJECT}}}", &encode_text(&data.migration.project))
        .replace("{{{SOURCE}}}", &encode_text(&data.migration.source))
        .replace("{{{TARGET}}}", &encode_text(&data.migration.target))
        .replace("{{{STATUS_BADGE}}}", &status_badge(&data.summary.status))
        .replace(
            "{{{TIMESTAMP}}}",
            &encode_text(&display_timestamp(&data.migration.timestamp)),
        )
        .replace("{{{TABS}}}", tabs.trim_end())
        .replace("{{{SECTIONS}}}", bodies.trim_end())
}

/// Format an ISO-8601 timestamp for display; a value that does not parse is
/// shown verbatim, an absent one as the render time.
fn display_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return Local::now().format("%Y-%m-%d %H:%M").to_string();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
