//! Report model builder: migration summary document in, presentation
//! fragments out.
//!
//! Every fragment is independent and individually optional; missing input
//! sections render neutrally. The builder owns no business logic beyond
//! shaping data into HTML, and which sections it emits is driven by
//! [`ReportOptions`] rather than by duplicated builder variants.

use crate::report::images::{encode_image, placeholder_image};
use crate::report::markdown::markdown_to_html;
use crate::report::model::{
    ActionItem, FixGroup, FixRound, KantraResidual, ReportData, SummarySection, VisualSection,
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fs;
use std::path::{Path, PathBuf};

/// Section inclusion and labeling knobs.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Narrative document looked up inside the workspace.
    pub narrative_file: String,
    pub include_narrative: bool,
    pub include_visual: bool,
    pub summary_label: String,
    pub action_label: String,
    pub narrative_label: String,
    pub visual_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            narrative_file: "visual-diff-report.md".to_string(),
            include_narrative: true,
            include_visual: true,
            summary_label: "Migration Summary".to_string(),
            action_label: "Action Required".to_string(),
            narrative_label: "UI Issues Summary".to_string(),
            visual_label: "Visual Comparison".to_string(),
        }
    }
}

/// One rendered section, ready for final assembly.
#[derive(Debug, Clone)]
pub struct SectionFragment {
    pub id: &'static str,
    pub title: String,
    pub html: String,
}

/// Colored status badge. Unknown statuses render neutrally; missing data is
/// never promoted to pass or fail.
pub fn status_badge(status: &str) -> String {
    let (fg, bg) = match status {
        "PASS" | "pass" | "complete" => ("#16a34a", "#dcfce7"),
        "FAIL" | "fail" | "incomplete" => ("#dc2626", "#fee2e2"),
        "info" => ("#2563eb", "#dbeafe"),
        _ => ("#6b7280", "#f3f4f6"),
    };
    format!(
        "<span class=\"badge\" style=\"color:{fg};background:{bg}\">{}</span>",
        encode_text(status)
    )
}

/// Border color and label for an action-item type. Unrecognized types fall
/// back to a neutral accent and their literal type string.
fn action_style(kind: &str) -> (&'static str, String) {
    match kind {
        "unresolved_issue" => ("#dc2626", "Unresolved Issue".to_string()),
        "false_positive" => ("#d97706", "False Positive to Verify".to_string()),
        "visual_review" => ("#2563eb", "Visual Change to Review".to_string()),
        "manual_intervention" => ("#7c3aed", "Manual Intervention Needed".to_string()),
        other => ("#6b7280", other.to_string()),
    }
}

pub struct ReportBuilder {
    work_dir: PathBuf,
    options: ReportOptions,
}

impl ReportBuilder {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(work_dir: &Path, options: ReportOptions) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            options,
        }
    }

    /// Build all sections present for this document and workspace, in tab
    /// order. The first fragment is the one visible by default.
    pub fn build(&self, data: &ReportData) -> Vec<SectionFragment> {
        let mut sections = vec![
            SectionFragment {
                id: "summary",
                title: self.options.summary_label.clone(),
                html: self.summary_section(data),
            },
            SectionFragment {
                id: "action",
                title: self.options.action_label.clone(),
                html: action_cards(&data.action_required),
            },
        ];

        if self.options.include_narrative {
            if let Some(html) = self.narrative_section() {
                sections.push(SectionFragment {
                    id: "ui-issues",
                    title: self.options.narrative_label.clone(),
                    html,
                });
            }
        }

        if self.options.include_visual && data.visual.has_screenshots {
            sections.push(SectionFragment {
                id: "visual",
                title: self.options.visual_label.clone(),
                html: self.visual_section(&data.visual),
            });
        }

        sections
    }

    fn summary_section(&self, data: &ReportData) -> String {
        format!(
            "{}{}{}{}",
            status_grid(&data.summary),
            groups_table(&data.groups),
            rounds_log(&data.rounds),
            residual_table(&data.kantra_residual)
        )
    }

    /// Narrative section, present only when the auxiliary document exists
    /// and is readable.
    fn narrative_section(&self) -> Option<String> {
        let path = self.work_dir.join(&self.options.narrative_file);
        let md = fs::read_to_string(path).ok()?;
        Some(format!(
            "<div class=\"md-content\">{}</div>",
            markdown_to_html(&md)
        ))
    }

    fn visual_section(&self, visual: &VisualSection) -> String {
        if visual.pages.is_empty() {
            return "<p class=\"muted\">No screenshots captured.</p>".to_string();
        }

        let mut html = String::new();
        for page in &visual.pages {
            let baseline = self.resolve_screenshot(&page.baseline, &visual.baseline_dir);
            let post = self.resolve_screenshot(&page.post_migration, &visual.post_migration_dir);

            html.push_str(&format!(
                "<div class=\"visual-page\"><h3>{} {}</h3>",
                encode_text(&page.name),
                status_badge(&page.status)
            ));
            if !page.notes.is_empty() {
                html.push_str(&format!(
                    "<p class=\"notes\">{}</p>",
                    encode_text(&page.notes)
                ));
            }
            html.push_str("<div class=\"screenshots\">");
            html.push_str(&screenshot_panel("Baseline", &baseline, &page.name));
            html.push_str(&screenshot_panel("Post-Migration", &post, &page.name));
            html.push_str("</div></div>");
        }
        html
    }

    /// A bare filename resolves under the named subdirectory; a path with a
    /// separator is taken as-is relative to the workspace. A screenshot that
    /// cannot be loaded degrades to the placeholder.
    fn resolve_screenshot(&self, relative: &str, subdir: &str) -> String {
        let path = if !relative.is_empty() && !relative.contains('/') {
            self.work_dir.join(subdir).join(relative)
        } else {
            self.work_dir.join(relative)
        };
        encode_image(&path).unwrap_or_else(placeholder_image)
    }
}

fn screenshot_panel(label: &str, src: &str, page_name: &str) -> String {
    let alt = encode_double_quoted_attribute(page_name);
    format!(
        "<div class=\"screenshot\"><h4>{label}</h4><img src=\"{src}\" alt=\"{label} - {alt}\"></div>"
    )
}

/// One badge per check, five fixed checks.
pub fn status_grid(summary: &SummarySection) -> String {
    let checks = [
        ("Build", &summary.build),
        ("Unit Tests", &summary.unit_tests),
        ("E2E Tests", &summary.e2e_tests),
        ("Lint", &summary.lint),
        ("Target Validation", &summary.target_validation),
    ];

    let mut grid = String::from("<div class=\"status-grid\">");
    for (label, value) in checks {
        grid.push_str(&format!(
            "<div class=\"status-item\"><span class=\"status-label\">{label}</span>{}</div>",
            status_badge(value)
        ));
    }
    grid.push_str("</div>");
    grid
}

pub fn groups_table(groups: &[FixGroup]) -> String {
    if groups.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        "<h3>Issue Groups Fixed</h3><table><thead><tr><th>Group</th><th>Status</th>\
         <th>Issues Fixed</th><th>Description</th></tr></thead><tbody>",
    );
    for group in groups {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&group.name),
            status_badge(&group.status),
            group.issues_fixed,
            encode_text(&group.description)
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Round log, collapsed by default since it can be long.
pub fn rounds_log(rounds: &[FixRound]) -> String {
    if rounds.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        "<h3>Fix Iteration Logs</h3><details><summary>Show all iterations</summary>\
         <table><thead><tr><th>Iteration</th><th>Group</th><th>Fixed</th>\
         <th>New Issues</th><th>Build</th><th>Tests</th></tr></thead><tbody>",
    );
    for round in rounds {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            round.number,
            encode_text(&round.group),
            round.issues_fixed,
            round.new_issues,
            status_badge(&round.build),
            encode_text(&round.tests)
        ));
    }
    html.push_str("</tbody></table></details>");
    html
}

/// Residual table, omitted entirely when there is nothing residual.
pub fn residual_table(residual: &KantraResidual) -> String {
    if residual.categories.is_empty() {
        return String::new();
    }

    let mut html = format!(
        "<h3>Kantra Residual ({} incidents)</h3><table><thead><tr><th>Rule</th>\
         <th>Count</th><th>Reason</th></tr></thead><tbody>",
        residual.total_incidents
    );
    for category in &residual.categories {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&category.rule),
            category.count,
            encode_text(&category.reason)
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// One card per action item; no items renders a single success banner.
pub fn action_cards(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return "<div class=\"banner banner-success\">No action required. \
                Migration completed successfully.</div>"
            .to_string();
    }

    let mut html = String::new();
    for item in items {
        let (color, label) = action_style(&item.kind);

        html.push_str(&format!(
            "<div class=\"card\" style=\"border-left:4px solid {color}\">\
             <div class=\"card-header\"><span class=\"card-type\" style=\"color:{color}\">{}</span>",
            encode_text(&label)
        ));
        if !item.page.is_empty() {
            html.push_str(&format!(
                "<span class=\"card-page\">Page: {}</span>",
                encode_text(&item.page)
            ));
        }
        html.push_str("</div>");
        html.push_str(&format!("<p>{}</p>", encode_text(&item.description)));
        if !item.recommendation.is_empty() {
            html.push_str(&format!(
                "<p class=\"recommendation\"><strong>Recommendation:</strong> {}</p>",
                encode_text(&item.recommendation)
            ));
        }
        if !item.details.is_empty() {
            html.push_str(&format!(
                "<p class=\"details\">{}</p>",
                encode_text(&item.details)
            ));
        }
        html.push_str("</div>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_action_list_renders_success_banner() {
        let html = action_cards(&[]);
        assert!(html.contains("banner-success"));
        assert!(!html.contains("card"));
    }

    #[test]
    fn unrecognized_action_type_uses_neutral_style_and_literal_label() {
        let items = vec![ActionItem {
            kind: "mystery_kind".to_string(),
            description: "odd".to_string(),
            ..Default::default()
        }];
        let html = action_cards(&items);
        assert!(html.contains("#6b7280"));
        assert!(html.contains("mystery_kind"));
    }

    #[test]
    fn status_grid_has_five_badges_with_none_fallback() {
        let grid = status_grid(&SummarySection::default());
        assert_eq!(grid.matches("status-item").count(), 5);
        assert_eq!(grid.matches(">NONE</span>").count(), 5);
    }

    #[test]
    fn unknown_status_gets_neutral_badge() {
        let badge = status_badge("sideways");
        assert!(badge.contains("#6b7280"));
        assert!(badge.contains(">sideways</span>"));
    }

    #[test]
    fn tables_escape_user_text() {
        let groups = vec![FixGroup {
            name: "<b>grp</b>".to_string(),
            ..Default::default()
        }];
        let html = groups_table(&groups);
        assert!(html.contains("&lt;b&gt;grp&lt;/b&gt;"));
    }

    #[test]
    fn residual_table_omitted_when_empty() {
        assert!(residual_table(&KantraResidual::default()).is_empty());
    }
}
