//! Restricted markdown-to-HTML transform for the narrative document.
//!
//! Supports headings 1-3, unordered list items with two checkbox states,
//! horizontal rules, bold spans, inline code spans, and plain paragraphs.
//! Anything else passes through as paragraph text; the transform never
//! fails.

use html_escape::encode_text;
use regex::Regex;
use std::sync::OnceLock;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`(.+?)`").unwrap())
}

/// Escape HTML, then turn `**bold**` and `` `code` `` spans into markup.
fn inline_spans(text: &str) -> String {
    let escaped = encode_text(text).into_owned();
    let bolded = bold_re().replace_all(&escaped, "<strong>$1</strong>");
    code_re()
        .replace_all(&bolded, "<code>$1</code>")
        .into_owned()
}

/// Transform one narrative document, line by line.
pub fn markdown_to_html(md: &str) -> String {
    let mut html = Vec::new();
    let mut in_list = false;

    fn close_list(html: &mut Vec<String>, in_list: &mut bool) {
        if *in_list {
            html.push("</ul>".to_string());
            *in_list = false;
        }
    }

    for line in md.lines() {
        let stripped = line.trim();

        if stripped.is_empty() {
            close_list(&mut html, &mut in_list);
            html.push(String::new());
            continue;
        }

        if let Some(rest) = stripped.strip_prefix("### ") {
            close_list(&mut html, &mut in_list);
            html.push(format!("<h4>{}</h4>", inline_spans(rest)));
            continue;
        }
        if let Some(rest) = stripped.strip_prefix("## ") {
            close_list(&mut html, &mut in_list);
            html.push(format!("<h3>{}</h3>", inline_spans(rest)));
            continue;
        }
        if let Some(rest) = stripped.strip_prefix("# ") {
            close_list(&mut html, &mut in_list);
            html.push(format!("<h2>{}</h2>", inline_spans(rest)));
            continue;
        }

        if stripped == "---" {
            close_list(&mut html, &mut in_list);
            html.push("<hr>".to_string());
            continue;
        }

        if let Some(item) = stripped.strip_prefix("- ") {
            if !in_list {
                html.push("<ul>".to_string());
                in_list = true;
            }
            let content = if let Some(rest) = item.strip_prefix("[x] ") {
                format!(
                    "<input type=\"checkbox\" checked disabled> {}",
                    inline_spans(rest)
                )
            } else if let Some(rest) = item.strip_prefix("[ ] ") {
                format!("<input type=\"checkbox\" disabled> {}", inline_spans(rest))
            } else {
                inline_spans(item)
            };
            html.push(format!("<li>{content}</li>"));
            continue;
        }

        close_list(&mut html, &mut in_list);
        html.push(format!("<p>{}</p>", inline_spans(stripped)));
    }

    if in_list {
        html.push("</ul>".to_string());
    }

    html.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn headings_map_down_one_level() {
        let html = markdown_to_html("# Top\n## Mid\n### Low");
        assert_eq!(html, "<h2>Top</h2>\n<h3>Mid</h3>\n<h4>Low</h4>");
    }

    #[test]
    fn checkboxes_bold_and_paragraphs() {
        let html = markdown_to_html("- [x] done\n- [ ] todo\n**bold** text");
        assert!(html.contains("<input type=\"checkbox\" checked disabled> done"));
        assert!(html.contains("<input type=\"checkbox\" disabled> todo"));
        assert!(html.contains("<p><strong>bold</strong> text</p>"));
        // List closes before the paragraph starts.
        let ul_close = html.find("</ul>").unwrap();
        let para = html.find("<p>").unwrap();
        assert!(ul_close < para);
    }

    #[test]
    fn inline_code_and_rules() {
        let html = markdown_to_html(indoc! {"
            Run `npm test` now.
            ---
        "});
        assert!(html.contains("<p>Run <code>npm test</code> now.</p>"));
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn unsupported_constructs_fall_through_as_paragraphs() {
        let html = markdown_to_html("> blockquote\n1. ordered");
        assert!(html.contains("<p>&gt; blockquote</p>"));
        assert!(html.contains("<p>1. ordered</p>"));
    }

    #[test]
    fn text_is_html_escaped() {
        let html = markdown_to_html("a <script> & b");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
