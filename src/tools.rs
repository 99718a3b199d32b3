//! Row filtering and projection.

use tracing::debug;

use crate::sheet::SourceRow;

/// A registry row retained for rendering. Cell order matches the rendered
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    /// Markdown link cell: `[name](link)`.
    pub tool: String,
    pub description: String,
    pub developers: String,
    /// Citation text, or empty when the citation carries no link.
    pub citation: String,
}

/// Substring check used for both links and citations.
///
/// Deliberately loose: any value containing `http` counts, well-formed URL
/// or not. Tightening this would change which rows and citations appear.
fn has_link(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.contains("http"))
}

/// Project rows into records, dropping rows without a usable link.
///
/// Sheet order is preserved; duplicate names or links pass through
/// verbatim. Citations without a link are blanked, not dropped.
pub fn filter_tools(rows: &[SourceRow]) -> Vec<ToolRecord> {
    let mut records = Vec::new();
    for row in rows {
        let name = row.name.as_deref().unwrap_or_default();
        if !has_link(row.link.as_deref()) {
            debug!(tool = name, "skipping tool without link");
            continue;
        }
        let link = row.link.as_deref().unwrap_or_default();

        let citation = if has_link(row.citation.as_deref()) {
            row.citation.clone().unwrap_or_default()
        } else {
            String::new()
        };

        records.push(ToolRecord {
            tool: format!("[{name}]({link})"),
            description: row.description.clone().unwrap_or_default(),
            developers: row.developers.clone().unwrap_or_default(),
            citation,
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, link: Option<&str>, citation: Option<&str>) -> SourceRow {
        SourceRow {
            name: Some(name.to_string()),
            link: link.map(str::to_string),
            description: Some("does a thing".to_string()),
            developers: Some("A. Team".to_string()),
            citation: citation.map(str::to_string),
        }
    }

    #[test]
    fn drops_rows_without_link() {
        let rows = vec![
            row("NoLink", None, None),
            row("BadLink", Some("coming soon"), None),
            row("Kept", Some("https://example.org"), None),
        ];
        let records = filter_tools(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tool, "[Kept](https://example.org)");
    }

    #[test]
    fn link_check_is_substring_based() {
        // Not a well-formed URL, but contains "http" so it is kept.
        let rows = vec![row("Loose", Some("ask maintainer (http soon)"), None)];
        let records = filter_tools(&rows);
        assert_eq!(records[0].tool, "[Loose](ask maintainer (http soon))");
    }

    #[test]
    fn citation_without_link_is_blanked() {
        let rows = vec![row("GraftM", Some("http://example.org/graftm"), Some("no link"))];
        let records = filter_tools(&rows);
        assert_eq!(records[0].citation, "");
    }

    #[test]
    fn citation_with_link_is_kept_verbatim() {
        let cite = "https://doi.org/10.1000/xyz (in review)";
        let rows = vec![row("GraftM", Some("http://x"), Some(cite))];
        let records = filter_tools(&rows);
        assert_eq!(records[0].citation, cite);
    }

    #[test]
    fn graftm_scenario() {
        let rows = vec![SourceRow {
            name: Some("GraftM".to_string()),
            link: Some("http://example.org/graftm".to_string()),
            description: Some("Profiles communities".to_string()),
            developers: Some("A. Team".to_string()),
            citation: Some("no link".to_string()),
        }];
        let records = filter_tools(&rows);
        assert_eq!(
            records[0],
            ToolRecord {
                tool: "[GraftM](http://example.org/graftm)".to_string(),
                description: "Profiles communities".to_string(),
                developers: "A. Team".to_string(),
                citation: String::new(),
            }
        );
    }

    #[test]
    fn empty_description_and_developers_pass_through() {
        let rows = vec![SourceRow {
            name: Some("Bare".to_string()),
            link: Some("http://x".to_string()),
            ..SourceRow::default()
        }];
        let records = filter_tools(&rows);
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].developers, "");
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let rows = vec![
            row("B", Some("http://b"), None),
            row("A", Some("http://a"), None),
            row("B", Some("http://b"), None),
        ];
        let records = filter_tools(&rows);
        let tools: Vec<&str> = records.iter().map(|record| record.tool.as_str()).collect();
        assert_eq!(tools, vec!["[B](http://b)", "[A](http://a)", "[B](http://b)"]);
    }
}
