//! Tab-separated registry parsing.
//!
//! Rows are addressed by exact header text as published by the submission
//! form, so column order in the sheet does not matter.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Columns the pipeline consumes. The sheet may carry others; these must be
/// present.
const EXPECTED_COLUMNS: [&str; 5] = [
    "Tool Name (e.g. GraftM)",
    "Link to Tool",
    "1-sentence description of what it does",
    "Developers",
    "Citation/Status",
];

/// One line of the registry spreadsheet.
///
/// Empty cells deserialize to `None`; the fields stay `Option` for that
/// reason alone. Column presence is checked by [`parse_sheet`] up front,
/// since the deserializer would otherwise fill an absent column with `None`
/// on every row. Columns this struct does not name are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SourceRow {
    #[serde(rename = "Tool Name (e.g. GraftM)")]
    pub name: Option<String>,
    #[serde(rename = "Link to Tool")]
    pub link: Option<String>,
    #[serde(rename = "1-sentence description of what it does")]
    pub description: Option<String>,
    #[serde(rename = "Developers")]
    pub developers: Option<String>,
    #[serde(rename = "Citation/Status")]
    pub citation: Option<String>,
}

/// Parse the published TSV export, in sheet order.
///
/// Lines starting with `#` are comments and skipped. Ragged rows and
/// missing columns abort the run.
pub fn parse_sheet(text: &str) -> Result<Vec<SourceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("read sheet header")?.clone();
    for expected in EXPECTED_COLUMNS {
        if !headers.iter().any(|header| header == expected) {
            bail!("sheet is missing column {expected:?}");
        }
    }

    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<SourceRow>().enumerate() {
        let row = row.with_context(|| format!("parse sheet row {}", index + 1))?;
        rows.push(row);
    }
    Ok(rows)
}
