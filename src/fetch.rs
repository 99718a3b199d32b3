//! Spreadsheet download.

use anyhow::{Context, Result};
use tracing::debug;

/// Published TSV export of the tool registry spreadsheet.
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSgbEXINkhCDhOewVs3S8QinggdILjT__69CmWL1aBQYlVCP9jKSz_XziTeHVL1Nl6wshBkxsiruFwK/pub?gid=0&single=true&output=tsv";

/// Fetch the published spreadsheet as text.
///
/// Blocking GET with no retries; any transport failure or non-success
/// status aborts the run.
pub fn fetch_sheet(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url).with_context(|| format!("fetch {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("fetch {url}"))?;
    let body = response.text().context("read sheet body")?;
    debug!(bytes = body.len(), "sheet downloaded");
    Ok(body)
}
