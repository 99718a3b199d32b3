//! Generates the EMERGE GitHub profile README from the public tool
//! registry spreadsheet.
//!
//! One-shot pipeline: fetch the published TSV export, drop rows without a
//! usable link, render a Markdown table, write `profile/README.md`.

pub mod fetch;
pub mod logging;
pub mod output;
pub mod render;
pub mod sheet;
pub mod tools;
