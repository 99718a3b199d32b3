//! Markdown document assembly.
//!
//! Cells are emitted as-is; a stray pipe or newline in the sheet produces a
//! malformed table rather than being escaped here.

use crate::tools::ToolRecord;

/// Column headers, in render order.
pub const HEADERS: [&str; 4] = ["Tool", "Description", "Developers", "Citation"];

/// Institutional preamble written ahead of the generated table.
const PREAMBLE: &str = "# EMERGE Biology Integration Institute

Predictive understanding of ecosystem response to change has become a pressing societal need in the Anthropocene, and requires integration across disciplines, spatial scales, and timeframes. Developing a framework for understanding how different biological systems interact over time is a major challenge in biology. The National Science Foundation-funded EMergent Ecosystem Responses to ChanGE (EMERGE) Biology Integration Institute aims to develop such a framework by integrating research, training, and high-resolution field and laboratory measurements across 15 scientific subdisciplines–including ecology, physiology, genetics, biogeochemistry, remote sensing, and modeling–across 14 institutions, in order to understand ecosystem-climate feedbacks in Stordalen Mire, a thawing permafrost peatland in arctic Sweden. Rapid warming in the Arctic is driving permafrost thaw, and new availability of formerly-frozen soil carbon for cycling and release to the atmosphere, representing a potentially large but poorly constrained accelerant of climate change. This material is based upon work supported by the National Science Foundation under Grant Number 2022070.

Listed below are a number of the tools that members have developed for better understanding and integration of these datasets.
";

/// Render the tool table, including its `# EMERGE tools` title.
///
/// Always emits the header and separator rows, even with no records.
pub fn render_table(records: &[ToolRecord]) -> String {
    let mut out = String::new();
    out.push_str("# EMERGE tools\n\n");
    out.push_str(&format!("| {} |\n", HEADERS.join(" | ")));
    out.push_str(&format!("|{}\n", " --- |".repeat(HEADERS.len())));
    for record in records {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            record.tool, record.description, record.developers, record.citation
        ));
    }
    out
}

/// Assemble the full document: preamble, two blank lines, then the
/// rendered table.
pub fn render_document(records: &[ToolRecord]) -> String {
    format!("{PREAMBLE}\n\n{}", render_table(records))
}
