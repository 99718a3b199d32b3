//! One-shot README generator for the EMERGE GitHub profile.
//!
//! Fetches the public tool registry spreadsheet (TSV), keeps rows with a
//! usable link, and overwrites `profile/README.md` with a preamble and a
//! Markdown table of tools.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use emerge_readme::fetch::{SHEET_URL, fetch_sheet};
use emerge_readme::logging::{self, LogConfig};
use emerge_readme::output::write_readme;
use emerge_readme::render::render_document;
use emerge_readme::sheet::parse_sheet;
use emerge_readme::tools::filter_tools;

/// Output path relative to the working directory, overwritten every run.
const README_PATH: &str = "profile/README.md";

#[derive(Parser)]
#[command(
    name = "emerge-readme",
    version,
    about = "Generate the EMERGE profile README from the tool registry spreadsheet"
)]
struct Cli {
    /// Output debug information.
    #[arg(long, global = true)]
    debug: bool,

    /// Only output errors.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Cluster bins and assembled contigs.
    Cluster {
        /// Directories containing FASTA files of bins.
        #[arg(long = "bin_directories", value_name = "DIR", num_args = 1.., required = true)]
        bin_directories: Vec<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LogConfig {
        debug: cli.debug,
        quiet: cli.quiet,
    });

    if let Some(Command::Cluster { bin_directories }) = &cli.command {
        // Parsed for CLI compatibility; clustering is not wired into the
        // README pipeline.
        debug!(dirs = bin_directories.len(), "cluster arguments ignored");
    }

    info!("downloading tool registry sheet");
    let sheet_text = fetch_sheet(SHEET_URL).context("download sheet")?;
    info!("downloaded tool registry sheet");

    let rows = parse_sheet(&sheet_text).context("parse sheet")?;
    debug!(rows = rows.len(), "sheet parsed");

    let records = filter_tools(&rows);
    info!(tools = records.len(), "rendering README");
    let document = render_document(&records);

    let readme_path = PathBuf::from(README_PATH);
    write_readme(&readme_path, &document).context("write README")?;
    info!(path = %readme_path.display(), "README written");

    Ok(())
}
