use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Args;
use crate::{output, report, stats};

/// Top-level pipeline: parse the report from stdin, re-count statements
/// from the listed files, print the one-line summary.
pub fn run() -> Result<()> {
    let args = Args::parse();

    let stdin = std::io::stdin();
    let report = report::parse(stdin.lock()).context("failed to parse cloc report")?;

    let statements =
        stats::count_statements(&report.files).context("failed to count statements")?;

    println!("{}", output::summary_line(&args.name, &report, statements));
    Ok(())
}
