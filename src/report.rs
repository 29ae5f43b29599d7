//! Line-oriented parser for cloc's plain-text report.
//!
//! The report carries two tables: a per-file breakdown and a per-language
//! breakdown. Parsing walks the stream once with a forward-only section
//! state; lines outside any recognized section are ignored.

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};

/// Everything extracted from one cloc report.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Paths from the per-file table, in the order they appear.
    pub files: Vec<String>,
    /// Code counts keyed by language name, including the `SUM:` total row.
    pub code_by_language: HashMap<String, u64>,
}

impl Report {
    /// Code count for `language`, zero if the report never mentioned it.
    pub fn code_for(&self, language: &str) -> u64 {
        self.code_by_language.get(language).copied().unwrap_or(0)
    }
}

/// Which part of the report the next line is expected to belong to.
/// Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    SeekFileHeader,
    FileRows,
    SeekLanguageHeader,
    LanguageRows,
}

fn file_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^File\s+blank\s+comment\s+code$").unwrap())
}

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-+$").unwrap())
}

// Greedy capture keeps everything up to the last three integer columns,
// so paths containing spaces or digits survive; the capture is trimmed
// because the group may swallow part of the column gap.
fn file_row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)\s+\d+\s+\d+\s+\d+$").unwrap())
}

fn language_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Language\s+files\s+blank\s+comment\s+code$").unwrap())
}

fn language_row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)\s+\d+\s+\d+\s+\d+\s+(\d+)$").unwrap())
}

/// Parse a full report stream.
///
/// A truncated report is not an error: sections that never appear simply
/// leave the file list or the language mapping empty. A row in the
/// per-file table that matches neither the separator nor the row pattern
/// prints a diagnostic to stdout and is skipped.
pub fn parse<R: BufRead>(reader: R) -> Result<Report> {
    let mut lines = reader.lines();
    let mut section = Section::SeekFileHeader;
    let mut report = Report::default();

    while let Some(line) = lines.next() {
        let line = line.map_err(AppError::ReportRead)?;
        let line = line.trim_end();

        match section {
            Section::SeekFileHeader => {
                if file_header_re().is_match(line) {
                    // Skip the dashed rule under the header row.
                    let _ = lines.next();
                    section = Section::FileRows;
                }
            }
            Section::FileRows => {
                if separator_re().is_match(line) {
                    section = Section::SeekLanguageHeader;
                } else if let Some(caps) = file_row_re().captures(line) {
                    report.files.push(caps[1].trim_end().to_string());
                } else {
                    println!("Error: Could not parse line \"{line}\"");
                }
            }
            Section::SeekLanguageHeader => {
                if language_header_re().is_match(line) {
                    let _ = lines.next();
                    section = Section::LanguageRows;
                }
            }
            Section::LanguageRows => {
                if let Some(caps) = language_row_re().captures(line) {
                    if let Ok(code) = caps[2].parse::<u64>() {
                        report
                            .code_by_language
                            .insert(caps[1].trim_end().to_string(), code);
                    }
                }
            }
        }
    }

    Ok(report)
}
