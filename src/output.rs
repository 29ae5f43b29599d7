//! Formatting of the single summary line.

use crate::report::Report;

/// Language keys reported on the summary line, in output order.
pub const REPORTED_LANGUAGES: [&str; 4] = ["C", "C/C++ Header", "Assembly", "SUM:"];

/// Build the summary line: `<name>: <C> <C/C++ Header> <Assembly> <SUM:>
/// <statements>`. Languages absent from the report print as 0.
pub fn summary_line(name: &str, report: &Report, statements: u64) -> String {
    let mut line = format!("{name}:");
    for language in REPORTED_LANGUAGES {
        line.push_str(&format!(" {}", report.code_for(language)));
    }
    line.push_str(&format!(" {statements}"));
    line
}
