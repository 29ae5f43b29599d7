//! Secondary pass: re-read every file named in the report and count
//! semicolons as a rough statement metric.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Count of `;` occurrences in one text file.
pub fn count_file_statements(path: &Path) -> Result<u64> {
    let text = fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytecount::count(text.as_bytes(), b';') as u64)
}

/// Sum of semicolon counts over `paths`, resolved against the current
/// working directory. Any unreadable or non-UTF-8 file is fatal.
pub fn count_statements<S: AsRef<str>>(paths: &[S]) -> Result<u64> {
    let mut total = 0u64;
    for path in paths {
        total += count_file_statements(Path::new(path.as_ref()))?;
    }
    Ok(total)
}
