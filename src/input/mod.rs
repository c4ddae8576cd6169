use std::io::Read;
use std::path::Path;

use crate::error::{PipelineError, Result};

pub mod elections;
pub mod gold;
pub mod positions;

/// A headered CSV file as loaded from disk, before any column resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Cell accessor tolerant of ragged rows; missing cells read as empty.
    pub fn cell<'a>(&'a self, row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(String::as_str).unwrap_or("")
    }
}

/// Read a file as UTF-8, falling back to Latin-1 on decode failure.
///
/// The WHATWG `latin1` label maps to windows-1252, which is what Elections
/// Canada exports actually use. If the fallback also reports errors the file
/// is undecodable and the caller should skip it.
pub fn read_file_utf8_or_latin1(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
            if had_errors {
                return Err(PipelineError::Encoding {
                    path: path.to_path_buf(),
                });
            }
            Ok(decoded.into_owned())
        }
    }
}

/// Load a headered CSV into a `RawTable`, with the encoding fallback above.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let content = read_file_utf8_or_latin1(path)?;
    read_table_from_str(&content)
}

pub fn read_table_from_str(content: &str) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
