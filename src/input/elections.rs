use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{PipelineError, Result};
use crate::input::{RawTable, read_table};

/// One raw election results file paired with the term it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionFile {
    pub term: u16,
    pub path: PathBuf,
}

/// Find per-term election CSVs in a directory.
///
/// The term number is the first run of digits in the file stem
/// (`38_general.csv`, `results-39.csv`, ...). Files without one are skipped
/// with a warning. Results come back sorted by term, then file name, so runs
/// are deterministic regardless of directory iteration order.
pub fn discover_election_files(dir: &Path) -> Result<Vec<ElectionFile>> {
    let mut found = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !path.is_file() || !is_csv {
            continue;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match term_from_stem(&stem) {
            Some(term) => found.push(ElectionFile { term, path }),
            None => {
                warn!(file = %path.display(), "no term number in file name; skipping");
            }
        }
    }

    if found.is_empty() {
        return Err(PipelineError::Configuration(format!(
            "no election CSVs found in {}",
            dir.display()
        )));
    }

    found.sort_by(|a, b| (a.term, &a.path).cmp(&(b.term, &b.path)));
    Ok(found)
}

fn term_from_stem(stem: &str) -> Option<u16> {
    let digits: String = stem
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Load one raw election table. Candidate records stay untyped here; the
/// aggregation stage resolves columns through the per-term label table.
pub fn load_election_table(path: &Path) -> Result<RawTable> {
    read_table(path)
}
