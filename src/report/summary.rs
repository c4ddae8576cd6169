use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct TermCount {
    pub term: u16,
    pub ridings: usize,
}

/// Per-run observability record written next to the joined table.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub election_files: usize,
    pub skipped_files: Vec<String>,
    pub terms: Vec<TermCount>,
    pub legislators_in: usize,
    pub matched: usize,
    pub dropped_no_riding: usize,
    pub dropped_undefined_score: usize,
    pub output_rows: usize,
}

pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let data = serde_json::to_vec_pretty(summary)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    file.write_all(b"\n")?;
    Ok(())
}
