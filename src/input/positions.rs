use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::input::read_table;
use crate::model::legislator::LegislatorPosition;

/// Label the embedding stage uses for the whole-chamber document it trains
/// alongside the per-legislator documents. Not a real legislator; dropped at
/// load.
pub const PSEUDO_ENTITY: &str = "CONGRESS";

/// Load the legislator-position table produced by the embedding and
/// dimensionality-reduction collaborators.
///
/// Required columns: `name`, `party`, `term`, `pc1`, `pc2`. Speech statistics
/// come either from optional `speechFrequency` / `totalSpeechVolume` columns
/// or from a separate headerless statistics file keyed by the combined
/// `Name_Party_Term` label; absent stats stay `None`.
pub fn load_positions(
    path: &Path,
    speech_stats_path: Option<&Path>,
) -> Result<Vec<LegislatorPosition>> {
    let table = read_table(path)?;

    let name_col = require_column(&table.headers, "name", path)?;
    let party_col = require_column(&table.headers, "party", path)?;
    let term_col = require_column(&table.headers, "term", path)?;
    let axis1_col = require_column(&table.headers, "pc1", path)?;
    let axis2_col = require_column(&table.headers, "pc2", path)?;
    let freq_col = table.column_index("speechFrequency");
    let volume_col = table.column_index("totalSpeechVolume");

    let stats = match speech_stats_path {
        Some(p) => Some(load_speech_stats(p)?),
        None => None,
    };

    let mut positions = Vec::with_capacity(table.rows.len());
    let mut dropped_pseudo = 0usize;

    for (idx, row) in table.rows.iter().enumerate() {
        let line = idx + 2;
        let name = table.cell(row, name_col).trim().to_string();
        if name == PSEUDO_ENTITY {
            dropped_pseudo += 1;
            continue;
        }
        let party = table.cell(row, party_col).trim().to_string();
        let term = parse_term(table.cell(row, term_col), path, line)?;
        let axis1 = parse_axis(table.cell(row, axis1_col), "pc1", path, line)?;
        let axis2 = parse_axis(table.cell(row, axis2_col), "pc2", path, line)?;

        let mut speech_frequency = optional_stat(freq_col.map(|c| table.cell(row, c)), path, line)?;
        let mut total_speech_volume =
            optional_stat(volume_col.map(|c| table.cell(row, c)), path, line)?;

        if let Some(stats) = &stats {
            let label = format!("{name}_{party}_{term}");
            if let Some(&(freq, volume)) = stats.get(label.as_str()) {
                speech_frequency = Some(freq);
                total_speech_volume = Some(volume);
            }
        }

        positions.push(LegislatorPosition {
            name,
            party,
            term,
            axis1,
            axis2,
            speech_frequency,
            total_speech_volume,
        });
    }

    if dropped_pseudo > 0 {
        info!(rows = dropped_pseudo, "dropped aggregate pseudo-entity rows");
    }

    Ok(positions)
}

/// Headerless per-legislator statistics: `Name_Party_Term,frequency,volume`.
fn load_speech_stats(path: &Path) -> Result<HashMap<String, (f64, f64)>> {
    let content = crate::input::read_file_utf8_or_latin1(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut stats = HashMap::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        let label = record.get(0).unwrap_or("").trim().to_string();
        if label.is_empty() {
            warn!(file = %path.display(), line, "speech-stats line has no label; skipping");
            continue;
        }
        let freq = parse_axis(record.get(1).unwrap_or(""), "frequency", path, line)?;
        let volume = parse_axis(record.get(2).unwrap_or(""), "volume", path, line)?;
        if stats.contains_key(&label) {
            warn!(file = %path.display(), line, label = %label,
                "duplicate speech-stats label; keeping first");
            continue;
        }
        stats.insert(label, (freq, volume));
    }

    Ok(stats)
}

fn require_column(headers: &[String], label: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == label)
        .ok_or_else(|| {
            PipelineError::Configuration(format!(
                "positions table {} has no '{}' column",
                path.display(),
                label
            ))
        })
}

fn parse_term(raw: &str, path: &Path, line: usize) -> Result<u16> {
    raw.trim().parse().map_err(|_| {
        PipelineError::Parse(format!(
            "{} line {}: invalid term '{}'",
            path.display(),
            line,
            raw
        ))
    })
}

fn parse_axis(raw: &str, what: &str, path: &Path, line: usize) -> Result<f64> {
    raw.trim().parse().map_err(|_| {
        PipelineError::Parse(format!(
            "{} line {}: invalid {} value '{}'",
            path.display(),
            line,
            what,
            raw
        ))
    })
}

fn optional_stat(raw: Option<&str>, path: &Path, line: usize) -> Result<Option<f64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_axis(value, "speech statistic", path, line).map(Some),
    }
}
