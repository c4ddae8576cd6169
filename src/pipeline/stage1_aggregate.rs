use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::input::RawTable;
use crate::model::party::{PartyShares, classify_candidate};
use crate::model::riding::RidingResult;
use crate::model::terms::TermTable;

/// Aggregate one term's raw candidate records into per-riding results.
///
/// Each record increments exactly one party share of its riding; multiple
/// candidates mapped to the same party sum. A record with a non-missing
/// majority value is the riding's winner and supplies `elected_member` and
/// `competitiveness`. Ridings are keyed through a BTreeMap so the output is
/// sorted by riding name and stable run to run.
pub fn run_stage1(
    table: &RawTable,
    term: u16,
    terms: &TermTable,
) -> Result<Vec<RidingResult>> {
    let config = terms.get(term).ok_or_else(|| {
        PipelineError::Configuration(format!("no column labels configured for term {term}"))
    })?;

    let resolve = |label: &str| {
        table.column_index(label).ok_or_else(|| {
            PipelineError::Configuration(format!(
                "term {term}: election file has no '{label}' column"
            ))
        })
    };
    let riding_col = resolve(&config.labels.riding)?;
    let candidate_col = resolve(&config.labels.candidate)?;
    let share_col = resolve(&config.labels.vote_share)?;
    let majority_col = resolve(&config.labels.majority)?;
    let province_col = resolve(&config.labels.province)?;

    #[derive(Default)]
    struct Accum {
        shares: PartyShares,
        province: String,
        elected_member: Option<String>,
        competitiveness: f64,
    }

    let mut ridings: BTreeMap<String, Accum> = BTreeMap::new();

    for (idx, row) in table.rows.iter().enumerate() {
        let line = idx + 2;
        let riding = table.cell(row, riding_col).trim();
        if riding.is_empty() {
            warn!(term, line, "candidate record has no riding; skipping");
            continue;
        }
        let candidate = table.cell(row, candidate_col).trim();
        let share = parse_share(table.cell(row, share_col), term, line)?;
        let province = table.cell(row, province_col).trim();
        let majority = table.cell(row, majority_col).trim();

        let entry = ridings.entry(riding.to_string()).or_default();
        entry.shares.add(classify_candidate(candidate), share);
        entry.province = province.to_string();

        // Only the winning candidate's record carries a majority value.
        if !majority.is_empty() {
            let competitiveness: f64 = majority.parse().map_err(|_| {
                PipelineError::Parse(format!(
                    "term {term} line {line}: invalid majority value '{majority}'"
                ))
            })?;
            entry.elected_member = Some(candidate.to_string());
            entry.competitiveness = competitiveness;
        }
    }

    info!(
        term,
        records = table.rows.len(),
        ridings = ridings.len(),
        "aggregated election results"
    );

    Ok(ridings
        .into_iter()
        .map(|(riding, accum)| RidingResult {
            riding,
            province: accum.province,
            shares: accum.shares,
            elected_member: accum.elected_member,
            competitiveness: accum.competitiveness,
            term,
        })
        .collect())
}

fn parse_share(raw: &str, term: u16, line: usize) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse().map_err(|_| {
        PipelineError::Parse(format!(
            "term {term} line {line}: invalid vote share '{raw}'"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
