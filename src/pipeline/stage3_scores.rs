use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::model::gold::{GoldStandard, SCORED_PARTIES, ScoreVariant};
use crate::model::legislator::{EnrichedLegislator, JoinedRecord};
use crate::model::party::Party;

#[derive(Debug)]
pub struct Stage3Output {
    pub joined: Vec<JoinedRecord>,
    /// Rows whose riding voted entirely for unscored parties; flagged and
    /// dropped rather than emitted as NaN/inf.
    pub dropped_undefined: usize,
}

/// Composite ideology score for one legislator row and one variant.
///
/// Weighted average of the gold-standard party scores by riding vote share,
/// over the four scored parties. Green and Other shares are excluded from the
/// denominator: no gold-standard value exists for them, so the score is the
/// position conditional on having voted for a scored party.
pub fn score_row(
    row: &EnrichedLegislator,
    variant: ScoreVariant,
    gold: &GoldStandard,
) -> Result<f64> {
    let term = row.position.term;
    let denominator =
        100.0 - row.shares.get(Party::Green) - row.shares.get(Party::Other);
    if denominator <= 0.0 {
        return Err(PipelineError::UndefinedScore {
            name: row.position.name.clone(),
            term,
        });
    }

    let mut weighted = 0.0;
    for &party in &SCORED_PARTIES {
        let gold_value = gold.value(variant, party, term).ok_or_else(|| {
            PipelineError::Configuration(format!(
                "no gold-standard entry for {} in term {term}",
                party.share_label()
            ))
        })?;
        weighted += gold_value * row.shares.get(party);
    }

    Ok(weighted / denominator)
}

/// Score every row for all three variants and assemble the final records.
///
/// The govtSupport axis is inverted once, after all scoring, so that higher
/// values mean higher support for the governing party.
pub fn run_stage3(rows: &[EnrichedLegislator], gold: &GoldStandard) -> Result<Stage3Output> {
    let mut joined = Vec::with_capacity(rows.len());
    let mut dropped_undefined = 0usize;

    for row in rows {
        let rile_score = match score_row(row, ScoreVariant::Rile, gold) {
            Ok(score) => score,
            Err(PipelineError::UndefinedScore { name, term }) => {
                warn!(name = %name, term, "eligible vote share is zero; dropping row");
                dropped_undefined += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        // Same denominator, so the remaining variants cannot be undefined.
        let vanilla_score = score_row(row, ScoreVariant::Vanilla, gold)?;
        let legacy_score = score_row(row, ScoreVariant::Legacy, gold)?;

        joined.push(JoinedRecord {
            name: row.position.name.clone(),
            party: row.position.party.clone(),
            term: row.position.term,
            quebecker: row.position.axis1,
            govt_support: row.position.axis2,
            speech_frequency: row.position.speech_frequency,
            total_speech_volume: row.position.total_speech_volume,
            riding: row.riding.clone(),
            province: row.province.clone(),
            shares: row.shares,
            competitiveness: row.competitiveness,
            rile_score,
            vanilla_score,
            legacy_score,
        });
    }

    for record in &mut joined {
        record.govt_support = -record.govt_support;
    }

    info!(
        rows = joined.len(),
        dropped_undefined, "synthesized composite scores"
    );

    Ok(Stage3Output {
        joined,
        dropped_undefined,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
