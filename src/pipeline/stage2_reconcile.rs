use tracing::{info, warn};

use crate::model::legislator::{EnrichedLegislator, LegislatorPosition};
use crate::model::riding::RidingResult;
use crate::model::terms::TermTable;

/// Exception rules for the name matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    /// First names common enough that the strict predicate misses their
    /// bearers (ballots often carry initials or variant given names). For
    /// these, a surname-only match is accepted.
    pub ambiguous_first_names: Vec<String>,
    /// Substring that vetoes a relaxed match; guards the one manually
    /// validated surname collision in the dataset.
    pub collision_marker: String,
}

impl ReconcilerConfig {
    pub fn default_v1() -> Self {
        Self {
            ambiguous_first_names: ["Thomas", "Bradley", "Bob", "Joe", "Patricia", "Michael"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            collision_marker: "Cathy".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Stage2Output {
    pub enriched: Vec<EnrichedLegislator>,
    pub matched: usize,
    /// Rows dropped by the governing-party zero-share filter: legislators who
    /// entered via special elections and have no general-election riding.
    pub dropped_no_riding: usize,
}

/// Reconcile legislator rows against per-riding election results.
///
/// Names are not usable as exact keys, so this is a full O(L×R) substring
/// scan. Riding rows are visited in their concatenated order (terms
/// ascending, ridings sorted by name) and every match overwrites the last, so
/// the final matching riding wins when several match. Indexing optimizations
/// must keep that ordering: downstream scores depend on which match wins.
pub fn run_stage2(
    positions: &[LegislatorPosition],
    ridings: &[RidingResult],
    config: &ReconcilerConfig,
    terms: &TermTable,
) -> Stage2Output {
    let mut enriched = Vec::with_capacity(positions.len());
    let mut matched_count = 0usize;
    let mut dropped = 0usize;

    for position in positions {
        let (first, rest) = split_name(&position.name);
        let mut hit: Option<&RidingResult> = None;

        for riding in ridings {
            if riding.term != position.term {
                continue;
            }
            let Some(member) = riding.elected_member.as_deref() else {
                continue;
            };

            if member.contains(rest) && member.contains(first) {
                hit = Some(riding);
            } else if member.contains(rest)
                && config.ambiguous_first_names.iter().any(|n| n.as_str() == first)
                && !member.contains(&config.collision_marker)
            {
                hit = Some(riding);
            }
        }

        let row = match hit {
            Some(riding) => {
                matched_count += 1;
                EnrichedLegislator {
                    position: position.clone(),
                    riding: riding.riding.clone(),
                    province: riding.province.clone(),
                    shares: riding.shares,
                    competitiveness: riding.competitiveness,
                    matched: true,
                }
            }
            None => EnrichedLegislator {
                position: position.clone(),
                riding: String::new(),
                province: String::new(),
                shares: Default::default(),
                competitiveness: 0.0,
                matched: false,
            },
        };

        // Compatibility filter: a zero share for the term's governing party
        // marks a row with no general-election riding data (typically a
        // special-election entrant). Excluded, not an error.
        let keep = match terms.get(position.term) {
            Some(term_config) => row.shares.get(term_config.governing) != 0.0,
            None => {
                warn!(
                    name = %position.name,
                    term = position.term,
                    "no term configuration; excluding row"
                );
                false
            }
        };

        if keep {
            enriched.push(row);
        } else {
            dropped += 1;
        }
    }

    info!(
        legislators = positions.len(),
        matched = matched_count,
        dropped = dropped,
        "reconciled legislators against riding results"
    );

    Stage2Output {
        enriched,
        matched: matched_count,
        dropped_no_riding: dropped,
    }
}

/// Split "First Last" at the first space. A name without a space yields an
/// empty remainder, which matches any label; that mirrors how the ballots
/// behave and keeps single-token names from silently never matching.
fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (name, ""),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_reconcile.rs"]
mod tests;
