use crate::model::party::PartyShares;

/// One legislator in one term, as produced by the upstream embedding and
/// dimensionality-reduction stages. Speech statistics are optional: absent
/// means missing, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LegislatorPosition {
    pub name: String,
    pub party: String,
    pub term: u16,
    pub axis1: f64,
    pub axis2: f64,
    pub speech_frequency: Option<f64>,
    pub total_speech_volume: Option<f64>,
}

/// A legislator row after reconciliation against the election table.
///
/// Riding fields keep zero defaults when no riding matched; `matched` records
/// the match status explicitly so a genuine zero share and "no match" remain
/// distinguishable upstream of the compatibility drop filter.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedLegislator {
    pub position: LegislatorPosition,
    pub riding: String,
    pub province: String,
    pub shares: PartyShares,
    pub competitiveness: f64,
    pub matched: bool,
}

/// Final output row: position fields, copied riding fields, and the three
/// composite scores. `axis2` is sign-inverted by the scoring stage so higher
/// values mean higher support for the governing party.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub name: String,
    pub party: String,
    pub term: u16,
    pub quebecker: f64,
    pub govt_support: f64,
    pub speech_frequency: Option<f64>,
    pub total_speech_volume: Option<f64>,
    pub riding: String,
    pub province: String,
    pub shares: PartyShares,
    pub competitiveness: f64,
    pub rile_score: f64,
    pub vanilla_score: f64,
    pub legacy_score: f64,
}
