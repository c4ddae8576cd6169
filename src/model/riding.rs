use crate::model::party::PartyShares;

/// Aggregated election result for one electoral district in one term.
#[derive(Debug, Clone, PartialEq)]
pub struct RidingResult {
    pub riding: String,
    pub province: String,
    pub shares: PartyShares,
    /// Raw candidate label of the winner; only the winning record carries a
    /// majority value in the source data.
    pub elected_member: Option<String>,
    /// Margin of victory; 0.0 when no winner was recorded.
    pub competitiveness: f64,
    pub term: u16,
}
