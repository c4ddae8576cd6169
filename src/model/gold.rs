use crate::model::party::Party;

/// The three externally validated score flavours carried by the
/// gold-standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreVariant {
    Rile,
    Vanilla,
    Legacy,
}

pub const ALL_VARIANTS: [ScoreVariant; 3] =
    [ScoreVariant::Rile, ScoreVariant::Vanilla, ScoreVariant::Legacy];

impl ScoreVariant {
    pub fn column_name(self) -> &'static str {
        match self {
            ScoreVariant::Rile => "rile",
            ScoreVariant::Vanilla => "vanilla",
            ScoreVariant::Legacy => "legacy",
        }
    }
}

/// Parties with a gold-standard ideology value, in the table's block order.
pub const SCORED_PARTIES: [Party; 4] = [
    Party::Bloc,
    Party::Conservative,
    Party::Liberal,
    Party::Ndp,
];

pub const FIRST_TERM: u16 = 38;
pub const TERM_SPAN: usize = 5;

/// Read-only gold-standard ideology table: 20 rows, one per (party, term),
/// laid out in party blocks of five terms each (Bloc, Conservative, Liberal,
/// NDP), with one value per score variant.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldStandard {
    rows: Vec<[f64; 3]>,
}

impl GoldStandard {
    pub fn new(rows: Vec<[f64; 3]>) -> Self {
        debug_assert_eq!(rows.len(), SCORED_PARTIES.len() * TERM_SPAN);
        Self { rows }
    }

    /// Gold score for `(variant, party, term)`; `None` for unscored parties
    /// (Green, Other) and terms outside the table.
    pub fn value(&self, variant: ScoreVariant, party: Party, term: u16) -> Option<f64> {
        let block = SCORED_PARTIES.iter().position(|&p| p == party)?;
        let offset = term.checked_sub(FIRST_TERM)? as usize;
        if offset >= TERM_SPAN {
            return None;
        }
        let variant_idx = match variant {
            ScoreVariant::Rile => 0,
            ScoreVariant::Vanilla => 1,
            ScoreVariant::Legacy => 2,
        };
        self.rows
            .get(block * TERM_SPAN + offset)
            .map(|row| row[variant_idx])
    }
}
