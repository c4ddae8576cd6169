#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Ndp,
    Green,
    Bloc,
    Liberal,
    Conservative,
    Other,
}

impl Party {
    pub fn share_label(self) -> &'static str {
        match self {
            Party::Ndp => "NDP_share",
            Party::Green => "Green_share",
            Party::Bloc => "Bloc Quebecois_share",
            Party::Liberal => "Liberal_share",
            Party::Conservative => "Conservative_share",
            Party::Other => "Other_share",
        }
    }

    fn index(self) -> usize {
        match self {
            Party::Ndp => 0,
            Party::Green => 1,
            Party::Bloc => 2,
            Party::Liberal => 3,
            Party::Conservative => 4,
            Party::Other => 5,
        }
    }
}

/// Assign a raw candidate label to exactly one party bucket.
///
/// The order is a deliberate tie-break: a label containing several party
/// substrings resolves to the first listed here. Anything unmatched lands in
/// `Other`.
pub fn classify_candidate(label: &str) -> Party {
    if label.contains("Liberal") {
        Party::Liberal
    } else if label.contains("Conservative") {
        Party::Conservative
    } else if label.contains("NDP") || label.contains("N.D.P.") {
        Party::Ndp
    } else if label.contains("Bloc") {
        Party::Bloc
    } else if label.contains("Green") {
        Party::Green
    } else {
        Party::Other
    }
}

/// Per-party percentage vote shares for one riding. Shares need not sum to
/// exactly 100 (rounding and gaps in the source data).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartyShares {
    values: [f64; 6],
}

impl PartyShares {
    pub fn get(&self, party: Party) -> f64 {
        self.values[party.index()]
    }

    pub fn add(&mut self, party: Party, share: f64) {
        self.values[party.index()] += share;
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
