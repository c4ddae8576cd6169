use std::collections::BTreeMap;

use crate::model::party::Party;

/// Raw-CSV column labels for one term. Elections Canada changed the header
/// wording between Parliaments, so the labels are data, not code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    pub riding: String,
    pub candidate: String,
    pub vote_share: String,
    pub majority: String,
    pub province: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    pub labels: ColumnLabels,
    /// Party that formed government after this term's general election; its
    /// vote share is the sentinel field for the post-reconciliation filter.
    pub governing: Party,
}

/// Per-term configuration keyed by Parliament number. Injected into the
/// aggregation stage; extending to a future term is an entry here, not a code
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable {
    entries: BTreeMap<u16, TermConfig>,
}

impl TermTable {
    /// Validated defaults for Parliaments 38 through 42.
    pub fn default_v1() -> Self {
        let mut table = Self::default();

        table.insert(
            38,
            TermConfig {
                labels: ColumnLabels {
                    riding: "District".to_string(),
                    candidate: "Candidate".to_string(),
                    vote_share: "Number of Votes Percent".to_string(),
                    majority: "Majority Percent".to_string(),
                    province: "Province".to_string(),
                },
                governing: Party::Liberal,
            },
        );

        let bilingual_39 = ColumnLabels {
            riding: "Electoral District/Circonscription".to_string(),
            candidate: "Candidate/Candidat".to_string(),
            vote_share: "Percentage of Votes Obtained /Pourcentage des votes obtenus"
                .to_string(),
            majority: "Majority Percentage/Pourcentage de majorité".to_string(),
            province: "Province".to_string(),
        };
        table.insert(
            39,
            TermConfig {
                labels: bilingual_39.clone(),
                governing: Party::Conservative,
            },
        );

        let bilingual_40plus = ColumnLabels {
            riding: "Electoral District Name/Nom de circonscription".to_string(),
            ..bilingual_39
        };
        table.insert(
            40,
            TermConfig {
                labels: bilingual_40plus.clone(),
                governing: Party::Conservative,
            },
        );
        table.insert(
            41,
            TermConfig {
                labels: bilingual_40plus.clone(),
                governing: Party::Conservative,
            },
        );
        table.insert(
            42,
            TermConfig {
                labels: bilingual_40plus,
                governing: Party::Liberal,
            },
        );

        table
    }

    pub fn insert(&mut self, term: u16, config: TermConfig) {
        self.entries.insert(term, config);
    }

    pub fn get(&self, term: u16) -> Option<&TermConfig> {
        self.entries.get(&term)
    }

    pub fn terms(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.keys().copied()
    }
}
