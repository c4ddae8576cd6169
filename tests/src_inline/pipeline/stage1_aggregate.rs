
use super::*;
use crate::model::party::Party;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

const HEADERS_38: [&str; 5] = [
    "District",
    "Candidate",
    "Number of Votes Percent",
    "Majority Percent",
    "Province",
];

#[test]
fn test_winner_and_share_split() {
    let raw = table(
        &HEADERS_38,
        &[
            &["Testville", "Jane Liberal", "55.1", "12.3", "Ontario"],
            &["Testville", "John N.D.P.", "44.9", "", "Ontario"],
        ],
    );
    let out = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap();
    assert_eq!(out.len(), 1);
    let riding = &out[0];
    assert_eq!(riding.riding, "Testville");
    assert_eq!(riding.province, "Ontario");
    assert_eq!(riding.elected_member.as_deref(), Some("Jane Liberal"));
    assert_eq!(riding.competitiveness, 12.3);
    assert_eq!(riding.term, 38);
    assert_eq!(riding.shares.get(Party::Liberal), 55.1);
    assert_eq!(riding.shares.get(Party::Ndp), 44.9);
    assert_eq!(riding.shares.get(Party::Conservative), 0.0);
    assert_eq!(riding.shares.get(Party::Bloc), 0.0);
    assert_eq!(riding.shares.get(Party::Green), 0.0);
    assert_eq!(riding.shares.get(Party::Other), 0.0);
}

#[test]
fn test_same_party_candidates_sum_without_double_counting() {
    let raw = table(
        &HEADERS_38,
        &[
            &["Testville", "A Liberal", "30.0", "", "Ontario"],
            &["Testville", "B Liberal", "20.0", "", "Ontario"],
            &["Testville", "C Independent", "10.0", "", "Ontario"],
        ],
    );
    let out = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap();
    assert_eq!(out[0].shares.get(Party::Liberal), 50.0);
    assert_eq!(out[0].shares.get(Party::Other), 10.0);
    // sum of all buckets equals sum of raw input shares
    assert!((out[0].shares.total() - 60.0).abs() < 1e-12);
}

#[test]
fn test_ridings_sorted_by_name() {
    let raw = table(
        &HEADERS_38,
        &[
            &["Zebra Falls", "A Liberal", "50.0", "", "Ontario"],
            &["Alpha Bay", "B Liberal", "50.0", "", "Ontario"],
            &["Midway", "C Liberal", "50.0", "", "Ontario"],
        ],
    );
    let out = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap();
    let names: Vec<&str> = out.iter().map(|r| r.riding.as_str()).collect();
    assert_eq!(names, vec!["Alpha Bay", "Midway", "Zebra Falls"]);
}

#[test]
fn test_bilingual_labels_for_later_terms() {
    let raw = table(
        &[
            "Electoral District Name/Nom de circonscription",
            "Candidate/Candidat",
            "Percentage of Votes Obtained /Pourcentage des votes obtenus",
            "Majority Percentage/Pourcentage de majorité",
            "Province",
        ],
        &[&["Testville", "Jane Liberal", "60.0", "20.0", "Quebec"]],
    );
    let out = run_stage1(&raw, 42, &TermTable::default_v1()).unwrap();
    assert_eq!(out[0].shares.get(Party::Liberal), 60.0);
    assert_eq!(out[0].elected_member.as_deref(), Some("Jane Liberal"));
}

#[test]
fn test_unsupported_term_is_configuration_error() {
    let raw = table(&HEADERS_38, &[]);
    let err = run_stage1(&raw, 99, &TermTable::default_v1()).unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));
}

#[test]
fn test_missing_configured_column_is_configuration_error() {
    // term 38 labels configured, but the file uses different headers
    let raw = table(
        &["District", "Candidate", "Votes", "Majority Percent", "Province"],
        &[&["Testville", "Jane Liberal", "60.0", "", "Ontario"]],
    );
    let err = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));
}

#[test]
fn test_empty_share_contributes_zero() {
    let raw = table(
        &HEADERS_38,
        &[
            &["Testville", "Jane Liberal", "", "5.0", "Ontario"],
            &["Testville", "John Green Party", "12.0", "", "Ontario"],
        ],
    );
    let out = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap();
    assert_eq!(out[0].shares.get(Party::Liberal), 0.0);
    assert_eq!(out[0].shares.get(Party::Green), 12.0);
    assert_eq!(out[0].elected_member.as_deref(), Some("Jane Liberal"));
}

#[test]
fn test_unparseable_share_is_parse_error() {
    let raw = table(
        &HEADERS_38,
        &[&["Testville", "Jane Liberal", "n/a", "", "Ontario"]],
    );
    let err = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap_err();
    assert!(matches!(err, PipelineError::Parse(_)));
}

#[test]
fn test_later_winner_record_wins() {
    let raw = table(
        &HEADERS_38,
        &[
            &["Testville", "Jane Liberal", "40.0", "2.0", "Ontario"],
            &["Testville", "John Conservative", "45.0", "7.0", "Ontario"],
        ],
    );
    let out = run_stage1(&raw, 38, &TermTable::default_v1()).unwrap();
    assert_eq!(out[0].elected_member.as_deref(), Some("John Conservative"));
    assert_eq!(out[0].competitiveness, 7.0);
}
