use std::path::Path;

use crate::error::Result;
use crate::model::legislator::JoinedRecord;
use crate::model::party::Party;
use crate::report::{format_f64, format_optional};

/// Share columns in output order (kept stable for downstream notebooks).
const SHARE_ORDER: [Party; 6] = [
    Party::Liberal,
    Party::Conservative,
    Party::Ndp,
    Party::Bloc,
    Party::Green,
    Party::Other,
];

/// Write the terminal joined table, overwriting any previous output.
pub fn write_joined(records: &[JoinedRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "name",
        "party",
        "term",
        "quebecker",
        "govtSupport",
        "speechFrequency",
        "totalSpeechVolume",
        "riding",
        "province",
    ];
    for party in SHARE_ORDER {
        header.push(party.share_label());
    }
    header.extend(["competitiveness", "rileScore", "vanillaScore", "legacyScore"]);
    writer.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.name.clone(),
            record.party.clone(),
            record.term.to_string(),
            format_f64(record.quebecker),
            format_f64(record.govt_support),
            format_optional(record.speech_frequency),
            format_optional(record.total_speech_volume),
            record.riding.clone(),
            record.province.clone(),
        ];
        for party in SHARE_ORDER {
            row.push(format_f64(record.shares.get(party)));
        }
        row.push(format_f64(record.competitiveness));
        row.push(format_f64(record.rile_score));
        row.push(format_f64(record.vanilla_score));
        row.push(format_f64(record.legacy_score));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
