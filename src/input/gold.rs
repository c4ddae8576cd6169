use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::input::read_table;
use crate::model::gold::{ALL_VARIANTS, GoldStandard, SCORED_PARTIES, TERM_SPAN};

/// Load the gold-standard party ideology table.
///
/// The file is headered with one column per score variant and exactly one row
/// per (scored party, term) pair, in party blocks of five terms each.
pub fn load_gold(path: &Path) -> Result<GoldStandard> {
    let table = read_table(path)?;

    let mut variant_cols = [0usize; 3];
    for (i, variant) in ALL_VARIANTS.iter().enumerate() {
        variant_cols[i] = table.column_index(variant.column_name()).ok_or_else(|| {
            PipelineError::Configuration(format!(
                "gold-standard table {} has no '{}' column",
                path.display(),
                variant.column_name()
            ))
        })?;
    }

    let expected = SCORED_PARTIES.len() * TERM_SPAN;
    if table.rows.len() != expected {
        return Err(PipelineError::Configuration(format!(
            "gold-standard table {} has {} rows, expected {}",
            path.display(),
            table.rows.len(),
            expected
        )));
    }

    let mut rows = Vec::with_capacity(expected);
    for (idx, row) in table.rows.iter().enumerate() {
        let mut values = [0.0f64; 3];
        for (i, &col) in variant_cols.iter().enumerate() {
            let raw = table.cell(row, col).trim();
            values[i] = raw.parse().map_err(|_| {
                PipelineError::Parse(format!(
                    "{} row {}: invalid {} value '{}'",
                    path.display(),
                    idx + 1,
                    ALL_VARIANTS[i].column_name(),
                    raw
                ))
            })?;
        }
        rows.push(values);
    }

    Ok(GoldStandard::new(rows))
}
