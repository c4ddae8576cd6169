pub mod csv;
pub mod summary;

/// Shortest round-trip float formatting; deterministic for identical inputs.
pub fn format_f64(value: f64) -> String {
    format!("{value}")
}

/// Missing statistics serialize as empty cells, never as zero.
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format_f64(v),
        None => String::new(),
    }
}
