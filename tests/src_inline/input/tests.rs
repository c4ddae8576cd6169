
use super::*;

fn write_bytes(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_read_table_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bytes(&dir, "a.csv", b"col_a,col_b\n1,two\n3,four\n");
    let table = read_table(&path).unwrap();
    assert_eq!(table.headers, vec!["col_a", "col_b"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "two"]);
}

#[test]
fn test_latin1_fallback_preserves_accents() {
    let dir = tempfile::tempdir().unwrap();
    // "Rivière" in Latin-1: 0xE8 is not valid UTF-8
    let path = write_bytes(
        &dir,
        "latin1.csv",
        b"District,Candidate\nRivi\xE8re-du-Nord,Jane Bloc\n",
    );
    let table = read_table(&path).unwrap();
    assert_eq!(table.rows[0][0], "Rivière-du-Nord");
    assert_eq!(table.rows[0][1], "Jane Bloc");
}

#[test]
fn test_ragged_rows_read_as_empty_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bytes(&dir, "ragged.csv", b"a,b,c\n1,2\n");
    let table = read_table(&path).unwrap();
    assert_eq!(table.cell(&table.rows[0], 1), "2");
    assert_eq!(table.cell(&table.rows[0], 2), "");
}

#[test]
fn test_column_index_is_exact_match() {
    let table = read_table_from_str("Province,province \nx,y\n").unwrap();
    // headers are trimmed, then matched exactly
    assert_eq!(table.column_index("Province"), Some(0));
    assert_eq!(table.column_index("province"), Some(1));
    assert_eq!(table.column_index("PROVINCE"), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}
