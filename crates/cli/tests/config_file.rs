use std::io::Write;

use algo_practice_cli::{sort_json, CliError, SortConfig};
use algo_practice_sort::Algorithm;

#[test]
fn test_load_config_and_sort() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"algorithm": "quick-iterative"}}"#).unwrap();

    let config = SortConfig::load(file.path()).unwrap();
    assert_eq!(config.algorithm, Algorithm::QuickIterative);

    let algorithm = SortConfig::resolve(Some(config), None);
    assert_eq!(
        sort_json("[22, 11, 88, 66, 55, 77, 33, 44]", algorithm).unwrap(),
        "[11,22,33,44,55,66,77,88]"
    );
}

#[test]
fn test_load_config_reports_path_on_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"algorithm": "bubble"}}"#).unwrap();

    match SortConfig::load(file.path()) {
        Err(CliError::Config { path, .. }) => {
            assert_eq!(path, file.path().display().to_string());
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(SortConfig::load(&missing), Err(CliError::Io(_))));
}
