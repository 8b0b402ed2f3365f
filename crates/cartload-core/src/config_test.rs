use super::*;

#[test]
fn test_parse_minimal_config() {
    let yaml = r#"
name: test_project
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "test_project");
    assert_eq!(config.version, "0.1.0");
    assert_eq!(config.data_dir, "data");
    assert_eq!(config.database.path, "./cartload.duckdb");

    let root = std::path::PathBuf::from("/tmp/test");
    assert_eq!(config.data_dir_absolute(&root), root.join("data"));
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: ecommerce
version: "1.2.0"
data_dir: fixtures/csv
database:
  path: "./warehouse.duckdb"
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "ecommerce");
    assert_eq!(config.version, "1.2.0");
    assert_eq!(config.data_dir, "fixtures/csv");
    assert_eq!(config.database.path, "./warehouse.duckdb");
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = r#"
name: test_project
databse:
  path: "./oops.duckdb"
"#;
    let result: Result<Config, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(Config::FILE_NAME),
        "name: on_disk\ndata_dir: csvs\n",
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "on_disk");
    assert_eq!(config.data_dir, "csvs");
}

#[test]
fn test_load_missing_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}
