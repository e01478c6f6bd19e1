// tests/config_test.rs
use std::io::Write;

use serial_test::serial;
use tagbump::config::{load_config, Config};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.remote.name, "origin");
    assert!(!config.behavior.quiet);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[remote]
name = "upstream"

[behavior]
quiet = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote.name, "upstream");
    assert!(config.behavior.quiet);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[behavior]\nquiet = true\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote.name, "origin");
    assert!(config.behavior.quiet);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = load_config(Some("/definitely/not/a/config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_unparsable_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"this is not toml [").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_without_path_succeeds() {
    // Without an explicit path the loader consults the ambient lookup
    // locations, so only the invariants every environment shares are
    // asserted here.
    let config = load_config(None).unwrap();
    assert!(!config.remote.name.is_empty());
}
