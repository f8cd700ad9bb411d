//! Loading run configuration from JSON files.

use std::fs;

use fragasm::{AssemblyConfig, ConfigError, SamplerConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "run.json",
        r#"{ "minOverlap": 12, "sampler": { "seed": 7 } }"#,
    );

    let config = AssemblyConfig::from_json_file(&path).unwrap();
    assert_eq!(config.min_overlap, 12);
    assert_eq!(config.max_passes, None);
    assert_eq!(
        config.sampler,
        SamplerConfig {
            seed: 7,
            ..SamplerConfig::default()
        }
    );
}

#[test]
fn test_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "run.json",
        r#"{
            "minOverlap": 25,
            "maxPasses": 40,
            "sampler": { "readCount": 10, "minReadLen": 30, "maxReadLen": 35, "seed": 1 }
        }"#,
    );

    let config = AssemblyConfig::from_json_file(&path).unwrap();
    assert_eq!(config.min_overlap, 25);
    assert_eq!(config.options().max_passes, Some(40));
    assert_eq!(config.sampler.read_count, 10);
    assert_eq!(config.sampler.min_read_len, 30);
    assert_eq!(config.sampler.max_read_len, 35);
}

#[test]
fn test_empty_object_is_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "empty.json", "{}");
    assert_eq!(
        AssemblyConfig::from_json_file(&path).unwrap(),
        AssemblyConfig::default()
    );
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = AssemblyConfig::from_json_file(&path).unwrap_err();
    match err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected a read error, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "broken.json", r#"{ "minOverlap": "twenty" }"#);
    let err = AssemblyConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(
        err.to_string().contains("broken.json"),
        "Error should name the file: {}",
        err
    );
}

#[test]
fn test_loaded_config_validates_against_fragments() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "run.json", r#"{ "minOverlap": 8 }"#);
    let config = AssemblyConfig::from_json_file(&path).unwrap();

    assert!(config.validate_for(&["ACGTACGTAC", "TACGTTTT"]).is_ok());
    assert!(matches!(
        config.validate_for(&["ACGTACGTAC", "TACG"]),
        Err(ConfigError::MinOverlapExceedsShortest { shortest: 4, .. })
    ));
}
