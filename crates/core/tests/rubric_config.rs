use std::fs;

use rubric_core::rubric::{RubricConfig, RubricConfigError};
use rubric_core::scan::{Accumulation, LineCounting};
use tempfile::tempdir;

#[test]
fn defaults_match_the_fixed_rubric() {
    let config = RubricConfig::default();
    assert_eq!(config.thresholds.html_pages, 7);
    assert_eq!(config.thresholds.internal_links, 8);
    assert_eq!(config.thresholds.css_rules, 5);
    assert_eq!(config.thresholds.external_links, 4);
    assert_eq!(config.thresholds.visual_media, 4);
    assert_eq!(config.scan.accumulation, Accumulation::LastDocument);
    assert_eq!(config.scan.line_counting, LineCounting::Lines);
    assert_eq!(config.limits.max_entry_bytes, None);
    config.validate().expect("defaults are valid");
}

#[test]
fn loads_partial_yaml_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.yaml");
    fs::write(
        &path,
        "thresholds:\n  html_pages: 3\n\
         scan:\n  accumulation: sum\n  line_counting: legacy\n\
         limits:\n  max_entry_bytes: 1048576\n",
    )
    .unwrap();

    let config = RubricConfig::load(&path).expect("load yaml");
    assert_eq!(config.thresholds.html_pages, 3);
    assert_eq!(config.thresholds.css_rules, 5);
    assert_eq!(config.scan.accumulation, Accumulation::Sum);
    assert_eq!(config.scan.line_counting, LineCounting::Legacy);
    assert_eq!(config.limits.max_entry_bytes, Some(1_048_576));
}

#[test]
fn loads_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.json");
    fs::write(&path, r#"{"thresholds":{"external_links":2}}"#).unwrap();

    let config = RubricConfig::load(&path).expect("load json");
    assert_eq!(config.thresholds.external_links, 2);
    assert_eq!(config.thresholds.html_pages, 7);
}

#[test]
fn yaml_rendering_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.yml");
    let mut config = RubricConfig::default();
    config.thresholds.alt_attributes = 3;
    fs::write(&path, config.to_yaml().unwrap()).unwrap();

    assert_eq!(RubricConfig::load(&path).unwrap(), config);
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.toml");
    fs::write(&path, "x = 1").unwrap();
    assert!(matches!(RubricConfig::load(&path), Err(RubricConfigError::UnsupportedFormat(_))));
}

#[test]
fn rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.yaml");
    fs::write(&path, "thresholds:\n  richness_media_cap: 5\n").unwrap();
    let err = RubricConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("at most 2"));
}

#[test]
fn rejects_zero_minimum_for_any_check() {
    let mut config = RubricConfig::default();
    config.validate().unwrap();
    config.thresholds.external_links = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("thresholds.external_links must be at least 1"));

    let dir = tempdir().unwrap();
    let path = dir.path().join("rubric.json");
    fs::write(&path, r#"{"thresholds":{"alt_attributes":0}}"#).unwrap();
    let err = RubricConfig::load(&path).unwrap_err();
    assert!(matches!(err, RubricConfigError::Invalid(_)));
    assert!(err.to_string().contains("alt_attributes"));
}

#[test]
fn reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = RubricConfig::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, RubricConfigError::Read { .. }));
}
