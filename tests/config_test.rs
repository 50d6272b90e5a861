//! Integration tests for Settings layered loading.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use lotree::config::{environment, OutputFormat, Settings};

fn no_env() -> config::Environment {
    environment().source(Some(HashMap::new()))
}

#[test]
fn given_global_config_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lotree.toml");
    fs::write(
        &path,
        r#"
format = "toml"
demo_sequences = [[10, 20, 30]]
"#,
    )
    .unwrap();

    let settings = Settings::load_with(Some(&path), no_env()).expect("load settings");

    assert_eq!(settings.format, OutputFormat::Toml);
    assert_eq!(settings.demo_sequences, vec![vec![10, 20, 30]]);
    // Not specified, so defaults remain
    assert!(settings.show_tree);
    assert!(settings.color);
}

#[test]
fn given_missing_global_config_when_loading_then_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let settings = Settings::load_with(Some(&path), no_env()).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_malformed_global_config_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lotree.toml");
    fs::write(&path, "format = [not toml").unwrap();

    let err = Settings::load_with(Some(&path), no_env()).unwrap_err();
    assert!(err.to_string().contains("parse"), "unexpected error: {err}");
}

#[test]
fn given_env_and_global_config_when_loading_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lotree.toml");
    fs::write(&path, "show_tree = false\ncolor = false\n").unwrap();

    let env: HashMap<String, String> =
        [("LOTREE_SHOW_TREE".to_string(), "true".to_string())].into();
    let settings =
        Settings::load_with(Some(&path), environment().source(Some(env))).expect("load");

    assert!(settings.show_tree);
    assert!(!settings.color);
}
