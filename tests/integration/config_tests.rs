use std::fs;
use tempfile::tempdir;

use keycase::config::Config;
use keycase::render::CaseStyle;

#[test]
fn test_save_and_load_roundtrip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("keycase.toml");

    let config = Config::default_config();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.naming.style, config.naming.style);
    assert_eq!(loaded.naming.prefix, config.naming.prefix);
    assert_eq!(loaded.naming.suffix, config.naming.suffix);
}

#[test]
fn test_load_custom_style() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("keycase.toml");

    fs::write(
        &path,
        r#"
[naming]
style = "dot"
prefix = "app."
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.naming.style, CaseStyle::Dot);
    assert_eq!(config.naming.prefix, "app.");
    assert_eq!(config.naming.suffix, "");
}

#[test]
fn test_load_missing_file_fails() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("does-not-exist.toml");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_load_or_default_falls_back() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("does-not-exist.toml");

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.naming.style, CaseStyle::Kebab);
}

#[test]
fn test_load_rejects_unknown_style() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("keycase.toml");

    fs::write(&path, "[naming]\nstyle = \"snake\"\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_load_rejects_separator_in_prefix() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("keycase.toml");

    fs::write(&path, "[naming]\nprefix = \"my prefix\"\n").unwrap();

    assert!(Config::load(&path).is_err());
}
