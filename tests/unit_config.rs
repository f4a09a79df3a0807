// tests/unit_config.rs
use pmdgate_core::cli::handle_init;
use pmdgate_core::collector::Collector;
use pmdgate_core::config::{GateConfig, CONFIG_FILE};
use pmdgate_core::types::Priority;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[analysis]\nsources = [\"app/src\", \"lib/src\"]\nthreads = 4",
    )
    .unwrap();
    let c = GateConfig::load_from_dir(d.path()).unwrap();
    assert_eq!(c.analysis.sources, vec![PathBuf::from("app/src"), PathBuf::from("lib/src")]);
    assert_eq!(c.analysis.threads, 4);
}

#[test]
fn test_defaults_without_file() {
    let d = tempfile::tempdir().unwrap();
    let c = GateConfig::load_from_dir(d.path()).unwrap();
    assert_eq!(c.collector.min_priority, Priority::Medium);
    assert_eq!(c.engine.work_dir, PathBuf::from("target/pmdgate"));
    assert!(c.engine.reports.is_empty());
}

#[test]
fn test_invalid_toml_is_reported() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[analysis\nsources = 1").unwrap();
    let err = GateConfig::load_from_dir(d.path()).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_engine_section() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[engine]\nbinary = \"/opt/pmd/bin/pmd\"\nargs = [\"--cache\", \"target/pmd.cache\"]\nreports = [\"a.json\"]",
    )
    .unwrap();
    let c = GateConfig::load_from_dir(d.path()).unwrap();
    assert_eq!(c.engine.binary, "/opt/pmd/bin/pmd");
    assert_eq!(c.engine.args.len(), 2);
    assert_eq!(c.engine.reports, vec![PathBuf::from("a.json")]);
}

#[test]
fn test_init_writes_loadable_config() {
    let d = tempfile::tempdir().unwrap();
    let path = handle_init(d.path(), false).unwrap();
    let c = GateConfig::load(&path).unwrap();
    assert!(!c.ruleset_selection().is_empty());
    assert!(c.violation_collector().unwrap().actions().is_empty());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "# mine").unwrap();
    assert!(handle_init(d.path(), false).is_err());
    assert!(handle_init(d.path(), true).is_ok());
}
