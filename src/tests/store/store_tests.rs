use tempfile::tempdir;

use super::*;
use crate::notebook::Storage;

#[test]
fn init_writes_default_config_and_storage_dir() -> Result<()> {
    let tmp = tempdir()?;
    let store = LocalStore::init(tmp.path(), false, &LabConfig::default())?;

    assert!(store.root().join("config.json").is_file());
    assert!(store.root().join("storage").is_dir());
    assert_eq!(store.read_config()?, LabConfig::default());
    Ok(())
}

#[test]
fn init_refuses_existing_without_force() -> Result<()> {
    let tmp = tempdir()?;
    LocalStore::init(tmp.path(), false, &LabConfig::default())?;

    let err = LocalStore::init(tmp.path(), false, &LabConfig::default()).unwrap_err();
    assert!(err.to_string().contains("--force"));

    let cfg = LabConfig {
        api_base: "http://lab.example/api".to_string(),
        ..LabConfig::default()
    };
    let store = LocalStore::init(tmp.path(), true, &cfg)?;
    assert_eq!(store.read_config()?.api_base, "http://lab.example/api");
    Ok(())
}

#[test]
fn discover_walks_up_to_nearest_root() -> Result<()> {
    let tmp = tempdir()?;
    LocalStore::init(tmp.path(), false, &LabConfig::default())?;
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested)?;

    let store = LocalStore::discover(&nested)?;
    assert_eq!(
        store.root().canonicalize()?,
        LocalStore::vlab_dir(tmp.path()).canonicalize()?
    );
    Ok(())
}

#[test]
fn open_without_init_fails() -> Result<()> {
    let tmp = tempdir()?;
    let err = LocalStore::open(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("vlab init"));
    Ok(())
}

#[test]
fn partial_config_fills_defaults() -> Result<()> {
    let tmp = tempdir()?;
    let store = LocalStore::init(tmp.path(), false, &LabConfig::default())?;
    fs::write(store.root().join("config.json"), r#"{"version":1,"remote_sync":false}"#)?;

    let cfg = store.read_config()?;
    assert!(!cfg.remote_sync);
    assert_eq!(cfg.api_base, crate::model::DEFAULT_API_BASE);
    assert_eq!(cfg.timeout_secs, crate::model::DEFAULT_TIMEOUT_SECS);
    Ok(())
}

#[test]
fn unsupported_config_version_is_rejected() -> Result<()> {
    let tmp = tempdir()?;
    let store = LocalStore::init(tmp.path(), false, &LabConfig::default())?;
    fs::write(store.root().join("config.json"), r#"{"version":2}"#)?;
    assert!(store.read_config().is_err());
    Ok(())
}

#[test]
fn storage_round_trips_keys_as_files() -> Result<()> {
    let tmp = tempdir()?;
    let store = LocalStore::init(tmp.path(), false, &LabConfig::default())?;
    let mut storage = store.storage()?;

    assert_eq!(storage.get("vlab.findings")?, None);
    storage.set("vlab.findings", "[]")?;
    assert_eq!(storage.get("vlab.findings")?.as_deref(), Some("[]"));
    assert!(store.root().join("storage").join("vlab.findings.json").is_file());

    assert!(storage.set("../escape", "x").is_err());
    assert!(storage.set(".hidden", "x").is_err());
    Ok(())
}
