//! The on-disk `.vlab` directory: configuration plus the local storage the
//! notebook persists into.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::LabConfig;
use crate::notebook::{FileStorage, write_atomic};

const STORE_DIR: &str = ".vlab";
const CONFIG_FILE: &str = "config.json";
const STORAGE_DIR: &str = "storage";

#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn vlab_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(project_root: &Path) -> Result<Self> {
        let root = Self::vlab_dir(project_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `vlab init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn init(project_root: &Path, force: bool, cfg: &LabConfig) -> Result<Self> {
        let root = Self::vlab_dir(project_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }

        fs::create_dir_all(root.join(STORAGE_DIR)).context("create storage dir")?;
        let store = Self { root };
        store.write_config(cfg)?;
        Ok(store)
    }

    /// Walks up from `start` to the nearest directory holding `.vlab`.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::vlab_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!("No {} directory found (run `vlab init`)", STORE_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<LabConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(LabConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: LabConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &LabConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn storage(&self) -> Result<FileStorage> {
        FileStorage::open(&self.root.join(STORAGE_DIR))
    }
}

#[cfg(test)]
#[path = "tests/store/store_tests.rs"]
mod tests;
