use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use super::ScoreStore;

/// Score store backed by a single JSON object on disk.
///
/// The file is re-read on every `get` and fully rewritten on every `set`, so
/// several keys can share one file and external edits are picked up.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, u32>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read scores from {:?}", self.path))?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse scores in {:?}", self.path))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut records = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable score file: {:#}", e);
            BTreeMap::new()
        });
        records.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json =
            serde_json::to_string_pretty(&records).context("Failed to serialize scores")?;
        // Write beside the target then rename, so a crash never leaves a half-written file.
        let tmp = self.tmp_path();
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write scores to {:?}", tmp))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {:?} with {:?}", self.path, tmp))?;

        Ok(())
    }
}
