//! Preference store for the selected lens. The original client kept this in
//! localStorage; here it sits behind a small get/set trait with an in-memory
//! implementation for tests and a JSON-file one so the choice survives
//! restarts. Writes are best-effort, like browser storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

pub const LENS_KEY: &str = "pb_lens";
pub const DEFAULT_LENS: &str = "neutral";

/// String key/value preferences.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The persisted lens, defaulting to "neutral".
pub fn lens(store: &dyn PrefStore) -> String {
    store
        .get(LENS_KEY)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LENS.to_string())
}

pub fn set_lens(store: &mut dyn PrefStore, value: &str) {
    store.set(LENS_KEY, value);
}

#[derive(Debug, Default)]
pub struct MemoryPrefs {
    map: BTreeMap<String, String>,
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

/// JSON map persisted to disk, loaded once on open, written through on set.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FilePrefs {
    /// A missing file is an empty store; an unreadable or corrupt one is
    /// logged and treated the same.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = load_map(&path);
        Self { path, map }
    }
}

fn load_map(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(err) => {
                error!("failed to parse prefs file {}: {err}", path.display());
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read prefs file {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
        let persist = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let payload = serde_json::to_vec_pretty(&self.map)?;
            fs::write(&self.path, payload)
        };
        if let Err(err) = persist() {
            error!("failed to persist prefs to {}: {err}", self.path.display());
        }
    }
}
