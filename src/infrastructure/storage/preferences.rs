// SPDX-License-Identifier: MPL-2.0
//! [`PreferenceStore`] adapters.
//!
//! - [`TomlPreferenceStore`]: flat string table persisted to `preferences.toml`
//! - [`MemoryPreferenceStore`]: in-memory map, used for tests and as a
//!   fallback when the preferences file cannot be opened

use crate::application::port::PreferenceStore;
use crate::error::{Error, Result};
use crate::paths;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted preferences table.
pub const PREFERENCES_FILE: &str = "preferences.toml";

// =============================================================================
// TomlPreferenceStore
// =============================================================================

/// Preference store backed by a TOML file of string values.
///
/// The whole table is kept in memory and the file is rewritten on every
/// [`set`](PreferenceStore::set).
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Opens the store at `path`. A missing file yields an empty store.
    ///
    /// Entries that are not strings are dropped. A file that is not valid
    /// TOML is treated as empty and replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Preferences`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Preferences(format!("{}: {e}", path.display())))?;
            parse_values(&path, &content)
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Opens `preferences.toml` in the application config directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Preferences`] if no config directory can be resolved
    /// or the file is unreadable.
    pub fn open_default() -> Result<Self> {
        Self::open_in(None)
    }

    /// Opens `preferences.toml` in `base_dir`, or the default directory.
    ///
    /// # Errors
    ///
    /// See [`open_default`](Self::open_default).
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = paths::config_dir_with_override(base_dir)
            .ok_or_else(|| Error::Preferences("no config directory available".into()))?;
        Self::open(dir.join(PREFERENCES_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn parse_values(path: &Path, content: &str) -> BTreeMap<String, String> {
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring unreadable preferences file");
            return BTreeMap::new();
        }
    };

    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(value) => Some((key, value)),
            other => {
                tracing::warn!(
                    path = %path.display(),
                    key = %key,
                    kind = other.type_str(),
                    "dropping non-string preference"
                );
                None
            }
        })
        .collect()
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_file()
            .map_err(|e| Error::Preferences(format!("{}: {e}", self.path.display())))
    }
}

// =============================================================================
// MemoryPreferenceStore
// =============================================================================

/// In-memory preference store.
///
/// Records every successful write in order, and can be switched to fail
/// reads or writes to exercise fallback paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a value without recording it as a write.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every `get` fail.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every `set` fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Successful writes, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Current value of a key, bypassing the failure switches.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Error::Preferences("storage unavailable".into()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Preferences("quota exceeded".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
