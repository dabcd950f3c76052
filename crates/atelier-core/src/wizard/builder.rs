//! Builder for creating and configuring Wizard instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    store::{Database, MemoryStore, OrderStore, SqliteStore, DEFAULT_SLOT_KEY},
};

/// Builder for creating and configuring Wizard instances.
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    slot_key: Option<String>,
    quota: Option<usize>,
    store: Option<Box<dyn OrderStore>>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            slot_key: None,
            quota: None,
            store: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/atelier/atelier.db` or `~/.local/share/atelier/atelier.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the slot key the order is stored under.
    ///
    /// Defaults to [`DEFAULT_SLOT_KEY`].
    pub fn with_slot_key(mut self, key: Option<impl Into<String>>) -> Self {
        if let Some(key) = key {
            self.slot_key = Some(key.into());
        }
        self
    }

    /// Caps the size of a saved order in bytes for the database store.
    /// Larger saves are reported as quota warnings and the order stays in
    /// memory.
    pub fn with_quota(mut self, bytes: Option<usize>) -> Self {
        self.quota = bytes;
        self
    }

    /// Uses the given store instead of a database file.
    pub fn with_store(mut self, store: impl OrderStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Keeps the order in process memory only.
    pub fn in_memory(self) -> Self {
        self.with_store(MemoryStore::new())
    }

    /// Builds the configured wizard, loading any previously saved order.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database directory cannot be created
    /// Returns `WizardError::Database` if database initialization fails
    pub fn build(self) -> Result<Wizard> {
        if let Some(store) = self.store {
            return Ok(Wizard::new(store));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening order database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        let key = self
            .slot_key
            .unwrap_or_else(|| DEFAULT_SLOT_KEY.to_string());
        let store = SqliteStore::new(db, key).with_quota(self.quota);

        Ok(Wizard::new(Box::new(store)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("atelier")
            .place_data_file("atelier.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
