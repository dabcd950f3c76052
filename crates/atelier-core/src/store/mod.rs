//! Persistence adapter for the order.
//!
//! An [`OrderStore`] is a single key-value slot holding the encoded order.
//! Loading is infallible from the caller's point of view: an absent, unreadable
//! or malformed slot yields a fresh [`Order`]. Saving reports failures as a
//! [`PersistError`] that callers treat as a warning.
//!
//! Two stores ship with the crate:
//!
//! - [`SqliteStore`]: a row in a SQLite `slots` table, the durable default
//! - [`MemoryStore`]: a shared in-process slot, used for tests and for
//!   sessions that should not touch disk

use std::{cell::RefCell, rc::Rc};

use jiff::Timestamp;
use log::warn;

use crate::{error::PersistError, models::Order};

pub mod codec;
pub mod database;

pub use codec::{decode, encode, SCHEMA_VERSION};
pub use database::{Database, Slot};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "onboardingState";

/// A durable key-value slot holding one encoded order.
pub trait OrderStore {
    /// Key of the slot this store reads and writes.
    fn key(&self) -> &str;

    /// Reads the raw slot contents, `None` when never written.
    fn read(&self) -> Result<Option<String>, PersistError>;

    /// Replaces the raw slot contents.
    fn write(&mut self, value: &str) -> Result<(), PersistError>;

    /// When the slot was last written, if known.
    fn last_saved_at(&self) -> Option<Timestamp> {
        None
    }

    /// Loads the order, falling back to an empty one on any problem.
    fn load(&self) -> Order {
        match self.read() {
            Ok(Some(text)) => decode(&text).unwrap_or_else(|| {
                warn!("Slot '{}' holds no usable order; starting empty", self.key());
                Order::new()
            }),
            Ok(None) => Order::new(),
            Err(e) => {
                warn!("Starting slot '{}' with an empty order: {e}", self.key());
                Order::new()
            }
        }
    }

    /// Encodes and writes the order.
    fn save(&mut self, order: &Order) -> Result<(), PersistError> {
        let text = encode(order)?;
        self.write(&text)
    }
}

fn check_quota(key: &str, quota: Option<usize>, size: usize) -> Result<(), PersistError> {
    match quota {
        Some(limit) if size > limit => Err(PersistError::QuotaExceeded {
            key: key.to_string(),
            size,
        }),
        _ => Ok(()),
    }
}

/// Order slot stored in a SQLite database.
pub struct SqliteStore {
    db: Database,
    key: String,
    quota: Option<usize>,
}

impl SqliteStore {
    pub fn new(db: Database, key: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
            quota: None,
        }
    }

    /// Rejects writes larger than `bytes`.
    pub fn with_quota(mut self, bytes: Option<usize>) -> Self {
        self.quota = bytes;
        self
    }
}

impl OrderStore for SqliteStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, PersistError> {
        self.db
            .get_slot(&self.key)
            .map(|slot| slot.map(|s| s.value))
            .map_err(|e| PersistError::Read {
                key: self.key.clone(),
                message: e.to_string(),
            })
    }

    fn write(&mut self, value: &str) -> Result<(), PersistError> {
        check_quota(&self.key, self.quota, value.len())?;
        self.db
            .put_slot(&self.key, value)
            .map(|_| ())
            .map_err(|e| PersistError::Write {
                key: self.key.clone(),
                message: e.to_string(),
            })
    }

    fn last_saved_at(&self) -> Option<Timestamp> {
        match self.db.get_slot(&self.key) {
            Ok(slot) => slot.map(|s| s.updated_at),
            Err(e) => {
                warn!("Could not read save time: {e}");
                None
            }
        }
    }
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<String>,
    saved_at: Option<Timestamp>,
    quota: Option<usize>,
}

/// In-process order slot.
///
/// Clones share the same slot, so a test can hand one handle to a
/// [`Wizard`](crate::Wizard) and inspect or reload through another, the way a
/// second page load would see the first one's storage.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    slot: Rc<RefCell<MemorySlot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            key: DEFAULT_SLOT_KEY.to_string(),
            slot: Rc::default(),
        }
    }

    /// Creates a store whose slot already holds `value`.
    pub fn with_contents(value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slot.borrow_mut().value = Some(value.into());
        store
    }

    /// Rejects writes larger than `bytes`, like a full browser storage area.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.slot.borrow_mut().quota = bytes;
    }

    /// Raw slot contents.
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().value.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for MemoryStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, PersistError> {
        Ok(self.contents())
    }

    fn write(&mut self, value: &str) -> Result<(), PersistError> {
        let mut slot = self.slot.borrow_mut();
        check_quota(&self.key, slot.quota, value.len())?;
        slot.value = Some(value.to_string());
        slot.saved_at = Some(Timestamp::now());
        Ok(())
    }

    fn last_saved_at(&self) -> Option<Timestamp> {
        self.slot.borrow().saved_at
    }
}
