//! Status messages for operation feedback.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::wizard::Applied;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Summarizes a mutation outcome.
    ///
    /// An unchanged order is reported as a successful no-op; a persistence
    /// warning is reported as a failure even though the change is kept in
    /// memory.
    pub fn from_applied(applied: &Applied, done: &str) -> Self {
        match (&applied.warning, applied.changed) {
            (Some(warning), _) => {
                Self::failure(format!("{done}, but it was not saved: {warning}"))
            }
            (None, true) => Self::success(format!("{done}.")),
            (None, false) => Self::success("Nothing to change.".to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Warning:" },
            self.message
        )
    }
}

/// The time of the last successful save, shown in a given zone.
pub struct LastSaved {
    at: Timestamp,
    zone: TimeZone,
}

impl LastSaved {
    /// Renders in the system timezone.
    pub fn local(at: Timestamp) -> Self {
        Self::in_zone(at, TimeZone::system())
    }

    pub fn in_zone(at: Timestamp, zone: TimeZone) -> Self {
        Self { at, zone }
    }
}

impl fmt::Display for LastSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saved = self.at.to_zoned(self.zone.clone());
        writeln!(f, "Last saved: {}", saved.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
