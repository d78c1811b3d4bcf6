//! Snapshot persistence for the booking collection
//!
//! The whole collection is stored as one JSON file and rewritten in full on
//! every mutation. There is no versioning and no incremental writing; the
//! snapshot is small and the in-memory collection is the source of truth for
//! the running session.

mod writer;

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::models::Booking;

pub use writer::SnapshotWriter;

/// Reads and writes the single booking snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection. A missing snapshot is an empty
    /// collection; an unreadable or unparsable one is logged and treated
    /// the same way. Never fails.
    pub fn load(&self) -> Vec<Booking> {
        if !self.path.exists() {
            return Vec::new();
        }
        match self.try_load() {
            Ok(bookings) => bookings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable booking snapshot, starting empty");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Booking>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the snapshot with the full collection.
    pub fn save(&self, bookings: &[Booking]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_vec_pretty(bookings)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
