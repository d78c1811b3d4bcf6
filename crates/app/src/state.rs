//! Application state management

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use turfbook_core::{invariants, BookingStore, Error, Facility, Result};

/// Main application state: the booking store behind a mutex (UI callbacks
/// arrive one at a time, but each closure needs its own handle) and the
/// read-only catalog, loaded once at startup.
pub struct AppState {
    pub store: Arc<Mutex<BookingStore>>,
    pub catalog: Facility,
    data_dir: PathBuf,
}

impl AppState {
    /// Initialize against the per-user data directory. Must be called from
    /// within a Tokio runtime (the store spawns its snapshot writer).
    pub fn new() -> Result<Self> {
        Self::with_data_dir(Self::data_path()?)
    }

    /// Initialize against an explicit data directory (for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;
        let store = BookingStore::open(data_dir.join("bookings.json"));
        let catalog = Facility::load_bundled()?;
        invariants::assert_catalog_invariants(&catalog);

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            catalog,
            data_dir,
        })
    }

    /// State without persistence (for testing and demos)
    pub fn in_memory() -> Result<Self> {
        let catalog = Facility::load_bundled()?;
        invariants::assert_catalog_invariants(&catalog);

        Ok(Self {
            store: Arc::new(Mutex::new(BookingStore::open_in_memory())),
            catalog,
            data_dir: PathBuf::new(),
        })
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("app", "turfbook", "turfbook").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
