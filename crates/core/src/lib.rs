//! Turfbook Core Library
//!
//! Booking domain models, catalog schema, draft builder, booking store, and
//! snapshot persistence for the Turfbook app.

pub mod catalog;
pub mod error;
pub mod invariants;
pub mod models;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, Court, Facility, Policies, Review, TimePeriod, Timing};
pub use error::{Error, Result};
pub use models::*;
pub use storage::{SnapshotStore, SnapshotWriter};
pub use store::BookingStore;
