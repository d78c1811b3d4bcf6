//! Booking store - owns the confirmed collection and the active draft
//!
//! All mutations go through this type, on whatever thread the UI callbacks
//! run on. Mutations land in memory synchronously and in issue order; the
//! snapshot write they queue is fire-and-forget.

use std::path::Path;

use tracing::{debug, info};

use crate::invariants;
use crate::models::{Booking, DraftBooking, DraftUpdate};
use crate::storage::{SnapshotStore, SnapshotWriter};

pub struct BookingStore {
    bookings: Vec<Booking>,
    draft: DraftBooking,
    writer: SnapshotWriter,
}

impl BookingStore {
    /// Open the store backed by a snapshot file. A missing or unreadable
    /// snapshot starts the store empty. Must be called from within a Tokio
    /// runtime (the snapshot writer task is spawned here).
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let snapshot = SnapshotStore::new(path);
        let bookings = snapshot.load();
        info!(count = bookings.len(), path = %snapshot.path().display(), "Loaded bookings");
        Self {
            bookings,
            draft: DraftBooking::default(),
            writer: SnapshotWriter::spawn(snapshot),
        }
    }

    /// Store without persistence (for testing and demos)
    pub fn open_in_memory() -> Self {
        Self {
            bookings: Vec::new(),
            draft: DraftBooking::default(),
            writer: SnapshotWriter::disabled(),
        }
    }

    /// Confirmed bookings in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The active draft
    pub fn draft(&self) -> &DraftBooking {
        &self.draft
    }

    // Draft pass-throughs. The draft is owned here so that `add` can reset
    // it atomically with the promotion.

    pub fn set_facility(&mut self, id: &str, name: &str, price_per_hour: f64) {
        self.draft.set_facility(id, name, price_per_hour);
    }

    pub fn update_draft(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    pub fn set_player_count(&mut self, count: u32, capacity: Option<u32>) {
        self.draft.set_player_count(count, capacity);
    }

    pub fn increment_players(&mut self, capacity: Option<u32>) {
        self.draft.increment_players(capacity);
    }

    pub fn decrement_players(&mut self) {
        self.draft.decrement_players();
    }

    /// Promote the current draft into a confirmed booking: stamp id and
    /// timestamp, append to the collection, reset the draft, queue a
    /// snapshot write. Callers gate on `draft().is_complete()` before
    /// calling; the store only asserts it as a development guardrail.
    pub fn add(&mut self) -> Booking {
        let draft = std::mem::take(&mut self.draft);
        invariants::assert_draft_promotable(&draft);

        let booking = Booking::from_draft(draft);
        self.bookings.push(booking.clone());
        invariants::assert_collection_invariants(&self.bookings);

        info!(id = %booking.id, date = %booking.date, slot = %booking.time_slot, "Confirmed booking");
        self.writer.persist(self.bookings.clone());
        booking
    }

    /// Completion signal for every snapshot write queued so far. `add` and
    /// `remove` stay fire-and-forget; shutdown paths and tests await this
    /// when they need durability. The returned future does not borrow the
    /// store, so a lock on it can be released before awaiting.
    pub fn flush(&self) -> impl std::future::Future<Output = ()> {
        let writer = self.writer.clone();
        async move { writer.flush().await }
    }

    /// Remove the first booking with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        match self.bookings.iter().position(|b| b.id == id) {
            Some(idx) => {
                self.bookings.remove(idx);
                info!(id, "Deleted booking");
                self.writer.persist(self.bookings.clone());
            }
            None => {
                debug!(id, "Delete for unknown booking id, ignoring");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_COURT_ID, DEFAULT_PLAYER_COUNT};

    fn stage_complete_draft(store: &mut BookingStore, date: &str, slot: &str, court: &str) {
        store.set_facility("turf-greenkick-01", "GreenKick Turf Arena", 1400.0);
        store.update_draft(DraftUpdate {
            date: Some(date.into()),
            time_slot: Some(slot.into()),
            court_id: Some(court.into()),
            ..Default::default()
        });
    }

    #[test]
    fn test_add_keeps_insertion_order_and_distinct_ids() {
        let mut store = BookingStore::open_in_memory();
        let mut ids = Vec::new();
        for (i, slot) in ["12:00 PM", "01:00 PM", "02:00 PM"].iter().enumerate() {
            stage_complete_draft(&mut store, &format!("2025-11-2{}", i + 4), slot, "court-a");
            ids.push(store.add().id);
        }

        let listed: Vec<&str> = store.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[..i].contains(id));
        }
    }

    #[test]
    fn test_add_resets_draft() {
        let mut store = BookingStore::open_in_memory();
        stage_complete_draft(&mut store, "2025-11-26", "01:00 PM", "court-a");
        store.set_player_count(7, Some(12));
        store.add();

        let draft = store.draft();
        assert!(draft.date.is_none());
        assert!(draft.facility_id.is_none());
        assert_eq!(draft.player_count, DEFAULT_PLAYER_COUNT);
        assert_eq!(draft.court_id.as_deref(), Some(DEFAULT_COURT_ID));
        assert_eq!(draft.price_per_hour, 0.0);
    }

    #[test]
    fn test_confirm_scenario() {
        let mut store = BookingStore::open_in_memory();
        stage_complete_draft(&mut store, "2025-11-26", "01:00 PM", "court-a");
        store.set_player_count(7, Some(12));
        assert!(store.draft().is_complete());

        let booking = store.add();

        assert_eq!(store.bookings().len(), 1);
        let stored = &store.bookings()[0];
        assert_eq!(stored, &booking);
        assert_eq!(stored.date, "2025-11-26");
        assert_eq!(stored.time_slot, "01:00 PM");
        assert_eq!(stored.court_id, "court-a");
        assert_eq!(stored.player_count, 7);
        assert_eq!(stored.price_per_hour, 1400.0);
        assert!(!stored.id.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = BookingStore::open_in_memory();
        stage_complete_draft(&mut store, "2025-11-24", "12:00 PM", "court-a");
        let first = store.add();
        stage_complete_draft(&mut store, "2025-11-25", "01:00 PM", "court-b");
        let second = store.add();

        store.remove(&first.id);
        assert_eq!(store.bookings().len(), 1);
        assert!(store.bookings().iter().all(|b| b.id != first.id));
        assert_eq!(store.bookings()[0].id, second.id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = BookingStore::open_in_memory();
        stage_complete_draft(&mut store, "2025-11-24", "12:00 PM", "court-a");
        store.add();

        store.remove("does-not-exist");
        assert_eq!(store.bookings().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_mutations_reach_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");

        {
            let mut store = BookingStore::open(&path);
            stage_complete_draft(&mut store, "2025-11-24", "12:00 PM", "court-a");
            let first_id = store.add().id;
            stage_complete_draft(&mut store, "2025-11-25", "01:00 PM", "court-b");
            store.add();
            store.remove(&first_id);
            store.flush().await;
        }

        let reopened = BookingStore::open(&path);
        assert_eq!(reopened.bookings().len(), 1);
        assert_eq!(reopened.bookings()[0].date, "2025-11-25");
    }
}
