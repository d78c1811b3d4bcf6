//! Booking screens view model
//!
//! Backs both the booking flow screen (date/period/slot/court/player
//! controls) and the "my bookings" list screen.

use std::sync::Arc;

use turfbook_core::{Booking, DraftBooking, DraftUpdate};

use crate::state::AppState;

pub struct BookingViewModel {
    state: Arc<AppState>,
}

impl BookingViewModel {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Confirmed bookings, insertion order
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.store.lock().unwrap().bookings().to_vec()
    }

    /// The in-progress draft
    pub fn current_booking(&self) -> DraftBooking {
        self.state.store.lock().unwrap().draft().clone()
    }

    /// Stage selections into the draft as the user taps controls
    pub fn update_current_booking(&self, update: DraftUpdate) {
        self.state.store.lock().unwrap().update_draft(update);
    }

    pub fn reset_current_booking(&self) {
        self.state.store.lock().unwrap().reset_draft();
    }

    /// Merge the final selections and confirm. Returns `None` when the draft
    /// is still incomplete; the confirm control is disabled in that state,
    /// so this is the quiet path, not an error.
    pub fn add_booking(&self, update: DraftUpdate) -> Option<Booking> {
        let mut store = self.state.store.lock().unwrap();
        store.update_draft(update);
        if !store.draft().is_complete() {
            return None;
        }
        Some(store.add())
    }

    pub fn delete_booking(&self, id: &str) {
        self.state.store.lock().unwrap().remove(id);
    }

    /// Whether the confirm control should be enabled
    pub fn can_confirm(&self) -> bool {
        self.state.store.lock().unwrap().draft().is_complete()
    }

    /// Slot labels for a period chip, in display order
    pub fn slots_for_period(&self, period_key: &str) -> Vec<String> {
        self.state.catalog.slots_for(period_key).to_vec()
    }

    /// Capacity of the court currently selected in the draft, if the
    /// catalog knows it
    pub fn selected_court_capacity(&self) -> Option<u32> {
        let store = self.state.store.lock().unwrap();
        let court_id = store.draft().court_id.clone()?;
        drop(store);

        self.state.catalog.court_capacity(&court_id)
    }

    /// Player counter "+" control, capped at the selected court's capacity
    pub fn increment_players(&self) {
        let capacity = self.selected_court_capacity();
        self.state.store.lock().unwrap().increment_players(capacity);
    }

    /// Player counter "-" control, floored at 1
    pub fn decrement_players(&self) {
        self.state.store.lock().unwrap().decrement_players();
    }

    /// Footer display value: hourly price split per player, rounded
    pub fn price_per_player(&self) -> u32 {
        self.state.store.lock().unwrap().draft().price_per_player()
    }
}
