//! Facility details screen view model

use std::sync::Arc;

use turfbook_core::{Court, Facility, Review};

use crate::state::AppState;

pub struct FacilityViewModel {
    state: Arc<AppState>,
}

impl FacilityViewModel {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// The full catalog record; the screen renders identity, amenities,
    /// policies, timings and reviews straight from it.
    pub fn facility(&self) -> &Facility {
        &self.state.catalog
    }

    pub fn courts(&self) -> &[Court] {
        &self.state.catalog.courts
    }

    pub fn reviews(&self) -> &[Review] {
        &self.state.catalog.reviews
    }

    /// "Book Now" tap: start a fresh draft stamped with this facility's
    /// identity and pricing, then the shell navigates to the booking screen.
    pub fn book_now(&self) {
        let facility = &self.state.catalog;
        let mut store = self.state.store.lock().unwrap();
        store.reset_draft();
        store.set_facility(&facility.id, &facility.name, facility.price_per_hour);
    }
}
