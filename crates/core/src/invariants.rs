//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::catalog::Facility;
use crate::models::{Booking, DraftBooking, DEFAULT_COURT_ID};

/// A draft handed to `BookingStore::add` must be complete; callers gate on
/// `is_complete()` before confirming. Completeness is the only gate: player
/// count and period are free-form staged values and promote as-is.
pub fn assert_draft_promotable(draft: &DraftBooking) {
    debug_assert!(
        draft.is_complete(),
        "Promoting incomplete draft: date={:?} slot={:?} court={:?}",
        draft.date,
        draft.time_slot,
        draft.court_id
    );
}

/// Validate that the booking collection is internally consistent
pub fn assert_collection_invariants(bookings: &[Booking]) {
    for (i, booking) in bookings.iter().enumerate() {
        debug_assert!(
            !bookings[..i].iter().any(|b| b.id == booking.id),
            "Duplicate booking id {}",
            booking.id
        );

        debug_assert!(
            !booking.id.is_empty(),
            "Booking at index {} has empty id",
            i
        );
    }
}

/// Validate that the catalog can back the booking flow
pub fn assert_catalog_invariants(facility: &Facility) {
    // The booking screen preselects this court
    debug_assert!(
        facility.court(DEFAULT_COURT_ID).is_some(),
        "Catalog for {} is missing the default court '{}'",
        facility.id,
        DEFAULT_COURT_ID
    );

    debug_assert!(
        facility.price_per_hour > 0.0,
        "Facility {} has non-positive hourly price",
        facility.id
    );
}
