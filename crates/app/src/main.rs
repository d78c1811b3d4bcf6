//! Turfbook - turf booking app core
//!
//! Headless entry point: initializes logging, the runtime and the
//! application state, then reports what the screens would see. The UI shell
//! attaches to the view models from its own process tree.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use turfbook_app::{AppState, BookingViewModel, FacilityViewModel};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Turfbook");

    // The snapshot writer task lives on this runtime
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    let state = match AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let facility_vm = FacilityViewModel::new(state.clone());
    let booking_vm = BookingViewModel::new(state.clone());

    let facility = facility_vm.facility();
    tracing::info!(
        id = %facility.id,
        price_per_hour = facility.price_per_hour,
        courts = facility.courts.len(),
        "Catalog loaded: {}",
        facility.name
    );

    let bookings = booking_vm.bookings();
    for booking in &bookings {
        tracing::info!(
            id = %booking.id,
            "{} on {} at {} ({}, {} players)",
            booking.facility_name,
            booking.date,
            booking.time_slot,
            booking.court_id,
            booking.player_count
        );
    }
    tracing::info!(count = bookings.len(), data_dir = %state.data_dir().display(), "Ready");
}
