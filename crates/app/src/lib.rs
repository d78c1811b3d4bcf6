//! Turfbook App
//!
//! Application state and the screen-facing view models. The UI shell binds
//! screens to [`BookingViewModel`] and [`FacilityViewModel`]; everything
//! below that line lives in `turfbook-core`.

pub mod state;
pub mod viewmodel;

pub use state::AppState;
pub use viewmodel::{BookingViewModel, FacilityViewModel};
