//! View models for the screens
//!
//! The UI shell (screen layout, navigation) lives outside this repo; these
//! types are the contract it binds against. One view model per screen, each
//! holding a shared handle to the application state.

mod booking;
mod facility;

pub use booking::BookingViewModel;
pub use facility::FacilityViewModel;
