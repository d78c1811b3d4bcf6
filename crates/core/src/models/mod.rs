//! Data models for Turfbook

mod booking;
mod draft;

pub use booking::*;
pub use draft::*;
