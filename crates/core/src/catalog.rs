//! Facility catalog schema and loader
//!
//! The catalog is a read-only JSON dataset describing the single bookable
//! turf: identity and pricing, courts, the period -> time-slot mapping, and
//! the presentational fields the screens render (amenities, policies,
//! reviews, timings). The booking core only depends on id/name/price, the
//! courts list, and the slot mapping; everything else is carried through
//! untouched for the screens.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Dataset bundled with the app; screens ship with this data offline.
const BUNDLED_CATALOG: &str = include_str!("../data/turf.json");

/// The facility ("turf") catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub price_per_hour: f64,
    pub rating: f64,
    pub review_count: u32,
    pub address: String,
    pub about: String,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub timing: Timing,
    pub courts: Vec<Court>,
    pub time_slots: HashMap<String, TimePeriod>,
    pub policies: Policies,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A bookable court within the facility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

/// A named block of the day grouping discrete slots
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    pub label: String,
    /// Slot labels in display order
    pub slots: Vec<String>,
    pub time_range: String,
}

/// Opening hours by day type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub weekdays: String,
    pub weekends: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    pub cancellation: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub rating: f64,
    pub date: String,
    pub comment: String,
}

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Catalog file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl Facility {
    /// Load and validate the bundled catalog
    pub fn load_bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load and validate a catalog from an external file
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog directly from JSON content
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let facility: Facility = serde_json::from_str(content)?;
        facility.validate()?;
        Ok(facility)
    }

    /// Check catalog invariants: unique court ids, unique slot labels per period
    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::Invalid("facility id is empty".into()));
        }
        for (i, court) in self.courts.iter().enumerate() {
            if self.courts[..i].iter().any(|c| c.id == court.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate court id '{}'",
                    court.id
                )));
            }
            if court.capacity == 0 {
                return Err(CatalogError::Invalid(format!(
                    "court '{}' has zero capacity",
                    court.id
                )));
            }
        }
        for (key, period) in &self.time_slots {
            for (i, slot) in period.slots.iter().enumerate() {
                if period.slots[..i].iter().any(|s| s == slot) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate slot '{}' in period '{}'",
                        slot, key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a court by id
    pub fn court(&self, court_id: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == court_id)
    }

    /// Capacity of a court, if the catalog knows it
    pub fn court_capacity(&self, court_id: &str) -> Option<u32> {
        self.court(court_id).map(|c| c.capacity)
    }

    /// Look up a time period by key (e.g. "noon")
    pub fn period(&self, key: &str) -> Option<&TimePeriod> {
        self.time_slots.get(key)
    }

    /// Slot labels for a period, in display order
    pub fn slots_for(&self, period_key: &str) -> &[String] {
        self.period(period_key).map(|p| p.slots.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let facility = Facility::load_bundled().unwrap();
        assert!(!facility.id.is_empty());
        assert_eq!(facility.price_per_hour, 1400.0);
        assert!(!facility.courts.is_empty());
        assert!(facility.time_slots.contains_key("noon"));
    }

    #[test]
    fn test_court_lookup() {
        let facility = Facility::load_bundled().unwrap();
        let court = facility.court("court-b").unwrap();
        assert_eq!(court.name, "Court B");
        assert!(court.capacity >= 1);
        assert!(facility.court("court-z").is_none());
        assert_eq!(facility.court_capacity("court-z"), None);
    }

    #[test]
    fn test_slots_for_period() {
        let facility = Facility::load_bundled().unwrap();
        let noon = facility.slots_for("noon");
        assert_eq!(noon.len(), 4);
        assert_eq!(noon[0], "12:00 PM");
        assert!(facility.slots_for("midnight").is_empty());
    }

    #[test]
    fn test_duplicate_court_id_rejected() {
        let json = r#"{
            "id": "t1", "name": "T", "pricePerHour": 100,
            "rating": 4.0, "reviewCount": 1, "address": "x", "about": "y",
            "timing": {"weekdays": "a", "weekends": "b"},
            "courts": [
                {"id": "court-a", "name": "A", "capacity": 10},
                {"id": "court-a", "name": "A2", "capacity": 8}
            ],
            "timeSlots": {},
            "policies": {"cancellation": "none"}
        }"#;
        let err = Facility::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let json = r#"{
            "id": "t1", "name": "T", "pricePerHour": 100,
            "rating": 4.0, "reviewCount": 1, "address": "x", "about": "y",
            "timing": {"weekdays": "a", "weekends": "b"},
            "courts": [{"id": "court-a", "name": "A", "capacity": 10}],
            "timeSlots": {
                "noon": {"label": "Noon", "slots": ["12:00 PM", "12:00 PM"], "timeRange": "12-4"}
            },
            "policies": {"cancellation": "none"}
        }"#;
        let err = Facility::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Facility::load_from_path(Path::new("/nonexistent/turf.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound(_)));
    }
}
