//! Confirmed booking record

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{DraftBooking, DEFAULT_PLAYER_COUNT};

/// A finalized reservation. Immutable once created; only ever removed.
///
/// Serialized field names match the on-disk snapshot format. Every field is
/// defaulted on read so a record written by another schema version degrades
/// on its own instead of dropping the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub facility_id: String,
    #[serde(default)]
    pub facility_name: String,
    /// ISO-8601 date string (e.g. "2025-11-26")
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub time_period: String,
    #[serde(default)]
    pub court_id: String,
    #[serde(default = "default_player_count")]
    pub player_count: u32,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_player_count() -> u32 {
    DEFAULT_PLAYER_COUNT
}

impl Booking {
    /// Promote a draft into a confirmed booking, stamping id and timestamp.
    /// Unset draft fields come through as empty strings in the snapshot.
    pub fn from_draft(draft: DraftBooking) -> Self {
        Self {
            id: next_id(),
            facility_id: draft.facility_id.unwrap_or_default(),
            facility_name: draft.facility_name,
            date: draft.date.unwrap_or_default(),
            time_slot: draft.time_slot.unwrap_or_default(),
            time_period: draft.time_period.unwrap_or_default(),
            court_id: draft.court_id.unwrap_or_default(),
            player_count: draft.player_count,
            price_per_hour: draft.price_per_hour,
            created_at: Utc::now(),
        }
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Wall-clock-millisecond booking id, good enough for UI keys on a single
/// device. Bumped past the previous id when two bookings land in the same
/// millisecond, so ids stay distinct and increasing within a process.
fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or(now);
    let id = if now > prev { now } else { prev + 1 };
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> DraftBooking {
        let mut draft = DraftBooking::default();
        draft.set_facility("turf-greenkick-01", "GreenKick Turf Arena", 1400.0);
        draft.date = Some("2025-11-26".to_string());
        draft.time_slot = Some("01:00 PM".to_string());
        draft
    }

    #[test]
    fn test_from_draft_stamps_id_and_timestamp() {
        let booking = Booking::from_draft(complete_draft());
        assert!(!booking.id.is_empty());
        assert!(booking.id.parse::<i64>().is_ok());
        assert_eq!(booking.facility_id, "turf-greenkick-01");
        assert_eq!(booking.date, "2025-11-26");
        assert_eq!(booking.time_slot, "01:00 PM");
        assert_eq!(booking.court_id, "court-b");
        assert_eq!(booking.player_count, 5);
        assert_eq!(booking.price_per_hour, 1400.0);
    }

    #[test]
    fn test_ids_are_distinct_back_to_back() {
        let ids: Vec<String> = (0..50)
            .map(|_| Booking::from_draft(complete_draft()).id)
            .collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[..i].contains(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn test_snapshot_record_round_trip() {
        let booking = Booking::from_draft(complete_draft());
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_tolerates_missing_and_unknown_fields() {
        // A record written by an older (or newer) schema version
        let json = r#"{
            "id": "1764150000000",
            "facilityId": "turf-greenkick-01",
            "facilityName": "GreenKick Turf Arena",
            "date": "2025-11-26",
            "timeSlot": "01:00 PM",
            "courtId": "court-a",
            "somethingNew": true
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.time_period, "");
        assert_eq!(booking.player_count, 5);
        assert_eq!(booking.price_per_hour, 0.0);
    }
}
