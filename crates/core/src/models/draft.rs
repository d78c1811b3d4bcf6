//! Draft booking - the in-progress selection state
//!
//! A single draft lives inside the booking store for the duration of the
//! booking flow. Screens stage selections into it field by field; nothing is
//! validated at merge time. Completeness is only checked when the confirm
//! control asks for it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_COUNT: u32 = 5;
/// Court preselected when the booking screen opens
pub const DEFAULT_COURT_ID: &str = "court-b";
/// Period preselected when the booking screen opens
pub const DEFAULT_PERIOD: &str = "noon";

/// In-progress booking selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBooking {
    pub facility_id: Option<String>,
    pub facility_name: String,
    pub date: Option<String>,
    pub time_slot: Option<String>,
    /// Never required for completeness; the booking screen keeps a period
    /// selected at all times but only the slot matters.
    pub time_period: Option<String>,
    pub court_id: Option<String>,
    pub player_count: u32,
    pub price_per_hour: f64,
}

/// A partial set of draft fields, merged with [`DraftBooking::apply`].
/// `None` means "leave the field alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftUpdate {
    pub date: Option<String>,
    pub time_slot: Option<String>,
    pub time_period: Option<String>,
    pub court_id: Option<String>,
    pub player_count: Option<u32>,
}

impl Default for DraftBooking {
    fn default() -> Self {
        Self {
            facility_id: None,
            facility_name: String::new(),
            date: None,
            time_slot: None,
            time_period: Some(DEFAULT_PERIOD.to_string()),
            court_id: Some(DEFAULT_COURT_ID.to_string()),
            player_count: DEFAULT_PLAYER_COUNT,
            price_per_hour: 0.0,
        }
    }
}

impl DraftBooking {
    /// Stamp the facility identity and pricing into the draft. Other fields
    /// are left untouched.
    pub fn set_facility(&mut self, id: &str, name: &str, price_per_hour: f64) {
        self.facility_id = Some(id.to_string());
        self.facility_name = name.to_string();
        self.price_per_hour = price_per_hour;
    }

    /// Merge a partial update. Free-form staging, no validation.
    pub fn apply(&mut self, update: DraftUpdate) {
        if let Some(date) = update.date {
            self.date = Some(date);
        }
        if let Some(slot) = update.time_slot {
            self.time_slot = Some(slot);
        }
        if let Some(period) = update.time_period {
            self.time_period = Some(period);
        }
        if let Some(court) = update.court_id {
            self.court_id = Some(court);
        }
        if let Some(count) = update.player_count {
            self.player_count = count;
        }
    }

    /// True iff date, time slot and court are all picked. Period and player
    /// count are never required.
    pub fn is_complete(&self) -> bool {
        filled(&self.date) && filled(&self.time_slot) && filled(&self.court_id)
    }

    /// Back to an empty draft: players 5, default court and period, facility
    /// and price cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the player count, clamped to a floor of 1 and, when the catalog
    /// supplies one, a ceiling of the selected court's capacity. Out-of-range
    /// values clamp silently.
    pub fn set_player_count(&mut self, count: u32, capacity: Option<u32>) {
        let mut count = count.max(1);
        if let Some(cap) = capacity {
            count = count.min(cap);
        }
        self.player_count = count;
    }

    pub fn increment_players(&mut self, capacity: Option<u32>) {
        self.set_player_count(self.player_count.saturating_add(1), capacity);
    }

    pub fn decrement_players(&mut self) {
        self.set_player_count(self.player_count.saturating_sub(1), None);
    }

    /// Display value for the booking footer: hourly price split per player,
    /// rounded to the nearest whole amount.
    pub fn price_per_player(&self) -> u32 {
        let players = self.player_count.max(1) as f64;
        (self.price_per_hour / players).round() as u32
    }
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}
