//! Stored event and race result documents.

use super::{from_millis, to_millis};
use chrono::NaiveDate;
use gridlock_core::{DriverId, Event, EventStatus, RaceResult};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored race weekend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredEvent {
    /// Primary key - event document id.
    #[primary_key]
    pub id: String,
    /// Monotonic ordering key for threshold scans.
    #[secondary_key]
    pub event_no: u32,
    pub season_id: String,
    pub venue: String,
    pub round_from: u32,
    pub round_to: u32,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: String,
    pub results_locked: bool,
    pub locked_by: Option<String>,
    pub locked_at_ms: Option<i64>,
    pub unlocked_by: Option<String>,
    pub unlocked_at_ms: Option<i64>,
    pub unlock_reason: Option<String>,
}

impl StoredEvent {
    /// Create from a core Event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.as_str().to_string(),
            event_no: event.event_no,
            season_id: event.season_id.as_str().to_string(),
            venue: event.venue.clone(),
            round_from: event.round_from,
            round_to: event.round_to,
            date_from: event.date_from.map(|d| d.format(DATE_FORMAT).to_string()),
            date_to: event.date_to.map(|d| d.format(DATE_FORMAT).to_string()),
            status: match event.status {
                EventStatus::Upcoming => "upcoming".to_string(),
                EventStatus::Complete => "complete".to_string(),
            },
            results_locked: event.results_locked,
            locked_by: event.locked_by.clone(),
            locked_at_ms: event.locked_at.map(to_millis),
            unlocked_by: event.unlocked_by.clone(),
            unlocked_at_ms: event.unlocked_at.map(to_millis),
            unlock_reason: event.unlock_reason.clone(),
        }
    }

    /// Convert to a core Event.
    pub fn to_event(&self) -> Event {
        let mut event = Event::new(
            self.id.clone(),
            self.season_id.clone(),
            self.event_no,
            self.venue.clone(),
        );
        event.round_from = self.round_from;
        event.round_to = self.round_to;
        event.date_from = self.date_from.as_deref().and_then(parse_date);
        event.date_to = self.date_to.as_deref().and_then(parse_date);
        event.status = match self.status.as_str() {
            "complete" => EventStatus::Complete,
            _ => EventStatus::Upcoming,
        };
        event.results_locked = self.results_locked;
        event.locked_by = self.locked_by.clone();
        event.locked_at = self.locked_at_ms.map(from_millis);
        event.unlocked_by = self.unlocked_by.clone();
        event.unlocked_at = self.unlocked_at_ms.map(from_millis);
        event.unlock_reason = self.unlock_reason.clone();
        event
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Stored finishing orders for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredRaceResult {
    /// Primary key - owning event id.
    #[primary_key]
    pub event_id: String,
    pub qualifying: Vec<String>,
    pub race1: Vec<String>,
    pub race2: Vec<String>,
    pub race3: Vec<String>,
    pub updated_at_ms: i64,
}

impl StoredRaceResult {
    /// Create from a core RaceResult.
    pub fn from_result(result: &RaceResult) -> Self {
        let order = |drivers: &[DriverId]| drivers.iter().map(|d| d.as_str().to_string()).collect();
        Self {
            event_id: result.event_id.as_str().to_string(),
            qualifying: order(&result.qualifying),
            race1: order(&result.race1),
            race2: order(&result.race2),
            race3: order(&result.race3),
            updated_at_ms: to_millis(result.updated_at),
        }
    }

    /// Convert to a core RaceResult.
    pub fn to_result(&self) -> RaceResult {
        let order = |raw: &[String]| raw.iter().map(DriverId::new).collect();
        let mut result = RaceResult::new(self.event_id.clone(), from_millis(self.updated_at_ms));
        result.qualifying = order(&self.qualifying);
        result.race1 = order(&self.race1);
        result.race2 = order(&self.race2);
        result.race3 = order(&self.race3);
        result
    }
}
