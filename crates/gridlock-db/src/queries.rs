//! Common query patterns over the store's collections.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use gridlock_core::{
    Entry, Event, EventId, EventScore, PlayerProfile, PlayerStanding, SeasonId, TeamStanding,
};

impl Store {
    /// A season's events with sequence number at or below the threshold,
    /// ordered by sequence number.
    pub fn events_through(
        &self,
        season_id: &SeasonId,
        through_event_no: u32,
    ) -> Result<Vec<Event>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<StoredEvent>(StoredEventKey::event_no)?;
        let iter = scan.range(0u32..=through_event_no)?;
        let rows: std::result::Result<Vec<StoredEvent>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        let mut events: Vec<Event> = rows
            .into_iter()
            .filter(|e| e.season_id == season_id.as_str())
            .map(|e| e.to_event())
            .collect();
        events.sort_by_key(|e| e.event_no);
        Ok(events)
    }

    /// All entries submitted for an event.
    pub fn entries_for_event(&self, event_id: &EventId) -> Result<Vec<Entry>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<StoredEntry>(StoredEntryKey::event_id)?;
        let iter = scan.start_with(event_id.as_str())?;
        let rows: std::result::Result<Vec<StoredEntry>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .into_iter()
            .filter(|e| e.event_id == event_id.as_str())
            .map(|e| e.to_entry())
            .collect())
    }

    /// All engine-produced scores for an event.
    pub fn scores_for_event(&self, event_id: &EventId) -> Result<Vec<EventScore>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredEventScore>(StoredEventScoreKey::event_id)?;
        let iter = scan.start_with(event_id.as_str())?;
        let rows: std::result::Result<Vec<StoredEventScore>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .into_iter()
            .filter(|s| s.event_id == event_id.as_str())
            .map(|s| s.to_score())
            .collect())
    }

    /// All player standings for a season.
    pub fn player_standings(&self, season_id: &SeasonId) -> Result<Vec<PlayerStanding>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredPlayerStanding>(StoredPlayerStandingKey::season_id)?;
        let iter = scan.start_with(season_id.as_str())?;
        let rows: std::result::Result<Vec<StoredPlayerStanding>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .into_iter()
            .filter(|s| s.season_id == season_id.as_str())
            .map(|s| s.to_standing())
            .collect())
    }

    /// All team standings for a season.
    pub fn team_standings(&self, season_id: &SeasonId) -> Result<Vec<TeamStanding>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredTeamStanding>(StoredTeamStandingKey::season_id)?;
        let iter = scan.start_with(season_id.as_str())?;
        let rows: std::result::Result<Vec<StoredTeamStanding>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .into_iter()
            .filter(|s| s.season_id == season_id.as_str())
            .map(|s| s.to_standing())
            .collect())
    }

    /// All player profiles.
    pub fn profiles(&self) -> Result<Vec<PlayerProfile>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayerProfile>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredPlayerProfile>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.into_iter().map(|p| p.to_profile()).collect())
    }
}
