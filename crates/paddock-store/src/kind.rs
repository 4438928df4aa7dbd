//! Per-kind schema descriptors.
//!
//! Races and events share one query pipeline. Everything that differs
//! between them (table, columns, grouping column, row layout, seed data)
//! lives on an [`EntityKind`] implementation.

use std::future::Future;

use chrono::{DateTime, Utc};
use paddock_types::{Event, ListEventsRequestFilter, ListRacesRequestFilter, Race, Status};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use crate::error::StoreResult;
use crate::mapper::{column, start_time};
use crate::query::GroupFilter;
use crate::seed;

pub trait EntityKind: Send + Sync + 'static {
    /// Wire record materialised from one row.
    type Record: Send + 'static;
    /// Request filter accepted by `list`.
    type Filter: GroupFilter + Send + Sync;

    const TABLE: &'static str;
    /// Result columns in scan order. Doubles as the `ORDER BY` allow-list.
    const COLUMNS: &'static [&'static str];
    /// `SELECT <COLUMNS> FROM <TABLE>`, spelled out.
    const BASE_QUERY: &'static str;
    /// Column matched against [`GroupFilter::group_ids`].
    const GROUP_COLUMN: &'static str;
    const CREATE_TABLE: &'static str;

    /// Scan one row laid out as [`Self::COLUMNS`]. `now` decides the status.
    fn scan(row: &SqliteRow, now: DateTime<Utc>) -> StoreResult<Self::Record>;

    /// Insert `rows` synthetic records with ids `1..=rows`, skipping ids
    /// that already exist.
    fn seed(pool: &SqlitePool, rows: u32) -> impl Future<Output = StoreResult<()>> + Send;
}

// ── Races ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Races;

impl EntityKind for Races {
    type Record = Race;
    type Filter = ListRacesRequestFilter;

    const TABLE: &'static str = "races";
    const COLUMNS: &'static [&'static str] =
        &["id", "meeting_id", "name", "number", "visible", "advertised_start_time"];
    const BASE_QUERY: &'static str =
        "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";
    const GROUP_COLUMN: &'static str = "meeting_id";
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS races (\
         id INTEGER PRIMARY KEY, \
         meeting_id INTEGER, \
         name TEXT, \
         number INTEGER, \
         visible INTEGER, \
         advertised_start_time DATETIME)";

    fn scan(row: &SqliteRow, now: DateTime<Utc>) -> StoreResult<Race> {
        let (advertised_start_time, start) = start_time(row, 5)?;
        Ok(Race {
            id: column(row, 0, "id")?,
            meeting_id: column(row, 1, "meeting_id")?,
            name: column(row, 2, "name")?,
            number: column(row, 3, "number")?,
            visible: column(row, 4, "visible")?,
            advertised_start_time,
            status: Status::at(start, now),
        })
    }

    fn seed(pool: &SqlitePool, rows: u32) -> impl Future<Output = StoreResult<()>> + Send {
        seed::insert_races(pool, rows)
    }
}

impl GroupFilter for ListRacesRequestFilter {
    fn group_ids(&self) -> &[i64] {
        &self.meeting_ids
    }

    fn visible_only(&self) -> bool {
        self.visible_only
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Events;

impl EntityKind for Events {
    type Record = Event;
    type Filter = ListEventsRequestFilter;

    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sport_type",
        "league",
        "country",
        "location_id",
        "name",
        "round",
        "game",
        "visible",
        "advertised_start_time",
    ];
    const BASE_QUERY: &'static str = "SELECT id, sport_type, league, country, location_id, name, \
         round, game, visible, advertised_start_time FROM events";
    const GROUP_COLUMN: &'static str = "location_id";
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS events (\
         id INTEGER PRIMARY KEY, \
         sport_type TEXT, \
         league TEXT, \
         country TEXT, \
         location_id INTEGER, \
         name TEXT, \
         round INTEGER, \
         game INTEGER, \
         visible INTEGER, \
         advertised_start_time DATETIME)";

    fn scan(row: &SqliteRow, now: DateTime<Utc>) -> StoreResult<Event> {
        let (advertised_start_time, start) = start_time(row, 9)?;
        Ok(Event {
            id: column(row, 0, "id")?,
            sport_type: column(row, 1, "sport_type")?,
            league: column(row, 2, "league")?,
            country: column(row, 3, "country")?,
            location_id: column(row, 4, "location_id")?,
            name: column(row, 5, "name")?,
            round: column(row, 6, "round")?,
            game: column(row, 7, "game")?,
            visible: column(row, 8, "visible")?,
            advertised_start_time,
            status: Status::at(start, now),
        })
    }

    fn seed(pool: &SqlitePool, rows: u32) -> impl Future<Output = StoreResult<()>> + Send {
        seed::insert_events(pool, rows)
    }
}

impl GroupFilter for ListEventsRequestFilter {
    fn group_ids(&self) -> &[i64] {
        &self.location_ids
    }

    fn visible_only(&self) -> bool {
        self.visible_only
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_descriptor<K: EntityKind>() {
        assert_eq!(
            K::BASE_QUERY,
            format!("SELECT {} FROM {}", K::COLUMNS.join(", "), K::TABLE),
            "base query must select exactly the allow-listed columns in scan order"
        );
        assert!(K::COLUMNS.contains(&K::GROUP_COLUMN));
        assert!(K::COLUMNS.contains(&"visible"));
        assert!(K::CREATE_TABLE.contains(&format!("EXISTS {} (", K::TABLE)));
        for column in K::COLUMNS {
            assert!(K::CREATE_TABLE.contains(column), "{column} missing from DDL");
        }
    }

    #[test]
    fn race_descriptor_is_consistent() {
        assert_descriptor::<Races>();
    }

    #[test]
    fn event_descriptor_is_consistent() {
        assert_descriptor::<Events>();
    }

    #[test]
    fn filters_expose_their_grouping_ids() {
        let races = ListRacesRequestFilter { meeting_ids: vec![1, 2], visible_only: true };
        assert_eq!(races.group_ids(), &[1, 2]);
        assert!(GroupFilter::visible_only(&races));

        let events = ListEventsRequestFilter { location_ids: vec![3], visible_only: false };
        assert_eq!(events.group_ids(), &[3]);
        assert!(!GroupFilter::visible_only(&events));
    }
}
