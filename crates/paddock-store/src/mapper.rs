//! Row scanning and status derivation.
//!
//! Status is computed against a fresh `Utc::now()` for each row rather than
//! one snapshot per batch, so a long scan that straddles a start time can
//! report rows on either side of it.

use chrono::{DateTime, Utc};
use futures::{Stream, TryStreamExt};
use paddock_types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};

use crate::error::{StoreError, StoreResult};
use crate::kind::EntityKind;

/// Decode the value at `index`, tagging failures with the column name.
pub fn column<'r, T>(row: &'r SqliteRow, index: usize, column: &'static str) -> StoreResult<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(index).map_err(|source| StoreError::Scan { column, source })
}

/// Decode `advertised_start_time` and convert it to the wire timestamp.
///
/// Returns the native time as well, for status derivation.
pub fn start_time(row: &SqliteRow, index: usize) -> StoreResult<(Timestamp, DateTime<Utc>)> {
    let native: DateTime<Utc> = column(row, index, "advertised_start_time")?;
    Ok((Timestamp::try_from(native)?, native))
}

/// Drain a row cursor into records.
///
/// The first failing row aborts the batch; nothing scanned before it is
/// returned. An empty cursor yields an empty `Vec`.
pub async fn map_rows<K, S>(mut rows: S) -> StoreResult<Vec<K::Record>>
where
    K: EntityKind,
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
{
    let mut records = Vec::new();
    while let Some(row) = rows.try_next().await? {
        records.push(K::scan(&row, Utc::now())?);
    }
    Ok(records)
}

/// Map the result of a single-row lookup. No row is `Ok(None)`.
pub fn map_optional<K: EntityKind>(row: Option<SqliteRow>) -> StoreResult<Option<K::Record>> {
    row.map(|row| K::scan(&row, Utc::now())).transpose()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::kind::{Events, Races};
    use crate::repo::connect_memory;
    use chrono::Duration;
    use futures::stream;
    use paddock_types::{Event, Race, Status};

    const RACE_ROW: &str = "SELECT 3, 7, 'North Coast Cup', 5, 1, ?";

    async fn race_row(start: &str) -> SqliteRow {
        let pool = connect_memory().await.unwrap();
        sqlx::query(RACE_ROW).bind(start.to_owned()).fetch_one(&pool).await.unwrap()
    }

    fn race(start: DateTime<Utc>, status: Status) -> Race {
        Race {
            id: 3,
            meeting_id: 7,
            name: "North Coast Cup".into(),
            number: 5,
            visible: true,
            advertised_start_time: Timestamp::try_from(start).unwrap(),
            status,
        }
    }

    #[tokio::test]
    async fn past_start_scans_as_closed() {
        let start = Utc::now() - Duration::hours(24);
        let row = race_row(&start.to_rfc3339()).await;
        let scanned = Races::scan(&row, Utc::now()).unwrap();
        assert_eq!(scanned, race(start, Status::Closed));
    }

    #[tokio::test]
    async fn future_start_scans_as_open() {
        let start = Utc::now() + Duration::hours(24);
        let row = race_row(&start.to_rfc3339()).await;
        let scanned = Races::scan(&row, Utc::now()).unwrap();
        assert_eq!(scanned, race(start, Status::Open));
    }

    #[tokio::test]
    async fn start_equal_to_now_is_closed() {
        let start = Utc::now();
        let row = race_row(&start.to_rfc3339()).await;
        assert_eq!(Races::scan(&row, start).unwrap().status, Status::Closed);
    }

    #[tokio::test]
    async fn unparseable_start_time_is_a_scan_error() {
        let row = race_row("next tuesday").await;
        let err = Races::scan(&row, Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::Scan { column: "advertised_start_time", .. }));
    }

    #[tokio::test]
    async fn wrong_column_type_names_the_column() {
        let pool = connect_memory().await.unwrap();
        let row = sqlx::query("SELECT 'not-a-number', 7, 'x', 5, 1, '2026-10-16T09:30:00Z'")
            .fetch_one(&pool)
            .await
            .unwrap();
        let err = Races::scan(&row, Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::Scan { column: "id", .. }));
    }

    #[tokio::test]
    async fn scans_events_in_column_order() {
        let pool = connect_memory().await.unwrap();
        let start = Utc::now() + Duration::hours(2);
        let row = sqlx::query("SELECT 11, 'Rugby', 'Premier', 'Fiji', 4, 'Hawks vs Owls', 3, 2, 0, ?")
            .bind(start.to_rfc3339())
            .fetch_one(&pool)
            .await
            .unwrap();
        let scanned = Events::scan(&row, Utc::now()).unwrap();
        assert_eq!(
            scanned,
            Event {
                id: 11,
                sport_type: "Rugby".into(),
                league: "Premier".into(),
                country: "Fiji".into(),
                location_id: 4,
                name: "Hawks vs Owls".into(),
                round: 3,
                game: 2,
                visible: false,
                advertised_start_time: Timestamp::try_from(start).unwrap(),
                status: Status::Open,
            }
        );
    }

    #[tokio::test]
    async fn empty_cursor_is_an_empty_batch() {
        let rows = stream::iter(Vec::<Result<SqliteRow, sqlx::Error>>::new());
        let records = map_rows::<Races, _>(rows).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn cursor_error_aborts_the_batch() {
        let rows = stream::iter(vec![Err(sqlx::Error::PoolTimedOut)]);
        let err = map_rows::<Races, _>(rows).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn bad_row_discards_earlier_rows() {
        let good = race_row(&Utc::now().to_rfc3339()).await;
        let bad = race_row("garbage").await;
        let rows = stream::iter(vec![Ok(good), Ok(bad)]);
        assert!(map_rows::<Races, _>(rows).await.is_err());
    }

    #[tokio::test]
    async fn missing_single_row_is_none() {
        assert!(map_optional::<Events>(None).unwrap().is_none());
    }
}
