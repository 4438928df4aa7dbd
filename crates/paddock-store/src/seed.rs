//! One-time table creation and synthetic seed data.
//!
//! Start times are spread uniformly from one day in the past to two days in
//! the future so a fresh database always holds both open and closed rows.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;
use crate::kind::EntityKind;

const TEAMS: &[&str] = &[
    "Hawks", "Owls", "Sharks", "Tigers", "Comets", "Rangers", "Falcons", "Wolves", "Giants",
    "Storm", "Raiders", "Dragons", "Bulldogs", "Eagles", "Panthers", "Titans",
];
const PLACES: &[&str] = &[
    "North Coast", "Riverside", "Highland", "Bayview", "Sandown", "Eastgate", "Kingston",
    "Westmere", "Ashford", "Belmont",
];
const SPORTS: &[&str] = &["Rugby", "Soccer", "Cricket", "Basketball", "Tennis", "Hockey"];
const LEAGUES: &[&str] = &[
    "Premier League", "Super League", "National Cup", "Champions Series", "Shield",
];
const COUNTRIES: &[&str] = &[
    "Australia", "New Zealand", "England", "Ireland", "South Africa", "Fiji", "Japan",
];

/// Create `K`'s table and seed it with `rows` records.
pub(crate) async fn prepare<K: EntityKind>(pool: &SqlitePool, rows: u32) -> StoreResult<()> {
    sqlx::query(K::CREATE_TABLE).execute(pool).await?;
    if rows > 0 {
        K::seed(pool, rows).await?;
    }
    info!(table = K::TABLE, rows, "table ready");
    Ok(())
}

struct RaceSeed {
    meeting_id: i64,
    name: String,
    number: i64,
    visible: bool,
    start: String,
}

struct EventSeed {
    sport_type: &'static str,
    league: &'static str,
    country: &'static str,
    location_id: i64,
    name: String,
    round: i64,
    game: i64,
    visible: bool,
    start: String,
}

fn pick<R: Rng>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

fn random_start<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let day = Duration::days(1).num_seconds();
    let offset = rng.random_range(-day..2 * day);
    (now + Duration::seconds(offset)).to_rfc3339()
}

// The thread-local rng is not `Send`, so rows are generated up front and the
// rng is dropped before any insert is awaited.
fn race_seeds(count: u32, now: DateTime<Utc>) -> Vec<RaceSeed> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| RaceSeed {
            meeting_id: rng.random_range(1..=10),
            name: format!("{} {}", pick(&mut rng, PLACES), pick(&mut rng, TEAMS)),
            number: rng.random_range(1..=12),
            visible: rng.random_bool(0.5),
            start: random_start(&mut rng, now),
        })
        .collect()
}

fn event_seeds(count: u32, now: DateTime<Utc>) -> Vec<EventSeed> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| EventSeed {
            sport_type: pick(&mut rng, SPORTS),
            league: pick(&mut rng, LEAGUES),
            country: pick(&mut rng, COUNTRIES),
            location_id: rng.random_range(1..=20),
            name: format!("{} vs {}", pick(&mut rng, TEAMS), pick(&mut rng, TEAMS)),
            round: rng.random_range(1..=24),
            game: rng.random_range(1..=8),
            visible: rng.random_bool(0.5),
            start: random_start(&mut rng, now),
        })
        .collect()
}

pub(crate) async fn insert_races(pool: &SqlitePool, count: u32) -> StoreResult<()> {
    for (id, seed) in (1_i64..).zip(race_seeds(count, Utc::now())) {
        sqlx::query(
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id)
        .bind(seed.meeting_id)
        .bind(&seed.name)
        .bind(seed.number)
        .bind(seed.visible)
        .bind(&seed.start)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub(crate) async fn insert_events(pool: &SqlitePool, count: u32) -> StoreResult<()> {
    for (id, seed) in (1_i64..).zip(event_seeds(count, Utc::now())) {
        sqlx::query(
            "INSERT OR IGNORE INTO events (id, sport_type, league, country, location_id, name, round, game, visible, advertised_start_time) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(id)
        .bind(seed.sport_type)
        .bind(seed.league)
        .bind(seed.country)
        .bind(seed.location_id)
        .bind(&seed.name)
        .bind(seed.round)
        .bind(seed.game)
        .bind(seed.visible)
        .bind(&seed.start)
        .execute(pool)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seed_start_times_stay_in_window() {
        let now = Utc::now();
        for seed in race_seeds(200, now) {
            let start = DateTime::parse_from_rfc3339(&seed.start).unwrap().with_timezone(&Utc);
            assert!(start >= now - Duration::days(1));
            assert!(start < now + Duration::days(2));
        }
    }

    #[test]
    fn event_seeds_use_declared_ranges() {
        for seed in event_seeds(200, Utc::now()) {
            assert!((1..=20).contains(&seed.location_id));
            assert!((1..=24).contains(&seed.round));
            assert!((1..=8).contains(&seed.game));
            assert!(seed.name.contains(" vs "));
        }
    }

    #[test]
    fn race_seed_count_matches_request() {
        assert_eq!(race_seeds(0, Utc::now()).len(), 0);
        assert_eq!(race_seeds(17, Utc::now()).len(), 17);
    }
}
