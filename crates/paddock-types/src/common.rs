//! Types shared by both services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether an entity is still open for betting.
///
/// Never stored: derived from the advertised start time every time a row is
/// read.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Closed,
    Open,
}

impl Status {
    /// `Open` iff `now` is strictly before `start`.
    pub fn at(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start { Status::Open } else { Status::Closed }
    }
}

/// Sort direction, rendered verbatim into `ORDER BY` clauses.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Requested sort order for a list call.
///
/// `field` is caller-supplied text. It only reaches SQL after it has been
/// matched against the entity's column allow-list; anything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListOrder {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

impl ListOrder {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self { field: field.into(), direction }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;

    #[test]
    fn status_is_open_only_for_future_starts() {
        let now = Utc::now();
        assert_eq!(Status::at(now + Duration::hours(24), now), Status::Open);
        assert_eq!(Status::at(now - Duration::hours(24), now), Status::Closed);
        assert_eq!(Status::at(now, now), Status::Closed);
    }

    #[test]
    fn direction_renders_sql_tokens() {
        assert_eq!(Direction::Asc.to_string(), "ASC");
        assert_eq!(Direction::Desc.as_ref(), "DESC");
    }

    #[test]
    fn order_fields_default_when_missing() {
        let order: ListOrder = serde_json::from_str("{}").unwrap();
        assert_eq!(order, ListOrder::new("", Direction::Asc));

        let order: ListOrder =
            serde_json::from_str(r#"{"field":"name","direction":"DESC"}"#).unwrap();
        assert_eq!(order, ListOrder::new("name", Direction::Desc));
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Open).unwrap(), "\"OPEN\"");
        assert_eq!(Status::default(), Status::Closed);
    }
}
