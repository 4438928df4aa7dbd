//! Sports service types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::{ListOrder, Status};
use crate::timestamp::Timestamp;

/// A single sporting event, e.g. one fixture of a league round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: i64,
    pub sport_type: String,
    pub league: String,
    pub country: String,
    /// Venue the event is played at.
    pub location_id: i64,
    pub name: String,
    pub round: i64,
    pub game: i64,
    pub visible: bool,
    #[schema(value_type = String, format = DateTime)]
    pub advertised_start_time: Timestamp,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListEventsRequestFilter {
    #[serde(default)]
    pub location_ids: Vec<i64>,
    #[serde(default)]
    pub visible_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListEventsRequest {
    #[serde(default)]
    pub filter: Option<ListEventsRequestFilter>,
    #[serde(default)]
    pub order: Option<ListOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetEventResponse {
    pub event: Option<Event>,
}

// ── Tests ──────────────────────────────────────────────────────────────────────
