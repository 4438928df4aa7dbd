//! Racing service types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::{ListOrder, Status};
use crate::timestamp::Timestamp;

/// A single race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Race {
    pub id: i64,
    /// The meeting this race belongs to.
    pub meeting_id: i64,
    pub name: String,
    /// Race number within the meeting.
    pub number: i64,
    pub visible: bool,
    #[schema(value_type = String, format = DateTime)]
    pub advertised_start_time: Timestamp,
    #[serde(default)]
    pub status: Status,
}

/// Restricts which races a list call returns. Empty / `false` fields do not
/// restrict anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRacesRequestFilter {
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    #[serde(default)]
    pub visible_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<ListRacesRequestFilter>,
    #[serde(default)]
    pub order: Option<ListOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// `race` is `null` when no race has the requested id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetRaceResponse {
    pub race: Option<Race>,
}
