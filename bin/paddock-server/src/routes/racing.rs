//! Racing service endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use paddock_store::EntityRepo;
use paddock_types::{
    Direction, GetRaceResponse, ListOrder, ListRacesRequest, ListRacesRequestFilter,
    ListRacesResponse, Race, Status,
};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::state::RacingState;

#[derive(OpenApi)]
#[openapi(
    paths(list_races, get_race),
    components(schemas(
        Race,
        Status,
        Direction,
        ListOrder,
        ListRacesRequestFilter,
        ListRacesRequest,
        ListRacesResponse,
        GetRaceResponse
    ))
)]
pub struct RacingApi;

pub fn router() -> Router<Arc<RacingState>> {
    Router::new()
        .route("/list-races", post(list_races))
        .route("/races/{id}", get(get_race))
}

/// List races, optionally filtered by meeting and visibility and ordered by
/// any race column. Unknown order fields are ignored.
#[utoipa::path(
    post,
    path = "/v1/list-races",
    tag = "racing",
    request_body = ListRacesRequest,
    responses(
        (status = 200, description = "Races listed", body = ListRacesResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store error"),
        (status = 503, description = "Store not initialised"),
    )
)]
pub async fn list_races(
    State(state): State<Arc<RacingState>>,
    Json(req): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, ServerError> {
    let races = state
        .repo
        .list(req.filter.as_ref(), req.order.as_ref())
        .await?;
    Ok(Json(ListRacesResponse { races }))
}

#[utoipa::path(
    get,
    path = "/v1/races/{id}",
    tag = "racing",
    params(
        ("id" = i64, Path, description = "ID of the race to retrieve")
    ),
    responses(
        (status = 200, description = "Race retrieved; `race` is null when absent", body = GetRaceResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn get_race(
    State(state): State<Arc<RacingState>>,
    Path(id): Path<i64>,
) -> Result<Json<GetRaceResponse>, ServerError> {
    let race = state.repo.get(id).await?;
    Ok(Json(GetRaceResponse { race }))
}
