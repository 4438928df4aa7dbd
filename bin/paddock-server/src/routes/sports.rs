//! Sports service endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use paddock_store::EntityRepo;
use paddock_types::{
    Direction, Event, GetEventResponse, ListEventsRequest, ListEventsRequestFilter,
    ListEventsResponse, ListOrder, Status,
};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::state::SportsState;

#[derive(OpenApi)]
#[openapi(
    paths(list_events, get_event),
    components(schemas(
        Event,
        Status,
        Direction,
        ListOrder,
        ListEventsRequestFilter,
        ListEventsRequest,
        ListEventsResponse,
        GetEventResponse
    ))
)]
pub struct SportsApi;

pub fn router() -> Router<Arc<SportsState>> {
    Router::new()
        .route("/list-events", post(list_events))
        .route("/events/{id}", get(get_event))
}

/// List sporting events, optionally filtered by location and visibility.
#[utoipa::path(
    post,
    path = "/v1/list-events",
    tag = "sports",
    request_body = ListEventsRequest,
    responses(
        (status = 200, description = "Events listed", body = ListEventsResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store error"),
        (status = 503, description = "Store not initialised"),
    )
)]
pub async fn list_events(
    State(state): State<Arc<SportsState>>,
    Json(req): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, ServerError> {
    let events = state
        .repo
        .list(req.filter.as_ref(), req.order.as_ref())
        .await?;
    Ok(Json(ListEventsResponse { events }))
}

#[utoipa::path(
    get,
    path = "/v1/events/{id}",
    tag = "sports",
    params(
        ("id" = i64, Path, description = "ID of the event to retrieve")
    ),
    responses(
        (status = 200, description = "Event retrieved; `event` is null when absent", body = GetEventResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn get_event(
    State(state): State<Arc<SportsState>>,
    Path(id): Path<i64>,
) -> Result<Json<GetEventResponse>, ServerError> {
    let event = state.repo.get(id).await?;
    Ok(Json(GetEventResponse { event }))
}
