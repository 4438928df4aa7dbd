//! Axum router construction.
//!
//! [`racing`] and [`sports`] each assemble one service's router:
//! - health route
//! - the service's `/v1` listing routes
//! - the OpenAPI document at `/api-docs/openapi.json`
//! - per-request timeout and trace-id middleware

pub mod doc;
mod health;
mod racing;
mod sports;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;

use crate::config::Config;
use crate::middleware::trace_middleware;
use crate::state::{RacingState, SportsState};

pub use racing::RacingApi;
pub use sports::SportsApi;

/// Build the racing service router.
pub fn racing(state: Arc<RacingState>) -> Router {
    let api_doc = doc::get_docs(RacingApi::openapi());
    let app = health::router().nest("/v1", racing::router());
    finish(app, api_doc, &state.config).with_state(state)
}

/// Build the sports service router.
pub fn sports(state: Arc<SportsState>) -> Router {
    let api_doc = doc::get_docs(SportsApi::openapi());
    let app = health::router().nest("/v1", sports::router());
    finish(app, api_doc, &state.config).with_state(state)
}

fn finish<S>(app: Router<S>, api_doc: utoipa::openapi::OpenApi, cfg: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let api_doc = Arc::new(api_doc);
    app.route(
        "/api-docs/openapi.json",
        get(move || {
            let doc = Arc::clone(&api_doc);
            async move { Json(doc.as_ref().clone()) }
        }),
    )
    .layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        cfg.request_timeout,
    ))
    // Added last, so it sees the request first and times the whole call.
    .layer(middleware::from_fn(trace_middleware))
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::Body;
    use axum::http::{Request, Response};
    use http_body_util::BodyExt;
    use serde_json::Value;

    pub async fn json_body(response: Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }
}
