use utoipa::OpenApi;

use crate::routes::health::HealthApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "paddock",
    description = "Read-only racing and sports listing API",
    version = "0.1.0"
))]
pub struct ApiDoc;

/// Root document merged with the health paths and one service's paths.
pub fn get_docs(service: utoipa::openapi::OpenApi) -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(HealthApi::openapi());
    root.merge(service);
    root
}
