//! OpenAPI document for the HTTP surface.

use axum::Json;
use utoipa::OpenApi;

use crate::app::dto::{PriceRequest, PrioritizedPriceResponse};
use crate::app::routes;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "pricechecker", description = "Prioritized price lookup by product, brand and date"),
    paths(routes::prices::get_prioritized_price, routes::system::health),
    components(schemas(PriceRequest, PrioritizedPriceResponse)),
    tags(
        (name = "prices", description = "Price resolution"),
        (name = "system", description = "Liveness check")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
