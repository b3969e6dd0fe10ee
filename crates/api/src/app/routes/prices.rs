use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    routing::post,
    Json, Router,
};

use crate::app::dto::{PriceRequest, PrioritizedPriceResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/prioritized", post(get_prioritized_price))
}

/// Price with the highest priority applicable to a product of a brand at the
/// given application date.
#[utoipa::path(
    post,
    path = "/prices/prioritized",
    tag = "prices",
    request_body = PriceRequest,
    responses(
        (status = 200, description = "Price applicable at the application date", body = PrioritizedPriceResponse),
        (status = 400, description = "Missing, non-positive or unreadable request fields"),
        (status = 404, description = "No price applies to the product and brand at that date"),
        (status = 500, description = "Price store failure")
    )
)]
pub async fn get_prioritized_price(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PrioritizedPriceResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let query = request.validate().map_err(ApiError::Validation)?;

    tracing::info!(
        product_id = %query.product_id,
        brand_id = %query.brand_id,
        application_date = %query.application_date,
        "prioritized price requested"
    );

    let price = services.prices.get_prioritized_price(query).await?;
    Ok(Json(price.into()))
}
