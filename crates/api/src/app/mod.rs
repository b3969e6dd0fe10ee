//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and use-case wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs, validation and JSON mapping
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: OpenAPI document served at `/api-docs/openapi.json`

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(Arc::new(services))),
        )
}
