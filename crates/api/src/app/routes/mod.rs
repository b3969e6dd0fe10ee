use axum::Router;

pub mod prices;
pub mod system;

/// Router for all price endpoints.
pub fn router() -> Router {
    Router::new().nest("/prices", prices::router())
}
