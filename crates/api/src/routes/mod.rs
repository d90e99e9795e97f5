use axum::{routing::get, Router};

pub mod delivery;
pub mod orders;
pub mod sellers;
pub mod system;
pub mod visits;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/visits", visits::router())
        .nest("/orders", orders::router())
        .nest("/sellers", sellers::router())
        .nest("/delivery", delivery::router())
}
