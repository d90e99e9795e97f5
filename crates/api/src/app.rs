use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use opsfabric_infra::AppConfig;

use crate::routes;
use crate::services::AppServices;

/// Build the full HTTP router (entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> Router {
    let services = Arc::new(AppServices::build(config));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
