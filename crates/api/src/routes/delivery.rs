use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use opsfabric_core::VehicleId;
use opsfabric_delivery::{RouteOptimizationResult, Shipment};

use crate::errors::domain_error_to_response;
use crate::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/routes/optimize", post(optimize_routes))
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRoutesBody {
    pub shipments: Vec<Shipment>,
    pub vehicle_ids: Vec<VehicleId>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeRoutesResponse {
    pub routes: Vec<RouteOptimizationResult>,
}

async fn optimize_routes(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<OptimizeRoutesBody>,
) -> axum::response::Response {
    match services.route_optimizer.optimize(&body.shipments, &body.vehicle_ids) {
        Ok(routes) => (StatusCode::OK, Json(OptimizeRoutesResponse { routes })).into_response(),
        Err(error) => domain_error_to_response(error),
    }
}
