use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use opsfabric_core::{DomainError, SellerId};

use crate::errors::domain_error_to_response;
use crate::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:seller_id/sales-plan", get(get_sales_plan))
}

#[derive(Debug, Deserialize)]
pub struct SalesPlanQuery {
    pub period: String,
}

async fn get_sales_plan(
    Extension(services): Extension<Arc<AppServices>>,
    Path(seller_id): Path<SellerId>,
    Query(query): Query<SalesPlanQuery>,
) -> axum::response::Response {
    match services
        .sales_plan_repository
        .find_by_seller_and_period(seller_id, &query.period)
        .await
    {
        Ok(Some(plan)) => (StatusCode::OK, Json(plan)).into_response(),
        Ok(None) => domain_error_to_response(DomainError::not_found(format!(
            "no sales plan for seller {seller_id} in period {}",
            query.period
        ))),
        Err(error) => domain_error_to_response(error),
    }
}
