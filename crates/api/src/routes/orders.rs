use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use opsfabric_core::{CustomerId, InventoryId, SellerId, VisitId};
use opsfabric_orders::order::{CreationMethod, SellerSnapshot};
use opsfabric_orders::pipeline::{NewOrderItem, NewOrderRequest};

use crate::errors::domain_error_to_response;
use crate::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_order))
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderItemBody {
    pub inventory_id: InventoryId,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    pub customer_id: CustomerId,
    pub creation_method: CreationMethod,
    pub seller_id: Option<SellerId>,
    pub visit_id: Option<VisitId>,
    pub seller: Option<SellerSnapshot>,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_country: String,
    pub items: Vec<CreateOrderItemBody>,
}

async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateOrderBody>,
) -> axum::response::Response {
    let request = NewOrderRequest {
        customer_id: body.customer_id,
        creation_method: body.creation_method,
        seller_id: body.seller_id,
        visit_id: body.visit_id,
        seller: body.seller,
        delivery_address: body.delivery_address,
        delivery_city: body.delivery_city,
        delivery_country: body.delivery_country,
        items: body
            .items
            .into_iter()
            .map(|item| NewOrderItem {
                inventory_id: item.inventory_id,
                quantity: item.quantity,
            })
            .collect(),
    };

    match services.order_pipeline.create_order(request, Utc::now()).await {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(error) => domain_error_to_response(error),
    }
}
