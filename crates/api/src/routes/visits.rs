use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use opsfabric_auth::Role;
use opsfabric_core::{ClientId, DomainError, SellerId};
use opsfabric_visits::saga::CreateVisitRequest;

use crate::context::AuthenticatedPrincipal;
use crate::errors::domain_error_to_response;
use crate::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_visit))
}

#[derive(Debug, Deserialize)]
pub struct CreateVisitBody {
    pub seller_id: SellerId,
    pub client_id: ClientId,
    pub fecha_visita: DateTime<Utc>,
    pub notes: Option<String>,
}

async fn create_visit(
    Extension(services): Extension<Arc<AppServices>>,
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    Json(body): Json<CreateVisitBody>,
) -> axum::response::Response {
 // Only the sellers surface creates visits (per-role surfaces).
    if principal.role != Role::Seller {
        return domain_error_to_response(DomainError::forbidden(
            "only the seller surface may create visits",
        ));
    }

    let request = CreateVisitRequest {
        seller_id: body.seller_id,
        client_id: body.client_id,
        fecha_visita: body.fecha_visita,
        notes: body.notes,
    };

    match services.visit_saga.create_visit(request, Utc::now()).await {
        Ok(visit) => (StatusCode::CREATED, Json(visit)).into_response(),
        Err(error) => domain_error_to_response(error),
    }
}
