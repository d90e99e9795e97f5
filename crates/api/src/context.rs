//! Principal extraction. JWT validation itself is an explicit out-of-scope
//! external collaborator; this gateway trusts a principal that was
//! already validated upstream and handed to it as two headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

use opsfabric_auth::{ExternalSubjectId, Principal, Role};

pub struct AuthenticatedPrincipal(pub Principal);

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedPrincipal {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = parts
            .headers
            .get("x-subject-id")
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .ok_or((StatusCode::UNAUTHORIZED, "missing x-subject-id header"))?;

        let role = parts
            .headers
            .get("x-principal-role")
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "missing x-principal-role header"))?;

        let role = match role {
            "client" => Role::Client,
            "seller" => Role::Seller,
            "web" => Role::Web,
            _ => return Err((StatusCode::UNAUTHORIZED, "unrecognized principal role")),
        };

        Ok(AuthenticatedPrincipal(Principal {
            subject: ExternalSubjectId::new(subject.to_string()),
            role,
        }))
    }
}
