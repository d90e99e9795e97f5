//! The single error taxonomy shared by every layer of the core.
//!
//! Every public operation in the domain and orchestration crates returns
//! `DomainResult<T>`. Translation to an HTTP envelope happens exactly once,
//! at the BFF edge (`opsfabric-api`).

use thiserror::Error;

/// Result type used across the domain and orchestration layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error kinds, translated once at the edge. Variants map 1:1 onto the
/// taxonomy: `ValidationRejected`, `Unauthorized`, `Forbidden`, `NotFound`,
/// `Conflict`, `UnprocessableBusiness`, `Unreachable`, `Timeout`,
/// `RemoteError`, `Internal`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Client input failed syntactic or semantic validation.
    #[error("validation rejected: {0}")]
    ValidationRejected(String),

    /// No principal, or principal could not be established.
    #[error("unauthorized")]
    Unauthorized,

    /// Principal is known but not allowed to perform this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflicting state prevents the operation (stale version, time
    /// conflict, already processed, invalid transition, insufficient stock).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The request is well-formed but violates a business rule.
    #[error("unprocessable business rule: {0}")]
    UnprocessableBusiness(String),

    /// A downstream collaborator could not be reached at all (DNS/TCP/connect).
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// A downstream collaborator did not answer within its configured timeout.
    #[error("timeout: {0}")]
    Timeout(String),

    /// A downstream collaborator answered with an error this layer does not
    /// interpret further.
    #[error("remote error: {0}")]
    RemoteError(String),

    /// Anything else: a defect, not a business outcome.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationRejected(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::UnprocessableBusiness(msg.into())
    }

    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code, used by the HTTP edge and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationRejected(_) => "validation_rejected",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::UnprocessableBusiness(_) => "unprocessable_business",
            Self::Unreachable(_) => "unreachable",
            Self::Timeout(_) => "timeout",
            Self::RemoteError(_) => "remote_error",
            Self::Internal(_) => "internal",
        }
    }
}
