//! Typed replacement for "dynamic runtime attribute lookup": callers
//! never reach into a claims map for `sub`/`role`, they receive a
//! [`Principal`] with explicit fields.

use serde::{Deserialize, Serialize};

/// The subject claim from an already-validated external token. Opaque to
/// this core -- it is never parsed, only looked up via
/// [`crate::resolver::PrincipalResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalSubjectId(String);

impl ExternalSubjectId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The three BFF surfaces: the client-facing ordering app, the seller
/// mobile app, and the internal web console.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Seller,
    Web,
}

/// The authenticated caller, as handed to every controller. Absence of a
/// `Principal` at the edge is an explicit `Unauthorized`, never a silent
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: ExternalSubjectId,
    pub role: Role,
}

impl Principal {
    pub fn new(subject: ExternalSubjectId, role: Role) -> Self {
        Self { subject, role }
    }
}
