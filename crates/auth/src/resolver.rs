//! "Each controller maps [the subject] to the local domain id via a
//! dedicated lookup call before proceeding".

use async_trait::async_trait;
use opsfabric_core::DomainError;

use crate::principal::ExternalSubjectId;

/// Maps an external subject id to a local domain id of type `T` (e.g.
/// `SellerId`, `ClientId`). Implementations call out to whatever owns that
/// mapping; there is no caching or global singleton here.
#[async_trait]
pub trait PrincipalResolver<T>: Send + Sync {
    async fn resolve(&self, subject: &ExternalSubjectId) -> Result<T, DomainError>;
}
