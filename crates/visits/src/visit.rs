use chrono::{DateTime, Utc};
use opsfabric_core::{ClientId, DomainError, DomainResult, Entity, SellerId, VisitId};
use serde::{Deserialize, Serialize};

/// "status transitions allowed only from SCHEDULED -> {COMPLETED,
/// CANCELLED}". Both terminal states are sinks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A scheduled sales visit, owned by the `seller` service. The client
/// snapshot fields are copied at creation time and never back-updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: VisitId,
    pub seller_id: SellerId,
    pub client_id: ClientId,
    pub fecha_visita: DateTime<Utc>,
    pub status: VisitStatus,
    pub notes: Option<String>,
    pub recommendations: Option<String>,
    pub evidence_url: Option<String>,
    pub client_name: String,
    pub client_address: String,
    pub client_city: String,
    pub client_country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Visit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seller_id: SellerId,
        client_id: ClientId,
        fecha_visita: DateTime<Utc>,
        notes: Option<String>,
        client_name: impl Into<String>,
        client_address: impl Into<String>,
        client_city: impl Into<String>,
        client_country: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: VisitId::new(),
            seller_id,
            client_id,
            fecha_visita,
            status: VisitStatus::Scheduled,
            notes,
            recommendations: None,
            evidence_url: None,
            client_name: client_name.into(),
            client_address: client_address.into(),
            client_city: client_city.into(),
            client_country: client_country.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Complete the visit, optionally recording recommendations. Does not
 /// alter the denormalized client snapshot.
    pub fn complete(&mut self, recommendations: Option<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(VisitStatus::Completed, now)?;
        self.recommendations = recommendations;
        Ok(())
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(VisitStatus::Cancelled, now)
    }

    /// Store the single evidence URL obtained after an out-of-band
 /// pre-signed upload ("single URL, not a list").
    pub fn set_evidence_url(&mut self, url: impl Into<String>, now: DateTime<Utc>) {
        self.evidence_url = Some(url.into());
        self.updated_at = now;
    }

    fn transition(&mut self, target: VisitStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != VisitStatus::Scheduled {
            return Err(DomainError::conflict(format!(
                "invalid status transition: {:?} -> {:?}",
                self.status, target
            )));
        }
        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Visit {
    type Id = VisitId;

    fn id(&self) -> VisitId {
        self.id
    }
}
