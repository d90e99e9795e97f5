use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use opsfabric_core::{DomainError, DomainResult, SellerId, VisitId};

use crate::visit::{Visit, VisitStatus};

/// Conflict window from "no two non-cancelled visits of the same
/// seller may be within a 180-minute window of each other".
pub const CONFLICT_WINDOW_MINUTES: i64 = 180;

#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn find(&self, id: VisitId) -> DomainResult<Option<Visit>>;

    /// Check the conflict window for `visit.seller_id` and insert `visit`
    /// under a single lock, so no other call can observe the window as
    /// clear and insert its own visit in between. Fails with `Conflict`
    /// (and leaves `visit` unsaved) if a non-cancelled visit of the same
    /// seller already falls within `CONFLICT_WINDOW_MINUTES` of
    /// `visit.fecha_visita`.
    async fn save_if_no_conflict(&self, visit: Visit) -> DomainResult<()>;

    async fn save(&self, visit: Visit) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemoryVisitRepository {
    rows: RwLock<HashMap<VisitId, Visit>>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn find(&self, id: VisitId) -> DomainResult<Option<Visit>> {
        Ok(self
            .rows
            .read()
            .expect("visit repository lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn save_if_no_conflict(&self, visit: Visit) -> DomainResult<()> {
        let window = Duration::minutes(CONFLICT_WINDOW_MINUTES);
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DomainError::internal("visit repository lock poisoned"))?;

        if let Some(conflict) = rows.values().find(|v| {
            v.seller_id == visit.seller_id
                && v.status != VisitStatus::Cancelled
                && (v.fecha_visita - visit.fecha_visita).abs() < window
        }) {
            return Err(DomainError::conflict(format!(
                "conflicts with visit {} at {}",
                conflict.id, conflict.fecha_visita
            )));
        }

        rows.insert(visit.id, visit);
        Ok(())
    }

    async fn save(&self, visit: Visit) -> DomainResult<()> {
        self.rows
            .write()
            .map_err(|_| DomainError::internal("visit repository lock poisoned"))?
            .insert(visit.id, visit);
        Ok(())
    }
}
