//! Create-Visit saga: client assignment, temporal validation, visit
//! creation.
//!
//! A pure function over its collaborator interfaces: no mutable
//! adapters held as attributes, no implicit transactional scope. The
//! caller supplies everything at construction and awaits one call.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use opsfabric_core::{ClientId, DomainError, DomainResult, SellerId};
use opsfabric_events::payloads::VisitCreated;
use opsfabric_events::EventBus;

use crate::ports::ClientPort;
use crate::repository::VisitRepository;
use crate::visit::Visit;

/// "`fecha_visita` MUST be >= 24h in the future at creation".
pub const MIN_LEAD_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct CreateVisitRequest {
    pub seller_id: SellerId,
    pub client_id: ClientId,
    pub fecha_visita: DateTime<Utc>,
    pub notes: Option<String>,
}

pub struct VisitSaga {
    clients: Arc<dyn ClientPort>,
    visits: Arc<dyn VisitRepository>,
    events: Arc<dyn EventBus>,
}

impl VisitSaga {
    pub fn new(
        clients: Arc<dyn ClientPort>,
        visits: Arc<dyn VisitRepository>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            clients,
            visits,
            events,
        }
    }

    pub async fn create_visit(&self, request: CreateVisitRequest, now: DateTime<Utc>) -> DomainResult<Visit> {
        // Step 1: fetch client.
        let client = self.clients.get_client(request.client_id).await?;

        // Step 2-4: assignment.
        match client.assigned_seller_id {
            None => {
                // No compensation needed if this fails -- the client stays
 // unassigned either way.
                self.clients
                    .assign_seller(request.client_id, request.seller_id)
                    .await?;
            }
            Some(assigned) if assigned == request.seller_id => {
                // Already ours; continue.
            }
            Some(assigned) => {
                return Err(DomainError::forbidden(format!(
                    "client {} is assigned to seller {assigned}",
                    request.client_id
                )));
            }
        }

        // Step 5: temporal validation.
        let min_allowed = now + Duration::hours(MIN_LEAD_HOURS);
        if request.fecha_visita <= min_allowed {
            return Err(DomainError::conflict(format!(
                "fecha_visita must be more than {MIN_LEAD_HOURS}h in the future"
            )));
        }

        // Steps 6-7: conflict check and insert, under one lock so no other
        // call can observe the window as clear and insert in between.
        let visit = Visit::new(
            request.seller_id,
            request.client_id,
            request.fecha_visita,
            request.notes,
            client.institution_name,
            client.address,
            client.city,
            client.country,
            now,
        );

        self.visits.save_if_no_conflict(visit.clone()).await?;

        opsfabric_events::bus::publish(
            &*self.events,
            VisitCreated {
                visit_id: visit.id,
                seller_id: visit.seller_id,
                client_id: visit.client_id,
            },
        )
        .await;

        Ok(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ClientSnapshot;
    use crate::repository::InMemoryVisitRepository;
    use async_trait::async_trait;
    use opsfabric_events::bus::InMemoryEventBus;
    use std::sync::Mutex;

    struct FakeClients {
        clients: Mutex<std::collections::HashMap<ClientId, ClientSnapshot>>,
        assign_calls: Mutex<Vec<(ClientId, SellerId)>>,
    }

    impl FakeClients {
        fn new(snapshot: ClientSnapshot) -> Self {
            let mut m = std::collections::HashMap::new();
            m.insert(snapshot.client_id, snapshot);
            Self {
                clients: Mutex::new(m),
                assign_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ClientPort for FakeClients {
        async fn get_client(&self, client_id: ClientId) -> DomainResult<ClientSnapshot> {
            self.clients
                .lock()
                .unwrap()
                .get(&client_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("client"))
        }

        async fn assign_seller(&self, client_id: ClientId, seller_id: SellerId) -> DomainResult<()> {
            self.assign_calls.lock().unwrap().push((client_id, seller_id));
            if let Some(c) = self.clients.lock().unwrap().get_mut(&client_id) {
                c.assigned_seller_id = Some(seller_id);
            }
            Ok(())
        }
    }

    fn unassigned_client(client_id: ClientId) -> ClientSnapshot {
        ClientSnapshot {
            client_id,
            assigned_seller_id: None,
            institution_name: "Acme".into(),
            address: "Calle 1".into(),
            city: "Bogotá".into(),
            country: "CO".into(),
        }
    }

    #[tokio::test]
    async fn s1_happy_path_assigns_and_creates_scheduled_visit() {
        let client_id = ClientId::new();
        let seller_id = SellerId::new();
        let clients = Arc::new(FakeClients::new(unassigned_client(client_id)));
        let visits = Arc::new(InMemoryVisitRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let saga = VisitSaga::new(clients.clone(), visits, bus);

        let now = Utc::now();
        let request = CreateVisitRequest {
            seller_id,
            client_id,
            fecha_visita: now + Duration::hours(48),
            notes: Some("visit1".into()),
        };

        let visit = saga.create_visit(request, now).await.unwrap();
        assert_eq!(visit.status, crate::visit::VisitStatus::Scheduled);
        assert_eq!(visit.client_name, "Acme");
        assert_eq!(clients.assign_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn s2_conflicting_visit_rejects_without_writing() {
        let client_id = ClientId::new();
        let seller_id = SellerId::new();
        let clients = Arc::new(FakeClients::new(unassigned_client(client_id)));
        let visits = Arc::new(InMemoryVisitRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let saga = VisitSaga::new(clients, visits.clone(), bus);

        let now = Utc::now();
        let t = now + Duration::hours(48);
        let existing = Visit::new(seller_id, client_id, t, None, "Acme", "Calle 1", "Bogotá", "CO", now);
        visits.save(existing.clone()).await.unwrap();

        let request = CreateVisitRequest {
            seller_id,
            client_id,
            fecha_visita: t + Duration::minutes(90),
            notes: None,
        };

        let err = saga.create_visit(request, now).await.unwrap_err();
        assert_eq!(err.code(), "conflict");
    }

    #[tokio::test]
    async fn s3_client_assigned_to_another_seller_is_forbidden() {
        let client_id = ClientId::new();
        let other_seller = SellerId::new();
        let mut client = unassigned_client(client_id);
        client.assigned_seller_id = Some(other_seller);
        let clients = Arc::new(FakeClients::new(client));
        let visits = Arc::new(InMemoryVisitRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let saga = VisitSaga::new(clients, visits, bus);

        let now = Utc::now();
        let request = CreateVisitRequest {
            seller_id: SellerId::new(),
            client_id,
            fecha_visita: now + Duration::hours(48),
            notes: None,
        };

        let err = saga.create_visit(request, now).await.unwrap_err();
        assert_eq!(err.code(), "forbidden");
    }

    #[tokio::test]
    async fn rejects_visit_less_than_24h_out() {
        let client_id = ClientId::new();
        let seller_id = SellerId::new();
        let clients = Arc::new(FakeClients::new(unassigned_client(client_id)));
        let visits = Arc::new(InMemoryVisitRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let saga = VisitSaga::new(clients, visits, bus);

        let now = Utc::now();
        let request = CreateVisitRequest {
            seller_id,
            client_id,
            fecha_visita: now + Duration::hours(2),
            notes: None,
        };

        let err = saga.create_visit(request, now).await.unwrap_err();
        assert_eq!(err.code(), "conflict");
    }
}
