use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use opsfabric_core::{ClientId, DomainError, DomainResult};

use crate::client::Client;

/// Persistence port for the `clients` service's own store. Production
/// wiring plugs in a SQL-backed implementation (out of scope here);
/// tests and the saga's unit tests use [`InMemoryClientRepository`].
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find(&self, id: ClientId) -> DomainResult<Option<Client>>;
    async fn save(&self, client: Client) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemoryClientRepository {
    rows: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, client: Client) {
        self.rows
            .write()
            .expect("client repository lock poisoned")
            .insert(client.id(), client);
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find(&self, id: ClientId) -> DomainResult<Option<Client>> {
        Ok(self
            .rows
            .read()
            .expect("client repository lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn save(&self, client: Client) -> DomainResult<()> {
        self.rows
            .write()
            .map_err(|_| DomainError::internal("client repository lock poisoned"))?
            .insert(client.id(), client);
        Ok(())
    }
}
