use opsfabric_core::{ClientId, DomainError, DomainResult, Entity, SellerId};

/// Institutional customer. `assigned_seller_id` is a single-writer
/// mutation: only the Visit Saga's assignment step changes it, and only
/// while it is currently absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    id: ClientId,
    external_auth_id: String,
    nit: String,
    institution_name: String,
    contact_name: Option<String>,
    contact_phone: Option<String>,
    address: String,
    city: String,
    country: String,
    assigned_seller_id: Option<SellerId>,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        external_auth_id: impl Into<String>,
        nit: impl Into<String>,
        institution_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let institution_name = institution_name.into();
        if institution_name.trim().is_empty() {
            return Err(DomainError::validation("institution_name must not be empty"));
        }
        let address = address.into();
        let city = city.into();
        let country = country.into();
        if address.trim().is_empty() || city.trim().is_empty() || country.trim().is_empty() {
            return Err(DomainError::validation(
                "address, city, and country must not be empty",
            ));
        }
        Ok(Self {
            id: ClientId::new(),
            external_auth_id: external_auth_id.into(),
            nit: nit.into(),
            institution_name,
            contact_name: None,
            contact_phone: None,
            address,
            city,
            country,
            assigned_seller_id: None,
        })
    }

    pub fn institution_name(&self) -> &str {
        &self.institution_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn assigned_seller_id(&self) -> Option<SellerId> {
        self.assigned_seller_id
    }

    /// Assign `seller_id` as owner. Only valid while currently unassigned;
    /// the decision of whether to call this at all belongs to the caller
    /// (the Visit Saga), not to this entity.
    pub fn assign_seller(&mut self, seller_id: SellerId) -> DomainResult<()> {
        if let Some(existing) = self.assigned_seller_id {
            if existing != seller_id {
                return Err(DomainError::conflict(format!(
                    "client {} already assigned to seller {existing}",
                    self.id
                )));
            }
            return Ok(());
        }
        self.assigned_seller_id = Some(seller_id);
        Ok(())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("auth-1", "900123456", "Acme Hospital", "Calle 1", "Bogotá", "CO").unwrap()
    }

    #[test]
    fn assigns_seller_when_unassigned() {
        let mut c = client();
        let seller = SellerId::new();
        c.assign_seller(seller).unwrap();
        assert_eq!(c.assigned_seller_id(), Some(seller));
    }

    #[test]
    fn reassigning_to_a_different_seller_conflicts() {
        let mut c = client();
        c.assign_seller(SellerId::new()).unwrap();
        let err = c.assign_seller(SellerId::new()).unwrap_err();
        assert_eq!(err.code(), "conflict");
    }

    #[test]
    fn rejects_empty_institution_name() {
        let err = Client::new("auth-1", "900123456", "  ", "Calle 1", "Bogotá", "CO").unwrap_err();
        assert_eq!(err.code(), "validation_rejected");
    }
}
