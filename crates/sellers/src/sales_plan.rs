use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use opsfabric_core::{DomainError, DomainResult, Entity, Money, SalesPlanId, SellerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Sales,
    Orders,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesPlanStatus {
    Active,
    Closed,
}

/// "The accumulator is mutated by atomic add." `sales_period` is e.g.
/// `"Q4-2025"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPlan {
    pub id: SalesPlanId,
    pub seller_id: SellerId,
    pub sales_period: String,
    pub goal_type: GoalType,
    pub goal: Money,
    pub accumulated: Money,
    pub status: SalesPlanStatus,
}

impl SalesPlan {
    pub fn new(seller_id: SellerId, sales_period: impl Into<String>, goal_type: GoalType, goal: Money) -> Self {
        Self {
            id: SalesPlanId::new(),
            seller_id,
            sales_period: sales_period.into(),
            goal_type,
            goal,
            accumulated: Money::ZERO,
            status: SalesPlanStatus::Active,
        }
    }
}

impl Entity for SalesPlan {
    type Id = SalesPlanId;

    fn id(&self) -> SalesPlanId {
        self.id
    }
}

/// Persistence port. `(seller_id, sales_period)` is unique.
#[async_trait]
pub trait SalesPlanRepository: Send + Sync {
    async fn find_by_seller_and_period(
        &self,
        seller_id: SellerId,
        sales_period: &str,
    ) -> DomainResult<Option<SalesPlan>>;

    async fn save(&self, plan: SalesPlan) -> DomainResult<()>;

    /// Atomically add `amount` to the matching plan's accumulator. Fails
    /// with `NotFound` if no such plan exists.
    async fn credit(&self, seller_id: SellerId, sales_period: &str, amount: Money) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemorySalesPlanRepository {
    rows: RwLock<HashMap<(SellerId, String), SalesPlan>>,
}

impl InMemorySalesPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SalesPlanRepository for InMemorySalesPlanRepository {
    async fn find_by_seller_and_period(
        &self,
        seller_id: SellerId,
        sales_period: &str,
    ) -> DomainResult<Option<SalesPlan>> {
        Ok(self
            .rows
            .read()
            .expect("sales plan repository lock poisoned")
            .get(&(seller_id, sales_period.to_string()))
            .cloned())
    }

    async fn save(&self, plan: SalesPlan) -> DomainResult<()> {
        self.rows
            .write()
            .map_err(|_| DomainError::internal("sales plan repository lock poisoned"))?
            .insert((plan.seller_id, plan.sales_period.clone()), plan);
        Ok(())
    }

    async fn credit(&self, seller_id: SellerId, sales_period: &str, amount: Money) -> DomainResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DomainError::internal("sales plan repository lock poisoned"))?;
        let plan = rows
            .get_mut(&(seller_id, sales_period.to_string()))
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "no sales plan for seller {seller_id} in period {sales_period}"
                ))
            })?;
        plan.accumulated = plan.accumulated + amount;
        Ok(())
    }
}
