//! The process-scoped resource table built once at startup: an explicit
//! constructor, no ambient global state. Every collaborator is
//! constructed here and handed to the pure orchestration types
//! (`OrderPipeline`, `VisitSaga`, `RouteOptimizer`) as `Arc<dyn Trait>`.

use std::sync::Arc;

use opsfabric_clients::InMemoryClientRepository;
use opsfabric_delivery::RouteOptimizer;
use opsfabric_events::{EventBus, InMemoryEventBus};
use opsfabric_infra::AppConfig;
use opsfabric_orders::{InMemoryOrderRepository, OrderPipeline, OrderRepository};
use opsfabric_realtime::{InMemoryRealtimeNotifier, RealtimeNotifier};
use opsfabric_sellers::{IdempotencyLedger, InMemoryIdempotencyLedger, InMemorySalesPlanRepository, SalesPlanProjector, SalesPlanRepository};
use opsfabric_visits::{InMemoryVisitRepository, VisitRepository, VisitSaga};

use crate::adapters::{ClientPortAdapter, InMemoryCustomerPort, InMemoryInventoryPort};

pub struct AppServices {
    pub order_pipeline: OrderPipeline,
    pub visit_saga: VisitSaga,
    pub route_optimizer: RouteOptimizer,
    pub sales_plan_projector: SalesPlanProjector,

    pub order_repository: Arc<dyn OrderRepository>,
    pub visit_repository: Arc<dyn VisitRepository>,
    pub sales_plan_repository: Arc<dyn SalesPlanRepository>,
    pub idempotency_ledger: Arc<dyn IdempotencyLedger>,

    pub event_bus: Arc<InMemoryEventBus>,
    pub notifier: Arc<dyn RealtimeNotifier>,
}

impl AppServices {
    pub fn build(config: &AppConfig) -> Self {
        let client_repository: Arc<dyn opsfabric_clients::ClientRepository> = Arc::new(InMemoryClientRepository::new());
        let customer_port = Arc::new(InMemoryCustomerPort::new());
        let inventory_port = Arc::new(InMemoryInventoryPort::new());

        let order_repository: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::default());
        let visit_repository: Arc<dyn VisitRepository> = Arc::new(InMemoryVisitRepository::default());
        let sales_plan_repository: Arc<dyn SalesPlanRepository> = Arc::new(InMemorySalesPlanRepository::default());
        let idempotency_ledger: Arc<dyn IdempotencyLedger> = Arc::new(InMemoryIdempotencyLedger::default());

        let event_bus = Arc::new(InMemoryEventBus::default());
        let notifier: Arc<dyn RealtimeNotifier> = if config.realtime_api_key.is_empty() {
            Arc::new(InMemoryRealtimeNotifier::new())
        } else {
            Arc::new(opsfabric_realtime::AblyRealtimeNotifier::new(
                config.realtime_api_key.clone(),
                config.realtime_env_prefix.clone(),
            ))
        };

        let order_pipeline = OrderPipeline::new(
            customer_port,
            inventory_port,
            order_repository.clone(),
            event_bus.clone() as Arc<dyn EventBus>,
        );

        let visit_saga = VisitSaga::new(
            Arc::new(ClientPortAdapter::new(client_repository.clone())),
            visit_repository.clone(),
            event_bus.clone() as Arc<dyn EventBus>,
        );

        let route_optimizer = RouteOptimizer::new(config.route_avg_speed_kph);

        let sales_plan_projector = SalesPlanProjector::new(idempotency_ledger.clone(), sales_plan_repository.clone());

        Self {
            order_pipeline,
            visit_saga,
            route_optimizer,
            sales_plan_projector,
            order_repository,
            visit_repository,
            sales_plan_repository,
            idempotency_ledger,
            event_bus,
            notifier,
        }
    }
}
