use crate::{
    abstract_trait::{
        DynClock,
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::OrderCommandServiceTrait,
        },
    },
    config::menu::MenuCatalog,
    domain::{
        requests::order::CreateOrderRequest,
        response::{api::ApiResponse, order::OrderResponse},
    },
    model::order::Order as OrderModel,
    service::order::schedule::resolve_delivery_at,
};
use shared::errors::ServiceError;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    menu: Arc<MenuCatalog>,
    clock: DynClock,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub menu: Arc<MenuCatalog>,
    pub clock: DynClock,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            menu,
            clock,
        } = deps;

        Self {
            query,
            command,
            menu,
            clock,
        }
    }

    fn price_order(&self, req: &CreateOrderRequest) -> Result<i64, ServiceError> {
        if let Some(message) = req.first_violation() {
            return Err(ServiceError::Validation(message));
        }

        let unit_price = self.menu.unit_price(&req.menu_item).ok_or_else(|| {
            ServiceError::Validation(format!("unknown menu item: {}", req.menu_item))
        })?;

        unit_price
            .checked_mul(i64::from(req.quantity))
            .ok_or_else(|| ServiceError::Validation("order total is too large".into()))
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Creating new order for customer={} menu={} quantity={}",
            req.customer_name, req.menu_item, req.quantity
        );

        let total_price = self.price_order(req).inspect_err(|e| {
            warn!("⚠️ Order rejected: {e}");
        })?;

        let mut queue = self.query.load().await?;

        let order = OrderModel {
            sequence_number: queue.next_sequence_number(),
            customer_name: req.customer_name.clone(),
            menu_item: req.menu_item.clone(),
            quantity: req.quantity,
            delivery_at: resolve_delivery_at(self.clock.now(), req.delivery_time),
            total_price,
        };
        let response = OrderResponse::from(&order);

        queue.push(order);
        self.command.persist(&queue).await?;

        info!(
            "✅ Queued order no={} for {} at {}",
            response.no, response.customer_name, response.delivery_at
        );

        Ok(ApiResponse::success("order added to the queue", response))
    }

    async fn remove_first_order(&self) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🗑️ Removing the first order in the queue");

        let mut queue = self.query.load().await?;

        let Some(removed) = queue.pop_front() else {
            warn!("⚠️ Nothing to remove, queue is empty");
            return Err(ServiceError::EmptyQueue);
        };

        self.command.persist(&queue).await?;

        info!(
            "✅ Removed order for {}, {} left in queue",
            removed.customer_name,
            queue.len()
        );

        Ok(ApiResponse::success(
            "first order in the queue removed",
            OrderResponse::from(removed),
        ))
    }
}
