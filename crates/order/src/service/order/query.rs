use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    config::menu::MenuCatalog,
    domain::{
        requests::order::SearchOrderRequest,
        response::{api::ApiResponse, menu::MenuItemResponse, order::OrderResponse},
    },
};
use shared::{errors::ServiceError, utils::format_timestamp};

use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};
use tracing::{info, warn};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    menu: Arc<MenuCatalog>,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, menu: Arc<MenuCatalog>) -> Self {
        Self { query, menu }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("📋 Listing the order queue");

        let queue = self.query.load().await?;
        let orders: Vec<OrderResponse> = queue.orders().iter().map(OrderResponse::from).collect();

        let message = if orders.is_empty() {
            "queue is empty".to_string()
        } else {
            format!("{} orders in the queue", orders.len())
        };

        Ok(ApiResponse::success(message, orders))
    }

    async fn nearest_delivery(&self) -> Result<ApiResponse<String>, ServiceError> {
        info!("⏱️ Looking up the nearest delivery time");

        let queue = self.query.load().await?;

        let Some(nearest) = queue.nearest_delivery() else {
            warn!("⚠️ No delivery time, queue is empty");
            return Err(ServiceError::EmptyQueue);
        };

        let nearest = format_timestamp(&nearest);

        Ok(ApiResponse::success(
            format!("nearest delivery time: {nearest}"),
            nearest,
        ))
    }

    async fn total_items(&self) -> Result<ApiResponse<i64>, ServiceError> {
        let queue = self.query.load().await?;
        let total = queue.total_items();

        info!("🔢 Total items in queue: {total}");

        Ok(ApiResponse::success(
            format!("total items ordered in the queue: {total}"),
            total,
        ))
    }

    async fn menu_totals(&self) -> Result<ApiResponse<BTreeMap<String, i64>>, ServiceError> {
        let queue = self.query.load().await?;
        let totals = queue.menu_totals();

        info!("🍽️ Computed totals for {} menu items", totals.len());

        Ok(ApiResponse::success("items ordered per menu", totals))
    }

    async fn count_orders(&self) -> Result<ApiResponse<usize>, ServiceError> {
        let queue = self.query.load().await?;
        let count = queue.len();

        info!("🔢 Orders in queue: {count}");

        Ok(ApiResponse::success(
            format!("orders in the queue: {count}"),
            count,
        ))
    }

    async fn search_by_name(
        &self,
        req: &SearchOrderRequest,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Searching orders for customer={}", req.customer_name);

        let queue = self.query.load().await?;
        let found: Vec<OrderResponse> = queue
            .find_by_name(&req.customer_name)
            .into_iter()
            .map(OrderResponse::from)
            .collect();

        if found.is_empty() {
            warn!("⚠️ No orders found for {}", req.customer_name);
            return Ok(ApiResponse::warning(
                format!("no orders found for {}", req.customer_name),
                found,
            ));
        }

        Ok(ApiResponse::success(
            format!("orders found for {}", req.customer_name),
            found,
        ))
    }

    async fn find_menu(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError> {
        let items: Vec<MenuItemResponse> =
            self.menu.items().iter().map(MenuItemResponse::from).collect();

        Ok(ApiResponse::success("menu", items))
    }
}
