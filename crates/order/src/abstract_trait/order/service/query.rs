use crate::domain::{
    requests::order::SearchOrderRequest,
    response::{api::ApiResponse, menu::MenuItemResponse, order::OrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::{collections::BTreeMap, sync::Arc};

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn nearest_delivery(&self) -> Result<ApiResponse<String>, ServiceError>;
    async fn total_items(&self) -> Result<ApiResponse<i64>, ServiceError>;
    async fn menu_totals(&self) -> Result<ApiResponse<BTreeMap<String, i64>>, ServiceError>;
    async fn count_orders(&self) -> Result<ApiResponse<usize>, ServiceError>;
    async fn search_by_name(
        &self,
        req: &SearchOrderRequest,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_menu(&self) -> Result<ApiResponse<Vec<MenuItemResponse>>, ServiceError>;
}
