use crate::model::queue::OrderQueue;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Reads the whole table. Missing storage yields an empty queue.
    async fn load(&self) -> Result<OrderQueue, RepositoryError>;
}
