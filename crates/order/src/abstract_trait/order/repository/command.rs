use crate::model::queue::OrderQueue;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Replaces the stored table with `queue` in full.
    async fn persist(&self, queue: &OrderQueue) -> Result<(), RepositoryError>;
}
