use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::{order::Order as OrderModel, queue::OrderQueue},
};
use shared::errors::RepositoryError;

use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tracing::{error, info};

pub struct OrderQueryRepository {
    path: PathBuf,
}

impl OrderQueryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn load(&self) -> Result<OrderQueue, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "📭 No order file at {}, starting with an empty queue",
                    self.path.display()
                );
                return Ok(OrderQueue::default());
            }
            Err(err) => {
                error!("❌ Failed to read {}: {:?}", self.path.display(), err);
                return Err(RepositoryError::unavailable(&self.path, err));
            }
        };

        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let orders = reader
            .deserialize::<OrderModel>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                error!("❌ Malformed row in {}: {}", self.path.display(), err);
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Loaded {} orders from {}",
            orders.len(),
            self.path.display()
        );
        Ok(OrderQueue::new(orders))
    }
}
