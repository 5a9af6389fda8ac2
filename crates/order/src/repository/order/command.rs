use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    model::{order::Order as OrderModel, queue::OrderQueue},
};
use shared::errors::RepositoryError;

use async_trait::async_trait;
use std::{ffi::OsString, path::PathBuf};
use tracing::{error, info};

pub struct OrderCommandRepository {
    path: PathBuf,
}

impl OrderCommandRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("orders"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(queue: &OrderQueue) -> Result<Vec<u8>, RepositoryError> {
        // Header written by hand so an empty queue still produces it.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(OrderModel::COLUMNS)?;
        for order in queue.orders() {
            writer.serialize(order)?;
        }

        writer
            .into_inner()
            .map_err(|err| RepositoryError::Custom(err.to_string()))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn persist(&self, queue: &OrderQueue) -> Result<(), RepositoryError> {
        let bytes = Self::encode(queue)?;
        let staging = self.staging_path();

        // Write aside then rename, so readers never observe a partial table.
        if let Err(err) = tokio::fs::write(&staging, &bytes).await {
            error!("❌ Failed to write {}: {:?}", staging.display(), err);
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(RepositoryError::unavailable(&self.path, err));
        }

        if let Err(err) = tokio::fs::rename(&staging, &self.path).await {
            error!(
                "❌ Failed to replace {} with {}: {:?}",
                self.path.display(),
                staging.display(),
                err
            );
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(RepositoryError::unavailable(&self.path, err));
        }

        info!(
            "✅ Persisted {} orders to {}",
            queue.len(),
            self.path.display()
        );
        Ok(())
    }
}
