use csv::Error as CsvError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record: {0}")]
    Csv(#[from] CsvError),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RepositoryError::Unavailable {
            path: path.into(),
            source,
        }
    }
}
