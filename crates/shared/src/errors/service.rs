use crate::errors::repository::RepositoryError;
use serde::Serialize;
use thiserror::Error;

/// How the presentation layer should surface an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    Validation(String),

    #[error("queue is empty")]
    EmptyQueue,
}

impl ServiceError {
    /// User input problems are warnings; everything else is an error.
    pub fn severity(&self) -> Severity {
        match self {
            ServiceError::Validation(_) | ServiceError::EmptyQueue => Severity::Warning,
            ServiceError::Repo(_) => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_input_errors_are_warnings() {
        let err = ServiceError::Validation("quantity must be greater than 0".into());
        assert_eq!(err.severity(), Severity::Warning);
        assert_eq!(err.to_string(), "quantity must be greater than 0");

        assert_eq!(ServiceError::EmptyQueue.severity(), Severity::Warning);
        assert_eq!(ServiceError::EmptyQueue.to_string(), "queue is empty");
    }

    #[test]
    fn test_storage_errors_are_errors() {
        let err = ServiceError::from(RepositoryError::unavailable(
            "/nowhere/orders.csv",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        ));

        assert_eq!(err.severity(), Severity::Error);
        assert!(err.to_string().contains("Storage unavailable: /nowhere/orders.csv"));
    }
}
