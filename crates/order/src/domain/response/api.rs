use core::fmt;
use serde::Serialize;
use shared::errors::Severity;

#[derive(Debug, Serialize, Clone)]
pub struct ApiResponse<T> {
    pub status: Severity,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Severity::Success,
            message: message.into(),
            data,
        }
    }

    pub fn warning(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Severity::Warning,
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ApiResponse to JSON: {e}"),
        }
    }
}
