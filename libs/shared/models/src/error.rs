use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body surfaced to the user when an operation fails outright.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub error: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::ValidationError(_) => "validation",
            AppError::Config(_) => "config",
            AppError::Internal(_) => "internal",
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::Config(msg)
            | AppError::Internal(msg) => msg.clone(),
        };

        tracing::error!("Error: {}: {}", self.kind(), message);

        ErrorBody {
            kind: self.kind(),
            error: message,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_carries_kind_and_message() {
        let err = AppError::NotFound("Doctor not found".to_string());
        let body = err.to_body();
        assert_eq!(body.kind, "not_found");
        assert_eq!(body.error, "Doctor not found");
    }

    #[test]
    fn test_display() {
        let err = AppError::Config("bad fixture path".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad fixture path");
    }
}
