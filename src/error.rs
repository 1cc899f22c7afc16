//! Error types and handling for the symdex MCP server

use serde::Serialize;
use std::fmt;

/// Application error types surfaced at the tool boundary
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the error code for MCP responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

/// Validation functions
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.trim().is_empty() {
        return Err(AppError::InvalidInput("Code cannot be empty".to_string()));
    }

    if code.len() > 32 {
        return Err(AppError::InvalidInput(
            "Code too long, maximum 32 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            AppError::InvalidInput("x".into()).error_code(),
            "invalid_input"
        );
        assert_eq!(AppError::NotFound("x".into()).error_code(), "not_found");
        assert_eq!(AppError::Internal("x".into()).error_code(), "internal_error");
    }

    #[test]
    fn test_validate_query() {
        assert!(validate_query("chest pain").is_ok());
        assert!(validate_query("").is_err());
        assert!(validate_query(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("R06.02").is_ok());
        assert!(validate_code("   ").is_err());
        assert!(validate_code(&"9".repeat(33)).is_err());
    }
}
