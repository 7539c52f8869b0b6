//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Adds structured details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    /// Not-found error naming the entity and looked-up key.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {}={} was not found", entity, field, value),
        )
    }

    /// Duplicate error naming the conflicting unique field.
    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{}.{} = '{}' already exists", entity, field, value),
        )
    }

    /// Validation error for a single field.
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION_ERROR", &format!("{}: {}", field, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_skips_absent_fields() {
        let response = ErrorResponse::new("NOT_FOUND", "missing");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
        assert!(!json.contains("request_id"));
    }

    #[test]
    fn test_error_response_with_details_and_request_id() {
        let response = ErrorResponse::new("DATABASE_ERROR", "boom")
            .with_details(serde_json::json!({"operation": "insert"}))
            .with_request_id("req-1");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["operation"], "insert");
        assert_eq!(json["request_id"], "req-1");
    }

    #[test]
    fn test_not_found_error_message() {
        let response = ErrorResponse::not_found_error("customer", "id", "7");
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("customer"));
        assert!(response.message.contains("id=7"));
    }
}
