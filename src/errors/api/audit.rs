use crate::errors::internal::InternalError;
use poem_openapi::{payload::Json, ApiResponse, Object};

/// Standardized error response for audit log endpoints
#[derive(Object, Debug)]
pub struct AuditErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Audit log endpoint error types
#[derive(ApiResponse, Debug)]
pub enum AuditApiError {
    /// Bearer token missing, malformed or expired
    #[oai(status = 401)]
    Unauthorized(Json<AuditErrorResponse>),

    /// Non-admin callers may only read their own logs
    #[oai(status = 403)]
    Forbidden(Json<AuditErrorResponse>),

    /// Action tag outside the closed set
    #[oai(status = 400)]
    InvalidAction(Json<AuditErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuditErrorResponse>),
}

impl AuditApiError {
    pub fn unauthorized() -> Self {
        AuditApiError::Unauthorized(Json(AuditErrorResponse {
            error: "unauthorized".to_string(),
            message: "A valid bearer token is required".to_string(),
            status_code: 401,
        }))
    }

    pub fn forbidden() -> Self {
        AuditApiError::Forbidden(Json(AuditErrorResponse {
            error: "forbidden".to_string(),
            message: "You may only read your own audit logs".to_string(),
            status_code: 403,
        }))
    }

    pub fn invalid_action(action: &str) -> Self {
        AuditApiError::InvalidAction(Json(AuditErrorResponse {
            error: "invalid_action".to_string(),
            message: format!("Unknown action type '{}'", action),
            status_code: 400,
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        AuditApiError::InternalError(Json(AuditErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}

impl From<InternalError> for AuditApiError {
    fn from(err: InternalError) -> Self {
        tracing::error!(error = %err, "audit log request failed");
        Self::internal_error("Internal server error")
    }
}
