use crate::errors::internal::{InternalError, MonitorError};
use poem_openapi::{payload::Json, ApiResponse, Object};

/// Standardized error response for operator console endpoints
#[derive(Object, Debug)]
pub struct MonitorErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Operator console error types
#[derive(ApiResponse, Debug)]
pub enum MonitorApiError {
    /// Bearer token missing, malformed or expired
    #[oai(status = 401)]
    Unauthorized(Json<MonitorErrorResponse>),

    /// Admin role required
    #[oai(status = 403)]
    AdminRequired(Json<MonitorErrorResponse>),

    /// Monitored entry not found
    #[oai(status = 404)]
    EntryNotFound(Json<MonitorErrorResponse>),

    /// Status value outside the closed set
    #[oai(status = 400)]
    InvalidStatus(Json<MonitorErrorResponse>),

    /// Action tag outside the closed set
    #[oai(status = 400)]
    InvalidAction(Json<MonitorErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<MonitorErrorResponse>),
}

impl MonitorApiError {
    pub fn unauthorized() -> Self {
        MonitorApiError::Unauthorized(Json(MonitorErrorResponse {
            error: "unauthorized".to_string(),
            message: "A valid bearer token is required".to_string(),
            status_code: 401,
        }))
    }

    pub fn admin_required() -> Self {
        MonitorApiError::AdminRequired(Json(MonitorErrorResponse {
            error: "admin_required".to_string(),
            message: "This endpoint requires the admin role".to_string(),
            status_code: 403,
        }))
    }

    pub fn entry_not_found(entry_id: i64) -> Self {
        MonitorApiError::EntryNotFound(Json(MonitorErrorResponse {
            error: "entry_not_found".to_string(),
            message: format!("Monitored entry {} not found", entry_id),
            status_code: 404,
        }))
    }

    pub fn invalid_status(status: &str) -> Self {
        MonitorApiError::InvalidStatus(Json(MonitorErrorResponse {
            error: "invalid_status".to_string(),
            message: format!(
                "Invalid status '{}'; expected active, resolved or false_positive",
                status
            ),
            status_code: 400,
        }))
    }

    pub fn invalid_action(action: &str) -> Self {
        MonitorApiError::InvalidAction(Json(MonitorErrorResponse {
            error: "invalid_action".to_string(),
            message: format!("Unknown action type '{}'", action),
            status_code: 400,
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        MonitorApiError::InternalError(Json(MonitorErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}

impl From<InternalError> for MonitorApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Monitor(MonitorError::EntryNotFound { entry_id }) => {
                Self::entry_not_found(entry_id)
            }
            other => {
                tracing::error!(error = %other, "operator console request failed");
                Self::internal_error("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_not_found_maps_to_404() {
        let err: MonitorApiError =
            InternalError::from(MonitorError::EntryNotFound { entry_id: 42 }).into();
        match err {
            MonitorApiError::EntryNotFound(body) => {
                assert_eq!(body.0.status_code, 404);
                assert!(body.0.message.contains("42"));
            }
            other => panic!("expected EntryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn database_errors_map_to_500_without_detail_leak() {
        let err: MonitorApiError = InternalError::database(
            "list_active",
            sea_orm::DbErr::Custom("secret dsn".to_string()),
        )
        .into();
        match err {
            MonitorApiError::InternalError(body) => {
                assert_eq!(body.0.status_code, 500);
                assert!(!body.0.message.contains("secret dsn"));
            }
            other => panic!("expected InternalError, got {:?}", other),
        }
    }
}
