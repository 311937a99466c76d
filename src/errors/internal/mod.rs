use thiserror::Error;

pub mod audit;
pub mod database;
pub mod monitor;

pub use audit::AuditError;
pub use database::DatabaseError;
pub use monitor::MonitorError;

/// Internal error type for store and monitor operations
///
/// Hybrid design separates infrastructure errors (shared) from domain
/// errors (store-specific). Not exposed via API - endpoints must convert
/// to AuditApiError or MonitorApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
