use sea_orm::FromQueryResult;

use crate::errors::InternalError;
use crate::types::internal::AuditAction;

/// One user's action count inside a detection window
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct UserActionCount {
    pub user_id: i64,
    pub actions_count: i64,
}

/// Read seam between the monitor and the audit log
///
/// Implemented by `AuditStore` in production; tests substitute a faulty or
/// scripted source to exercise failure isolation without a broken database.
#[async_trait::async_trait]
pub trait ActivitySource: Send + Sync {
    /// Users with at least `min_count` records of `action` since
    /// `window_start` (inclusive), with their counts
    async fn counts_exceeding(
        &self,
        action: AuditAction,
        window_start: i64,
        min_count: u64,
    ) -> Result<Vec<UserActionCount>, InternalError>;
}
