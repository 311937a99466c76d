use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::MonitorError;
use crate::errors::InternalError;
use crate::types::db::monitored_user;
use crate::types::internal::MonitoredStatus;

/// Outcome of an escalation upsert
#[derive(Debug, Clone)]
pub enum Escalation {
    /// First breach for this (user, reason): a fresh active entry
    Created(monitored_user::Model),
    /// Re-detection: the existing active entry, count and timestamp refreshed
    Refreshed(monitored_user::Model),
}

impl Escalation {
    pub fn entry(&self) -> &monitored_user::Model {
        match self {
            Self::Created(entry) | Self::Refreshed(entry) => entry,
        }
    }
}

/// Repository for monitored-user entries
///
/// Upholds the "at most one active entry per (user_id, reason)" invariant
/// through the find-then-write upsert in `escalate`. Sweep writes are
/// serialized by the monitor's overlap guard, so the upsert is never run
/// by two sweeps at once. A concurrent operator status update can still
/// interleave with a sweep; that window is best-effort.
pub struct MonitoredUserStore {
    db: DatabaseConnection,
}

impl MonitoredUserStore {
    /// Create a new MonitoredUserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find the active entry for one (user, reason) pair, if any
    pub async fn find_active(
        &self,
        user_id: i64,
        reason: &str,
    ) -> Result<Option<monitored_user::Model>, InternalError> {
        monitored_user::Entity::find()
            .filter(monitored_user::Column::UserId.eq(user_id))
            .filter(monitored_user::Column::Reason.eq(reason))
            .filter(monitored_user::Column::Status.eq(MonitoredStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_active_entry", e))
    }

    /// Create or refresh the active entry for a threshold breach
    ///
    /// Re-detection updates `actions_count` and `last_updated` on the
    /// existing active row; `first_detected` and `time_window` are only
    /// written on creation.
    pub async fn escalate(
        &self,
        user_id: i64,
        reason: &str,
        actions_count: i64,
        time_window: &str,
        now: i64,
    ) -> Result<Escalation, InternalError> {
        if let Some(existing) = self.find_active(user_id, reason).await? {
            let mut active: monitored_user::ActiveModel = existing.into();
            active.actions_count = Set(actions_count);
            active.last_updated = Set(now);

            let updated = active
                .update(&self.db)
                .await
                .map_err(|e| InternalError::database("refresh_monitored_entry", e))?;

            return Ok(Escalation::Refreshed(updated));
        }

        let fresh = monitored_user::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(user_id),
            reason: Set(reason.to_string()),
            actions_count: Set(actions_count),
            time_window: Set(time_window.to_string()),
            first_detected: Set(now),
            last_updated: Set(now),
            status: Set(MonitoredStatus::Active.as_str().to_string()),
        };

        let created = fresh
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_monitored_entry", e))?;

        Ok(Escalation::Created(created))
    }

    /// All active entries, most recently updated first
    pub async fn list_active(&self) -> Result<Vec<monitored_user::Model>, InternalError> {
        monitored_user::Entity::find()
            .filter(monitored_user::Column::Status.eq(MonitoredStatus::Active.as_str()))
            .order_by_desc(monitored_user::Column::LastUpdated)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_active_entries", e))
    }

    /// Operator status transition for one entry
    ///
    /// This is the only path out of `active`; the monitor itself never
    /// resolves entries.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::EntryNotFound` when the id does not exist
    pub async fn update_status(
        &self,
        entry_id: i64,
        status: MonitoredStatus,
        now: i64,
    ) -> Result<monitored_user::Model, InternalError> {
        let existing = monitored_user::Entity::find_by_id(entry_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_monitored_entry", e))?
            .ok_or(MonitorError::EntryNotFound { entry_id })?;

        let mut active: monitored_user::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.last_updated = Set(now);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_monitored_entry_status", e))?;

        tracing::info!(entry_id, status = %status, "monitored entry status updated");

        Ok(updated)
    }
}

impl std::fmt::Debug for MonitoredUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitoredUserStore").field("db", &"<connection>").finish()
    }
}
