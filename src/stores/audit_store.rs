use chrono::Utc;
use rand::Rng;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::internal::AuditError;
use crate::errors::InternalError;
use crate::monitor::{ActivitySource, UserActionCount};
use crate::types::db::audit_record;
use crate::types::internal::{AuditAction, NewAuditRecord};

/// Synthetic bursts are spread over the trailing five minutes so they land
/// inside every default detection window.
const SYNTHETIC_WINDOW_SECS: i64 = 300;

/// Repository for the append-only audit log
///
/// Producers append through this store; the anomaly monitor reads grouped
/// counts through the `ActivitySource` impl. Records are never updated or
/// deleted.
pub struct AuditStore {
    db: DatabaseConnection,
}

impl AuditStore {
    /// Create a new AuditStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one audit record
    ///
    /// The timestamp defaults to the insertion instant when the draft does
    /// not pin one explicitly.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the database insert fails
    pub async fn append(&self, record: NewAuditRecord) -> Result<audit_record::Model, InternalError> {
        let model = audit_record::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(record.user_id),
            action: Set(record.action.as_str().to_string()),
            entity_type: Set(record.entity_type),
            entity_id: Set(record.entity_id),
            details: Set(record.details),
            ip_address: Set(record.ip_address),
            timestamp: Set(record.timestamp.unwrap_or_else(|| Utc::now().timestamp())),
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("append_audit_record", e))?;

        Ok(inserted)
    }

    /// All audit records for one user, newest first
    pub async fn logs_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<audit_record::Model>, InternalError> {
        audit_record::Entity::find()
            .filter(audit_record::Column::UserId.eq(user_id))
            .order_by_desc(audit_record::Column::Timestamp)
            .order_by_desc(audit_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_user_audit_records", e))
    }

    /// Insert a burst of synthetic records for one user/action
    ///
    /// Timestamps are uniformly randomized inside the trailing five-minute
    /// window so the burst is visible to the next detection sweep. There is
    /// no rollback: a failure mid-burst leaves the already-inserted rows in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if `count` is zero or the insert fails
    pub async fn insert_synthetic_burst(
        &self,
        user_id: i64,
        action: AuditAction,
        count: u64,
    ) -> Result<u64, InternalError> {
        if count == 0 {
            return Err(AuditError::InvalidBurst("count must be at least 1".to_string()).into());
        }

        let now = Utc::now().timestamp();

        // ThreadRng is !Send, so it must not live across the insert await
        let offsets: Vec<i64> = {
            let mut rng = rand::rng();
            (0..count).map(|_| rng.random_range(0..SYNTHETIC_WINDOW_SECS)).collect()
        };

        let models: Vec<audit_record::ActiveModel> = offsets
            .into_iter()
            .map(|offset| {
                audit_record::ActiveModel {
                    id: sea_orm::ActiveValue::NotSet,
                    user_id: Set(user_id),
                    action: Set(action.as_str().to_string()),
                    entity_type: Set(Some("Simulation".to_string())),
                    entity_id: Set(None),
                    details: Set(Some("Synthetic activity for monitor validation".to_string())),
                    ip_address: Set(Some("127.0.0.1".to_string())),
                    timestamp: Set(now - offset),
                }
            })
            .collect();

        audit_record::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_synthetic_burst", e))?;

        tracing::info!(user_id, action = %action, count, "synthetic activity burst inserted");

        Ok(count)
    }

    /// Grouped count query backing threshold detection
    ///
    /// Equivalent to `GROUP BY user_id HAVING COUNT(*) >= min_count` over
    /// records of one action type with `timestamp >= window_start`
    /// (inclusive lower bound).
    pub async fn counts_exceeding(
        &self,
        action: AuditAction,
        window_start: i64,
        min_count: u64,
    ) -> Result<Vec<UserActionCount>, InternalError> {
        audit_record::Entity::find()
            .select_only()
            .column(audit_record::Column::UserId)
            .column_as(audit_record::Column::Id.count(), "actions_count")
            .filter(audit_record::Column::Action.eq(action.as_str()))
            .filter(audit_record::Column::Timestamp.gte(window_start))
            .group_by(audit_record::Column::UserId)
            .having(Expr::expr(audit_record::Column::Id.count()).gte(min_count as i64))
            .into_model::<UserActionCount>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("count_actions_by_user", e))
    }
}

#[async_trait::async_trait]
impl ActivitySource for AuditStore {
    async fn counts_exceeding(
        &self,
        action: AuditAction,
        window_start: i64,
        min_count: u64,
    ) -> Result<Vec<UserActionCount>, InternalError> {
        AuditStore::counts_exceeding(self, action, window_start, min_count).await
    }
}

impl std::fmt::Debug for AuditStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditStore").field("db", &"<connection>").finish()
    }
}
