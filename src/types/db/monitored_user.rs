use sea_orm::entity::prelude::*;

/// SeaORM entity for monitored_users table
///
/// One row per (user_id, reason) escalation. At most one row per pair is
/// in `active` status at a time; re-detection refreshes the existing row.
/// Rows leave `active` only through an operator status update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "monitored_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub reason: String,
    pub actions_count: i64,
    /// Human-readable window description, e.g. "5 minutes"
    pub time_window: String,
    pub first_detected: i64,
    pub last_updated: i64,
    /// "active" | "resolved" | "false_positive"
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
