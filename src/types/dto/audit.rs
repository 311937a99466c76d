use std::collections::HashMap;

use poem_openapi::Object;

use crate::types::db::audit_record;

/// One audit record as exposed to the console
#[derive(Object, Debug)]
pub struct AuditRecordResponse {
    pub id: i64,
    pub user_id: i64,
    /// Action tag, e.g. CREATE
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    /// Unix seconds
    pub timestamp: i64,
}

impl From<audit_record::Model> for AuditRecordResponse {
    fn from(model: audit_record::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            entity_type: model.entity_type,
            entity_id: model.entity_id,
            details: model.details,
            ip_address: model.ip_address,
            timestamp: model.timestamp,
        }
    }
}

/// A user's audit trail, newest first
#[derive(Object, Debug)]
pub struct UserLogsResponse {
    pub user_id: i64,
    pub records: Vec<AuditRecordResponse>,
}

/// Request to append an audit record for the calling user
#[derive(Object, Debug)]
pub struct RecordActionRequest {
    /// Action tag from the closed set (CREATE, UPDATE, DELETE, LOGIN, AUTHENTICATED)
    pub action: String,

    /// Kind of entity acted on, e.g. "Car"
    pub entity_type: Option<String>,

    /// Identifier of the entity acted on
    pub entity_id: Option<i64>,

    /// Structured context for the action, stored as JSON text
    pub details: Option<HashMap<String, serde_json::Value>>,
}

/// Response after appending an audit record
#[derive(Object, Debug)]
pub struct RecordActionResponse {
    pub record: AuditRecordResponse,
}
