use crate::types::internal::AuditAction;

/// A not-yet-persisted audit record
///
/// Built by activity producers (the REST ingestion endpoint, or the
/// synthetic-injection hook) and handed to `AuditStore::append`. The
/// timestamp defaults to the insertion instant when left unset.
#[derive(Debug, Clone)]
pub struct NewAuditRecord {
    pub user_id: i64,
    pub action: AuditAction,
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    /// Unix seconds; `None` means "now" at insert time
    pub timestamp: Option<i64>,
}

impl NewAuditRecord {
    /// Create a new record draft for the given user and action
    pub fn new(user_id: i64, action: AuditAction) -> Self {
        Self {
            user_id,
            action,
            entity_type: None,
            entity_id: None,
            details: None,
            ip_address: None,
            timestamp: None,
        }
    }

    pub fn entity(mut self, entity_type: impl Into<String>, entity_id: Option<i64>) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = entity_id;
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Pin the record to an explicit instant instead of the insert time
    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
