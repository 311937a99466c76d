// Stores layer - Data access and repository pattern
pub mod audit_store;
pub mod monitored_user_store;

pub use audit_store::AuditStore;
pub use monitored_user_store::{Escalation, MonitoredUserStore};
