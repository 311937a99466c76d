// Internal types - shared between stores, monitor and API layers
pub mod action;
pub mod audit;
pub mod auth;
pub mod monitor;

pub use action::AuditAction;
pub use audit::NewAuditRecord;
pub use auth::Claims;
pub use monitor::MonitoredStatus;
