// API error types - poem-openapi ApiResponse enums
pub mod audit;
pub mod monitor;

pub use audit::AuditApiError;
pub use monitor::MonitorApiError;
