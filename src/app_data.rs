use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::MonitorSettings;
use crate::services::TokenService;
use crate::stores::{AuditStore, MonitoredUserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API
/// layer and the monitor. This keeps store construction in one place and
/// makes API constructor signatures stable.
pub struct AppData {
    pub db: DatabaseConnection,
    pub monitor_settings: MonitorSettings,
    pub audit_store: Arc<AuditStore>,
    pub monitored_user_store: Arc<MonitoredUserStore>,
    pub token_service: Arc<TokenService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be connected and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection, jwt_secret: String, monitor_settings: MonitorSettings) -> Self {
        tracing::debug!("Creating stores...");
        let audit_store = Arc::new(AuditStore::new(db.clone()));
        let monitored_user_store = Arc::new(MonitoredUserStore::new(db.clone()));
        let token_service = Arc::new(TokenService::new(jwt_secret));
        tracing::debug!("Stores created");

        Self {
            db,
            monitor_settings,
            audit_store,
            monitored_user_store,
            token_service,
        }
    }
}
