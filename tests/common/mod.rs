// Common test utilities for integration tests

use std::sync::Arc;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use autolog_backend::config::{MonitorSettings, ThresholdPolicy};
use autolog_backend::monitor::ActivityMonitor;
use autolog_backend::stores::{AuditStore, MonitoredUserStore};
use autolog_backend::types::internal::AuditAction;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates both stores over one in-memory database
pub async fn setup_stores() -> (DatabaseConnection, Arc<AuditStore>, Arc<MonitoredUserStore>) {
    let db = setup_test_db().await;
    let audit_store = Arc::new(AuditStore::new(db.clone()));
    let monitored_store = Arc::new(MonitoredUserStore::new(db.clone()));
    (db, audit_store, monitored_store)
}

/// Settings matching the documented detection scenario:
/// CREATE and DELETE at 10 per 5 minutes, fast sweep ticks
pub fn test_settings() -> MonitorSettings {
    MonitorSettings {
        sweep_interval: Duration::from_millis(50),
        thresholds: vec![
            (AuditAction::Create, ThresholdPolicy { count: 10, time_window_minutes: 5 }),
            (AuditAction::Delete, ThresholdPolicy { count: 10, time_window_minutes: 5 }),
        ],
    }
}

/// Monitor wired to real stores over a fresh in-memory database
pub async fn setup_monitor() -> (Arc<AuditStore>, Arc<MonitoredUserStore>, Arc<ActivityMonitor>) {
    let (_db, audit_store, monitored_store) = setup_stores().await;
    let monitor = Arc::new(ActivityMonitor::new(
        test_settings(),
        audit_store.clone(),
        monitored_store.clone(),
    ));
    (audit_store, monitored_store, monitor)
}
