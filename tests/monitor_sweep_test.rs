mod common;

use std::sync::Arc;

use chrono::Utc;

use autolog_backend::errors::InternalError;
use autolog_backend::monitor::{ActivityMonitor, ActivitySource, UserActionCount};
use autolog_backend::types::internal::{AuditAction, MonitoredStatus};

const CREATE_REASON: &str = "High frequency of CREATE operations";

#[tokio::test]
async fn breach_creates_an_active_entry_with_the_observed_count() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();
    let summary = monitor.run_sweep().await;

    assert_eq!(summary.entries_created, 1);
    assert_eq!(summary.actions_failed, 0);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    let entry = &active[0];
    assert_eq!(entry.user_id, 42);
    assert_eq!(entry.reason, CREATE_REASON);
    assert_eq!(entry.actions_count, 15);
    assert_eq!(entry.time_window, "5 minutes");
    assert_eq!(entry.status, "active");
}

#[tokio::test]
async fn below_threshold_activity_creates_no_entry() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 9).await.unwrap();
    let summary = monitor.run_sweep().await;

    assert_eq!(summary.entries_created, 0);
    assert!(monitored.list_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn repeat_sweep_without_new_activity_is_idempotent() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();
    monitor.run_sweep().await;
    let second = monitor.run_sweep().await;

    // Same entry refreshed, never duplicated
    assert_eq!(second.entries_created, 0);
    assert_eq!(second.entries_refreshed, 1);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].actions_count, 15);
}

#[tokio::test]
async fn continued_activity_refreshes_the_count_on_the_same_row() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();
    monitor.run_sweep().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 5).await.unwrap();
    let summary = monitor.run_sweep().await;

    assert_eq!(summary.entries_created, 0);
    assert_eq!(summary.entries_refreshed, 1);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].actions_count, 20);
}

#[tokio::test]
async fn subsided_activity_is_never_auto_resolved() {
    let (_audit, monitored, monitor) = common::setup_monitor().await;
    let now = Utc::now().timestamp();

    // Standing escalation from an earlier breach whose records have since
    // aged out of the window: the audit log is empty for this sweep
    let entry = monitored
        .escalate(42, CREATE_REASON, 15, "5 minutes", now - 600)
        .await
        .unwrap()
        .entry()
        .clone();

    let summary = monitor.run_sweep().await;
    assert_eq!(summary.entries_created, 0);
    assert_eq!(summary.entries_refreshed, 0);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, entry.id);
    assert_eq!(active[0].status, "active");
    assert_eq!(active[0].actions_count, 15);
    assert_eq!(active[0].last_updated, now - 600);
}

#[tokio::test]
async fn counts_are_per_action_type() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    // 6 CREATE + 6 DELETE: neither reaches its threshold of 10
    audit.insert_synthetic_burst(42, AuditAction::Create, 6).await.unwrap();
    audit.insert_synthetic_burst(42, AuditAction::Delete, 6).await.unwrap();
    monitor.run_sweep().await;

    assert!(monitored.list_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn operator_resolution_sticks_until_the_next_breach() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();
    monitor.run_sweep().await;

    let entry = monitored.list_active().await.unwrap()[0].clone();
    monitored
        .update_status(entry.id, MonitoredStatus::FalsePositive, Utc::now().timestamp())
        .await
        .unwrap();

    // Activity still over threshold: a new sweep re-escalates into a fresh
    // entry rather than reviving the dispositioned one
    let summary = monitor.run_sweep().await;
    assert_eq!(summary.entries_created, 1);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_ne!(active[0].id, entry.id);
}

/// Scripted source: CREATE queries blow up, DELETE queries return one
/// offender. Stands in for a store whose query path fails per action type.
struct FaultySource;

#[async_trait::async_trait]
impl ActivitySource for FaultySource {
    async fn counts_exceeding(
        &self,
        action: AuditAction,
        _window_start: i64,
        _min_count: u64,
    ) -> Result<Vec<UserActionCount>, InternalError> {
        match action {
            AuditAction::Create => Err(InternalError::database(
                "count_actions_by_user",
                sea_orm::DbErr::Custom("query failed".to_string()),
            )),
            AuditAction::Delete => {
                Ok(vec![UserActionCount { user_id: 7, actions_count: 11 }])
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[tokio::test]
async fn failure_in_one_action_type_does_not_block_the_others() {
    let (_db, _audit, monitored) = common::setup_stores().await;
    let monitor = Arc::new(ActivityMonitor::new(
        common::test_settings(),
        Arc::new(FaultySource),
        monitored.clone(),
    ));

    let summary = monitor.run_sweep().await;

    assert_eq!(summary.actions_evaluated, 2);
    assert_eq!(summary.actions_failed, 1);
    assert_eq!(summary.entries_created, 1);

    let active = monitored.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].user_id, 7);
    assert_eq!(active[0].reason, "High frequency of DELETE operations");
}
