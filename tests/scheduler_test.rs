mod common;

use std::time::Duration;

use autolog_backend::types::internal::AuditAction;

#[tokio::test]
async fn start_is_idempotent_and_stop_halts_ticking() {
    let (_audit, _monitored, monitor) = common::setup_monitor().await;

    let handle = monitor.clone().start().expect("first start should yield a handle");
    assert!(monitor.is_running());

    // Second start while running is a no-op
    assert!(monitor.clone().start().is_none());

    handle.stop();
    assert!(!handle.is_running());
    handle.stopped().await;
    assert!(!monitor.is_running());

    // After a clean stop the monitor can be started again
    let handle = monitor.clone().start().expect("restart after stop should work");
    handle.stop();
    handle.stopped().await;
}

#[tokio::test]
async fn stop_is_idempotent() {
    let (_audit, _monitored, monitor) = common::setup_monitor().await;

    let handle = monitor.clone().start().unwrap();
    handle.stop();
    handle.stop();
    handle.stopped().await;
}

#[tokio::test]
async fn scheduled_ticks_pick_up_new_activity() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    let handle = monitor.clone().start().unwrap();

    // Burst lands after start; a scheduled tick (50ms interval) must see it
    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();

    let mut entry_found = false;
    for _ in 0..40 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if !monitored.list_active().await.unwrap().is_empty() {
            entry_found = true;
            break;
        }
    }

    handle.stop();
    handle.stopped().await;

    assert!(entry_found, "scheduled sweep never escalated the burst");
    let active = monitored.list_active().await.unwrap();
    assert_eq!(active[0].user_id, 42);
}

#[tokio::test]
async fn no_sweep_runs_after_stop() {
    let (audit, monitored, monitor) = common::setup_monitor().await;

    let handle = monitor.clone().start().unwrap();
    handle.stop();
    handle.stopped().await;

    audit.insert_synthetic_burst(42, AuditAction::Create, 15).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(monitored.list_active().await.unwrap().is_empty());
}
