use std::time::Duration;

use crate::types::internal::AuditAction;

/// Threshold for one monitored action type
///
/// A user whose action count inside the trailing window meets or exceeds
/// `count` gets escalated to the monitored-users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    /// Minimum action count inside the window that triggers escalation
    pub count: u64,
    /// Trailing window length in minutes
    pub time_window_minutes: i64,
}

impl ThresholdPolicy {
    /// Inclusive lower bound of the detection window (unix seconds)
    pub fn window_start(&self, now: i64) -> i64 {
        now - self.time_window_minutes * 60
    }

    /// Window description stored on escalated entries, e.g. "5 minutes"
    pub fn time_window_label(&self) -> String {
        format!("{} minutes", self.time_window_minutes)
    }
}

/// Process-wide anomaly monitor configuration
///
/// Fixed at startup; thresholds are deliberately not runtime-mutable.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Cadence of the background detection sweep
    pub sweep_interval: Duration,
    /// Per-action-type thresholds, evaluated in order during a sweep
    pub thresholds: Vec<(AuditAction, ThresholdPolicy)>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(60),
            thresholds: vec![
                (AuditAction::Create, ThresholdPolicy { count: 10, time_window_minutes: 5 }),
                (AuditAction::Update, ThresholdPolicy { count: 15, time_window_minutes: 5 }),
                (AuditAction::Delete, ThresholdPolicy { count: 8, time_window_minutes: 5 }),
                (AuditAction::Login, ThresholdPolicy { count: 10, time_window_minutes: 10 }),
            ],
        }
    }
}

impl MonitorSettings {
    /// Policy for one action type, if it is monitored
    pub fn policy_for(&self, action: AuditAction) -> Option<ThresholdPolicy> {
        self.thresholds
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, policy)| *policy)
    }
}
