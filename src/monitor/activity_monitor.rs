use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::time::MissedTickBehavior;

use crate::config::{MonitorSettings, ThresholdPolicy};
use crate::errors::InternalError;
use crate::monitor::{ActivitySource, MonitorHandle};
use crate::stores::{Escalation, MonitoredUserStore};
use crate::types::internal::AuditAction;

/// Outcome of one detection sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Action types evaluated this sweep
    pub actions_evaluated: usize,
    /// Action types whose evaluation failed and was skipped
    pub actions_failed: usize,
    /// Fresh monitored entries created
    pub entries_created: usize,
    /// Existing active entries refreshed in place
    pub entries_refreshed: usize,
    /// Per-user escalations that failed and were skipped
    pub escalation_failures: usize,
    /// True when the tick was dropped because a sweep was still running
    pub skipped: bool,
}

/// Sliding-window anomaly monitor over the audit log
///
/// Evaluates each configured action type sequentially: a grouped count
/// query over the trailing window, then an escalation upsert per user at
/// or above threshold. Failures are isolated per action type and per user;
/// the monitor never resolves an entry on its own, even when a user's
/// count falls back under threshold.
pub struct ActivityMonitor {
    settings: MonitorSettings,
    activity: Arc<dyn ActivitySource>,
    monitored: Arc<MonitoredUserStore>,
    running: Arc<AtomicBool>,
    sweep_active: Arc<AtomicBool>,
}

impl ActivityMonitor {
    pub fn new(
        settings: MonitorSettings,
        activity: Arc<dyn ActivitySource>,
        monitored: Arc<MonitoredUserStore>,
    ) -> Self {
        Self {
            settings,
            activity,
            monitored,
            running: Arc::new(AtomicBool::new(false)),
            sweep_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Escalation reason recorded for one action type
    pub fn reason_for(action: AuditAction) -> String {
        format!("High frequency of {} operations", action)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the periodic background sweep
    ///
    /// Returns `None` if the monitor is already running (idempotent start).
    /// The first sweep fires one full interval after start; a tick landing
    /// while a sweep is still active is skipped, not queued.
    pub fn start(self: Arc<Self>) -> Option<MonitorHandle> {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::warn!("activity monitor already running; start ignored");
            return None;
        }

        let monitor = Arc::clone(&self);
        let running = Arc::clone(&self.running);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(monitor.settings.sweep_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // An interval's first tick completes immediately; consume it so
            // the first sweep happens a full interval after start.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !monitor.running.load(Ordering::SeqCst) {
                    break;
                }
                let summary = monitor.run_sweep().await;
                tracing::debug!(?summary, "scheduled sweep finished");
            }

            tracing::info!("activity monitor task exited");
        });

        tracing::info!(
            interval_secs = self.settings.sweep_interval.as_secs(),
            monitored_actions = self.settings.thresholds.len(),
            "activity monitor started"
        );

        Some(MonitorHandle::new(running, task))
    }

    /// Run one full detection sweep
    ///
    /// Also invoked synchronously after a synthetic injection so the caller
    /// observes the resulting entries immediately. Guarded so two sweeps
    /// never overlap; the late one is skipped.
    pub async fn run_sweep(&self) -> SweepSummary {
        if self.sweep_active.swap(true, Ordering::SeqCst) {
            tracing::warn!("previous sweep still in progress; skipping");
            return SweepSummary { skipped: true, ..SweepSummary::default() };
        }

        let summary = self.sweep().await;
        self.sweep_active.store(false, Ordering::SeqCst);

        if summary.actions_failed > 0 || summary.escalation_failures > 0 {
            tracing::warn!(?summary, "sweep finished with failures");
        }

        summary
    }

    async fn sweep(&self) -> SweepSummary {
        let mut summary = SweepSummary::default();
        let now = Utc::now().timestamp();

        // Sequential on purpose: keeps log output ordered and failure
        // isolation per action type simple.
        for (action, policy) in &self.settings.thresholds {
            summary.actions_evaluated += 1;
            if let Err(e) = self.evaluate_action(*action, *policy, now, &mut summary).await {
                summary.actions_failed += 1;
                tracing::error!(
                    action = %action,
                    error = %e,
                    "threshold evaluation failed; action skipped for this sweep"
                );
            }
        }

        summary
    }

    /// Evaluate one action type's threshold and reconcile the monitored list
    async fn evaluate_action(
        &self,
        action: AuditAction,
        policy: ThresholdPolicy,
        now: i64,
        summary: &mut SweepSummary,
    ) -> Result<(), InternalError> {
        let window_start = policy.window_start(now);
        let offenders = self
            .activity
            .counts_exceeding(action, window_start, policy.count)
            .await?;

        if offenders.is_empty() {
            return Ok(());
        }

        let reason = Self::reason_for(action);
        let window_label = policy.time_window_label();

        for offender in offenders {
            let escalation = self
                .monitored
                .escalate(offender.user_id, &reason, offender.actions_count, &window_label, now)
                .await;

            match escalation {
                Ok(Escalation::Created(entry)) => {
                    summary.entries_created += 1;
                    tracing::warn!(
                        user_id = entry.user_id,
                        reason = %entry.reason,
                        actions_count = entry.actions_count,
                        "user escalated to monitored list"
                    );
                }
                Ok(Escalation::Refreshed(entry)) => {
                    summary.entries_refreshed += 1;
                    tracing::debug!(
                        user_id = entry.user_id,
                        actions_count = entry.actions_count,
                        "monitored entry refreshed"
                    );
                }
                Err(e) => {
                    // One user's failed upsert must not block the rest of
                    // this action type's result set.
                    summary.escalation_failures += 1;
                    tracing::error!(
                        user_id = offender.user_id,
                        action = %action,
                        error = %e,
                        "escalation failed; continuing with remaining users"
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_string_matches_stored_format() {
        assert_eq!(
            ActivityMonitor::reason_for(AuditAction::Create),
            "High frequency of CREATE operations"
        );
        assert_eq!(
            ActivityMonitor::reason_for(AuditAction::Delete),
            "High frequency of DELETE operations"
        );
    }
}
