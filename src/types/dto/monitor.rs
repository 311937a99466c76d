use poem_openapi::Object;

use crate::monitor::SweepSummary;
use crate::types::db::monitored_user;

/// One monitored-user entry as exposed to the console
#[derive(Object, Debug)]
pub struct MonitoredUserResponse {
    pub id: i64,
    pub user_id: i64,
    /// Escalation cause, e.g. "High frequency of CREATE operations"
    pub reason: String,
    /// Last-observed count inside the triggering window
    pub actions_count: i64,
    /// Window description, e.g. "5 minutes"
    pub time_window: String,
    /// Unix seconds, set on first breach
    pub first_detected: i64,
    /// Unix seconds, refreshed on every re-observation
    pub last_updated: i64,
    /// active | resolved | false_positive
    pub status: String,
}

impl From<monitored_user::Model> for MonitoredUserResponse {
    fn from(model: monitored_user::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            reason: model.reason,
            actions_count: model.actions_count,
            time_window: model.time_window,
            first_detected: model.first_detected,
            last_updated: model.last_updated,
            status: model.status,
        }
    }
}

/// Active monitored entries, most recently updated first
#[derive(Object, Debug)]
pub struct MonitoredUserListResponse {
    pub entries: Vec<MonitoredUserResponse>,
}

/// Request to disposition one monitored entry
#[derive(Object, Debug)]
pub struct UpdateStatusRequest {
    /// New status: active, resolved or false_positive
    pub status: String,
}

/// Response after a status update
#[derive(Object, Debug)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
    pub entry: MonitoredUserResponse,
}

/// Request to inject a synthetic activity burst
#[derive(Object, Debug)]
pub struct SimulateActivityRequest {
    /// Target user id
    pub user_id: i64,

    /// Action tag to inject; defaults to CREATE
    pub action: Option<String>,

    /// Number of records to insert; defaults to 15
    pub count: Option<u64>,
}

/// Outcome of one detection sweep
#[derive(Object, Debug)]
pub struct SweepSummaryResponse {
    pub actions_evaluated: u64,
    pub actions_failed: u64,
    pub entries_created: u64,
    pub entries_refreshed: u64,
    pub escalation_failures: u64,
    pub skipped: bool,
}

impl From<SweepSummary> for SweepSummaryResponse {
    fn from(summary: SweepSummary) -> Self {
        Self {
            actions_evaluated: summary.actions_evaluated as u64,
            actions_failed: summary.actions_failed as u64,
            entries_created: summary.entries_created as u64,
            entries_refreshed: summary.entries_refreshed as u64,
            escalation_failures: summary.escalation_failures as u64,
            skipped: summary.skipped,
        }
    }
}

/// Response after a synthetic injection and its synchronous sweep
#[derive(Object, Debug)]
pub struct SimulateActivityResponse {
    pub success: bool,
    pub message: String,
    pub records_inserted: u64,
    pub sweep: SweepSummaryResponse,
    /// Active monitored entries after the sweep
    pub entries: Vec<MonitoredUserResponse>,
}

/// One action type's threshold policy
#[derive(Object, Debug)]
pub struct ThresholdPolicyResponse {
    /// Action tag, e.g. CREATE
    pub action: String,
    /// Count at or above which a user is escalated
    pub count: u64,
    /// Trailing window length in minutes
    pub time_window_minutes: i64,
}

/// The closed monitored-action set with thresholds
#[derive(Object, Debug)]
pub struct ThresholdPolicyListResponse {
    pub policies: Vec<ThresholdPolicyResponse>,
}
