use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::app_data::AppData;
use crate::errors::MonitorApiError;
use crate::monitor::ActivityMonitor;
use crate::types::dto::monitor::{
    MonitoredUserListResponse, MonitoredUserResponse, SimulateActivityRequest,
    SimulateActivityResponse, ThresholdPolicyListResponse, ThresholdPolicyResponse,
    UpdateStatusRequest, UpdateStatusResponse,
};
use crate::types::internal::{AuditAction, Claims, MonitoredStatus};

const DEFAULT_SIMULATION_COUNT: u64 = 15;

/// Operator console API endpoints (admin role required)
pub struct MonitorApi {
    app_data: Arc<AppData>,
    monitor: Arc<ActivityMonitor>,
}

impl MonitorApi {
    /// Create a new MonitorApi backed by the shared AppData and monitor
    pub fn new(app_data: Arc<AppData>, monitor: Arc<ActivityMonitor>) -> Self {
        Self { app_data, monitor }
    }

    fn require_admin(&self, auth: &BearerAuth) -> Result<Claims, MonitorApiError> {
        let claims = self
            .app_data
            .token_service
            .validate_bearer(&auth.0.token)
            .map_err(|_| MonitorApiError::unauthorized())?;

        if !claims.is_admin() {
            return Err(MonitorApiError::admin_required());
        }

        Ok(claims)
    }
}

/// API tags for operator console endpoints
#[derive(Tags)]
enum MonitorTags {
    /// Anomaly monitoring and triage
    Monitoring,
}

#[OpenApi(prefix_path = "/monitor")]
impl MonitorApi {
    /// List active monitored users, most recently updated first
    #[oai(path = "/users", method = "get", tag = "MonitorTags::Monitoring")]
    async fn list_monitored(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<MonitoredUserListResponse>, MonitorApiError> {
        self.require_admin(&auth)?;

        let entries = self.app_data.monitored_user_store.list_active().await?;

        Ok(Json(MonitoredUserListResponse {
            entries: entries.into_iter().map(MonitoredUserResponse::from).collect(),
        }))
    }

    /// Disposition one monitored entry
    ///
    /// The monitor never resolves entries on its own; this is the only
    /// path out of `active`.
    #[oai(path = "/users/:entry_id", method = "patch", tag = "MonitorTags::Monitoring")]
    async fn update_status(
        &self,
        auth: BearerAuth,
        entry_id: Path<i64>,
        body: Json<UpdateStatusRequest>,
    ) -> Result<Json<UpdateStatusResponse>, MonitorApiError> {
        self.require_admin(&auth)?;

        let status: MonitoredStatus = body
            .status
            .parse()
            .map_err(|_| MonitorApiError::invalid_status(&body.status))?;

        let entry = self
            .app_data
            .monitored_user_store
            .update_status(entry_id.0, status, Utc::now().timestamp())
            .await?;

        Ok(Json(UpdateStatusResponse {
            success: true,
            message: format!("Entry {} marked {}", entry.id, status),
            entry: entry.into(),
        }))
    }

    /// Inject a synthetic activity burst and sweep immediately
    ///
    /// Validates the detection pipeline end to end: inserts `count`
    /// records (default 15) for the user, randomly timestamped inside the
    /// trailing five minutes, then runs one sweep synchronously so the
    /// response reflects the resulting entries. A failure part-way leaves
    /// already-inserted records in place.
    #[oai(path = "/simulate", method = "post", tag = "MonitorTags::Monitoring")]
    async fn simulate_activity(
        &self,
        auth: BearerAuth,
        body: Json<SimulateActivityRequest>,
    ) -> Result<Json<SimulateActivityResponse>, MonitorApiError> {
        self.require_admin(&auth)?;

        let action = match &body.action {
            Some(tag) => tag
                .parse::<AuditAction>()
                .map_err(|_| MonitorApiError::invalid_action(tag))?,
            None => AuditAction::Create,
        };
        let count = body.count.unwrap_or(DEFAULT_SIMULATION_COUNT);

        let inserted = self
            .app_data
            .audit_store
            .insert_synthetic_burst(body.user_id, action, count)
            .await?;

        let sweep = self.monitor.run_sweep().await;

        let entries = self.app_data.monitored_user_store.list_active().await?;

        Ok(Json(SimulateActivityResponse {
            success: true,
            message: format!("Inserted {} synthetic {} records for user {}", inserted, action, body.user_id),
            records_inserted: inserted,
            sweep: sweep.into(),
            entries: entries.into_iter().map(MonitoredUserResponse::from).collect(),
        }))
    }

    /// The closed monitored-action set with thresholds
    #[oai(path = "/thresholds", method = "get", tag = "MonitorTags::Monitoring")]
    async fn thresholds(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<ThresholdPolicyListResponse>, MonitorApiError> {
        self.require_admin(&auth)?;

        let policies = self
            .app_data
            .monitor_settings
            .thresholds
            .iter()
            .map(|(action, policy)| ThresholdPolicyResponse {
                action: action.as_str().to_string(),
                count: policy.count,
                time_window_minutes: policy.time_window_minutes,
            })
            .collect();

        Ok(Json(ThresholdPolicyListResponse { policies }))
    }
}
