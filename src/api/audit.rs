use std::sync::Arc;

use poem::Request;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::{Api, BearerAuth};
use crate::app_data::AppData;
use crate::errors::internal::AuditError;
use crate::errors::{AuditApiError, InternalError};
use crate::types::dto::audit::{
    AuditRecordResponse, RecordActionRequest, RecordActionResponse, UserLogsResponse,
};
use crate::types::internal::{AuditAction, Claims, NewAuditRecord};

/// Audit log API endpoints
///
/// Producers append records for the calling user; the console reads a
/// user's trail (own logs unless admin).
pub struct AuditApi {
    app_data: Arc<AppData>,
}

impl AuditApi {
    /// Create a new AuditApi backed by the shared AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    fn authenticate(&self, auth: &BearerAuth) -> Result<Claims, AuditApiError> {
        self.app_data
            .token_service
            .validate_bearer(&auth.0.token)
            .map_err(|_| AuditApiError::unauthorized())
    }
}

impl Api for AuditApi {}

/// API tags for audit endpoints
#[derive(Tags)]
enum AuditTags {
    /// Audit log access and ingestion
    AuditLog,
}

#[OpenApi(prefix_path = "/audit")]
impl AuditApi {
    /// Append an audit record for the calling user
    ///
    /// Producers call this after an authenticated mutating action
    /// completes. The record's user and IP come from the request itself,
    /// not the body.
    #[oai(path = "/logs", method = "post", tag = "AuditTags::AuditLog")]
    async fn record_action(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<RecordActionRequest>,
    ) -> Result<Json<RecordActionResponse>, AuditApiError> {
        let claims = self.authenticate(&auth)?;
        let user_id = claims.user_id().ok_or_else(AuditApiError::unauthorized)?;

        let action: AuditAction = body
            .action
            .parse()
            .map_err(|_| AuditApiError::invalid_action(&body.action))?;

        let mut record = NewAuditRecord::new(user_id, action);
        if let Some(entity_type) = &body.entity_type {
            record = record.entity(entity_type.clone(), body.entity_id);
        }
        if let Some(details) = &body.details {
            let details_json = serde_json::to_string(details)
                .map_err(|e| InternalError::Audit(AuditError::Serialization(e)))?;
            record = record.details(details_json);
        }
        if let Some(ip) = self.extract_ip_address(req) {
            record = record.ip_address(ip.to_string());
        }

        let inserted = self.app_data.audit_store.append(record).await?;

        Ok(Json(RecordActionResponse { record: inserted.into() }))
    }

    /// A user's audit trail, newest first
    ///
    /// Admins may read anyone's logs; other callers only their own.
    #[oai(path = "/logs/:user_id", method = "get", tag = "AuditTags::AuditLog")]
    async fn user_logs(
        &self,
        auth: BearerAuth,
        user_id: Path<i64>,
    ) -> Result<Json<UserLogsResponse>, AuditApiError> {
        let claims = self.authenticate(&auth)?;
        if !claims.is_admin() && claims.user_id() != Some(user_id.0) {
            return Err(AuditApiError::forbidden());
        }

        let records = self.app_data.audit_store.logs_for_user(user_id.0).await?;

        Ok(Json(UserLogsResponse {
            user_id: user_id.0,
            records: records.into_iter().map(AuditRecordResponse::from).collect(),
        }))
    }
}
