use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use super::models::*;
use crate::{
    config::SheetLayout,
    error::{AppError, AppResult},
    rowstore::RowStore,
    timesheet::{reconciler::reconcile_batch, PendingStore},
};

#[derive(Clone)]
pub struct AppState {
    pub pending: Arc<PendingStore>,
    pub row_store: Arc<dyn RowStore>,
    pub layout: SheetLayout,
    pub default_spreadsheet_id: Option<String>,
}

/// Health check endpoint
/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Service banner
/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Timesheet API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Accept one timesheet submission into the pending batch
/// POST /api/timesheet/submit
pub async fn submit_timesheet(
    State(state): State<AppState>,
    Json(request): Json<SubmitTimesheetRequest>,
) -> AppResult<Json<SubmitResponse>> {
    request
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let submission = request.into_submission()?;
    info!("Timesheet submitted for code {}", submission.code);

    state.pending.append(submission).await;

    Ok(Json(SubmitResponse {
        success: true,
        message: "Timesheet submitted successfully. Waiting for batch update.".to_string(),
    }))
}

/// List submissions awaiting reconciliation
/// GET /api/timesheet/pending
pub async fn get_pending(State(state): State<AppState>) -> Json<PendingResponse> {
    let submissions = state.pending.snapshot().await;
    Json(PendingResponse {
        count: submissions.len(),
        submissions,
    })
}

/// Reconcile the pending batch into the spreadsheet
/// POST /api/timesheet/batch-update
///
/// Works on a frozen snapshot; submissions appended while the batch is in
/// flight stay pending for the next call. On a transport failure nothing is
/// removed from the pending store, so the whole batch can be retried.
pub async fn batch_update(
    State(state): State<AppState>,
    Json(request): Json<BatchUpdateRequest>,
) -> AppResult<Json<BatchUpdateResponse>> {
    let batch = state.pending.snapshot().await;
    if batch.is_empty() {
        return Err(AppError::EmptyBatch);
    }

    let spreadsheet_id = request
        .spreadsheet_id
        .or_else(|| state.default_spreadsheet_id.clone())
        .ok_or(AppError::MissingSpreadsheetId)?;

    let batch_id = Uuid::new_v4();
    info!(
        "🔄 Starting batch update {} for {} submissions -> {}",
        batch_id,
        batch.len(),
        spreadsheet_id
    );

    let report = reconcile_batch(state.row_store.as_ref(), &spreadsheet_id, &state.layout, &batch)
        .await
        .map_err(|e| {
            error!("❌ Batch update {} aborted: {}", batch_id, e);
            e
        })?;

    state.pending.discard_first(batch.len()).await;

    info!(
        "✓ Batch update {} completed: {} updated, {} failed, {} cancelled",
        batch_id,
        report.success,
        report.failed,
        report.cancelled.len()
    );

    Ok(Json(BatchUpdateResponse::from_report(batch_id, report)))
}

/// Drop all pending submissions without reconciling them
/// POST /api/timesheet/clear-pending
pub async fn clear_pending(State(state): State<AppState>) -> Json<SubmitResponse> {
    state.pending.clear().await;
    info!("Pending submissions cleared");
    Json(SubmitResponse {
        success: true,
        message: "Pending submissions cleared".to_string(),
    })
}
