use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::timesheet::models::{BatchReport, Submission, SubmissionOutcome};

// ========== REQUEST MODELS ==========

/// One timesheet form submission from the mobile client. Field names match
/// the form's wire format.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTimesheetRequest {
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    pub starting_km: Option<String>,
    pub ending_km: Option<String>,
    pub shift_start: Option<String>,
    pub load_out: Option<String>,
    pub first_stop: Option<String>,
    pub last_stop: Option<String>,
    pub last_reattempt: Option<String>,
    pub station_return: Option<String>,
    pub clock_out: Option<String>,
    pub zone: Option<String>,
    pub uta: Option<String>,
    pub utl: Option<String>,
    pub nsl: Option<String>,
    pub bc: Option<String>,
    pub rej_dmg: Option<String>,
    pub oodt: Option<String>,
    pub fdd: Option<String>,
    pub extra: Option<String>,
}

fn clean(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl SubmitTimesheetRequest {
    /// Normalize into a `Submission`: the code is trimmed and must be
    /// non-empty; every other field is trimmed and dropped entirely when
    /// blank, so nothing downstream ever sees an empty string.
    pub fn into_submission(self) -> Result<Submission, AppError> {
        let code = self.code.trim().to_string();
        if code.is_empty() {
            return Err(AppError::InvalidInput("Code is required".to_string()));
        }

        Ok(Submission {
            code,
            starting_km: clean(self.starting_km),
            ending_km: clean(self.ending_km),
            shift_start: clean(self.shift_start),
            load_out: clean(self.load_out),
            first_stop: clean(self.first_stop),
            last_stop: clean(self.last_stop),
            last_reattempt: clean(self.last_reattempt),
            station_return: clean(self.station_return),
            clock_out: clean(self.clock_out),
            zone: clean(self.zone),
            uta: clean(self.uta),
            utl: clean(self.utl),
            nsl: clean(self.nsl),
            bc: clean(self.bc),
            rej_dmg: clean(self.rej_dmg),
            oodt: clean(self.oodt),
            fdd: clean(self.fdd),
            extra: clean(self.extra),
            received_at: Utc::now(),
        })
    }
}

/// Request to reconcile the pending batch into a spreadsheet
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    /// Falls back to the configured default spreadsheet when omitted.
    pub spreadsheet_id: Option<String>,
}

// ========== RESPONSE MODELS ==========

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PendingResponse {
    pub count: usize,
    pub submissions: Vec<Submission>,
}

/// Batch reconciliation report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    pub batch_id: Uuid,
    pub message: String,
    pub success: usize,
    pub failed: usize,
    pub cancelled: Vec<String>,
    pub results: Vec<SubmissionOutcome>,
}

impl BatchUpdateResponse {
    pub fn from_report(batch_id: Uuid, report: BatchReport) -> Self {
        let message = format!(
            "Updated {} timesheets. {} failed. {} codes cancelled (duplicates).",
            report.success,
            report.failed,
            report.cancelled.len()
        );
        Self {
            batch_id,
            message,
            success: report.success,
            failed: report.failed,
            cancelled: report.cancelled,
            results: report.results,
        }
    }
}

/// Service banner for the root route
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str) -> SubmitTimesheetRequest {
        SubmitTimesheetRequest {
            code: code.to_string(),
            starting_km: None,
            ending_km: None,
            shift_start: None,
            load_out: None,
            first_stop: None,
            last_stop: None,
            last_reattempt: None,
            station_return: None,
            clock_out: None,
            zone: None,
            uta: None,
            utl: None,
            nsl: None,
            bc: None,
            rej_dmg: None,
            oodt: None,
            fdd: None,
            extra: None,
        }
    }

    #[test]
    fn test_into_submission_trims_fields() {
        let mut req = request("  ab1  ");
        req.starting_km = Some(" 100 ".to_string());
        req.zone = Some("   ".to_string());

        let submission = req.into_submission().unwrap();
        assert_eq!(submission.code, "ab1");
        assert_eq!(submission.starting_km.as_deref(), Some("100"));
        // Whitespace-only fields are dropped, not kept as empty strings
        assert_eq!(submission.zone, None);
    }

    #[test]
    fn test_into_submission_rejects_blank_code() {
        let result = request("   ").into_submission();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
