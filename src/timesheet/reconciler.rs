use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::SheetLayout;
use crate::error::RowStoreError;
use crate::rowstore::{CellWrite, RowStore};
use crate::timesheet::columns::{cell_range, zone_code, FIELD_COLUMNS};
use crate::timesheet::models::{BatchReport, Submission, SubmissionOutcome};
use crate::timesheet::resolver::find_driver_row;

const DUPLICATE_MESSAGE: &str = "Duplicate code - cancelled out (both submissions skipped)";

/// Turn one resolved submission into its list of cell writes.
///
/// Fields walk the static column table in sheet order. Absent or empty
/// fields produce no write, leaving the prior cell value intact. Zone names
/// go through the translation table; an unrecognized zone is written raw.
pub fn plan_writes(submission: &Submission, layout: &SheetLayout, row: i64) -> Vec<CellWrite> {
    let mut writes = Vec::new();

    for field in FIELD_COLUMNS {
        let Some(raw) = submission.field(field.name) else {
            continue;
        };
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }

        let value = if field.translated {
            match zone_code(value) {
                Some(code) => code,
                None => {
                    warn!("Unrecognized zone {:?} stored untranslated", value);
                    value
                }
            }
        } else {
            value
        };

        writes.push(CellWrite {
            range: cell_range(&layout.sheet_name, field.column, row),
            value: value.to_string(),
        });
    }

    writes
}

/// Resolve one submission and push its cell writes in a single combined
/// request.
///
/// Domain failures (code not found, nothing to write) come back as
/// unsuccessful outcomes; only transport failures escape as errors.
pub async fn apply_submission(
    store: &dyn RowStore,
    spreadsheet_id: &str,
    layout: &SheetLayout,
    submission: &Submission,
) -> Result<SubmissionOutcome, RowStoreError> {
    let Some(row) = find_driver_row(store, spreadsheet_id, layout, &submission.code).await? else {
        return Ok(SubmissionOutcome::failure(
            &submission.code,
            format!("Code \"{}\" not found in spreadsheet", submission.code),
        ));
    };

    let writes = plan_writes(submission, layout, row);
    if writes.is_empty() {
        return Ok(SubmissionOutcome::failure(
            &submission.code,
            "No data to update",
        ));
    }

    store.write_cells(spreadsheet_id, &writes).await?;

    Ok(SubmissionOutcome::success(
        &submission.code,
        row,
        format!("Updated row {} successfully", row),
    ))
}

/// Reconcile a frozen batch of submissions against the sheet.
///
/// A code appearing more than once in the batch cancels ALL of its
/// instances — a double submission is ambiguous and neither copy is
/// trusted. Surviving submissions are processed serially in insertion
/// order, one external write completing before the next resolution begins.
/// A transport failure aborts the remainder and propagates; writes already
/// issued are not rolled back.
pub async fn reconcile_batch(
    store: &dyn RowStore,
    spreadsheet_id: &str,
    layout: &SheetLayout,
    submissions: &[Submission],
) -> Result<BatchReport, RowStoreError> {
    let mut code_counts: HashMap<String, usize> = HashMap::new();
    for submission in submissions {
        *code_counts.entry(submission.code.to_uppercase()).or_insert(0) += 1;
    }

    // First-seen order keeps the cancelled list deterministic.
    let mut cancelled: Vec<String> = Vec::new();
    for submission in submissions {
        let canonical = submission.code.to_uppercase();
        if code_counts[&canonical] > 1 && !cancelled.contains(&canonical) {
            info!("Cancelling duplicate code {}", canonical);
            cancelled.push(canonical);
        }
    }

    let mut results: Vec<SubmissionOutcome> = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let canonical = submission.code.to_uppercase();
        if cancelled.contains(&canonical) {
            results.push(SubmissionOutcome::failure(&submission.code, DUPLICATE_MESSAGE));
            continue;
        }

        let outcome = apply_submission(store, spreadsheet_id, layout, submission).await?;
        results.push(outcome);
    }

    let success = results.iter().filter(|r| r.success).count();
    let failed = results.len() - success;

    Ok(BatchReport {
        success,
        failed,
        cancelled,
        results,
    })
}
