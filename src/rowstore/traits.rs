use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RowStoreError;

/// One cell update, addressed by an A1 range like `Timesheet!B12`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellWrite {
    pub range: String,
    pub value: String,
}

/// External tabular store holding one row per driver code.
///
/// The reconciler only ever needs these two operations: read a whole column
/// to locate a code's row, and push a set of cell updates in one round trip.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Read the full text of one column on the named sheet. Index 0 of the
    /// returned list is sheet row 1; empty cells come back as empty strings.
    async fn read_column(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        column: &str,
    ) -> Result<Vec<String>, RowStoreError>;

    /// Write all cells in a single combined request. Values are interpreted
    /// as if the user typed them, so time-like and numeric strings are
    /// parsed by the sheet rather than stored as literal text.
    async fn write_cells(
        &self,
        spreadsheet_id: &str,
        writes: &[CellWrite],
    ) -> Result<(), RowStoreError>;
}
