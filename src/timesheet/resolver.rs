use crate::config::SheetLayout;
use crate::error::RowStoreError;
use crate::rowstore::RowStore;

/// Resolve a driver code to its 1-based row in the sheet's code column.
///
/// Matching is exact but case-insensitive: both the cell text and the code
/// are trimmed and uppercased before comparison. The scan starts at the
/// layout's first data row so header cells are never matched, and the first
/// matching row wins. Returns `None` when no row holds the code; transport
/// failures propagate untouched.
pub async fn find_driver_row(
    store: &dyn RowStore,
    spreadsheet_id: &str,
    layout: &SheetLayout,
    code: &str,
) -> Result<Option<i64>, RowStoreError> {
    let cells = store
        .read_column(spreadsheet_id, &layout.sheet_name, &layout.code_column)
        .await?;

    let wanted = code.trim().to_uppercase();
    let first_index = (layout.data_start_row - 1).max(0) as usize;

    for (index, cell) in cells.iter().enumerate().skip(first_index) {
        if cell.trim().to_uppercase() == wanted {
            return Ok(Some(index as i64 + 1));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::rowstore::CellWrite;

    struct FixedColumnStore {
        cells: Vec<String>,
    }

    #[async_trait]
    impl RowStore for FixedColumnStore {
        async fn read_column(
            &self,
            _spreadsheet_id: &str,
            _sheet_name: &str,
            _column: &str,
        ) -> Result<Vec<String>, RowStoreError> {
            Ok(self.cells.clone())
        }

        async fn write_cells(
            &self,
            _spreadsheet_id: &str,
            _writes: &[CellWrite],
        ) -> Result<(), RowStoreError> {
            Ok(())
        }
    }

    fn layout() -> SheetLayout {
        SheetLayout {
            sheet_name: "Timesheet".to_string(),
            code_column: "A".to_string(),
            data_start_row: 2,
        }
    }

    fn store(cells: &[&str]) -> FixedColumnStore {
        FixedColumnStore {
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_finds_row_case_insensitively() {
        let store = store(&["Code", "CX11", "DR22"]);
        let row = find_driver_row(&store, "sheet-1", &layout(), "cx11")
            .await
            .unwrap();
        assert_eq!(row, Some(2));
    }

    #[tokio::test]
    async fn test_trims_cell_text() {
        let store = store(&["Code", "  DR22  "]);
        let row = find_driver_row(&store, "sheet-1", &layout(), "dr22")
            .await
            .unwrap();
        assert_eq!(row, Some(2));
    }

    #[tokio::test]
    async fn test_header_row_never_matches() {
        // Row 1 is a header; a code equal to the header text must not
        // resolve to it.
        let store = store(&["CODE", "AB1"]);
        let row = find_driver_row(&store, "sheet-1", &layout(), "code")
            .await
            .unwrap();
        assert_eq!(row, None);
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let store = store(&["Code", "AB1", "AB1"]);
        let row = find_driver_row(&store, "sheet-1", &layout(), "AB1")
            .await
            .unwrap();
        assert_eq!(row, Some(2));
    }

    #[tokio::test]
    async fn test_missing_code_is_none() {
        let store = store(&["Code", "AB1"]);
        let row = find_driver_row(&store, "sheet-1", &layout(), "ZZ9")
            .await
            .unwrap();
        assert_eq!(row, None);
    }
}
