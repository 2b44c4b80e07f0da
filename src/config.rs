use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Shared secret checked against the `x-api-key` header. When unset the
    /// check is disabled (local development).
    pub api_key: Option<String>,
    /// Default target spreadsheet when a batch-update request names none.
    pub spreadsheet_id: Option<String>,
    pub sheets_api_base_url: String,
    pub sheets_access_token: String,
    pub row_store_timeout_secs: u64,
    pub layout: SheetLayout,
}

/// Where timesheet data lives inside the target spreadsheet. This is a schema
/// contract with the external sheet: one row per driver code, one fixed
/// column per tracked field.
#[derive(Debug, Deserialize, Clone)]
pub struct SheetLayout {
    /// Tab name inside the spreadsheet.
    pub sheet_name: String,
    /// Column letter holding driver codes.
    pub code_column: String,
    /// First row containing data (1-based). Rows above it are headers and
    /// are never matched against driver codes.
    pub data_start_row: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let row_store_timeout_secs = std::env::var("ROW_STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|e| {
                config::ConfigError::Message(format!("invalid ROW_STORE_TIMEOUT_SECS: {}", e))
            })?;

        let data_start_row = std::env::var("SHEET_DATA_START_ROW")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<i64>()
            .map_err(|e| {
                config::ConfigError::Message(format!("invalid SHEET_DATA_START_ROW: {}", e))
            })?;
        if data_start_row < 1 {
            return Err(config::ConfigError::Message(
                "SHEET_DATA_START_ROW must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            api_key: std::env::var("API_KEY").ok(),
            spreadsheet_id: std::env::var("SPREADSHEET_ID").ok(),
            sheets_api_base_url: std::env::var("SHEETS_API_BASE_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com/v4".to_string()),
            sheets_access_token: std::env::var("SHEETS_ACCESS_TOKEN").unwrap_or_default(),
            row_store_timeout_secs,
            layout: SheetLayout {
                sheet_name: std::env::var("SHEET_NAME")
                    .unwrap_or_else(|_| "Timesheet".to_string()),
                code_column: std::env::var("SHEET_CODE_COLUMN")
                    .unwrap_or_else(|_| "A".to_string()),
                data_start_row,
            },
        })
    }
}
