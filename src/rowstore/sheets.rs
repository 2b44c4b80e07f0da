use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::RowStoreError;
use crate::rowstore::traits::{CellWrite, RowStore};

/// Google Sheets v4 REST client.
///
/// Authentication is a bearer token supplied by the environment; obtaining
/// and refreshing it is the deployment's concern, not this service's.
pub struct SheetsRowStore {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

/// Shape of a `values.get` response. Trailing empty rows are omitted by the
/// API, and a row with an empty cell arrives as an empty inner list.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl SheetsRowStore {
    pub fn new(
        base_url: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, RowStoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RowStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .map(|detail| detail.message)
            .unwrap_or_else(|| status.to_string());
        Err(RowStoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn cell_text(row: &[serde_json::Value]) -> String {
        match row.first() {
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

#[async_trait]
impl RowStore for SheetsRowStore {
    async fn read_column(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        column: &str,
    ) -> Result<Vec<String>, RowStoreError> {
        let range = format!("{}!{}:{}", sheet_name, column, column);
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url, spreadsheet_id, range
        );

        debug!("Reading column {} of {}", column, sheet_name);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let value_range: ValueRange = response
            .json()
            .await
            .map_err(|e| RowStoreError::MalformedResponse(e.to_string()))?;

        Ok(value_range
            .values
            .iter()
            .map(|row| Self::cell_text(row))
            .collect())
    }

    async fn write_cells(
        &self,
        spreadsheet_id: &str,
        writes: &[CellWrite],
    ) -> Result<(), RowStoreError> {
        let url = format!(
            "{}/spreadsheets/{}/values:batchUpdate",
            self.base_url, spreadsheet_id
        );

        let data: Vec<serde_json::Value> = writes
            .iter()
            .map(|write| {
                serde_json::json!({
                    "range": write.range,
                    "values": [[write.value]],
                })
            })
            .collect();

        debug!("Writing {} cells to {}", writes.len(), spreadsheet_id);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({
                "valueInputOption": "USER_ENTERED",
                "data": data,
            }))
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }
}
