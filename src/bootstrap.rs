use std::{sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::{
    api::handler::AppState,
    config::Config,
    error::AppResult,
    rowstore::{RowStore, SheetsRowStore},
    timesheet::PendingStore,
};

pub async fn initialize_app_state(config: &Config) -> AppResult<AppState> {
    info!("Initializing application components ...");

    let row_store: Arc<dyn RowStore> = Arc::new(SheetsRowStore::new(
        &config.sheets_api_base_url,
        &config.sheets_access_token,
        Duration::from_secs(config.row_store_timeout_secs),
    )?);
    info!(
        "✅ Row store client initialized for {}",
        config.sheets_api_base_url
    );

    let pending = Arc::new(PendingStore::new());

    if config.api_key.is_none() {
        warn!("⚠️  API_KEY not set - request authentication disabled");
    }
    if config.spreadsheet_id.is_none() {
        info!("No default SPREADSHEET_ID configured; batch updates must name one");
    }

    Ok(AppState {
        pending,
        row_store,
        layout: config.layout.clone(),
        default_spreadsheet_id: config.spreadsheet_id.clone(),
    })
}
