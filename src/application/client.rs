/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! High level client for the Google Sheets API
//!
//! # Example
//! ```ignore
//! use sheets_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let row = client.get_next_empty_cell_in_column("spreadsheet-id", "Sheet1", "A").await?;
//! client.write_cell("spreadsheet-id", "Sheet1", row, "A", "New Value".into()).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::{ChartService, SpreadsheetService, ValuesService};
use crate::error::AppError;
use crate::model::auth::OAuthToken;
use crate::model::chart::{
    BasicChartSpec, ChartSpec, ChartType, DataRange, EmbeddedChart, EmbeddedObjectPosition,
};
use crate::model::http::HttpClient;
use crate::model::requests::{
    AddChartRequest, AddSheetRequest, BatchUpdateSpreadsheetRequest, Request, SheetProperties,
    UpdateChartSpecRequest, ValueRange, WatchRequest,
};
use crate::model::responses::{
    BatchUpdateSpreadsheetResponse, Channel, DriveFile, Spreadsheet, UpdateValuesResponse,
};
use crate::utils::a1::{cell_range, column_index, column_range, row_range};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client implementing every Sheets operation on top of one [`HttpClient`]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and authenticates immediately
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client that authenticates on its first request
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from an already issued token
    pub fn with_token(config: Config, token: OAuthToken) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::with_token(config, token)?);
        Ok(Self { http_client })
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: BatchUpdateSpreadsheetRequest,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError> {
        let segment = format!("{spreadsheet_id}:batchUpdate");
        let url = self.http_client.sheets_url(&["spreadsheets", &segment], &[])?;
        debug!("Batch update with {} requests", body.requests.len());
        self.http_client.post(url, body).await
    }
}

#[async_trait]
impl SpreadsheetService for Client {
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, AppError> {
        info!("Getting spreadsheet: {}", spreadsheet_id);
        let url = self.http_client.sheets_url(
            &["spreadsheets", spreadsheet_id],
            &[("includeGridData", "false")],
        )?;
        let spreadsheet: Spreadsheet = self.http_client.get(url).await?;
        debug!(
            "Spreadsheet '{}' has {} sheets",
            spreadsheet.properties.title,
            spreadsheet.sheets.len()
        );
        Ok(spreadsheet)
    }

    async fn get_sheet_id(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<i64, AppError> {
        let url = self.http_client.sheets_url(
            &["spreadsheets", spreadsheet_id],
            &[("fields", "sheets.properties")],
        )?;
        let spreadsheet: Spreadsheet = self.http_client.get(url).await?;
        spreadsheet
            .sheet_by_title(sheet_name)
            .and_then(|s| s.properties.sheet_id)
            .ok_or_else(|| {
                warn!("Sheet '{}' not found in {}", sheet_name, spreadsheet_id);
                AppError::NotFound
            })
    }

    async fn create_sheet(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError> {
        info!("Creating sheet '{}' in {}", sheet_title, spreadsheet_id);
        let request = Request::AddSheet(AddSheetRequest {
            properties: SheetProperties {
                title: sheet_title.to_string(),
                ..Default::default()
            },
        });
        let response = self
            .batch_update(spreadsheet_id, BatchUpdateSpreadsheetRequest::single(request))
            .await?;
        debug!("Sheet created with id {:?}", response.added_sheet_id());
        Ok(response)
    }

    async fn get_modified_time(&self, spreadsheet_id: &str) -> Result<DateTime<Utc>, AppError> {
        let url = self
            .http_client
            .drive_url(&["files", spreadsheet_id], &[("fields", "modifiedTime")])?;
        let file: DriveFile = self.http_client.get(url).await?;
        debug!("Spreadsheet {} modified at {}", spreadsheet_id, file.modified_time);
        Ok(file.modified_time)
    }

    async fn check_for_spreadsheet_updates(
        &self,
        spreadsheet_id: &str,
        last_checked_time: Option<DateTime<Utc>>,
    ) -> Result<bool, AppError> {
        let modified = self.get_modified_time(spreadsheet_id).await?;
        Ok(match last_checked_time {
            None => true,
            Some(last) => modified > last,
        })
    }

    async fn watch_changes(
        &self,
        spreadsheet_id: &str,
        callback_url: &str,
        sheet_name: &str,
        row_or_col: &str,
    ) -> Result<Option<Channel>, AppError> {
        let range = match row_or_col.parse::<u32>() {
            Ok(row) if row > 0 => row_range(sheet_name, row),
            _ => {
                column_index(row_or_col)?;
                column_range(sheet_name, row_or_col)
            }
        };

        let body = WatchRequest {
            id: nanoid!(),
            kind: "web_hook".to_string(),
            address: callback_url.to_string(),
            token: Some(format!("range={range}")),
        };
        info!("Watching {} ({}) via {}", spreadsheet_id, range, callback_url);

        let url = self
            .http_client
            .drive_url(&["files", spreadsheet_id, "watch"], &[])?;
        match self.http_client.post::<_, Channel>(url, body).await {
            Ok(channel) => Ok(Some(channel)),
            Err(AppError::RateLimitExceeded) => {
                warn!("Too many requests. Please try again later.");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ValuesService for Client {
    async fn write_cell(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        row: u32,
        col: &str,
        value: Value,
    ) -> Result<UpdateValuesResponse, AppError> {
        if row == 0 {
            return Err(AppError::InvalidInput("rows are 1-based, got 0".to_string()));
        }
        column_index(col)?;

        let range = cell_range(sheet_name, col, row);
        let option = self.http_client.config().value_input_option;
        info!("Writing {} to {}", value, range);

        let url = self.http_client.sheets_url(
            &["spreadsheets", spreadsheet_id, "values", &range],
            &[("valueInputOption", option.as_str())],
        )?;
        self.http_client.put(url, ValueRange::single(value)).await
    }

    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange, AppError> {
        let url = self
            .http_client
            .sheets_url(&["spreadsheets", spreadsheet_id, "values", range], &[])?;
        let values: ValueRange = self.http_client.get(url).await?;
        debug!("Read {} rows from {}", values.values.len(), range);
        Ok(values)
    }

    async fn get_next_empty_cell_in_column(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        col: &str,
    ) -> Result<u32, AppError> {
        column_index(col)?;
        let values = self
            .get_values(spreadsheet_id, &column_range(sheet_name, col))
            .await?;
        Ok(values.values.len() as u32 + 1)
    }

    async fn get_next_empty_cell_in_row(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        row: u32,
    ) -> Result<u32, AppError> {
        if row == 0 {
            return Err(AppError::InvalidInput("rows are 1-based, got 0".to_string()));
        }
        let values = self
            .get_values(spreadsheet_id, &row_range(sheet_name, row))
            .await?;
        let filled = values.values.first().map_or(0, Vec::len);
        Ok(filled as u32 + 1)
    }
}

#[async_trait]
impl ChartService for Client {
    async fn create_graph(
        &self,
        spreadsheet_id: &str,
        graph_title: &str,
        data_range: &DataRange,
        graph_type: ChartType,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError> {
        data_range.validate()?;
        let sheet_id = self
            .get_sheet_id(spreadsheet_id, &data_range.sheet_name)
            .await?;
        info!(
            "Creating {:?} chart '{}' from sheet {}",
            graph_type, graph_title, sheet_id
        );

        let chart = EmbeddedChart {
            chart_id: None,
            spec: ChartSpec {
                title: Some(graph_title.to_string()),
                basic_chart: Some(BasicChartSpec::styled(graph_type, sheet_id, data_range)),
            },
            position: EmbeddedObjectPosition {
                new_sheet: Some(true),
                sheet_id: None,
            },
        };
        let response = self
            .batch_update(
                spreadsheet_id,
                BatchUpdateSpreadsheetRequest::single(Request::AddChart(AddChartRequest {
                    chart,
                })),
            )
            .await?;
        debug!("Chart created with id {:?}", response.added_chart_id());
        Ok(response)
    }

    async fn update_graph(
        &self,
        spreadsheet_id: &str,
        chart_id: i64,
        data_range: &DataRange,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError> {
        data_range.validate()?;
        let sheet_id = self
            .get_sheet_id(spreadsheet_id, &data_range.sheet_name)
            .await?;
        info!("Updating chart {} in {}", chart_id, spreadsheet_id);

        let request = Request::UpdateChartSpec(UpdateChartSpecRequest {
            chart_id,
            spec: ChartSpec {
                title: None,
                basic_chart: Some(BasicChartSpec::data_only(sheet_id, data_range)),
            },
        });
        self.batch_update(spreadsheet_id, BatchUpdateSpreadsheetRequest::single(request))
            .await
    }
}
