use crate::error::AppError;
use crate::model::responses::{BatchUpdateSpreadsheetResponse, Channel, Spreadsheet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Interface for spreadsheet level operations
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    /// Gets a spreadsheet with its properties and sheets (no grid data)
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, AppError>;

    /// Resolves a sheet title to its numeric sheet id
    ///
    /// # Returns
    /// * `Err(AppError::NotFound)` if no sheet has that title
    async fn get_sheet_id(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<i64, AppError>;

    /// Adds a new sheet (tab) titled `sheet_title`
    async fn create_sheet(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError>;

    /// Gets the instant the spreadsheet file was last modified
    async fn get_modified_time(&self, spreadsheet_id: &str) -> Result<DateTime<Utc>, AppError>;

    /// Checks whether the spreadsheet changed since `last_checked_time`
    ///
    /// Always `true` when `last_checked_time` is `None`.
    async fn check_for_spreadsheet_updates(
        &self,
        spreadsheet_id: &str,
        last_checked_time: Option<DateTime<Utc>>,
    ) -> Result<bool, AppError>;

    /// Registers a web hook notified when the spreadsheet changes
    ///
    /// `row_or_col` names the watched row or column (`"A"`, `"3"`); the
    /// resulting A1 range is carried in the channel token.
    ///
    /// # Returns
    /// * `Ok(Some(channel))` - The channel was created
    /// * `Ok(None)` - The API kept rejecting the call with too many requests
    async fn watch_changes(
        &self,
        spreadsheet_id: &str,
        callback_url: &str,
        sheet_name: &str,
        row_or_col: &str,
    ) -> Result<Option<Channel>, AppError>;
}
