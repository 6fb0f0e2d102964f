use crate::error::AppError;
use crate::model::requests::ValueRange;
use crate::model::responses::UpdateValuesResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for reading and writing cell values
#[async_trait]
pub trait ValuesService: Send + Sync {
    /// Writes one value into `sheet_name!{col}{row}`
    ///
    /// # Arguments
    /// * `row` - 1-based row number
    /// * `col` - Column letters, e.g. `"B"`
    /// * `value` - String, number, boolean or formula
    async fn write_cell(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        row: u32,
        col: &str,
        value: Value,
    ) -> Result<UpdateValuesResponse, AppError>;

    /// Reads the values of an A1 range
    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange, AppError>;

    /// Row number just below the last non-empty cell of a column
    async fn get_next_empty_cell_in_column(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        col: &str,
    ) -> Result<u32, AppError>;

    /// 1-based column index just right of the last non-empty cell of a row
    async fn get_next_empty_cell_in_row(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        row: u32,
    ) -> Result<u32, AppError>;
}
