/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::chart::{ChartSpec, EmbeddedChart};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// How input data is interpreted when written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Values are stored as-is
    Raw,
    /// Values are parsed as if typed into the UI (numbers, dates, formulas)
    #[default]
    UserEntered,
}

impl ValueInputOption {
    /// Query parameter value
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

impl FromStr for ValueInputOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RAW" => Ok(ValueInputOption::Raw),
            "USER_ENTERED" => Ok(ValueInputOption::UserEntered),
            other => Err(AppError::InvalidInput(format!(
                "unknown value input option: {other}"
            ))),
        }
    }
}

/// Whether value arrays are rows or columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    /// Outer array is rows
    Rows,
    /// Outer array is columns
    Columns,
}

/// Values of a range, used both to write and to read cells
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// A1 range covered by the values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Orientation of `values`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<MajorDimension>,
    /// Cell values; trailing empty rows and cells are omitted by the API
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Range holding a single value
    #[must_use]
    pub fn single(value: impl Into<Value>) -> Self {
        Self {
            range: None,
            major_dimension: None,
            values: vec![vec![value.into()]],
        }
    }
}

/// Size of a grid sheet
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    /// Number of rows
    #[serde(default)]
    pub row_count: u32,
    /// Number of columns
    #[serde(default)]
    pub column_count: u32,
    /// Frozen rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_row_count: Option<u32>,
    /// Frozen columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_column_count: Option<u32>,
}

/// Properties of a sheet
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Numeric id, assigned by the API when omitted on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    /// Title shown on the tab
    #[serde(default)]
    pub title: String,
    /// Position among the tabs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// `GRID`, `OBJECT` or `DATA_SOURCE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_type: Option<String>,
    /// Grid size, for grid sheets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,
}

/// Adds a sheet
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AddSheetRequest {
    /// Properties of the new sheet
    pub properties: SheetProperties,
}

/// Adds a chart
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AddChartRequest {
    /// Chart to add
    pub chart: EmbeddedChart,
}

/// Replaces the specification of an existing chart
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChartSpecRequest {
    /// Chart to update
    pub chart_id: i64,
    /// New specification
    pub spec: ChartSpec,
}

/// One operation of a spreadsheet batch update
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// `addSheet`
    AddSheet(AddSheetRequest),
    /// `addChart`
    AddChart(AddChartRequest),
    /// `updateChartSpec`
    UpdateChartSpec(UpdateChartSpecRequest),
}

/// Body of `spreadsheets/{id}:batchUpdate`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetRequest {
    /// Operations applied atomically, in order
    pub requests: Vec<Request>,
    /// Echo the updated spreadsheet in the reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_spreadsheet_in_response: Option<bool>,
}

impl BatchUpdateSpreadsheetRequest {
    /// Batch with a single operation
    #[must_use]
    pub fn single(request: Request) -> Self {
        Self {
            requests: vec![request],
            include_spreadsheet_in_response: None,
        }
    }
}

/// Body of Drive `files/{id}/watch`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchRequest {
    /// Caller chosen channel id
    pub id: String,
    /// Delivery mechanism, always `web_hook`
    #[serde(rename = "type")]
    pub kind: String,
    /// HTTPS endpoint receiving notifications
    pub address: String,
    /// Opaque value echoed in every notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
