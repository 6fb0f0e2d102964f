/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::model::chart::EmbeddedChart;
use crate::model::requests::{SheetProperties, ValueRange};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Spreadsheet level properties
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetProperties {
    /// Document title
    #[serde(default)]
    pub title: String,
    /// Locale, e.g. `en_US`
    #[serde(default)]
    pub locale: Option<String>,
    /// Time zone, e.g. `Europe/Madrid`
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Recalculation interval
    #[serde(default)]
    pub auto_recalc: Option<String>,
}

/// One sheet (tab) of a spreadsheet
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    /// Sheet properties
    #[serde(default)]
    pub properties: SheetProperties,
    /// Charts embedded in the sheet
    #[serde(default)]
    pub charts: Vec<EmbeddedChart>,
}

/// Spreadsheet resource returned by `spreadsheets/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Spreadsheet id
    #[serde(default)]
    pub spreadsheet_id: String,
    /// Document properties
    #[serde(default)]
    pub properties: SpreadsheetProperties,
    /// Sheets in tab order
    #[serde(default)]
    pub sheets: Vec<Sheet>,
    /// Browser URL
    #[serde(default)]
    pub spreadsheet_url: Option<String>,
}

impl Spreadsheet {
    /// Finds a sheet by its title
    #[must_use]
    pub fn sheet_by_title(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.properties.title == title)
    }

    /// Finds a chart by id across all sheets
    #[must_use]
    pub fn chart_by_id(&self, chart_id: i64) -> Option<&EmbeddedChart> {
        self.sheets
            .iter()
            .flat_map(|s| s.charts.iter())
            .find(|c| c.chart_id == Some(chart_id))
    }
}

/// Reply of `values/{range}` updates
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    /// Spreadsheet id
    #[serde(default)]
    pub spreadsheet_id: String,
    /// Range actually written
    #[serde(default)]
    pub updated_range: String,
    /// Rows touched
    #[serde(default)]
    pub updated_rows: u32,
    /// Columns touched
    #[serde(default)]
    pub updated_columns: u32,
    /// Cells touched
    #[serde(default)]
    pub updated_cells: u32,
    /// Written values, when requested
    #[serde(default)]
    pub updated_data: Option<ValueRange>,
}

/// Reply to an `addSheet` request
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSheetResponse {
    /// Properties of the created sheet
    pub properties: SheetProperties,
}

/// Reply to an `addChart` request
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddChartResponse {
    /// Created chart, including its id
    pub chart: EmbeddedChart,
}

/// Reply to one batch update operation; operations without output reply with `{}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Set for `addSheet`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetResponse>,
    /// Set for `addChart`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_chart: Option<AddChartResponse>,
}

/// Reply of `spreadsheets/{id}:batchUpdate`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetResponse {
    /// Spreadsheet id
    #[serde(default)]
    pub spreadsheet_id: String,
    /// One reply per request, in order
    #[serde(default)]
    pub replies: Vec<Reply>,
    /// Updated spreadsheet, when requested
    #[serde(default)]
    pub updated_spreadsheet: Option<Spreadsheet>,
}

impl BatchUpdateSpreadsheetResponse {
    /// Id of the first chart created by this batch
    #[must_use]
    pub fn added_chart_id(&self) -> Option<i64> {
        self.replies
            .iter()
            .filter_map(|r| r.add_chart.as_ref())
            .find_map(|c| c.chart.chart_id)
    }

    /// Id of the first sheet created by this batch
    #[must_use]
    pub fn added_sheet_id(&self) -> Option<i64> {
        self.replies
            .iter()
            .filter_map(|r| r.add_sheet.as_ref())
            .find_map(|s| s.properties.sheet_id)
    }
}

/// Drive file metadata, limited to the fields requested
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Last modification by anyone
    pub modified_time: DateTime<Utc>,
}

/// Drive notification channel
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Always `api#channel`
    #[serde(default)]
    pub kind: String,
    /// Channel id chosen by the caller
    #[serde(default)]
    pub id: String,
    /// Opaque id of the watched resource, needed to stop the channel
    #[serde(default)]
    pub resource_id: String,
    /// Version-specific URI of the watched resource
    #[serde(default)]
    pub resource_uri: Option<String>,
    /// Token echoed in notifications
    #[serde(default)]
    pub token: Option<String>,
    /// Expiration as milliseconds since the epoch, sent as a string
    #[serde(default)]
    pub expiration: Option<String>,
}

/// Error envelope shared by Google APIs
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorResponse {
    /// Error details
    pub error: GoogleError,
}

/// Body of a Google API error
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleError {
    /// HTTP status code
    pub code: u16,
    /// Message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. `RESOURCE_EXHAUSTED`
    #[serde(default)]
    pub status: String,
}
