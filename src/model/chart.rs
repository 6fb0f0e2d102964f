/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Chart schema shared by chart requests and spreadsheet responses

use crate::constants::{DEFAULT_X_AXIS_TITLE, DEFAULT_Y_AXIS_TITLE};
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of basic chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartType {
    /// Horizontal bars
    Bar,
    /// Line chart
    #[default]
    Line,
    /// Filled area
    Area,
    /// Vertical bars
    Column,
    /// Scatter plot
    Scatter,
    /// Mixed series types
    Combo,
    /// Stepped area
    SteppedArea,
    /// Any value this client does not know about
    #[serde(rename = "BASIC_CHART_TYPE_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl FromStr for ChartType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BAR" => Ok(ChartType::Bar),
            "LINE" => Ok(ChartType::Line),
            "AREA" => Ok(ChartType::Area),
            "COLUMN" => Ok(ChartType::Column),
            "SCATTER" => Ok(ChartType::Scatter),
            "COMBO" => Ok(ChartType::Combo),
            "STEPPED_AREA" => Ok(ChartType::SteppedArea),
            other => Err(AppError::InvalidInput(format!("unknown chart type: {other}"))),
        }
    }
}

/// Where the legend is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegendPosition {
    /// Below the chart
    BottomLegend,
    /// Left of the chart
    LeftLegend,
    /// Right of the chart
    RightLegend,
    /// Above the chart
    TopLegend,
    /// Legend entries drawn next to their data
    LabeledLegend,
    /// No legend
    NoLegend,
    /// Any value this client does not know about
    #[serde(rename = "BASIC_CHART_LEGEND_POSITION_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

/// Axis placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisPosition {
    /// Horizontal axis at the bottom
    BottomAxis,
    /// Vertical axis on the left
    LeftAxis,
    /// Vertical axis on the right
    RightAxis,
    /// Any value this client does not know about
    #[serde(rename = "BASIC_CHART_AXIS_POSITION_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

/// Zero-based, half-open rectangle on one sheet
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    /// Numeric sheet id (not the sheet title)
    #[serde(default)]
    pub sheet_id: i64,
    /// First row, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    /// Last row, exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    /// First column, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    /// Last column, exclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

/// Cells feeding a chart domain or series
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Source ranges
    pub source_range: ChartSourceRange,
}

/// List of grid ranges
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ChartSourceRange {
    /// Ranges concatenated in order
    pub sources: Vec<GridRange>,
}

impl From<GridRange> for ChartData {
    fn from(range: GridRange) -> Self {
        ChartData {
            source_range: ChartSourceRange {
                sources: vec![range],
            },
        }
    }
}

/// Chart axis with an optional title
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartAxis {
    /// Placement
    pub position: AxisPosition,
    /// Title text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Domain (category) data of a basic chart
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartDomain {
    /// Source cells
    pub domain: ChartData,
}

/// One plotted series of a basic chart
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartSeries {
    /// Source cells
    pub series: ChartData,
    /// Axis the series is plotted against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_axis: Option<AxisPosition>,
}

/// Bar, line, area, column, scatter, combo or stepped area chart
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartSpec {
    /// Chart kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    /// Legend placement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_position: Option<LegendPosition>,
    /// Axes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub axis: Vec<BasicChartAxis>,
    /// Category data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<BasicChartDomain>,
    /// Plotted data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<BasicChartSeries>,
}

impl BasicChartSpec {
    /// Domain and series wiring for a data range, without styling
    ///
    /// The domain covers the whole range and a single series, plotted on the
    /// left axis, starts one column to the right.
    #[must_use]
    pub fn data_only(sheet_id: i64, range: &DataRange) -> Self {
        BasicChartSpec {
            domains: vec![BasicChartDomain {
                domain: range.domain_range(sheet_id).into(),
            }],
            series: vec![BasicChartSeries {
                series: range.series_range(sheet_id).into(),
                target_axis: Some(AxisPosition::LeftAxis),
            }],
            ..Default::default()
        }
    }

    /// Styled chart of `chart_type`, right legend, titled X and Y axes
    #[must_use]
    pub fn styled(chart_type: ChartType, sheet_id: i64, range: &DataRange) -> Self {
        BasicChartSpec {
            chart_type: Some(chart_type),
            legend_position: Some(LegendPosition::RightLegend),
            axis: vec![
                BasicChartAxis {
                    position: AxisPosition::BottomAxis,
                    title: Some(DEFAULT_X_AXIS_TITLE.to_string()),
                },
                BasicChartAxis {
                    position: AxisPosition::LeftAxis,
                    title: Some(DEFAULT_Y_AXIS_TITLE.to_string()),
                },
            ],
            ..Self::data_only(sheet_id, range)
        }
    }
}

/// Chart specification
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// Chart title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Basic chart body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_chart: Option<BasicChartSpec>,
}

/// Where an embedded object is placed
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObjectPosition {
    /// Put the object on its own new sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_sheet: Option<bool>,
    /// Put the object on an existing sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
}

/// Chart embedded in a sheet
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedChart {
    /// Chart id, assigned by the API when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<i64>,
    /// Chart specification
    pub spec: ChartSpec,
    /// Placement
    #[serde(default)]
    pub position: EmbeddedObjectPosition,
}

/// Chart source described by sheet title and zero-based, half-open bounds
///
/// The first column is the domain; the series starts at the next column.
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct DataRange {
    /// Title of the sheet holding the data
    pub sheet_name: String,
    /// First row, inclusive
    pub start_row_index: u32,
    /// Last row, exclusive
    pub end_row_index: u32,
    /// First column, inclusive
    #[serde(alias = "start_col_index")]
    pub start_column_index: u32,
    /// Last column, exclusive
    #[serde(alias = "end_col_index")]
    pub end_column_index: u32,
}

impl DataRange {
    /// Creates a data range
    pub fn new(
        sheet_name: impl Into<String>,
        rows: std::ops::Range<u32>,
        columns: std::ops::Range<u32>,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            start_row_index: rows.start,
            end_row_index: rows.end,
            start_column_index: columns.start,
            end_column_index: columns.end,
        }
    }

    /// Rejects empty row spans and ranges without room for a series column
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sheet_name.is_empty() {
            return Err(AppError::InvalidInput("sheet name is empty".to_string()));
        }
        if self.start_row_index >= self.end_row_index {
            return Err(AppError::InvalidInput(format!(
                "empty row span {}..{}",
                self.start_row_index, self.end_row_index
            )));
        }
        if self.start_column_index.saturating_add(1) >= self.end_column_index {
            return Err(AppError::InvalidInput(format!(
                "column span {}..{} needs a domain column and at least one series column",
                self.start_column_index, self.end_column_index
            )));
        }
        Ok(())
    }

    /// Grid range of the domain
    #[must_use]
    pub fn domain_range(&self, sheet_id: i64) -> GridRange {
        GridRange {
            sheet_id,
            start_row_index: Some(self.start_row_index),
            end_row_index: Some(self.end_row_index),
            start_column_index: Some(self.start_column_index),
            end_column_index: Some(self.end_column_index),
        }
    }

    /// Grid range of the series
    #[must_use]
    pub fn series_range(&self, sheet_id: i64) -> GridRange {
        GridRange {
            start_column_index: Some(self.start_column_index + 1),
            ..self.domain_range(sheet_id)
        }
    }
}
