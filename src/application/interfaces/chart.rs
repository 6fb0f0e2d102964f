use crate::error::AppError;
use crate::model::chart::{ChartType, DataRange};
use crate::model::responses::BatchUpdateSpreadsheetResponse;
use async_trait::async_trait;

/// Interface for chart operations
#[async_trait]
pub trait ChartService: Send + Sync {
    /// Creates a basic chart over `data_range` on a new sheet
    ///
    /// The first column of the range is the domain, the next one the series.
    async fn create_graph(
        &self,
        spreadsheet_id: &str,
        graph_title: &str,
        data_range: &DataRange,
        graph_type: ChartType,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError>;

    /// Points an existing chart at a new data range
    async fn update_graph(
        &self,
        spreadsheet_id: &str,
        chart_id: i64,
        data_range: &DataRange,
    ) -> Result<BatchUpdateSpreadsheetResponse, AppError>;
}
