/// Chart creation and update
pub mod chart;
/// Spreadsheet metadata, sheets and change detection
pub mod spreadsheet;
/// Cell values
pub mod values;

pub use chart::ChartService;
pub use spreadsheet::SpreadsheetService;
pub use values::ValuesService;
