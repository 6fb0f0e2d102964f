use serde_json::json;
use sheets_client::model::responses::{
    BatchUpdateSpreadsheetResponse, Channel, DriveFile, Spreadsheet, UpdateValuesResponse,
};

#[test]
fn spreadsheet_lookup_helpers() {
    let spreadsheet: Spreadsheet = serde_json::from_value(json!({
        "spreadsheetId": "abc",
        "properties": {"title": "Budget"},
        "sheets": [
            {"properties": {"sheetId": 0, "title": "Sheet1"}},
            {"properties": {"sheetId": 12, "title": "Chart1"},
             "charts": [{"chartId": 77, "spec": {"title": "Sales"}, "position": {"sheetId": 12}}]}
        ]
    }))
    .unwrap();

    assert_eq!(
        spreadsheet
            .sheet_by_title("Chart1")
            .and_then(|s| s.properties.sheet_id),
        Some(12)
    );
    assert!(spreadsheet.sheet_by_title("chart1").is_none());
    assert_eq!(
        spreadsheet
            .chart_by_id(77)
            .and_then(|c| c.spec.title.clone())
            .as_deref(),
        Some("Sales")
    );
    assert!(spreadsheet.chart_by_id(1).is_none());
}

#[test]
fn batch_update_replies() {
    let response: BatchUpdateSpreadsheetResponse = serde_json::from_value(json!({
        "spreadsheetId": "abc",
        "replies": [
            {},
            {"addSheet": {"properties": {"sheetId": 5, "title": "New"}}},
            {"addChart": {"chart": {"chartId": 9, "spec": {}, "position": {"newSheet": true}}}}
        ]
    }))
    .unwrap();

    assert_eq!(response.replies.len(), 3);
    assert_eq!(response.added_sheet_id(), Some(5));
    assert_eq!(response.added_chart_id(), Some(9));
}

#[test]
fn update_values_response() {
    let response: UpdateValuesResponse = serde_json::from_value(json!({
        "spreadsheetId": "abc",
        "updatedRange": "Sheet1!A4",
        "updatedRows": 1,
        "updatedColumns": 1,
        "updatedCells": 1
    }))
    .unwrap();
    assert_eq!(response.updated_range, "Sheet1!A4");
    assert!(response.updated_data.is_none());
}

#[test]
fn drive_file_and_channel() {
    let file: DriveFile =
        serde_json::from_value(json!({"modifiedTime": "2026-10-12T08:30:00.123Z"})).unwrap();
    assert_eq!(file.modified_time.timestamp(), 1_791_793_800);

    let channel: Channel = serde_json::from_value(json!({
        "kind": "api#channel",
        "id": "chan",
        "resourceId": "r1",
        "expiration": "1792000000000"
    }))
    .unwrap();
    assert_eq!(channel.resource_id, "r1");
    assert!(channel.token.is_none());
}
