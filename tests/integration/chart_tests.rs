use crate::common::{SPREADSHEET_ID, sheet_properties_body, test_client};
use mockito::{Matcher, Server, ServerGuard};
use sheets_client::prelude::*;

async fn mock_sheet_properties(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/v4/spreadsheets/sheet-id")
        .match_query(Matcher::UrlEncoded("fields".into(), "sheets.properties".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sheet_properties_body())
        .create_async()
        .await
}

fn source(start_column: u32) -> Value {
    json!({
        "sourceRange": {"sources": [{
            "sheetId": 77,
            "startRowIndex": 1,
            "endRowIndex": 10,
            "startColumnIndex": start_column,
            "endColumnIndex": 2
        }]}
    })
}

#[tokio::test]
async fn test_create_graph() {
    let mut server = Server::new_async().await;
    let _props = mock_sheet_properties(&mut server).await;
    let mock = server
        .mock("POST", "/v4/spreadsheets/sheet-id:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [{
                "addChart": {
                    "chart": {
                        "spec": {
                            "title": "My Graph",
                            "basicChart": {
                                "chartType": "LINE",
                                "legendPosition": "RIGHT_LEGEND",
                                "axis": [
                                    {"position": "BOTTOM_AXIS", "title": "X-axis"},
                                    {"position": "LEFT_AXIS", "title": "Y-axis"}
                                ],
                                "domains": [{"domain": source(0)}],
                                "series": [{"series": source(1), "targetAxis": "LEFT_AXIS"}]
                            }
                        },
                        "position": {"newSheet": true}
                    }
                }
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "spreadsheetId": SPREADSHEET_ID,
                "replies": [{"addChart": {"chart": {
                    "chartId": 123456,
                    "spec": {"title": "My Graph", "basicChart": {"chartType": "LINE"}},
                    "position": {"sheetId": 900}
                }}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let range = DataRange::new("Data", 1..10, 0..2);
    let response = client
        .create_graph(SPREADSHEET_ID, "My Graph", &range, ChartType::Line)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.added_chart_id(), Some(123456));
}

#[tokio::test]
async fn test_update_graph() {
    let mut server = Server::new_async().await;
    let _props = mock_sheet_properties(&mut server).await;
    let mock = server
        .mock("POST", "/v4/spreadsheets/sheet-id:batchUpdate")
        .match_body(Matcher::Json(json!({
            "requests": [{
                "updateChartSpec": {
                    "chartId": 123456,
                    "spec": {
                        "basicChart": {
                            "domains": [{"domain": source(0)}],
                            "series": [{"series": source(1), "targetAxis": "LEFT_AXIS"}]
                        }
                    }
                }
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"spreadsheetId": SPREADSHEET_ID, "replies": [{}]}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let range = DataRange::new("Data", 1..10, 0..2);
    let response = client
        .update_graph(SPREADSHEET_ID, 123456, &range)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.replies.len(), 1);
    assert_eq!(response.added_chart_id(), None);
}

#[tokio::test]
async fn test_create_graph_unknown_sheet() {
    let mut server = Server::new_async().await;
    let _props = mock_sheet_properties(&mut server).await;

    let client = test_client(&server);
    let range = DataRange::new("Elsewhere", 1..10, 0..2);
    let err = client
        .create_graph(SPREADSHEET_ID, "My Graph", &range, ChartType::Column)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_create_graph_rejects_single_column() {
    let server = Server::new_async().await;
    let client = test_client(&server);

    let range = DataRange::new("Data", 1..10, 1..2);
    let err = client
        .create_graph(SPREADSHEET_ID, "My Graph", &range, ChartType::Line)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
