use crate::common::{SPREADSHEET_ID, bearer, test_client};
use mockito::{Matcher, Server};
use sheets_client::prelude::*;

#[tokio::test]
async fn test_write_cell_user_entered() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v4/spreadsheets/sheet-id/values/Sheet1!B3")
        .match_query(Matcher::UrlEncoded(
            "valueInputOption".into(),
            "USER_ENTERED".into(),
        ))
        .match_header("authorization", bearer().as_str())
        .match_body(Matcher::Json(json!({"values": [["New Value"]]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "spreadsheetId": SPREADSHEET_ID,
                "updatedRange": "Sheet1!B3",
                "updatedRows": 1,
                "updatedColumns": 1,
                "updatedCells": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let response = client
        .write_cell(SPREADSHEET_ID, "Sheet1", 3, "B", json!("New Value"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.updated_range, "Sheet1!B3");
    assert_eq!(response.updated_cells, 1);
}

#[tokio::test]
async fn test_write_cell_rejects_bad_coordinates() {
    let server = Server::new_async().await;
    let client = test_client(&server);

    let err = client
        .write_cell(SPREADSHEET_ID, "Sheet1", 0, "A", json!(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = client
        .write_cell(SPREADSHEET_ID, "Sheet1", 1, "A1", json!(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_next_empty_cell_in_column() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!A:A")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "range": "Sheet1!A1:A1000",
                "majorDimension": "ROWS",
                "values": [["a"], [], ["c"]]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let row = client
        .get_next_empty_cell_in_column(SPREADSHEET_ID, "Sheet1", "A")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(row, 4);
}

#[tokio::test]
async fn test_next_empty_cell_in_empty_column() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!C:C")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"range": "Sheet1!C1:C1000", "majorDimension": "ROWS"}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let row = client
        .get_next_empty_cell_in_column(SPREADSHEET_ID, "Sheet1", "C")
        .await
        .unwrap();
    assert_eq!(row, 1);
}

#[tokio::test]
async fn test_next_empty_cell_in_row() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!1:1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "range": "Sheet1!A1:Z1",
                "majorDimension": "ROWS",
                "values": [["x", "y", 3]]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let col = client
        .get_next_empty_cell_in_row(SPREADSHEET_ID, "Sheet1", 1)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(col, 4);
    assert_eq!(column_letter(col).unwrap(), "D");
}

#[tokio::test]
async fn test_next_empty_cell_in_empty_row() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!5:5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"range": "Sheet1!A5:Z5", "majorDimension": "ROWS"}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let col = client
        .get_next_empty_cell_in_row(SPREADSHEET_ID, "Sheet1", 5)
        .await
        .unwrap();
    assert_eq!(col, 1);
}

#[tokio::test]
async fn test_rate_limit_gives_up_after_retries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!A:A")
        .with_status(429)
        .with_body(
            json!({"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}})
                .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .get_next_empty_cell_in_column(SPREADSHEET_ID, "Sheet1", "A")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn test_api_error_envelope() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Nope!A:A")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": {"code": 400, "message": "Unable to parse range: Nope!A:A", "status": "INVALID_ARGUMENT"}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .get_values(SPREADSHEET_ID, "Nope!A:A")
        .await
        .unwrap_err();

    match err {
        AppError::Api { code, status, message } => {
            assert_eq!(code, 400);
            assert_eq!(status, "INVALID_ARGUMENT");
            assert!(message.contains("Unable to parse range"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}
