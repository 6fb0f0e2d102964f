use crate::common::{SPREADSHEET_ID, test_config};
use chrono::Duration;
use mockito::{Matcher, Server, ServerGuard};
use sheets_client::prelude::*;

fn refreshable_token(server: &ServerGuard, access_token: &str, expired: bool) -> OAuthToken {
    let offset = if expired { -Duration::minutes(5) } else { Duration::hours(1) };
    OAuthToken {
        access_token: access_token.to_string(),
        refresh_token: Some("refresh-1".to_string()),
        expires_at: Some(Utc::now() + offset),
        token_type: "Bearer".to_string(),
        scopes: vec![SPREADSHEETS_SCOPE.to_string()],
        client_id: Some("client-id".to_string()),
        client_secret: Some("client-secret".to_string()),
        token_uri: Some(format!("{}/token", server.url())),
    }
}

async fn mock_token_endpoint(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "refresh-1".into()),
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"access_token": "fresh", "expires_in": 3599, "token_type": "Bearer"}).to_string(),
        )
        .create_async()
        .await
}

async fn mock_values(server: &mut ServerGuard, token: &str, status: usize) -> mockito::Mock {
    let body = if status == 200 {
        json!({"range": "Sheet1!A1:A1000", "majorDimension": "ROWS", "values": [["a"]]})
    } else {
        json!({"error": {"code": 401, "message": "Request had invalid authentication credentials.", "status": "UNAUTHENTICATED"}})
    };
    server
        .mock("GET", "/v4/spreadsheets/sheet-id/values/Sheet1!A:A")
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_rejected_token_is_refreshed_and_request_replayed() {
    let mut server = Server::new_async().await;
    let stale = mock_values(&mut server, "stale", 401).await;
    let fresh = mock_values(&mut server, "fresh", 200).await;
    let token_endpoint = mock_token_endpoint(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.credentials.token_cache_path = dir.path().join("token.json");

    let client = Client::with_token(config, refreshable_token(&server, "stale", false)).unwrap();
    let row = client
        .get_next_empty_cell_in_column(SPREADSHEET_ID, "Sheet1", "A")
        .await
        .unwrap();

    stale.assert_async().await;
    fresh.assert_async().await;
    token_endpoint.assert_async().await;
    assert_eq!(row, 2);

    let cached = OAuthToken::load(&dir.path().join("token.json")).await.unwrap();
    assert_eq!(cached.access_token, "fresh");
    assert_eq!(cached.refresh_token.as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_request() {
    let mut server = Server::new_async().await;
    let fresh = mock_values(&mut server, "fresh", 200).await;
    let token_endpoint = mock_token_endpoint(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.credentials.token_cache_path = dir.path().join("token.json");

    let client = Client::with_token(config, refreshable_token(&server, "old", true)).unwrap();
    client
        .get_values(SPREADSHEET_ID, "Sheet1!A:A")
        .await
        .unwrap();

    fresh.assert_async().await;
    token_endpoint.assert_async().await;
}

#[tokio::test]
async fn test_login_from_token_cache() {
    let mut server = Server::new_async().await;
    let cached = mock_values(&mut server, "cached", 200).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");
    refreshable_token(&server, "cached", false)
        .save(&path)
        .await
        .unwrap();

    let mut config = test_config(&server);
    config.credentials.token_cache_path = path;
    config.credentials.credentials_file = dir.path().join("missing-credentials.json");

    let client = Client::new(config).await.unwrap();
    client
        .get_values(SPREADSHEET_ID, "Sheet1!A:A")
        .await
        .unwrap();

    cached.assert_async().await;
}

#[tokio::test]
async fn test_static_access_token_skips_oauth() {
    let mut server = Server::new_async().await;
    let mock = mock_values(&mut server, "from-env", 200).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.credentials.access_token = Some("from-env".to_string());
    config.credentials.token_cache_path = dir.path().join("token.json");

    let client = Client::new(config).await.unwrap();
    client
        .get_values(SPREADSHEET_ID, "Sheet1!A:A")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!dir.path().join("token.json").exists());
}

#[tokio::test]
async fn test_refresh_failure_surfaces_oauth_error() {
    let mut server = Server::new_async().await;
    let _token_endpoint = server
        .mock("POST", "/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": "invalid_grant", "error_description": "Token has been expired or revoked."})
                .to_string(),
        )
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.credentials.token_cache_path = dir.path().join("token.json");

    let client = Client::with_token(config, refreshable_token(&server, "old", true)).unwrap();
    let err = client
        .get_values(SPREADSHEET_ID, "Sheet1!A:A")
        .await
        .unwrap_err();

    match err {
        AppError::OAuth(message) => assert!(message.contains("invalid_grant")),
        other => panic!("Expected OAuth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_credentials_file_is_io_error() {
    let server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server);
    config.credentials.token_cache_path = dir.path().join("token.json");
    config.credentials.credentials_file = dir.path().join("credentials.json");

    let err = Client::new(config).await.err().expect("login must fail");
    assert!(matches!(err, AppError::Io(_)));
}
