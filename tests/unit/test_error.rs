use reqwest::StatusCode;
use sheets_client::error::AppError;

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        code: 400,
        status: "INVALID_ARGUMENT".to_string(),
        message: "Unable to parse range".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "api error 400 (INVALID_ARGUMENT): Unable to parse range"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("rows are 1-based, got 0".to_string());
    assert_eq!(error.to_string(), "invalid input: rows are 1-based, got 0");
}

#[test]
fn test_app_error_display_oauth() {
    let error = AppError::OAuth("invalid_grant".to_string());
    assert_eq!(error.to_string(), "oauth error: invalid_grant");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_access_token_expired() {
    let error = AppError::AccessTokenExpired;
    assert_eq!(error.to_string(), "access token expired");
}
