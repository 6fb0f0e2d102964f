use sheets_client::model::retry::RetryConfig;

#[test]
fn test_retry_config_infinite() {
    let config = RetryConfig::infinite();
    assert_eq!(config.max_retries(), 0);
    assert!(config.allows_retry(0));
    assert!(config.allows_retry(u32::MAX));
    assert_eq!(config.delay_secs(), 10);
}

#[test]
fn test_retry_config_with_delay() {
    let config = RetryConfig::with_delay(3);
    assert_eq!(config.max_retries(), 0);
    assert!(config.allows_retry(1_000));
    assert_eq!(config.delay_secs(), 3);
}

#[test]
fn test_retry_config_with_max_retries() {
    let config = RetryConfig::with_max_retries(2);
    assert_eq!(config.max_retries(), 2);
    assert!(config.allows_retry(0));
    assert!(config.allows_retry(1));
    assert!(!config.allows_retry(2));
    assert_eq!(config.delay_secs(), 10);
}

#[test]
fn test_retry_config_zero_max_retries_is_infinite() {
    let config = RetryConfig::with_max_retries(0);
    assert_eq!(config.max_retries(), 0);
    assert!(config.allows_retry(0));
    assert!(config.allows_retry(50));
}

#[test]
fn test_retry_config_with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(3, 15);
    assert_eq!(config.max_retry_count, Some(3));
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay_secs(), 15);
}

// Every case touching SHEETS_MAX_RETRY_COUNT / SHEETS_RETRY_DELAY_SECS lives in
// this one test so parallel tests never see each other's values.
#[test]
fn test_retry_config_default_from_env() {
    unsafe {
        std::env::remove_var("SHEETS_MAX_RETRY_COUNT");
        std::env::remove_var("SHEETS_RETRY_DELAY_SECS");
    }
    let config = RetryConfig::default();
    assert_eq!(config.max_retries(), 3);
    assert!(config.allows_retry(2));
    assert!(!config.allows_retry(3));
    assert_eq!(config.delay_secs(), 10);

    unsafe {
        std::env::set_var("SHEETS_MAX_RETRY_COUNT", "0");
    }
    let config = RetryConfig::default();
    assert_eq!(config.max_retry_count, None);
    assert_eq!(config.max_retries(), 0);
    assert!(config.allows_retry(0));
    assert!(config.allows_retry(10_000));

    unsafe {
        std::env::set_var("SHEETS_MAX_RETRY_COUNT", "5");
        std::env::set_var("SHEETS_RETRY_DELAY_SECS", "2");
    }
    let config = RetryConfig::default();
    assert_eq!(config.max_retries(), 5);
    assert!(config.allows_retry(4));
    assert!(!config.allows_retry(5));
    assert_eq!(config.delay_secs(), 2);

    unsafe {
        std::env::remove_var("SHEETS_MAX_RETRY_COUNT");
        std::env::remove_var("SHEETS_RETRY_DELAY_SECS");
    }
}
