mod test_retry;
