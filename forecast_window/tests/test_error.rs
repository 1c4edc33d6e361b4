use forecast_window::error::WindowError;

#[test]
fn test_error_conversion() {
    let json_error = serde_json::from_str::<u32>("not a number").unwrap_err();
    let window_error = WindowError::from(json_error);

    match window_error {
        WindowError::Serialization(_) => assert!(true),
        _ => panic!("Expected Serialization variant"),
    }
}

#[test]
fn test_error_display() {
    let error = WindowError::InvalidConfiguration(
        "Bad dates passed. End:2020-01-02 00:00:00, future:2020-01-01 00:00:00.".to_string(),
    );
    let error_string = format!("{}", error);

    assert!(error_string.starts_with("Invalid configuration"));
    assert!(error_string.contains("future:2020-01-01 00:00:00"));

    let error = WindowError::InvalidDate("25/10/2019".to_string());
    assert_eq!(error.to_string(), "Invalid date: 25/10/2019");

    let error = WindowError::DateOutOfRange("+262142-12-31 plus 1 days".to_string());
    assert!(error.to_string().contains("Date out of range"));
}
