use super::*;

#[test]
fn unread_status_message_includes_code() {
    let err = EnhanceError::UnreadStatus { status: 502 };
    assert_eq!(err.to_string(), "unread count request failed: status 502");
}

#[test]
fn storage_message_names_operation_and_key() {
    let err = EnhanceError::Storage { op: "set", key: "draft_/t/1".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "storage set failed for draft_/t/1: QuotaExceededError");
}

#[test]
fn config_error_converts_from_serde() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = EnhanceError::from(parse);
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn collecting_reporter_keeps_order() {
    let collector = CollectingReporter::new();
    let report = collector.reporter();
    report(&EnhanceError::Clipboard("denied".to_owned()));
    report(&EnhanceError::WorkerRegistration("404".to_owned()));
    assert_eq!(
        collector.messages(),
        vec![
            "clipboard write failed: denied".to_owned(),
            "service worker registration failed: 404".to_owned(),
        ]
    );
}

#[test]
fn log_reporter_is_callable_without_logger() {
    let report = log_reporter();
    report(&EnhanceError::UnreadParse("missing field".to_owned()));
}
