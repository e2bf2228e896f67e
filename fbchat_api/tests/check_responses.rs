use fbchat_api::check::{check_content, check_graphql, check_http_status, check_payload};
use fbchat_api::{Error, Recovery, NOT_LOGGED_IN_CODE, PLEASE_REFRESH_CODE};
use serde_json::Value;

fn load_fixture(name: &str) -> Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn successful_send_passes_every_check() {
    let response = load_fixture("send_success.json");
    assert!(check_payload(&response).is_ok());
    assert!(check_graphql(&response).is_ok());
}

#[test]
fn logged_out_session() {
    let err = check_payload(&load_fixture("not_logged_in.json")).unwrap_err();
    assert!(matches!(err, Error::NotLoggedIn(_)));
    assert_eq!(err.service_code(), Some(NOT_LOGGED_IN_CODE));
    assert_eq!(err.service_message(), Some("Please log in to continue."));
    assert_eq!(
        err.message(),
        "Error #1357001 when sending request: Please log in to continue."
    );
    assert_eq!(err.recovery(), Recovery::Reauthenticate);
}

#[test]
fn stale_session() {
    let err = check_payload(&load_fixture("please_refresh.json")).unwrap_err();
    assert!(matches!(err, Error::PleaseRefresh(_)));
    assert_eq!(err.service_code(), Some(PLEASE_REFRESH_CODE));
    assert_eq!(err.recovery(), Recovery::RefreshSession);
}

#[test]
fn content_no_longer_available() {
    let err = check_payload(&load_fixture("invalid_parameters.json")).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));
    assert_eq!(err.service_code(), Some(1357031));
    assert!(err
        .service_message()
        .unwrap()
        .starts_with("The content you requested cannot be displayed"));
    assert_eq!(err.recovery(), Recovery::SurfaceToUser);
}

#[test]
fn payload_level_error_string() {
    let err = check_payload(&load_fixture("payload_error.json")).unwrap_err();
    assert!(matches!(err, Error::Service(_)));
    assert_eq!(
        err.message(),
        "Error when sending request: Couldn't send the message to this thread"
    );
    assert_eq!(err.service_code(), Some(0));
}

#[test]
fn error_object_with_debug_info() {
    let err = check_payload(&load_fixture("debug_info_error.json")).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(_)));
    assert_eq!(err.service_code(), Some(1545010));
    assert_eq!(
        err.message(),
        "Error #1545010 when sending request: Messages To This User Are Not Allowed"
    );
    assert_eq!(
        err.service_message(),
        Some("Messages To This User Are Not Allowed")
    );
}

#[test]
fn graphql_keeps_first_error_only() {
    let err = check_graphql(&load_fixture("graphql_errors.json")).unwrap_err();
    assert!(matches!(err, Error::Service(_)));
    assert_eq!(err.service_code(), Some(1675030));
    insta::assert_snapshot!(
        err.message(),
        @"GraphQL error #1675030: A server error field_exception occured. Check server logs for details. / field_exception"
    );
    assert!(!err.message().contains("Second error"));
}

#[test]
fn status_then_content_then_payload() {
    // The order a client applies the checks in: status, body, envelope.
    let result = check_http_status(200)
        .and_then(|_| check_content(""))
        .and_then(|_| check_payload(&load_fixture("send_success.json")));
    let err = result.unwrap_err();
    assert_eq!(err.message(), "Error when sending request: Got empty response");
    assert_eq!(err.http_status(), None);
}

#[test]
fn not_found_status() {
    let err = check_http_status(404).unwrap_err();
    assert_eq!(err.http_status(), Some(404));
    assert_eq!(err.recovery(), Recovery::Inspect);
    assert!(!err.is_retryable());
}
