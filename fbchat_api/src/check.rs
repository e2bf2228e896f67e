//! Turn failed responses into the matching [`Error`] kind.
//!
//! These checks only capture context. They take a status, a body or an
//! already-decoded JSON document and decide which error it represents;
//! fetching and decoding are left to the caller.

use serde_json::Value;

use crate::errors::{
    Error, Result, INVALID_PARAMETERS_CODES, NOT_LOGGED_IN_CODE, PLEASE_REFRESH_CODE,
};

/// Maps a remote error code to its error kind. The code is kept on the error.
pub fn classify_code(code: i64, message: impl Into<String>) -> Error {
    match code {
        NOT_LOGGED_IN_CODE => Error::not_logged_in(message),
        PLEASE_REFRESH_CODE => Error::please_refresh(message),
        c if INVALID_PARAMETERS_CODES.contains(&c) => {
            Error::invalid_parameters(message).with_code(c)
        }
        c => Error::service(message).with_code(c),
    }
}

/// Fails on any status of 400 or above.
pub fn check_http_status(status: u16) -> Result<()> {
    if status < 400 {
        return Ok(());
    }
    let mut message = format!("Error when sending request: Got {} response.", status);
    if status == 404 {
        message.push_str(
            " This is either because you specified an invalid URL, or because \
             you provided an invalid id (Facebook usually requires integer ids).",
        );
    }
    fail(Error::service(message).with_http_status(status))
}

/// Fails when the body is empty or only whitespace.
pub fn check_content(body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return fail(Error::service(
            "Error when sending request: Got empty response",
        ));
    }
    Ok(())
}

/// Inspects the error envelope of a regular (non-GraphQL) response.
pub fn check_payload(response: &Value) -> Result<()> {
    if let Some(error) = response
        .get("payload")
        .and_then(|payload| payload.get("error"))
        .filter(|error| is_set(error))
    {
        let rendered = render(error);
        let message = format!("Error when sending request: {}", rendered);
        let err = match as_code(error) {
            Some(code) => classify_code(code, message),
            None => Error::service(message).with_service_message(rendered),
        };
        return fail(err);
    }

    let error = match response.get("error") {
        Some(error) if is_set(error) => error,
        _ => return Ok(()),
    };

    if let Some(code) = as_code(error) {
        let description = response
            .get("errorDescription")
            .and_then(Value::as_str)
            .or_else(|| response.get("errorSummary").and_then(Value::as_str));
        let err = match description {
            Some(description) => classify_code(
                code,
                format!("Error #{} when sending request: {}", code, description),
            )
            .with_service_message(description),
            None => classify_code(code, format!("Error {} when sending request", code)),
        };
        return fail(err);
    }

    if let (Some(code), Some(debug_info)) = (
        error.get("code").and_then(as_code),
        error.get("debug_info"),
    ) {
        let debug_info = render(debug_info);
        return fail(
            classify_code(
                code,
                format!("Error #{} when sending request: {}", code, debug_info),
            )
            .with_service_message(debug_info),
        );
    }

    fail(Error::service(format!(
        "Error {} when sending request",
        render(error)
    )))
}

/// Inspects a GraphQL response. Only the first reported error is kept.
pub fn check_graphql(response: &Value) -> Result<()> {
    let first = match response.get("errors") {
        Some(Value::Array(errors)) => errors.first(),
        Some(error @ Value::Object(_)) => Some(error),
        _ => response.get("error").filter(|error| error.is_object()),
    };
    let error = match first {
        Some(error) => error,
        None => return Ok(()),
    };

    let code = error.get("code").and_then(as_code).unwrap_or_default();
    let summary = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut message = format!("GraphQL error #{}: {}", code, summary);
    if let Some(debug_info) = error.get("debug_info").filter(|info| !info.is_null()) {
        message.push_str(" / ");
        message.push_str(&render(debug_info));
    }

    let mut err = classify_code(code, message);
    if !summary.is_empty() {
        err = err.with_service_message(summary);
    }
    fail(err)
}

fn fail(err: Error) -> Result<()> {
    tracing::debug!(
        kind = err.kind().as_str(),
        code = err.service_code().unwrap_or_default(),
        http_status = err.http_status().unwrap_or_default(),
        "Response check failed"
    );
    Err(err)
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_i64() != Some(0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(true) => true,
    }
}

/// Codes arrive either as JSON numbers or as numeric strings.
fn as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
