//! Structured reporting: serialization and `tracing` events.
//!
//! Neither path ever includes the data attached to a parse failure; use
//! [`Error::describe`] for that, and keep the output out of shared logs.

use serde::{Serialize, Serializer};

use crate::{recovery::ErrorKind, Error};

#[derive(Serialize)]
struct ErrorRecord<'a> {
    kind: ErrorKind,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
}

impl<'a> From<&'a Error> for ErrorRecord<'a> {
    fn from(err: &'a Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.message(),
            service_code: err.service_code(),
            service_message: err.service_message(),
            http_status: err.http_status(),
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorRecord::from(self).serialize(serializer)
    }
}

impl Error {
    /// Emits one `tracing` event for this error.
    ///
    /// Session and service failures are logged at `warn`, everything else
    /// at `error`.
    pub fn log(&self) {
        let kind = self.kind().as_str();
        let recovery = self.recovery().as_str();
        let code = self.service_code().unwrap_or_default();
        let http_status = self.http_status().unwrap_or_default();
        match self {
            Self::Service(_)
            | Self::InvalidParameters(_)
            | Self::NotLoggedIn(_)
            | Self::PleaseRefresh(_) => tracing::warn!(
                kind,
                code,
                http_status,
                recovery,
                "{}",
                self.message()
            ),
            _ => tracing::error!(kind, recovery, "{}", self.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_service_error() {
        let err = Error::invalid_parameters("Content not found")
            .with_code(1357031)
            .with_http_status(400);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "kind": "invalid_parameters",
                "message": "Content not found",
                "service_code": 1357031,
                "http_status": 400
            })
        );
    }

    #[test]
    fn serialize_user_error_has_no_service_fields() {
        assert_eq!(
            serde_json::to_value(Error::user("Invalid thread id")).unwrap(),
            json!({"kind": "user", "message": "Invalid thread id"})
        );
    }

    #[test]
    fn serialize_parse_error_drops_data() {
        let err = Error::parse_with_data("Unexpected shape", json!({"token": "s3cret"}));
        let out = serde_json::to_string(&err).unwrap();
        assert_eq!(out, r#"{"kind":"parse","message":"Unexpected shape"}"#);
    }
}
