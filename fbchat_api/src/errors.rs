//! Error types for the Messenger client.
//!
//! Every failure the client can signal is a variant of [`Error`]. The four
//! service-side variants share a [`ServiceError`] payload mirroring what the
//! remote service sent back; the rest carry a message only, except
//! [`ParseError`] which keeps the response fragment that failed to parse.

use std::fmt;

use serde_json::Value;

/// Remote error code meaning the session has been invalidated.
pub const NOT_LOGGED_IN_CODE: i64 = 1357001;

/// Remote error code meaning the session went stale after a period of inactivity.
pub const PLEASE_REFRESH_CODE: i64 = 1357004;

/// Remote error codes meaning bad parameters, or content that is missing or gone.
pub const INVALID_PARAMETERS_CODES: &[i64] = &[1357031, 1545010, 1545003];

/// Appended to every parse failure message.
pub const REPORT_INSTRUCTION: &str = "Please report this, along with the data below!";

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the Messenger client.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A generic client failure.
    #[error("{0}")]
    Generic(String),
    /// A response did not have the expected structure.
    #[error(transparent)]
    Parse(ParseError),
    /// The remote service reported a failure.
    #[error(transparent)]
    Service(ServiceError),
    /// The remote service rejected the parameters, or the content is missing or gone.
    #[error(transparent)]
    InvalidParameters(ServiceError),
    /// The session has been logged out.
    #[error(transparent)]
    NotLoggedIn(ServiceError),
    /// The session expired after being inactive for too long (usually 1-2 days).
    #[error(transparent)]
    PleaseRefresh(ServiceError),
    /// Invalid input caught locally, before any request was sent.
    #[error("{0}")]
    User(String),
}

impl Error {
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// A parse failure with no response fragment attached.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(ParseError::new(message, None))
    }

    /// A parse failure carrying the fragment that could not be parsed.
    ///
    /// The fragment may hold private conversation data; it is only ever
    /// rendered by [`Error::describe`].
    pub fn parse_with_data(message: impl Into<String>, data: Value) -> Self {
        Self::Parse(ParseError::new(message, Some(data)))
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(ServiceError::new(message))
    }

    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters(ServiceError::new(message))
    }

    /// Defaults the service code to [`NOT_LOGGED_IN_CODE`].
    pub fn not_logged_in(message: impl Into<String>) -> Self {
        Self::NotLoggedIn(ServiceError::new(message).with_code(NOT_LOGGED_IN_CODE))
    }

    /// Defaults the service code to [`PLEASE_REFRESH_CODE`].
    pub fn please_refresh(message: impl Into<String>) -> Self {
        Self::PleaseRefresh(ServiceError::new(message).with_code(PLEASE_REFRESH_CODE))
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::User(message.into())
    }

    /// Sets the remote error code. Kinds without a service payload are returned unchanged.
    pub fn with_code(mut self, code: i64) -> Self {
        if let Some(service) = self.service_error_mut() {
            service.code = code;
        }
        self
    }

    /// Sets the remote (localized) error message. Kinds without a service payload are returned unchanged.
    pub fn with_service_message(mut self, service_message: impl Into<String>) -> Self {
        if let Some(service) = self.service_error_mut() {
            service.service_message = Some(service_message.into());
        }
        self
    }

    /// Sets the HTTP status of the failed request. Kinds without a service payload are returned unchanged.
    pub fn with_http_status(mut self, http_status: u16) -> Self {
        if let Some(service) = self.service_error_mut() {
            service.http_status = http_status;
        }
        self
    }

    /// The human-readable description, without any report instruction.
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(message) | Self::User(message) => message,
            Self::Parse(e) => &e.message,
            Self::Service(e)
            | Self::InvalidParameters(e)
            | Self::NotLoggedIn(e)
            | Self::PleaseRefresh(e) => &e.message,
        }
    }

    /// The service payload of any service-side kind.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e)
            | Self::InvalidParameters(e)
            | Self::NotLoggedIn(e)
            | Self::PleaseRefresh(e) => Some(e),
            _ => None,
        }
    }

    fn service_error_mut(&mut self) -> Option<&mut ServiceError> {
        match self {
            Self::Service(e)
            | Self::InvalidParameters(e)
            | Self::NotLoggedIn(e)
            | Self::PleaseRefresh(e) => Some(e),
            _ => None,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }

    pub fn service_code(&self) -> Option<i64> {
        self.service_error().map(|e| e.code)
    }

    pub fn service_message(&self) -> Option<&str> {
        self.service_error().and_then(|e| e.service_message.as_deref())
    }

    /// The HTTP status of the failed request, if the remote service reported one.
    pub fn http_status(&self) -> Option<u16> {
        self.service_error()
            .map(|e| e.http_status)
            .filter(|status| *status != 0)
    }

    /// Diagnostic rendering. Identical to `Display` except for parse
    /// failures, which also dump the offending data. Do not write the
    /// result to persistent logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Parse(e) => e.describe(),
            other => other.to_string(),
        }
    }
}

/// What the remote service reported alongside a failure.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
    /// The error code the service returned, `0` if none.
    pub code: i64,
    /// The error message the service returned, in the user's own language.
    pub service_message: Option<String>,
    /// The HTTP status of the response (eg. 404). Usually only set when the request failed.
    pub http_status: u16,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_service_message(mut self, service_message: impl Into<String>) -> Self {
        self.service_message = Some(service_message.into());
        self
    }

    pub fn with_http_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }
}

/// A response fragment that could not be parsed.
///
/// `data` may contain sensitive content. It is left out of `Display`,
/// `Debug` and serialization; only [`ParseError::describe`] renders it.
#[derive(thiserror::Error, Clone, PartialEq)]
#[error("{message}. {instruction}", instruction = REPORT_INSTRUCTION)]
pub struct ParseError {
    pub message: String,
    data: Option<Value>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Message, report instruction, then the serialized data on its own line if any.
    pub fn describe(&self) -> String {
        match &self.data {
            Some(data) => format!("{}\n{}", self, data),
            None => self.to_string(),
        }
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("message", &self.message)
            .field("data", &self.data.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
