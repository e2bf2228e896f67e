//! Error kinds and the recovery each one calls for.

use serde::Serialize;

use crate::Error;

/// Fieldless mirror of the [`Error`] variants, for logging and dispatch tables.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Generic,
    Parse,
    Service,
    InvalidParameters,
    NotLoggedIn,
    PleaseRefresh,
    User,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Parse => "parse",
            Self::Service => "service",
            Self::InvalidParameters => "invalid_parameters",
            Self::NotLoggedIn => "not_logged_in",
            Self::PleaseRefresh => "please_refresh",
            Self::User => "user",
        }
    }
}

/// What calling code should do about an error.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recovery {
    /// Give up on the operation.
    Abort,
    /// Give up, keeping the diagnostic dump for a bug report (never in persistent logs).
    ReportBug,
    /// Look at the service code and HTTP status before deciding.
    Inspect,
    /// Show the problem to the end user. Retrying the same input won't help.
    SurfaceToUser,
    /// Log in again.
    Reauthenticate,
    /// Run the session refresh flow.
    RefreshSession,
}

impl Recovery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::ReportBug => "report_bug",
            Self::Inspect => "inspect",
            Self::SurfaceToUser => "surface_to_user",
            Self::Reauthenticate => "reauthenticate",
            Self::RefreshSession => "refresh_session",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic(_) => ErrorKind::Generic,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Service(_) => ErrorKind::Service,
            Self::InvalidParameters(_) => ErrorKind::InvalidParameters,
            Self::NotLoggedIn(_) => ErrorKind::NotLoggedIn,
            Self::PleaseRefresh(_) => ErrorKind::PleaseRefresh,
            Self::User(_) => ErrorKind::User,
        }
    }

    pub fn recovery(&self) -> Recovery {
        match self {
            Self::Generic(_) => Recovery::Abort,
            Self::Parse(_) => Recovery::ReportBug,
            Self::Service(_) => Recovery::Inspect,
            Self::InvalidParameters(_) | Self::User(_) => Recovery::SurfaceToUser,
            Self::NotLoggedIn(_) => Recovery::Reauthenticate,
            Self::PleaseRefresh(_) => Recovery::RefreshSession,
        }
    }

    /// True when the session itself is the problem rather than the request.
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::NotLoggedIn(_) | Self::PleaseRefresh(_))
    }

    /// Whether the same request may succeed if sent again.
    ///
    /// A stale session can be retried once it has been refreshed, and a
    /// plain service error with a 5xx status is a server-side fault.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::PleaseRefresh(_) => true,
            Self::Service(e) => (500..600).contains(&e.http_status),
            _ => false,
        }
    }

    /// False only for local input errors, which are raised before any request goes out.
    pub fn network_attempted(&self) -> bool {
        !matches!(self, Self::User(_))
    }
}
