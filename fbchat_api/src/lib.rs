//! Error taxonomy for the Messenger client.
//!
//! [`Error`] is the one type every client operation fails with. The
//! [`check`] functions turn failed responses into the right variant, and
//! [`Recovery`] tells calling code what to do about it.

pub mod check;
mod errors;
mod recovery;
mod report;

pub use self::errors::{
    Error, ParseError, Result, ServiceError, INVALID_PARAMETERS_CODES, NOT_LOGGED_IN_CODE,
    PLEASE_REFRESH_CODE, REPORT_INSTRUCTION,
};
pub use self::recovery::{ErrorKind, Recovery};
