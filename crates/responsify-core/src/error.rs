//! Error types for the Responsify core library
//!
//! Building an envelope is total and cannot fail; the only fallible
//! operations are the ones that hand the envelope to the outside world
//! (wire-format construction and direct output).

use thiserror::Error;

/// Main error type for Responsify operations
#[derive(Error, Debug)]
pub enum Error {
    /// Wire-format response construction errors
    #[error("HTTP response error: {message}")]
    Http {
        message: String,
        #[source]
        source: http::Error,
    },

    /// Output stream errors from direct sends
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Conversion implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::Http {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
