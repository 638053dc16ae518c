//! Result helpers for handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Turns a failure the client cannot act on, such as a header that will
/// not encode, into a bare 500 after logging it.
pub(crate) trait ResultExt<T> {
    /// `context` names the step that failed and is logged alongside the error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!(error = %source, "{context}");

            StatusError::internal_server_error()
        })
    }
}
