//! Compositor-specific error types.

use thiserror::Error;

/// Errors that can occur while listing windows.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The query command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The query command exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Failed to parse compositor response.
    #[error("Failed to parse compositor response: {0}")]
    ParseError(#[source] serde_json::Error),
}

/// Errors that can occur while focusing a window.
#[derive(Error, Debug)]
pub enum FocusError {
    /// The window record carries no identifier to focus.
    #[error("Window has no identifier")]
    MissingId,

    /// The focus command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The compositor rejected the focus request (e.g. the window is gone).
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::ParseError(err)
    }
}

/// Human-readable exit status for error messages.
pub(crate) fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
