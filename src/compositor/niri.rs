//! niri client built on the `niri msg` command line interface.

use super::error::describe_status;
use super::{Compositor, FocusError, QueryError, WindowRecord};
use crate::process::{CommandRunner, SystemRunner};
use tracing::debug;

const QUERY_ARGS: [&str; 3] = ["msg", "-j", "windows"];

/// niri client driven through `niri msg`.
pub struct NiriCompositor<R = SystemRunner> {
    binary: String,
    runner: R,
}

impl NiriCompositor {
    /// Create a client that spawns real processes of `binary`.
    pub fn new(binary: impl Into<String>) -> Self {
        Self::with_runner(binary, SystemRunner)
    }
}

impl<R: CommandRunner> NiriCompositor<R> {
    pub fn with_runner(binary: impl Into<String>, runner: R) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.binary.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<R: CommandRunner> Compositor for NiriCompositor<R> {
    fn list_windows(&self) -> Result<Vec<WindowRecord>, QueryError> {
        let output = self
            .runner
            .run(&self.binary, &QUERY_ARGS)
            .map_err(|source| QueryError::SpawnFailed {
                command: self.command_line(&QUERY_ARGS),
                source,
            })?;

        if !output.success() {
            return Err(QueryError::CommandFailed {
                command: self.command_line(&QUERY_ARGS),
                status: describe_status(output.code),
                stderr: output.stderr_text(),
            });
        }

        let windows: Vec<WindowRecord> = serde_json::from_slice(&output.stdout)?;
        debug!(count = windows.len(), "Listed niri windows");
        Ok(windows)
    }

    fn focus_window(&self, window: &WindowRecord) -> Result<(), FocusError> {
        let id = window.id.as_ref().ok_or(FocusError::MissingId)?.to_string();
        let args = ["msg", "action", "focus-window", "--id", id.as_str()];

        let output = self
            .runner
            .run(&self.binary, &args)
            .map_err(|source| FocusError::SpawnFailed {
                command: self.command_line(&args),
                source,
            })?;

        if !output.success() {
            return Err(FocusError::CommandFailed {
                command: self.command_line(&args),
                status: describe_status(output.code),
                stderr: output.stderr_text(),
            });
        }

        debug!(window_id = %id, response = %output.stdout_text(), "Focus command response");
        Ok(())
    }
}
