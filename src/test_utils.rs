//! Test utilities and mock factories.
//!
//! Fakes for the process runner and icon theme, plus window record
//! factories. Only compiled in test builds.

use crate::compositor::{WindowId, WindowRecord, WorkspaceId};
use crate::icon::IconTheme;
use crate::process::{CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

/// Create a mock WindowRecord.
pub fn mock_window(id: i64, title: &str, app_id: &str) -> WindowRecord {
    WindowRecord {
        id: Some(WindowId::Number(id)),
        title: title.to_string(),
        app_id: app_id.to_string(),
        pid: None,
        workspace_id: Some(WorkspaceId::Number(1)),
        is_focused: false,
        is_floating: false,
        is_urgent: false,
    }
}

/// Render records as a `niri msg -j windows` payload.
pub fn windows_json(windows: &[WindowRecord]) -> String {
    serde_json::to_string(windows).unwrap()
}

/// Process runner returning one canned result for every call.
pub struct FakeRunner {
    output: Option<CommandOutput>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    /// Exits 0 with `stdout`.
    pub fn succeeding(stdout: &str) -> Self {
        Self::with_output(CommandOutput {
            code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        })
    }

    /// Exits with `code` and `stderr`.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::with_output(CommandOutput {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        })
    }

    /// Fails to spawn, as if the binary were not installed.
    pub fn missing_binary() -> Self {
        Self {
            output: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn with_output(output: CommandOutput) -> Self {
        Self {
            output: Some(output),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Command lines run so far, space-joined.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line);

        self.output
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}

/// Icon theme that knows a fixed set of names, each at `/icons/<name>.svg`.
pub struct FakeTheme {
    known: HashSet<String>,
    lookups: RefCell<Vec<String>>,
}

impl FakeTheme {
    pub fn with_icons(names: &[&str]) -> Self {
        Self {
            known: names.iter().map(|n| n.to_string()).collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Names looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl IconTheme for FakeTheme {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        self.lookups.borrow_mut().push(name.to_string());
        self.known
            .contains(name)
            .then(|| PathBuf::from(format!("/icons/{name}.svg")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_window() {
        let window = mock_window(5, "My Document", "code");
        assert_eq!(window.id, Some(WindowId::Number(5)));
        assert_eq!(window.title, "My Document");
        assert_eq!(window.app_id, "code");
        assert!(!window.is_focused);
    }

    #[test]
    fn test_windows_json_parses_back() {
        let json = windows_json(&[mock_window(1, "a", "b"), mock_window(2, "c", "d")]);
        let parsed: Vec<WindowRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].app_id, "d");
    }

    #[test]
    fn test_fake_runner_records_calls() {
        let runner = FakeRunner::failing(2, "boom");
        let output = runner.run("niri", &["msg", "-j", "windows"]).unwrap();
        assert_eq!(output.code, Some(2));
        assert_eq!(runner.calls(), vec!["niri msg -j windows"]);
    }

    #[test]
    fn test_fake_theme() {
        let theme = FakeTheme::with_icons(&["foot"]);
        assert_eq!(theme.lookup("foot"), Some(PathBuf::from("/icons/foot.svg")));
        assert_eq!(theme.lookup("kitty"), None);
        assert_eq!(theme.lookups(), vec!["foot", "kitty"]);
    }
}
