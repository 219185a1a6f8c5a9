//! Startup helper for configuration that must be valid before serving.

use crate::error::Result;

/// Unwrap a startup result, exiting the process if it failed.
///
/// Template composition happens once at boot; a missing or malformed
/// fragment leaves no page worth serving, so the error is logged and the
/// process exits with status 1 before any listener is bound.
pub fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "Invalid view configuration, exiting");
            // Without a subscriber the log line goes nowhere
            if !tracing::dispatcher::has_been_set() {
                eprintln!("fatal: {err}");
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{parse_fs, MemoryFragments};
    use std::process::Command;

    const CHILD_ENV: &str = "COURSESITE_MUST_CHILD";
    const CHILD_LOGS_ENV: &str = "COURSESITE_MUST_CHILD_LOGS";

    /// Run the named test in a child process, returning its exit code and stderr.
    fn run_child(test: &str, with_logs: bool) -> (Option<i32>, String) {
        let exe = std::env::current_exe().unwrap();
        let mut command = Command::new(exe);
        command
            .args(["--exact", test, "--nocapture"])
            .env(CHILD_ENV, "1");
        if with_logs {
            command.env(CHILD_LOGS_ENV, "1");
        }
        let output = command.output().unwrap();
        (
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    fn exit_on_missing_fragment() {
        if std::env::var_os(CHILD_LOGS_ENV).is_some() {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .try_init();
        }
        let source = MemoryFragments::new();
        let _template = must(parse_fs(&source, &["missing.html"]));
    }

    #[test]
    fn test_must_returns_value() {
        let source = MemoryFragments::new().with("ok.html", "fine");
        let template = must(parse_fs(&source, &["ok.html"]));
        assert_eq!(template.render_to_string(()).unwrap(), "fine");
    }

    #[test]
    fn test_must_exits_on_missing_fragment() {
        if std::env::var_os(CHILD_ENV).is_some() {
            exit_on_missing_fragment();
            // Reaching this point means `must` returned; the parent sees a zero exit.
            return;
        }

        let (code, stderr) =
            run_child("views::must::tests::test_must_exits_on_missing_fragment", false);
        assert_eq!(code, Some(1));
        assert_eq!(stderr.matches("missing.html").count(), 1);
    }

    #[test]
    fn test_must_reports_once_with_subscriber() {
        if std::env::var_os(CHILD_ENV).is_some() {
            exit_on_missing_fragment();
            return;
        }

        let (code, stderr) =
            run_child("views::must::tests::test_must_reports_once_with_subscriber", true);
        assert_eq!(code, Some(1));
        assert_eq!(stderr.matches("missing.html").count(), 1);
        assert!(!stderr.contains("fatal:"));
    }
}
