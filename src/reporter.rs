//! Capabilities for talking to the operator.
//!
//! The library never prints or reads from the terminal itself. Report lines
//! are handed to a [`Reporter`] tagged with a [`Severity`], and yes/no
//! questions go to a [`Confirmer`]. The binary supplies terminal
//! implementations; tests supply recording ones.

use crate::Result;
use std::fmt::Display;

/// Classification of every user-facing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Receiver for user-facing report lines.
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Severity::Success, message);
    }

    fn warn(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }
}

/// Interactive questions asked during an import.
pub trait Confirmer {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> bool;

    /// Ask for a value, falling back to `default` on an empty answer. Fails
    /// with [`ImportError::MissingValue`](crate::ImportError::MissingValue)
    /// when no answer can be obtained.
    fn prompt_value(&self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Forwards report lines to the `log` facade.
///
/// Successes are logged at info level since `log` has no dedicated level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info | Severity::Success => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Render values as a bulleted list, one per line.
///
/// ```rust
/// use headphones_import::format_unordered_list;
///
/// assert_eq!(format_unordered_list(&["a", "b"], 0), " * a\n * b");
/// assert_eq!(format_unordered_list(&["a"], 1), "   * a");
/// ```
pub fn format_unordered_list<T: Display>(values: &[T], indent: usize) -> String {
    let indents = " ".repeat(indent * 2 + 1);
    values
        .iter()
        .map(|value| format!("{indents}* {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingReporter;

    #[test]
    fn test_helper_methods_tag_severity() {
        let recorder = RecordingReporter::default();
        recorder.info("i");
        recorder.success("s");
        recorder.warn("w");
        recorder.error("e");

        let severities: Vec<Severity> =
            recorder.lines.borrow().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Info,
                Severity::Success,
                Severity::Warning,
                Severity::Error
            ]
        );
    }

    #[test]
    fn test_format_unordered_list_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(format_unordered_list(&empty, 0), "");
    }
}
