//! Harness-level errors.
//!
//! A failed check is never an error in this sense: it is counted by the
//! [`Tally`](crate::Tally) and reported on the diagnostic stream. The variants
//! here describe things that go wrong *around* the checks: a module body that
//! gives up, a body that panics, operands that cannot be compared element-wise,
//! and a diagnostic sink that refuses writes.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum UtestError {
    /// The module body returned an error instead of finishing.
    #[error("module `{module}` failed with uncaught error: {description}")]
    #[diagnostic(
        code(utest::uncaught),
        help("checks already recorded still count; the module verdict is forced to failure")
    )]
    Uncaught { module: String, description: String },

    /// The module body panicked.
    #[error("module `{module}` panicked: {}", .payload.as_deref().unwrap_or("unknown payload"))]
    #[diagnostic(
        code(utest::panic),
        help("wrap the panicking call in `check_nothrow!` to record it as a failed check instead")
    )]
    Panic {
        module: String,
        payload: Option<String>,
    },

    /// Element-wise comparison of operands with different lengths.
    #[error("operands differ in size: {left} vs {right}")]
    #[diagnostic(code(utest::size_mismatch))]
    SizeMismatch { left: usize, right: usize },

    /// The diagnostic sink could not be written.
    #[error("diagnostic sink write failed")]
    #[diagnostic(code(utest::io))]
    Io(#[from] std::io::Error),
}

impl UtestError {
    /// The text reported between the angle brackets of the uncaught-failure line.
    pub fn description(&self) -> Option<&str> {
        match self {
            UtestError::Uncaught { description, .. } => Some(description),
            UtestError::Panic { payload, .. } => payload.as_deref(),
            UtestError::SizeMismatch { .. } | UtestError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn uncaught_error_renders_code_and_help() {
        let err = UtestError::Uncaught {
            module: "io".to_string(),
            description: "disk full".to_string(),
        };
        assert_eq!(err.description(), Some("disk full"));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("forced to failure"));

        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("utest::uncaught"));
        assert!(output.contains("disk full"));
    }

    #[test]
    fn panic_without_string_payload_has_no_description() {
        let err = UtestError::Panic {
            module: "m".to_string(),
            payload: None,
        };
        assert_eq!(err.description(), None);
        assert!(err.to_string().contains("unknown payload"));
    }
}
