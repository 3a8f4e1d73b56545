//! Diagnostic collector for accumulating problems across a document walk.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics while the parser walks a document.
///
/// The walk never stops at the first problem; every section is visited and
/// every diagnostic recorded, so a caller sees the full picture in one pass.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any error-severity diagnostic has been recorded.
    pub(crate) fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Close the walk: log warnings, then return either the parsed value or
    /// a [`ParseError`] carrying every error-severity diagnostic.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ParseError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.diagnostics.into_iter().partition(Diagnostic::is_error);

        for warning in warnings {
            warn!(path = warning.path().unwrap_or("/"); "{}", warning.message());
        }

        if errors.is_empty() {
            Ok(value)
        } else {
            Err(ParseError::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_with_no_errors() {
        let mut collector = DiagnosticCollector::new();
        collector.push(Diagnostic::warning("just a warning"));

        assert!(!collector.has_errors());
        assert_eq!(collector.finish(7).unwrap(), 7);
    }

    #[test]
    fn test_finish_with_errors_drops_warnings() {
        let mut collector = DiagnosticCollector::new();
        collector.push(Diagnostic::warning("advisory"));
        collector.push(Diagnostic::error("fatal"));
        collector.push(Diagnostic::error("also fatal"));

        assert!(collector.has_errors());
        let err = collector.finish(()).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert!(err.diagnostics().iter().all(Diagnostic::is_error));
    }
}
