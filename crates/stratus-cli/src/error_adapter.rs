//! Adapters turning a [`StratusError`] into miette-renderable reports.
//!
//! Parse failures carry several diagnostics; each becomes its own report so
//! the handler renders them independently, with the diagnostic's code and
//! help text attached. Every other failure becomes a single report.

use std::fmt;

use thiserror::Error;

use stratus::StratusError;
use stratus_parser::error::Diagnostic;

/// One independently renderable error report.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Reportable {
    message: String,
    code: Option<String>,
    help: Option<String>,
}

impl miette::Diagnostic for Reportable {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code
            .as_ref()
            .map(|code| Box::new(code) as Box<dyn fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }
}

/// Convert an error into its independently renderable reports.
pub fn to_reportables(err: &StratusError) -> Vec<Reportable> {
    match err {
        StratusError::Parse { err, .. } => {
            err.diagnostics().iter().map(from_diagnostic).collect()
        }
        other => vec![Reportable {
            message: other.to_string(),
            code: None,
            help: help_for(other),
        }],
    }
}

fn from_diagnostic(diagnostic: &Diagnostic) -> Reportable {
    let message = match diagnostic.path() {
        Some(path) => format!("{} (at {path})", diagnostic.message()),
        None => diagnostic.message().to_string(),
    };

    Reportable {
        message,
        code: diagnostic.code().map(|code| code.to_string()),
        help: diagnostic.help().map(str::to_string),
    }
}

fn help_for(err: &StratusError) -> Option<String> {
    match err {
        StratusError::MissingResource { logical_id, .. } => Some(format!(
            "declare `{logical_id}` under `Resources` or correct the reference"
        )),
        StratusError::InvalidAttribute { type_name, .. } => Some(format!(
            "check which attributes `{type_name}` exposes"
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stratus::StackBuilder;

    fn build_error(template: &str) -> StratusError {
        StackBuilder::default()
            .build("test_id", "test_stack", template, "us-east-1")
            .unwrap_err()
    }

    #[test]
    fn test_parse_error_yields_one_report_per_diagnostic() {
        let err = build_error(
            r#"{"Resources": {"First": {"Properties": {}}, "Second": 7}}"#,
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert!(reportables[0].message.contains("/Resources/First"));
        assert_eq!(reportables[0].code.as_deref(), Some("E103"));
    }

    #[test]
    fn test_missing_resource_report_carries_help() {
        let err = build_error(
            r#"{
                "Resources": {"Queue": {"Type": "AWS::SQS::Queue"}},
                "Outputs": {"Out": {"Value": {"Ref": "Absent"}}}
            }"#,
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert!(reportables[0].help.as_deref().unwrap().contains("Absent"));
    }
}
