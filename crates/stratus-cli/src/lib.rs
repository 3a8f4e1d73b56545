//! CLI logic for the Stratus stack interpreter.
//!
//! This module contains the core CLI logic: read a template file, build a
//! stack from it, and render the stack report.

pub mod error_adapter;

mod args;
mod report;

pub use args::Args;

use std::{fs, io};

use log::info;

use stratus::{StackBuilder, StratusError, resources::DEFAULT_ACCOUNT_ID};

use report::StackReport;

/// Run the Stratus CLI application
///
/// This function builds a stack from the input template and writes the
/// resulting JSON report to the output file, or to stdout when no output
/// path was given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StratusError` for:
/// - File I/O errors
/// - Template parse errors
/// - Resource construction faults
/// - Unresolvable output references
pub fn run(args: &Args) -> Result<(), StratusError> {
    info!(
        input_path = args.input,
        stack_name = args.stack_name,
        region = args.region;
        "Interpreting template"
    );

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // A local, deterministic stand-in for a real stack id
    let stack_id = format!(
        "arn:aws:cloudformation:{}:{}:stack/{}",
        args.region, DEFAULT_ACCOUNT_ID, args.stack_name
    );

    // Build the stack using the StackBuilder API
    let builder = StackBuilder::default();
    let stack = builder.build(&stack_id, &args.stack_name, &source, &args.region)?;

    // Render the report
    let report = StackReport::from_stack(&stack);
    let rendered = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path.as_str(); "Stack report written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::tempdir;

    fn args_for(input: &str, output: Option<String>) -> Args {
        Args {
            input: input.to_string(),
            output,
            stack_name: "dev".to_string(),
            region: "us-east-1".to_string(),
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_run_writes_a_report() {
        let dir = tempdir().expect("Failed to create temp directory");
        let template_path = dir.path().join("template.json");
        let report_path = dir.path().join("report.json");

        let mut template = fs::File::create(&template_path).unwrap();
        write!(
            template,
            r#"{{
                "Resources": {{
                    "Queue": {{
                        "Type": "AWS::SQS::Queue",
                        "Properties": {{"QueueName": "my-queue"}}
                    }}
                }}
            }}"#
        )
        .unwrap();

        let args = args_for(
            template_path.to_str().unwrap(),
            Some(report_path.to_str().unwrap().to_string()),
        );
        run(&args).expect("run succeeds");

        let rendered = fs::read_to_string(&report_path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(report["name"], "dev");
        assert_eq!(report["resources"][0]["physical_name"], "my-queue");
    }

    #[test]
    fn test_run_surfaces_build_errors() {
        let dir = tempdir().expect("Failed to create temp directory");
        let template_path = dir.path().join("template.json");
        fs::write(&template_path, r#"{"Description": "no resources"}"#).unwrap();

        let args = args_for(template_path.to_str().unwrap(), None);
        let err = run(&args).unwrap_err();
        assert!(matches!(err, StratusError::Parse { .. }));
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let args = args_for("/definitely/not/here.json", None);
        assert!(matches!(run(&args).unwrap_err(), StratusError::Io(_)));
    }
}
