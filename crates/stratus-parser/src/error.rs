//! Error and diagnostic system for the Stratus template parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - JSON paths locating each problem inside the document
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, the JSON path of
//! the offending value, and help text. Multiple diagnostics are wrapped in
//! [`ParseError`] for returning from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use stratus_parser::error::{Diagnostic, ErrorCode};
//! let diag = Diagnostic::error("resource `Queue` is missing `Type`")
//!     .with_code(ErrorCode::E103)
//!     .with_path("/Resources/Queue")
//!     .with_help("declare a `Type` string, e.g. `AWS::SQS::Queue`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
