//! Error types for Stratus operations.
//!
//! This module provides the main error type [`StratusError`] which wraps
//! every fatal condition a stack build can end in, and [`ErrorKind`], which
//! classifies each condition for the caller: client-correctable template
//! problems versus internal faults.

use std::io;

use thiserror::Error;

use stratus_core::resource::ConstructionError;
use stratus_parser::error::ParseError;

/// How a failure should be reported to the caller.
///
/// A front end serving templates over an API maps [`ErrorKind::Client`]
/// failures to structured service errors and [`ErrorKind::Internal`]
/// failures to plain faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The template is malformed in a way its author can correct.
    Client,

    /// The interpreter or a resource type failed.
    Internal,
}

/// The main error type for Stratus operations.
///
/// A stack build either returns a fully populated stack or exactly one of
/// these; no partially built stack is ever handed back.
#[derive(Debug, Error)]
pub enum StratusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("failed to construct resource `{logical_id}` ({type_name}): {source}")]
    Construction {
        logical_id: String,
        type_name: String,
        source: ConstructionError,
    },

    #[error("output `{output}` references missing resource `{logical_id}`")]
    MissingResource { output: String, logical_id: String },

    #[error(
        "output `{output}` reads invalid attribute `{attribute}` of resource `{logical_id}` ({type_name})"
    )]
    InvalidAttribute {
        output: String,
        logical_id: String,
        type_name: String,
        attribute: String,
    },
}

impl StratusError {
    /// Create a new `Parse` error with the associated template source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Classify this error for the caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StratusError::Io(_) | StratusError::Construction { .. } => ErrorKind::Internal,
            StratusError::Parse { .. }
            | StratusError::MissingResource { .. }
            | StratusError::InvalidAttribute { .. } => ErrorKind::Client,
        }
    }

    /// Returns `true` if the template author can correct this failure.
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::Client
    }
}
