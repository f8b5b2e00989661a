//! Structured error types for user-facing failures across the workspace.
//!
//! These cover the "user error" half of the two-class error model: malformed
//! input, out-of-range declarations, and violated structural preconditions
//! that a caller can fix by changing their input. Internal invariant
//! violations (a permutation check failing on an already-validated graph, a
//! canonical-form postcondition failing, a negative search-stack top) are not
//! represented here — they are `panic!`s, since there is nothing a caller can
//! do about them short of filing a bug.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ReduceError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical user-facing error type for the reduce workspace.
///
/// `reduce-cli::main` catches these, prints the `Display` diagnostic to
/// stderr and exits with status 1. They are never recovered or retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ReduceError {
    /// Malformed colored-graph, reducer, or CNF text input.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Well-formed input that violates a structural precondition (variable
    /// set not a union of orbits, value vertices not fixed points, duplicate
    /// or out-of-range declarations, threshold/length out of range).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Failure reading or writing a file named on the command line.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ReduceError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ReduceError::Parse(info) | ReduceError::Input(info) | ReduceError::Io(info) => info,
        }
    }
}

impl From<std::io::Error> for ReduceError {
    fn from(err: std::io::Error) -> Self {
        ReduceError::Io(ErrorInfo::new("IO001", err.to_string()))
    }
}
