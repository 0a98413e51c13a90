//! Error types for preflight-gate
//!
//! Every failure mode of the orchestration layer is one of four kinds:
//! malformed configuration input, an unknown check name, a malformed
//! per-check configuration value, or a failed check execution. Parse-time
//! errors are surfaced before any check is mutated; execution errors abort
//! the remainder of the run.

use std::fmt;

/// Main error type for preflight-gate
#[derive(Debug)]
pub enum PreflightError {
  /// The supplied configuration text is not a JSON object
  MalformedInput { source: serde_json::Error },

  /// The configuration document names a check that was never registered
  UnknownCheck { name: String },

  /// A per-check configuration value could not be decoded
  MalformedConfig { check: String, reason: String },

  /// A check's execution failed; carries the check name and the untouched cause
  CheckFailed { check: String, source: anyhow::Error },
}

impl PreflightError {
  /// Create a malformed-config error for a named check
  pub fn malformed_config(check: impl Into<String>, reason: impl Into<String>) -> Self {
    PreflightError::MalformedConfig {
      check: check.into(),
      reason: reason.into(),
    }
  }
}

impl fmt::Display for PreflightError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PreflightError::MalformedInput { source } => {
        write!(f, "invalid JSON configuration: {}", source)
      }
      PreflightError::UnknownCheck { name } => {
        write!(f, "unknown preflight check \"{}\" specified", name)
      }
      PreflightError::MalformedConfig { check, reason } => {
        write!(f, "unable to parse config for \"{}\": {}", check, reason)
      }
      PreflightError::CheckFailed { check, source } => {
        write!(f, "running preflight check \"{}\": {}", check, source)
      }
    }
  }
}

impl std::error::Error for PreflightError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PreflightError::MalformedInput { source } => Some(source),
      PreflightError::CheckFailed { source, .. } => {
        let cause: &(dyn std::error::Error + 'static) = source.as_ref();
        Some(cause)
      }
      _ => None,
    }
  }
}

/// Result type alias for preflight-gate
pub type PreflightResult<T> = Result<T, PreflightError>;
