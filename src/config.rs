//! Typed per-check configuration
//!
//! The configuration document supplied via the `--preflight` flag is a JSON
//! object mapping check names to per-check configuration objects. Each
//! per-check object may carry an `enabled` key whose value is a *string*
//! encoding of a boolean (`"true"` / `"false"`), plus arbitrary additional
//! keys that are forwarded verbatim to the check. Decoding into
//! [`CheckConfig`] validates the shape once, up front, instead of asserting
//! types out of an untyped map at every access.

use crate::error::{PreflightError, PreflightResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Configuration payload for a single check
///
/// The orchestration layer only interprets the optional `enabled` override;
/// everything else is pass-through storage for the check implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
  /// Optional enabled override, encoded as `"true"` / `"false"`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enabled: Option<String>,

  /// Keys the orchestration layer never interprets
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl CheckConfig {
  /// Parse the optional `enabled` override
  ///
  /// Follows `str::parse::<bool>`: exactly `"true"` or `"false"`. A present
  /// but unparseable value is an error; an absent field is `Ok(None)`.
  pub fn enabled_override(&self) -> Result<Option<bool>, String> {
    match &self.enabled {
      None => Ok(None),
      Some(raw) => raw
        .parse::<bool>()
        .map(Some)
        .map_err(|_| format!("unable to parse boolean representation of {:?}", raw)),
    }
  }

  /// Look up a pass-through configuration value by key
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.extra.get(key)
  }
}

/// Decode a raw configuration document into name -> raw per-check value
///
/// Anything that is not syntactically valid JSON with an object at the top
/// level is rejected as `MalformedInput`. Per-check values are decoded
/// separately so their failures can name the offending check.
pub(crate) fn decode_document(raw: &str) -> PreflightResult<BTreeMap<String, Value>> {
  serde_json::from_str(raw).map_err(|source| PreflightError::MalformedInput { source })
}
