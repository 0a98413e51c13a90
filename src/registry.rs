//! Registry owning named preflight checks
//!
//! The registry owns a uniquely named collection of checks, merges
//! user-supplied configuration into them, and executes all enabled checks in
//! a single sequential pass. The backing map is a `BTreeMap`, so rendering,
//! validation, and execution all iterate in lexicographic name order —
//! deterministic output and run order fall out of the data structure instead
//! of needing an ad-hoc sort.
//!
//! Configuration merging is strictly validate-then-apply: every name and
//! every per-check value in the document is validated before any check is
//! mutated, so a single bad entry can never leave a partial merge in place.
//! Checks absent from the document are untouched; configuration is an
//! overlay, never a reset.

use crate::check::Check;
use crate::config::{self, CheckConfig};
use crate::context::CheckContext;
use crate::error::{PreflightError, PreflightResult};
use std::collections::BTreeMap;

/// A collection of preflight checks and their merged configuration
///
/// `G` is the host-defined change graph type, passed through opaquely to each
/// check. The set of valid names is closed once checks are registered:
/// configuration naming an unregistered check is rejected, and checks are
/// never auto-created or removed. The registry lives for one pipeline run.
pub struct Registry<G> {
  known: BTreeMap<String, Box<dyn Check<G>>>,
  pending: Option<BTreeMap<String, CheckConfig>>,
}

impl<G> Registry<G> {
  /// Create an empty registry
  pub fn new() -> Self {
    Self {
      known: BTreeMap::new(),
      pending: None,
    }
  }

  /// Create a registry from an initial set of named checks
  pub fn with_checks(checks: impl IntoIterator<Item = (String, Box<dyn Check<G>>)>) -> Self {
    let mut registry = Self::new();
    for (name, check) in checks {
      registry.add_check(name, check);
    }
    registry
  }

  /// Register a check under `name`
  ///
  /// Registration is last-write-wins: a duplicate name replaces the existing
  /// check, and the displaced check is returned so the caller can notice.
  pub fn add_check(&mut self, name: impl Into<String>, check: Box<dyn Check<G>>) -> Option<Box<dyn Check<G>>> {
    self.known.insert(name.into(), check)
  }

  /// Look up a registered check by name
  pub fn check(&self, name: &str) -> Option<&dyn Check<G>> {
    self.known.get(name).map(|check| check.as_ref())
  }

  /// Look up a registered check by name for direct enable/disable toggles
  pub fn check_mut(&mut self, name: &str) -> Option<&mut (dyn Check<G> + 'static)> {
    self.known.get_mut(name).map(|check| &mut **check)
  }

  /// Registered check names, in sorted order
  pub fn known_names(&self) -> Vec<&str> {
    self.known.keys().map(String::as_str).collect()
  }

  /// Number of registered checks
  pub fn len(&self) -> usize {
    self.known.len()
  }

  /// Whether no checks are registered
  pub fn is_empty(&self) -> bool {
    self.known.is_empty()
  }

  /// The last successfully parsed configuration document, for introspection
  pub fn pending_config(&self) -> Option<&BTreeMap<String, CheckConfig>> {
    self.pending.as_ref()
  }

  /// Render all known checks as `name1=enabled1,name2=enabled2,...`
  ///
  /// Names are emitted in sorted order, so two registries holding the same
  /// checks render identically regardless of registration order.
  pub fn render(&self) -> String {
    self
      .known
      .iter()
      .map(|(name, check)| format!("{}={}", name, check.enabled()))
      .collect::<Vec<_>>()
      .join(",")
  }

  /// Parse a raw configuration document and merge it into the known checks
  ///
  /// The document must be a JSON object mapping check names to per-check
  /// configuration objects. Every name must be registered and every value
  /// must decode as a [`CheckConfig`]; the whole document is validated before
  /// any check is touched. For each entry the optional `enabled` override is
  /// applied first, then the full configuration (including `enabled`) is
  /// forwarded to the check.
  pub fn parse(&mut self, raw: &str) -> PreflightResult<()> {
    let document = config::decode_document(raw)?;

    // Validate every name against the closed set of known checks
    for name in document.keys() {
      if !self.known.contains_key(name) {
        return Err(PreflightError::UnknownCheck { name: name.clone() });
      }
    }

    // Decode every per-check value, still without mutating anything
    let mut decoded: BTreeMap<String, (Option<bool>, CheckConfig)> = BTreeMap::new();
    for (name, value) in document {
      let config: CheckConfig = serde_json::from_value(value)
        .map_err(|err| PreflightError::malformed_config(&name, err.to_string()))?;
      let enabled = config
        .enabled_override()
        .map_err(|reason| PreflightError::malformed_config(&name, reason))?;
      decoded.insert(name, (enabled, config));
    }

    // Apply pass: overrides first, then the full payload
    let mut applied = BTreeMap::new();
    for (name, (enabled, config)) in decoded {
      if let Some(check) = self.known.get_mut(&name) {
        if let Some(enabled) = enabled {
          check.set_enabled(enabled);
        }
        check
          .set_config(config.clone())
          .map_err(|err| PreflightError::malformed_config(&name, err.to_string()))?;
        applied.insert(name, config);
      }
    }
    self.pending = Some(applied);
    Ok(())
  }

  /// Execute every enabled check once, in sorted name order
  ///
  /// The provided context and change graph are passed through to each check.
  /// The first failure aborts the pass and is wrapped with the failing
  /// check's name; later checks are not run and no results are aggregated.
  /// Cancellation is not polled between checks; a check observes it through
  /// the context inside its own execution.
  pub fn run(&self, ctx: &CheckContext, graph: &G) -> PreflightResult<()> {
    for (name, check) in &self.known {
      if !check.enabled() {
        continue;
      }
      check.run(ctx, graph).map_err(|source| PreflightError::CheckFailed {
        check: name.clone(),
        source,
      })?;
    }
    Ok(())
  }
}

impl<G> Default for Registry<G> {
  fn default() -> Self {
    Self::new()
  }
}
