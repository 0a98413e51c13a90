//! Check trait abstraction for preflight validations
//!
//! A check is an independently togglable validation unit executed against the
//! pending change graph before changes are applied. The orchestration layer
//! treats the change graph as opaque; it is a generic parameter threaded
//! through to the check implementation and never inspected here.
//!
//! A check never stores its own name. Identity is purely a key in the
//! [`Registry`](crate::registry::Registry), so the same implementation can be
//! registered under several names.

use crate::config::CheckConfig;
use crate::context::CheckContext;
use std::fmt;

/// Execution capability of a function-backed check
pub type CheckFunc<G> = Box<dyn Fn(&CheckContext, &G) -> anyhow::Result<()> + Send + Sync>;

/// A named preflight validation unit
///
/// `G` is the host-defined change graph type. Implementations receive it as a
/// read-only snapshot and must not mutate it; that contract is not enforced
/// here.
pub trait Check<G>: Send + Sync {
  /// Current toggle state, no side effects
  fn enabled(&self) -> bool;

  /// Unconditional state change, always succeeds
  fn set_enabled(&mut self, enabled: bool);

  /// Store the supplied configuration payload
  ///
  /// The base contract always succeeds; an implementation is free to validate
  /// the payload and fail, which aborts the configuration merge.
  fn set_config(&mut self, config: CheckConfig) -> anyhow::Result<()>;

  /// Execute the check once against the change graph
  ///
  /// Failures are propagated unchanged; wrapping with the check's name
  /// happens one layer up, in the registry.
  fn run(&self, ctx: &CheckContext, graph: &G) -> anyhow::Result<()>;
}

/// Standard function-backed [`Check`] implementation
pub struct FnCheck<G> {
  enabled: bool,
  config: CheckConfig,
  func: CheckFunc<G>,
}

impl<G> FnCheck<G> {
  /// Create a check around an execution function with an initial enabled state
  pub fn new<F>(func: F, enabled: bool) -> Self
  where
    F: Fn(&CheckContext, &G) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    Self {
      enabled,
      config: CheckConfig::default(),
      func: Box::new(func),
    }
  }

  /// The configuration most recently stored via `set_config`
  pub fn config(&self) -> &CheckConfig {
    &self.config
  }
}

impl<G> Check<G> for FnCheck<G> {
  fn enabled(&self) -> bool {
    self.enabled
  }

  fn set_enabled(&mut self, enabled: bool) {
    self.enabled = enabled;
  }

  fn set_config(&mut self, config: CheckConfig) -> anyhow::Result<()> {
    self.config = config;
    Ok(())
  }

  fn run(&self, ctx: &CheckContext, graph: &G) -> anyhow::Result<()> {
    (self.func)(ctx, graph)
  }
}

impl<G> fmt::Debug for FnCheck<G> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnCheck")
      .field("enabled", &self.enabled)
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}
