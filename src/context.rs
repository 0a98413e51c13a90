//! Execution context passed to every check run
//!
//! Cancellation is cooperative: the registry threads the context through to
//! each check but never polls it between checks, so a timely abort depends on
//! the check observing the signal inside its own execution.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Cancellation-aware context handed to each check's run
///
/// Clones share the same cancel flag, so a handle kept by the caller can
/// abort checks that are still observing the context.
#[derive(Debug, Clone, Default)]
pub struct CheckContext {
  cancelled: Arc<AtomicBool>,
  deadline: Option<Instant>,
}

impl CheckContext {
  /// Create a context with no deadline
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a context that reports cancelled once `deadline` has passed
  pub fn with_deadline(deadline: Instant) -> Self {
    Self {
      cancelled: Arc::default(),
      deadline: Some(deadline),
    }
  }

  /// Signal cancellation to every clone of this context
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::SeqCst);
  }

  /// Whether cancellation was signalled or the deadline has passed
  pub fn is_cancelled(&self) -> bool {
    if self.cancelled.load(Ordering::SeqCst) {
      return true;
    }
    self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
  }

  /// The deadline, if one was set
  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  /// Error out when cancelled; for use with `?` inside check implementations
  pub fn ensure_active(&self) -> anyhow::Result<()> {
    if self.is_cancelled() {
      anyhow::bail!("preflight run cancelled");
    }
    Ok(())
  }
}
