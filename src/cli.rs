//! Thin clap adapter for the preflight configuration flag
//!
//! The registry's `render`/`parse` pair is flag-library independent; this
//! module is the only place that knows about clap. The host CLI registers
//! exactly one flag, and supplying it on invocation feeds the raw value to
//! [`Registry::parse`]. Omitting the flag leaves every check at its
//! registered default.

use crate::error::PreflightResult;
use crate::registry::Registry;
use clap::{Arg, ArgMatches};

/// Name of the single preflight configuration flag
pub const PREFLIGHT_FLAG: &str = "preflight";

/// Build the `--preflight` argument for a host CLI
///
/// The help text enumerates all registered check names, in sorted order.
pub fn preflight_arg<G>(registry: &Registry<G>) -> Arg {
  Arg::new(PREFLIGHT_FLAG)
    .long(PREFLIGHT_FLAG)
    .value_name("JSON")
    .help(format!(
      "preflight checks to run. Available preflight checks are [{}]",
      registry.known_names().join(",")
    ))
}

/// Merge a parsed flag value back into the registry
///
/// A supplied flag triggers [`Registry::parse`] on its value; any parse error
/// is a fatal invocation error with no partial effect. An absent flag is a
/// no-op.
pub fn bind_matches<G>(registry: &mut Registry<G>, matches: &ArgMatches) -> PreflightResult<()> {
  if let Some(raw) = matches.get_one::<String>(PREFLIGHT_FLAG) {
    registry.parse(raw)?;
  }
  Ok(())
}
