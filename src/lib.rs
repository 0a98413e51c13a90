//! Preflight validation gate for change-application pipelines
//!
//! Before a set of pending resource changes is applied, a collection of
//! independently named checks may inspect the change set and veto the
//! operation by failing. This crate is the orchestration layer only: the
//! [`Check`] abstraction (enable/disable state, opaque per-check
//! configuration, an execution contract) and the [`Registry`] that owns named
//! checks, merges user-supplied configuration into them, binds a single
//! `--preflight` flag into the host's clap parser, and runs all enabled
//! checks in sequence, stopping at the first failure.
//!
//! The change graph the checks inspect is host-defined and passed through
//! opaquely as a generic parameter; this crate never interprets it.
//!
//! # Example
//!
//! ```
//! use preflight_gate::{FnCheck, Registry};
//!
//! struct ChangeGraph;
//!
//! let mut registry: Registry<ChangeGraph> = Registry::new();
//! registry.add_check("nameCheck", Box::new(FnCheck::new(|_ctx, _graph| Ok(()), true)));
//!
//! registry.parse(r#"{"nameCheck":{"enabled":"false"}}"#)?;
//! assert_eq!(registry.render(), "nameCheck=false");
//! # Ok::<(), preflight_gate::PreflightError>(())
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod registry;

pub use check::{Check, CheckFunc, FnCheck};
pub use config::CheckConfig;
pub use context::CheckContext;
pub use error::{PreflightError, PreflightResult};
pub use registry::Registry;
