//! Shared test utilities for bedcomp.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]`
//! - [`assertions`] - Float assertions used throughout the probe tests
//! - [`tracking`] - Allocation tracking for the motion-path queries
//! - [`fixtures`] - Ready-made probe point layouts
//! - [`prelude`] - Convenience re-exports
//!
//! ```toml
//! [dev-dependencies]
//! bedcomp-test-helpers = { workspace = true }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::panic, reason = "assertion helpers report failures by panicking")]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
pub mod tracking;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
