//! Attempt: a fail-fast container for fallible computations
//!
//! A [`Try`] holds either the value a computation produced or the error it
//! failed with. Chaining combinators on it replaces an explicit error check
//! after every step: once a step fails, later steps are skipped, and the
//! decision of what to do about the failure (propagate it, substitute a
//! default, recover, or retry) is made once at the end of the chain.
//!
//! # Core Concepts
//!
//! - **Construction**: [`Try::of`] runs a fallible closure once and captures
//!   its outcome; [`Try::catching`] also captures panics
//! - **Combinators**: `map`, `try_map`, `flat_map` and `filter` act on
//!   successes; `recover`, `try_recover` and `recover_with` act on failures
//! - **Extraction**: `get`, `or_else` and `or_else_get` end a chain
//! - **Interop**: conversion to and from stillwater's `Validation`
//!
//! Everything is synchronous. A `Try` is never mutated in place; each
//! combinator consumes it and returns a new one.
//!
//! # Example
//!
//! ```rust
//! use attempt::Try;
//! use std::num::ParseIntError;
//!
//! fn parse_port(input: &str) -> Try<u16, ParseIntError> {
//!     Try::of(|| input.trim().parse::<u16>())
//! }
//!
//! let port = parse_port(" 8080 ")
//!     .map(|p| p + 1)
//!     .or_else(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("http")
//!     .map(|p| p + 1)
//!     .recover(|_| 80)
//!     .get();
//! assert_eq!(fallback, Ok(80));
//! ```

pub mod core;
pub mod error;
pub mod interop;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export commonly used types
pub use crate::core::Try;
pub use crate::error::{Error, NoSuchElement, Panicked, SharedError};
#[cfg(feature = "tracing")]
pub use crate::trace::TryTracingExt;
