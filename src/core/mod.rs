//! The `Try` container and its combinator protocol.
//!
//! This module contains the pure core of the crate:
//! - The `Try` sum type with its constructors and terminal operations
//! - Combinators that derive a new `Try` without mutating the old one
//!
//! Every operation runs synchronously on the caller's thread and invokes a
//! supplied closure at most once.

mod attempt;
mod combinators;

pub use attempt::Try;
