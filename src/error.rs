//! Error types produced by `Try` itself.
//!
//! Most failures carried by a [`Try`](crate::Try) come from caller closures
//! and keep whatever error type the caller chose. The types here cover the
//! two failures the container synthesizes on its own (a rejected filter and a
//! caught panic) plus [`Error`], a general-purpose default error parameter.

use std::any::Any;
use std::error::Error as StdError;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use thiserror::Error;

/// An error shared between clones of a failed computation.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Produced by [`Try::filter`](crate::Try::filter) when the predicate
/// rejects the success value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("Predicate does not hold for {value}")]
pub struct NoSuchElement {
    value: String,
}

impl NoSuchElement {
    /// Create the error for a rejected value, rendered with `Debug`.
    pub fn for_value<T: std::fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            value: format!("{:?}", value),
        }
    }

    /// The rejected value as rendered when the error was created.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Produced by [`Try::catching`](crate::Try::catching) when the supplier panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("Computation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Extract a message from a panic payload.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// is reported opaquely.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "Box<dyn Any>".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Default error parameter of [`Try`](crate::Try).
///
/// `Other` wraps an arbitrary error behind an `Arc`. Two `Other` errors are
/// equal only when they share the same allocation, i.e. when one is a clone of
/// the other, and they hash accordingly.
///
/// # Example
///
/// ```rust
/// use attempt::{Error, Try};
///
/// let parsed: Try<i32> = Try::of(|| "x".parse::<i32>().map_err(Error::other));
/// let error = parsed.clone().get().unwrap_err();
///
/// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
/// assert_eq!(parsed.clone(), parsed);
/// ```
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error(transparent)]
    NoSuchElement(#[from] NoSuchElement),

    #[error(transparent)]
    Panicked(#[from] Panicked),

    #[error(transparent)]
    Other(SharedError),
}

impl Error {
    /// Wrap any error as [`Error::Other`].
    pub fn other<X>(error: X) -> Self
    where
        X: StdError + Send + Sync + 'static,
    {
        Self::Other(Arc::new(error))
    }

    pub fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement(_))
    }

    pub fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Borrow the wrapped error of an [`Error::Other`] as a concrete type.
    pub fn downcast_ref<X: StdError + 'static>(&self) -> Option<&X> {
        match self {
            Self::Other(error) => (**error).downcast_ref::<X>(),
            _ => None,
        }
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Error {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Other(Arc::from(error))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoSuchElement(a), Self::NoSuchElement(b)) => a == b,
            (Self::Panicked(a), Self::Panicked(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::NoSuchElement(error) => error.hash(state),
            Self::Panicked(error) => error.hash(state),
            Self::Other(error) => Arc::as_ptr(error).cast::<()>().hash(state),
        }
    }
}
