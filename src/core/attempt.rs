//! The `Try` container: construction, queries and terminal extraction.
//!
//! A `Try` is an immutable value. Nothing in this module mutates one in
//! place; every operation either consumes the container or borrows it.

use crate::error::{Error, Panicked};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Outcome of a computation that either succeeded with a value or failed
/// with an error.
///
/// Chains of operations on a `Try` short-circuit: once a `Failure` appears,
/// `map`, `try_map`, `flat_map` and `filter` pass it through untouched until a
/// recovery combinator (`recover`, `try_recover`, `recover_with`) or a
/// terminal operation (`get`, `or_else`, `or_else_get`) deals with it.
///
/// Equality and hashing follow the payload: two successes are equal when
/// their values are, two failures when their errors are, and a success never
/// equals a failure.
///
/// # Example
///
/// ```rust
/// use attempt::Try;
/// use std::num::ParseIntError;
///
/// let sum: Try<i32, ParseIntError> = Try::of(|| "2".parse::<i32>()).map(|n| n + 2);
/// assert_eq!(sum.get(), Ok(4));
///
/// let short_circuited: Try<i32, ParseIntError> = Try::of(|| "a".parse::<i32>()).map(|n| n + 2);
/// assert!(short_circuited.is_failure());
/// assert_eq!(short_circuited.or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a Try may hold a failure that should be handled"]
pub enum Try<T, E = Error> {
    /// The computation completed with a value
    Success(T),
    /// The computation failed with an error
    Failure(E),
}

impl<T, E> Try<T, E> {
    // ========== Constructors ==========

    /// Run a fallible computation once, right now, and capture its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)` and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    /// use std::num::ParseIntError;
    ///
    /// let four: Try<i32, ParseIntError> = Try::of(|| Ok(2 + 2));
    /// assert_eq!(four.get(), Ok(4));
    ///
    /// let failed: Try<i32, ParseIntError> = Try::of(|| "a".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::from(supplier())
    }

    /// Like [`Try::of`], but a panic raised by the supplier is caught and
    /// stored as a failure instead of unwinding through the caller.
    ///
    /// The panic hook still runs, so the panic message is reported as usual.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::{Error, Try};
    ///
    /// let caught: Try<i32> = Try::catching(|| {
    ///     let values: Vec<i32> = Vec::new();
    ///     Ok(values[3])
    /// });
    ///
    /// assert!(caught.err().is_some_and(|e| e.is_panicked()));
    /// ```
    pub fn catching<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: From<Panicked>,
    {
        match panic::catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(result) => Self::from(result),
            Err(payload) => {
                let panicked = Panicked::from_payload(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %panicked, "captured panic as a failure");
                Self::Failure(E::from(panicked))
            }
        }
    }

    /// Wrap a value as a success.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure.
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Turn an optional value into a `Try`, building the error only when the
    /// value is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// let found: Try<i32, String> = Try::from_option(Some(1), || "missing".to_string());
    /// let missing: Try<i32, String> = Try::from_option(None, || "missing".to_string());
    ///
    /// assert_eq!(found, Try::success(1));
    /// assert_eq!(missing, Try::failure("missing".to_string()));
    /// ```
    pub fn from_option<F>(option: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error()),
        }
    }

    // ========== Queries ==========

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the payload, leaving the container intact.
    pub fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure error, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // ========== Terminal extraction ==========

    /// Extract the value, handing the stored error back to the caller if the
    /// computation failed.
    ///
    /// This is the only way the wrapped error leaves the container as an
    /// error, so it composes with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    /// use std::num::ParseIntError;
    ///
    /// fn doubled(input: &str) -> Result<i32, ParseIntError> {
    ///     let n = Try::of(|| input.parse::<i32>()).map(|n| n * 2).get()?;
    ///     Ok(n)
    /// }
    ///
    /// assert_eq!(doubled("21"), Ok(42));
    /// assert!(doubled("x").is_err());
    /// ```
    pub fn get(self) -> Result<T, E> {
        self.into_result()
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// The success value, or `other` if the computation failed.
    ///
    /// `other` is evaluated by the caller before the call.
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// Keep a success as-is, or attempt a fallback computation on failure.
    ///
    /// Unlike [`Try::or_else`] this stays inside the container: the fallback
    /// is run as by [`Try::of`], so a failing fallback yields a new failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// let first: Try<String, String> = Try::failure("primary down".to_string());
    /// let second = first.or_else_get(|| Err("replica down".to_string()));
    ///
    /// assert_eq!(second, Try::failure("replica down".to_string()));
    /// assert_eq!(second.or_else("cached".to_string()), "cached");
    /// ```
    pub fn or_else_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::of(supplier),
        }
    }

    /// The success value, or one computed from the error.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Collapse both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(3);
    /// let described = outcome.fold(|n| format!("got {}", n), |e| format!("failed: {}", e));
    /// assert_eq!(described, "got 3");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(outcome: Try<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Try.success({})", value),
            Self::Failure(error) => write!(f, "Try.failure({})", error),
        }
    }
}
