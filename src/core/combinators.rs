//! Combinators deriving a new `Try` from an existing one.
//!
//! Success-side combinators never invoke their closure on a failure, and
//! failure-side combinators never invoke theirs on a success. Closures that
//! return `Result` have their `Err` captured as a `Failure`; closures that
//! return a `Try` have their output returned as-is.

use super::attempt::Try;
use crate::error::NoSuchElement;
use std::fmt::Debug;

impl<T, E> Try<T, E> {
    /// Transform the success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// let length: Try<usize, String> = Try::success("four").map(str::len);
    /// assert_eq!(length, Try::success(4));
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(mapper(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Transform the success value with a mapper that can fail.
    ///
    /// An `Err` from the mapper is converted into `E` and stored as a
    /// failure; it never escapes the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    /// use std::num::ParseIntError;
    ///
    /// let parsed: Try<&str, ParseIntError> = Try::success("a");
    /// let parsed = parsed.try_map(str::parse::<i32>);
    ///
    /// assert!(parsed.is_failure());
    /// ```
    pub fn try_map<U, X, F>(self, mapper: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        E: From<X>,
    {
        match self {
            Self::Success(value) => match mapper(value) {
                Ok(mapped) => Try::Success(mapped),
                Err(error) => Try::Failure(E::from(error)),
            },
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chain a computation that already produces a `Try`.
    ///
    /// The mapper's output is returned verbatim, not wrapped again.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// fn halve(n: i32) -> Try<i32, String> {
    ///     if n % 2 == 0 {
    ///         Try::success(n / 2)
    ///     } else {
    ///         Try::failure(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Try::success(8).flat_map(halve).flat_map(halve), Try::success(2));
    /// assert_eq!(Try::success(6).flat_map(halve).flat_map(halve), Try::failure("3 is odd".to_string()));
    /// ```
    pub fn flat_map<U, F>(self, mapper: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Keep a success only if its value satisfies `predicate`.
    ///
    /// A rejected value becomes a [`NoSuchElement`] failure naming the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    ///
    /// let even: Try<i32> = Try::success(4).filter(|n| n % 2 == 0);
    /// let odd: Try<i32> = Try::success(3).filter(|n| n % 2 == 0);
    ///
    /// assert!(even.is_success());
    /// assert_eq!(odd.err().unwrap().to_string(), "Predicate does not hold for 3");
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: Debug,
        E: From<NoSuchElement>,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(E::from(NoSuchElement::for_value(&value)))
                }
            }
            failure => failure,
        }
    }

    /// Like [`Try::filter`], with a predicate that can itself fail.
    ///
    /// The predicate's error is captured as the failure.
    pub fn try_filter<X, P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Result<bool, X>,
        T: Debug,
        E: From<X> + From<NoSuchElement>,
    {
        match self {
            Self::Success(value) => match predicate(&value) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::Failure(E::from(NoSuchElement::for_value(&value))),
                Err(error) => Self::Failure(E::from(error)),
            },
            failure => failure,
        }
    }

    /// Replace a failure with a value computed from its error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    /// use std::num::{IntErrorKind, ParseIntError};
    ///
    /// let recovered: Try<i32, ParseIntError> = Try::of(|| "a".parse::<i32>())
    ///     .recover(|e| match e.kind() {
    ///         IntErrorKind::InvalidDigit => 0,
    ///         _ => -1,
    ///     });
    ///
    /// assert_eq!(recovered.get(), Ok(0));
    /// ```
    pub fn recover<F>(self, recover_fn: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(recover_fn(error)),
        }
    }

    /// Attempt to replace a failure with a value computed from its error.
    ///
    /// If the recovery itself fails, its error becomes the new failure.
    pub fn try_recover<X, F>(self, recover_fn: F) -> Self
    where
        F: FnOnce(E) -> Result<T, X>,
        E: From<X>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => match recover_fn(error) {
                Ok(value) => Self::Success(value),
                Err(error) => Self::Failure(E::from(error)),
            },
        }
    }

    /// Replace a failure with the `Try` produced from its error, returned
    /// verbatim.
    pub fn recover_with<F>(self, recover_fn: F) -> Self
    where
        F: FnOnce(E) -> Try<T, E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recover_fn(error),
        }
    }

    /// Transform the error, leaving a success untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::{Error, Try};
    /// use std::num::ParseIntError;
    ///
    /// let parsed: Try<i32, ParseIntError> = Try::of(|| "7".parse::<i32>());
    /// let checked: Try<i32> = parsed.map_err(Error::other).filter(|n| *n > 10);
    ///
    /// assert!(checked.err().is_some_and(|e| e.is_no_such_element()));
    /// ```
    pub fn map_err<F, O>(self, op: O) -> Try<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(op(error)),
        }
    }

    /// Observe the success value without changing the container.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the error without changing the container.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }
}
