//! Conversions between `Try` and stillwater's `Validation`.
//!
//! `Try` is fail-fast: the first failure wins and the rest of a chain is
//! skipped. `Validation` accumulates every failure. Converting a set of
//! independent `Try` values lets callers report all of their errors at once.

use crate::core::Try;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl<T, E> From<Validation<T, E>> for Try<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Try::Success(value),
            Validation::Failure(error) => Try::Failure(error),
        }
    }
}

impl<T, E> Try<T, E> {
    /// Convert into a `Validation` carrying the same payload.
    pub fn into_validation(self) -> Validation<T, E> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Validation` whose error side can accumulate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attempt::Try;
    /// use stillwater::Validation;
    ///
    /// let checks = vec![
    ///     Try::<(), String>::failure("name is empty".to_string()).validate(),
    ///     Try::success(()).validate(),
    ///     Try::failure("age is negative".to_string()).validate(),
    /// ];
    ///
    /// match Validation::all_vec(checks) {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("Expected failures"),
    /// }
    /// ```
    pub fn validate(self) -> Validation<T, NonEmptyVec<E>> {
        match self {
            Self::Success(value) => Validation::success(value),
            Self::Failure(error) => Validation::fail(error),
        }
    }
}
