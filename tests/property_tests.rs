//! Property-based tests for the `Try` combinator protocol.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use attempt::{NoSuchElement, Try};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
enum TestError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Rejected(#[from] NoSuchElement),
}

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

prop_compose! {
    fn arbitrary_error()(message in "[a-z]{1,12}") -> TestError {
        TestError::Message(message)
    }
}

fn arbitrary_try() -> impl Strategy<Value = Try<i32, TestError>> {
    prop_oneof![
        any::<i32>().prop_map(Try::<i32, TestError>::success),
        arbitrary_error().prop_map(Try::<i32, TestError>::failure),
    ]
}

proptest! {
    #[test]
    fn map_applies_function_to_success(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(3).wrapping_sub(1);
        let mapped = Try::<i32, TestError>::success(value).map(f);
        prop_assert_eq!(mapped, Try::success(f(value)));
    }

    #[test]
    fn map_never_invokes_mapper_on_failure(error in arbitrary_error()) {
        let calls = Cell::new(0);
        let mapped = Try::<i32, TestError>::failure(error.clone()).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });

        prop_assert_eq!(mapped, Try::failure(error));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn flat_map_and_filter_pass_failures_through(error in arbitrary_error()) {
        let calls = Cell::new(0);
        let outcome = Try::<i32, TestError>::failure(error.clone())
            .flat_map(|n| {
                calls.set(calls.get() + 1);
                Try::success(n)
            })
            .filter(|_| {
                calls.set(calls.get() + 1);
                true
            });

        prop_assert_eq!(outcome, Try::failure(error));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn filter_is_idempotent(outcome in arbitrary_try(), threshold in any::<i32>()) {
        let predicate = |n: &i32| *n >= threshold;
        let once = outcome.clone().filter(predicate);
        let twice = outcome.filter(predicate).filter(predicate);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn recover_with_is_identity_on_success(value in any::<i32>()) {
        let calls = Cell::new(0);
        let outcome = Try::<i32, TestError>::success(value).recover_with(|e| {
            calls.set(calls.get() + 1);
            Try::failure(e)
        });

        prop_assert_eq!(outcome, Try::success(value));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn recover_always_yields_success(outcome in arbitrary_try(), fallback in any::<i32>()) {
        let expected = outcome.clone().or_else(fallback);
        let recovered = outcome.recover(|_| fallback);
        prop_assert_eq!(recovered, Try::success(expected));
    }

    #[test]
    fn or_else_returns_default_only_on_failure(outcome in arbitrary_try(), fallback in any::<i32>()) {
        let expected = match &outcome {
            Try::Success(value) => *value,
            Try::Failure(_) => fallback,
        };
        prop_assert_eq!(outcome.or_else(fallback), expected);
    }

    #[test]
    fn of_then_get_returns_the_supplied_result(value in any::<i32>(), error in arbitrary_error(), fail in any::<bool>()) {
        let supplied: Result<i32, TestError> = if fail { Err(error) } else { Ok(value) };
        let outcome = Try::of(|| supplied.clone());
        prop_assert_eq!(outcome.get(), supplied);
    }

    #[test]
    fn equality_follows_payload(a in arbitrary_try(), b in arbitrary_try()) {
        let expected = match (&a, &b) {
            (Try::Success(x), Try::Success(y)) => x == y,
            (Try::Failure(x), Try::Failure(y)) => x == y,
            _ => false,
        };
        prop_assert_eq!(a == b, expected);
    }

    #[test]
    fn success_never_equals_failure(value in any::<i32>(), error in arbitrary_error()) {
        prop_assert_ne!(Try::<i32, TestError>::success(value), Try::failure(error));
    }

    #[test]
    fn equal_values_hash_equally(outcome in arbitrary_try()) {
        let copy = outcome.clone();
        prop_assert_eq!(hash_of(&outcome), hash_of(&copy));
    }
}
