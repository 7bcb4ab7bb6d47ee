//! Structured logging of `Try` outcomes.
//!
//! Available with the `tracing` feature. Events are emitted through the
//! `tracing` facade; install a subscriber to see them.

use crate::core::Try;
use std::fmt::{Debug, Display};

/// Extension methods that log a `Try` as it flows through a chain.
///
/// Both methods return the container unchanged.
///
/// # Example
///
/// ```rust
/// use attempt::{Try, TryTracingExt};
///
/// let port: Try<u16, std::num::ParseIntError> = Try::of(|| "80x".parse::<u16>())
///     .trace_failure("parse_port")
///     .recover(|_| 8080);
///
/// assert_eq!(port, Try::success(8080));
/// ```
pub trait TryTracingExt: Sized {
    /// Emit a `debug` event if this is a failure.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emit a `trace` event for a success and a `debug` event for a failure.
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T: Debug, E: Display> TryTracingExt for Try<T, E> {
    fn trace_failure(self, operation: &str) -> Self {
        if let Try::Failure(error) = &self {
            tracing::debug!(operation, error = %error, "computation failed");
        }
        self
    }

    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Try::Success(value) => tracing::trace!(operation, value = ?value, "computation succeeded"),
            Try::Failure(error) => tracing::debug!(operation, error = %error, "computation failed"),
        }
        self
    }
}

/// Run `f` under a subscriber that records every event as plain text.
#[cfg(test)]
pub(crate) fn capture_events<F: FnOnce()>(f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer poisoned")
                .extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().expect("log buffer poisoned").clone();
    String::from_utf8(bytes).expect("log output is utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_leaves_success_untouched() {
        let outcome: Try<i32, String> = Try::success(1);
        assert_eq!(outcome.clone().trace_outcome("load"), outcome);
        assert_eq!(outcome.clone().trace_failure("load"), outcome);
    }

    #[test]
    fn tracing_leaves_failure_untouched() {
        let outcome: Try<i32, String> = Try::failure("unreachable".to_string());
        assert_eq!(outcome.clone().trace_outcome("connect"), outcome);
        assert_eq!(outcome.clone().trace_failure("connect"), outcome);
    }

    #[test]
    fn trace_failure_records_operation_and_error() {
        let logs = capture_events(|| {
            let _ = Try::<i32, String>::failure("host unreachable".to_string())
                .trace_failure("connect");
        });

        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("computation failed"));
        assert!(logs.contains("operation"));
        assert!(logs.contains("connect"));
        assert!(logs.contains("error=host unreachable"));
    }

    #[test]
    fn trace_failure_is_silent_on_success() {
        let logs = capture_events(|| {
            let _ = Try::<i32, String>::success(1).trace_failure("connect");
        });

        assert!(logs.is_empty());
    }

    #[test]
    fn trace_outcome_records_success_value() {
        let logs = capture_events(|| {
            let _ = Try::<i32, String>::success(42).trace_outcome("load");
        });

        assert!(logs.contains("TRACE"));
        assert!(logs.contains("computation succeeded"));
        assert!(logs.contains("load"));
        assert!(logs.contains("value=42"));
    }
}
