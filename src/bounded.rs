//! Timeout-bounded operations.
//!
//! Every potentially slow collaborator call runs through [`run_bounded`],
//! which returns a tagged result instead of racing futures or raising:
//! completed, timed out, or failed. Cancellation is purely timeout-based —
//! a timed-out operation keeps running on its worker thread and its late
//! result is simply discarded when the channel's receiver is gone.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// The outcome of a timeout-bounded operation.
#[derive(Debug)]
pub enum Bounded<T> {
    /// The operation finished within its budget.
    Completed(T),
    /// The budget expired before the operation produced a result.
    TimedOut,
    /// The operation finished within its budget but failed, or its worker
    /// terminated without a result (e.g. a panic in the provider).
    Failed(Error),
}

impl<T> Bounded<T> {
    /// Whether the operation completed successfully.
    pub fn is_completed(&self) -> bool {
        matches!(self, Bounded::Completed(_))
    }
}

/// Run a fallible operation with a time budget.
///
/// The operation executes on a detached worker thread; the caller blocks at
/// most `budget`. Worker panics surface as [`Bounded::Failed`] with
/// [`Error::Aborted`], never as a caller panic.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tablegrid::{run_bounded, Bounded};
///
/// let outcome = run_bounded(Duration::from_secs(1), || Ok(21 * 2));
/// assert!(matches!(outcome, Bounded::Completed(42)));
///
/// let outcome: Bounded<()> = run_bounded(Duration::from_millis(10), || {
///     std::thread::sleep(Duration::from_secs(5));
///     Ok(())
/// });
/// assert!(matches!(outcome, Bounded::TimedOut));
/// ```
pub fn run_bounded<T, F>(budget: Duration, op: F) -> Bounded<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("tablegrid-bounded".to_string())
        .spawn(move || {
            // The receiver may be gone already if the budget expired
            let _ = tx.send(op());
        });

    if spawned.is_err() {
        return Bounded::Failed(Error::Aborted);
    }

    match rx.recv_timeout(budget) {
        Ok(Ok(value)) => Bounded::Completed(value),
        Ok(Err(err)) => Bounded::Failed(err),
        Err(RecvTimeoutError::Timeout) => Bounded::TimedOut,
        // Sender dropped without sending: the worker panicked
        Err(RecvTimeoutError::Disconnected) => Bounded::Failed(Error::Aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_within_budget() {
        let outcome = run_bounded(Duration::from_secs(1), || Ok("done"));
        assert!(matches!(outcome, Bounded::Completed("done")));
    }

    #[test]
    fn test_propagates_failure() {
        let outcome: Bounded<()> = run_bounded(Duration::from_secs(1), || {
            Err(Error::DocumentLoad("corrupt".to_string()))
        });
        match outcome {
            Bounded::Failed(Error::DocumentLoad(msg)) => assert_eq!(msg, "corrupt"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_times_out() {
        let outcome: Bounded<()> = run_bounded(Duration::from_millis(20), || {
            thread::sleep(Duration::from_millis(500));
            Ok(())
        });
        assert!(matches!(outcome, Bounded::TimedOut));
    }

    #[test]
    fn test_worker_panic_is_failure() {
        let outcome: Bounded<()> = run_bounded(Duration::from_secs(1), || {
            panic!("provider bug");
        });
        assert!(matches!(outcome, Bounded::Failed(Error::Aborted)));
    }

    #[test]
    fn test_late_result_is_discarded() {
        // The worker outlives the timeout; sending to the dropped receiver
        // must be harmless.
        let outcome: Bounded<u32> = run_bounded(Duration::from_millis(10), || {
            thread::sleep(Duration::from_millis(100));
            Ok(7)
        });
        assert!(matches!(outcome, Bounded::TimedOut));
        thread::sleep(Duration::from_millis(150));
    }
}
