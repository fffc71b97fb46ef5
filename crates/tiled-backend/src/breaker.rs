use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use timestamp::Timestamp;

const DEFAULT_FAILURE_THRESHOLD: u32 = 5;
const DEFAULT_RECOVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-process circuit breaker guarding calls to the imagery backend (spec
/// §4.4). No breaker crate appears anywhere in the pack, so this is a small
/// hand-rolled atomics-based state machine, in the style of
/// `data-structures.lol`'s small single-purpose structs.
pub struct CircuitBreaker {
    failure_threshold: u32,
    recovery_timeout: Duration,
    consecutive_failures: AtomicU32,
    opened_at_millis: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

impl CircuitBreaker {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_FAILURE_THRESHOLD, DEFAULT_RECOVERY_TIMEOUT)
    }

    pub fn with_config(failure_threshold: u32, recovery_timeout: Duration) -> Self {
        Self {
            failure_threshold,
            recovery_timeout,
            consecutive_failures: AtomicU32::new(0),
            opened_at_millis: AtomicU64::new(0),
        }
    }

    /// The breaker's state as observed right now. `HalfOpen` means the
    /// breaker is technically open but `recovery_timeout` has elapsed, so
    /// the next call should be let through as a trial.
    pub fn state(&self) -> BreakerState {
        let opened_at = self.opened_at_millis.load(Ordering::Acquire);
        if opened_at == 0 {
            return BreakerState::Closed;
        }

        let elapsed_ms = (Timestamp::now().as_millis() as u64).saturating_sub(opened_at);
        if elapsed_ms >= self.recovery_timeout.as_millis() as u64 {
            BreakerState::HalfOpen
        } else {
            BreakerState::Open
        }
    }

    /// Whether a call is allowed through right now.
    pub fn allow_request(&self) -> bool {
        !matches!(self.state(), BreakerState::Open)
    }

    pub fn record_success(&self) {
        self.consecutive_failures.store(0, Ordering::Release);
        self.opened_at_millis.store(0, Ordering::Release);
    }

    /// Records a failure attributed to backend rate-limiting/overload. Once
    /// `failure_threshold` consecutive failures are observed, the breaker
    /// opens; a failure observed while half-open re-opens it immediately.
    pub fn record_failure(&self) {
        if self.state() == BreakerState::HalfOpen {
            self.trip();
            return;
        }

        let failures = self.consecutive_failures.fetch_add(1, Ordering::AcqRel) + 1;
        if failures >= self.failure_threshold {
            self.trip();
        }
    }

    fn trip(&self) {
        self.opened_at_millis.store(Timestamp::now().as_millis() as u64, Ordering::Release);
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_by_default() {
        let breaker = CircuitBreaker::new();
        assert_eq!(breaker.state(), BreakerState::Closed);
        assert!(breaker.allow_request());
    }

    #[test]
    fn opens_after_threshold_consecutive_failures() {
        let breaker = CircuitBreaker::with_config(5, Duration::from_secs(30));
        for _ in 0..4 {
            breaker.record_failure();
        }
        assert!(breaker.allow_request(), "should still be closed before the 5th failure");

        breaker.record_failure();
        assert!(!breaker.allow_request());
    }

    #[test]
    fn success_resets_the_failure_counter() {
        let breaker = CircuitBreaker::with_config(5, Duration::from_secs(30));
        for _ in 0..4 {
            breaker.record_failure();
        }
        breaker.record_success();
        breaker.record_failure();
        assert!(breaker.allow_request());
    }

    #[test]
    fn becomes_half_open_after_recovery_timeout() {
        let breaker = CircuitBreaker::with_config(1, Duration::from_millis(0));
        breaker.record_failure();
        assert_eq!(breaker.state(), BreakerState::HalfOpen);
        assert!(breaker.allow_request());
    }

    #[test]
    fn failure_while_half_open_reopens_immediately() {
        let breaker = CircuitBreaker::with_config(1, Duration::from_millis(0));
        breaker.record_failure();
        assert_eq!(breaker.state(), BreakerState::HalfOpen);
        breaker.record_failure();
        assert_eq!(breaker.state(), BreakerState::Open);
    }
}
