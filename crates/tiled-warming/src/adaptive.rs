//! System-load-driven concurrency limiting (spec §4.7 "Adaptive
//! concurrency"), grounded verbatim in
//! `original_source/app/middleware/adaptive_limiter.py::AdaptiveLimiter`'s
//! factor table. No process-metrics crate appears anywhere in the pack;
//! `sysinfo` is the closest ecosystem-idiomatic choice for CPU/mem sampling
//! in a Rust service (noted in DESIGN.md).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sysinfo::System;
use tokio::sync::{Mutex, Semaphore};

/// Floor: "floor at 100 req/min equivalent" (spec §4.7), expressed as a
/// concurrency floor rather than a literal request rate since the gate here
/// is concurrent backend leases, not request throughput.
const MIN_PERMITS: usize = 100;
const RECOMPUTE_INTERVAL: Duration = Duration::from_secs(30);

fn cpu_factor(cpu_percent: f32) -> f32 {
    if cpu_percent > 80.0 {
        0.5
    } else if cpu_percent > 60.0 {
        0.7
    } else if cpu_percent < 30.0 {
        1.5
    } else {
        1.0
    }
}

fn memory_factor(memory_percent: f32) -> f32 {
    if memory_percent > 85.0 {
        0.3
    } else if memory_percent > 70.0 {
        0.6
    } else if memory_percent < 50.0 {
        1.2
    } else {
        1.0
    }
}

/// The stricter (lower) of the CPU and memory factors wins (spec §4.7).
fn adjustment_factor(cpu_percent: f32, memory_percent: f32) -> f32 {
    cpu_factor(cpu_percent).min(memory_factor(memory_percent))
}

/// A semaphore-backed concurrent-lease bound that shrinks or grows within
/// `[min_limit, max_limit]` based on system load, recomputed at most once
/// per [`RECOMPUTE_INTERVAL`].
pub struct AdaptiveConcurrency {
    base_limit: usize,
    min_limit: usize,
    max_limit: usize,
    semaphore: Arc<Semaphore>,
    current_limit: AtomicUsize,
    last_check: Mutex<Instant>,
    system: Mutex<System>,
}

impl AdaptiveConcurrency {
    pub fn new(base_limit: usize, min_limit: usize, max_limit: usize) -> Self {
        Self {
            base_limit,
            min_limit,
            max_limit,
            semaphore: Arc::new(Semaphore::new(base_limit)),
            current_limit: AtomicUsize::new(base_limit),
            last_check: Mutex::new(Instant::now() - RECOMPUTE_INTERVAL),
            system: Mutex::new(System::new()),
        }
    }

    pub fn semaphore(&self) -> Arc<Semaphore> {
        self.semaphore.clone()
    }

    pub fn current_limit(&self) -> usize {
        self.current_limit.load(Ordering::SeqCst)
    }

    /// Recomputes the limit if at least [`RECOMPUTE_INTERVAL`] has elapsed
    /// since the last check; otherwise a no-op. Safe to call before every
    /// lease dispatch.
    pub async fn maybe_recompute(&self) {
        let mut last_check = self.last_check.lock().await;
        if last_check.elapsed() < RECOMPUTE_INTERVAL {
            return;
        }
        *last_check = Instant::now();
        drop(last_check);

        let mut system = self.system.lock().await;
        system.refresh_cpu_usage();
        system.refresh_memory();
        let cpu_percent = system.global_cpu_usage();
        let memory_percent = if system.total_memory() == 0 {
            0.0
        } else {
            (system.used_memory() as f64 / system.total_memory() as f64 * 100.0) as f32
        };

        self.apply_factor(adjustment_factor(cpu_percent, memory_percent));
    }

    fn apply_factor(&self, factor: f32) {
        let target = ((self.base_limit as f32) * factor) as usize;
        let target = target.clamp(self.min_limit.max(MIN_PERMITS), self.max_limit);
        let current = self.current_limit.swap(target, Ordering::SeqCst);

        if target > current {
            self.semaphore.add_permits(target - current);
        } else if target < current {
            // `Semaphore` has no direct "remove N permits" primitive;
            // forgetting acquired-but-unused permits shrinks the pool
            // without blocking callers holding permits already granted.
            let to_forget = current - target;
            if let Ok(permits) = self.semaphore.clone().try_acquire_many_owned(to_forget as u32) {
                permits.forget();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_cpu_and_high_memory_applies_the_stricter_factor() {
        assert_eq!(adjustment_factor(90.0, 10.0), 0.5);
        assert_eq!(adjustment_factor(10.0, 90.0), 0.3);
    }

    #[test]
    fn low_load_scales_up() {
        assert_eq!(adjustment_factor(10.0, 10.0), 1.2);
    }

    #[test]
    fn moderate_load_is_unadjusted() {
        assert_eq!(adjustment_factor(45.0, 60.0), 1.0);
    }

    #[tokio::test]
    async fn limit_never_drops_below_the_configured_floor() {
        let adaptive = AdaptiveConcurrency::new(1000, 50, 2000);
        adaptive.apply_factor(0.01);
        assert!(adaptive.current_limit() >= MIN_PERMITS);
    }

    #[tokio::test]
    async fn second_recompute_within_the_interval_is_a_no_op() {
        let adaptive = AdaptiveConcurrency::new(1000, 100, 2000);
        adaptive.maybe_recompute().await;
        let after_first = adaptive.current_limit();
        adaptive.maybe_recompute().await;
        assert_eq!(adaptive.current_limit(), after_first);
    }
}
