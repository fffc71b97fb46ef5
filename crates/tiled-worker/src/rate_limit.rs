//! Per-task-name rate limits (spec §4.6 "Rate-limit annotations", e.g.
//! warming tasks <= 600/min). No rate-limiter crate appears anywhere in the
//! pack, so this follows the same hand-rolled-small-data-structure style as
//! [`crate::breaker`]-adjacent code in `tiled-backend::breaker`: a fixed
//! window counter per task name, reset once the window elapses.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Default ceiling for warming tasks per spec §4.6's example annotation.
pub const DEFAULT_WARMING_LIMIT_PER_MINUTE: u32 = 600;

struct Window {
    limit_per_minute: u32,
    count: u32,
    started_at: Instant,
}

impl Window {
    fn new(limit_per_minute: u32) -> Self {
        Self { limit_per_minute, count: 0, started_at: Instant::now() }
    }

    fn try_acquire(&mut self) -> bool {
        if self.started_at.elapsed() >= Duration::from_secs(60) {
            self.count = 0;
            self.started_at = Instant::now();
        }
        if self.count >= self.limit_per_minute {
            return false;
        }
        self.count += 1;
        true
    }
}

/// Tracks a rolling per-minute budget for each named task. Tasks with no
/// registered limit are unthrottled.
#[derive(Default)]
pub struct RateLimiter {
    limits: HashMap<&'static str, u32>,
    windows: Mutex<HashMap<&'static str, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self { limits: HashMap::new(), windows: Mutex::new(HashMap::new()) }
    }

    pub fn with_limit(mut self, task_name: &'static str, limit_per_minute: u32) -> Self {
        self.limits.insert(task_name, limit_per_minute);
        self
    }

    /// The mandatory annotation from spec §4.6: warming tasks capped at
    /// [`DEFAULT_WARMING_LIMIT_PER_MINUTE`] per minute.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_limit("cache_point", DEFAULT_WARMING_LIMIT_PER_MINUTE)
            .with_limit("cache_point_batch", DEFAULT_WARMING_LIMIT_PER_MINUTE)
            .with_limit("cache_campaign", DEFAULT_WARMING_LIMIT_PER_MINUTE)
    }

    /// Returns whether `task_name` may run now; consumes one unit of its
    /// budget if so. Unregistered task names always succeed.
    pub async fn try_acquire(&self, task_name: &'static str) -> bool {
        let Some(limit) = self.limits.get(task_name).copied() else {
            return true;
        };
        let mut windows = self.windows.lock().await;
        windows.entry(task_name).or_insert_with(|| Window::new(limit)).try_acquire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unregistered_task_is_never_throttled() {
        let limiter = RateLimiter::new();
        for _ in 0..10_000 {
            assert!(limiter.try_acquire("anything").await);
        }
    }

    #[tokio::test]
    async fn registered_task_is_denied_once_the_window_is_exhausted() {
        let limiter = RateLimiter::new().with_limit("warm", 3);
        assert!(limiter.try_acquire("warm").await);
        assert!(limiter.try_acquire("warm").await);
        assert!(limiter.try_acquire("warm").await);
        assert!(!limiter.try_acquire("warm").await);
    }

    #[tokio::test]
    async fn defaults_throttle_the_spec_named_warming_tasks() {
        let limiter = RateLimiter::with_defaults();
        assert!(limiter.try_acquire("cache_point").await);
    }
}
