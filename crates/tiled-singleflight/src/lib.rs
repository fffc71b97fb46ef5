//! Distributed per-key lock used to deduplicate concurrent tile
//! materialization (spec §4.3).

use std::sync::Arc;
use std::time::Duration;

use tiled_cache::L2Store;
use tiled_catalog::Result;
use tokio::time::sleep;
use tracing::warn;

const LOCK_PREFIX: &str = "lock:";
const DEFAULT_LOCK_TTL: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Whether the caller of [`SingleflightLock::acquire`] is the one
/// responsible for producing the value (`Producer`), or should instead wait
/// for the producer to finish and re-check the cache (`Follower`).
pub enum Lease {
    Producer(ProducerGuard),
    Follower,
}

/// Held by the caller that won the race; releasing it (drop, or explicit
/// [`ProducerGuard::release`]) clears the lock so the next contender for
/// this key doesn't wait out the full TTL.
pub struct ProducerGuard {
    l2: Arc<dyn L2Store>,
    lock_key: String,
    released: bool,
}

impl ProducerGuard {
    pub async fn release(mut self) -> Result<()> {
        self.released = true;
        self.l2.delete(&self.lock_key).await
    }

    /// Extends the lock's expiry. Call this if production is taking
    /// longer than anticipated relative to the lock TTL (spec §4.3:
    /// "holders must renew if long work is anticipated").
    pub async fn renew(&self, holder_id: &str, ttl: Duration) -> Result<()> {
        self.l2.set(&self.lock_key, holder_id.as_bytes().to_vec(), ttl).await
    }
}

impl Drop for ProducerGuard {
    fn drop(&mut self) {
        if !self.released {
            let l2 = self.l2.clone();
            let lock_key = self.lock_key.clone();
            tokio::spawn(async move {
                if let Err(err) = l2.delete(&lock_key).await {
                    warn!(lock_key, error = %err, "failed to release singleflight lock on drop");
                }
            });
        }
    }
}

/// A distributed singleflight lock built on `L2Store`'s atomic
/// set-if-absent-with-expiry primitive (spec §4.3).
pub struct SingleflightLock {
    l2: Arc<dyn L2Store>,
    lock_ttl: Duration,
    wait_timeout: Duration,
}

impl SingleflightLock {
    pub fn new(l2: Arc<dyn L2Store>) -> Self {
        Self {
            l2,
            lock_ttl: DEFAULT_LOCK_TTL,
            wait_timeout: Duration::from_secs(45),
        }
    }

    pub fn with_lock_ttl(mut self, ttl: Duration) -> Self {
        self.lock_ttl = ttl;
        self
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Attempts to become the producer for `key`. Exactly one concurrent
    /// caller across the fleet observes [`Lease::Producer`]; everyone else
    /// blocks until the holder releases (or the lock expires), then
    /// observes [`Lease::Follower`] so they can re-check the cache.
    ///
    /// A lock that expires before the holder releases is not corrected here
    /// -- by design the cache must self-heal instead, since the holder's
    /// write-back re-checks nothing about the lock (spec §4.3: "a lock that
    /// expires before release ... must not corrupt the cache").
    pub async fn acquire(&self, key: &str, holder_id: &str) -> Result<Lease> {
        let lock_key = format!("{LOCK_PREFIX}{key}");

        let won = self
            .l2
            .set_if_absent(&lock_key, holder_id.as_bytes().to_vec(), self.lock_ttl)
            .await?;

        if won {
            return Ok(Lease::Producer(ProducerGuard {
                l2: self.l2.clone(),
                lock_key,
                released: false,
            }));
        }

        self.wait_for_release(&lock_key).await;
        Ok(Lease::Follower)
    }

    async fn wait_for_release(&self, lock_key: &str) {
        let deadline = tokio::time::Instant::now() + self.wait_timeout;
        loop {
            match self.l2.get(lock_key).await {
                Ok(None) => return,
                Ok(Some(_)) if tokio::time::Instant::now() >= deadline => {
                    warn!(lock_key, "singleflight wait timed out, proceeding as a follower anyway");
                    return;
                }
                Ok(Some(_)) => sleep(POLL_INTERVAL).await,
                Err(err) => {
                    warn!(lock_key, error = %err, "error polling singleflight lock, proceeding as a follower anyway");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiled_cache::InMemoryL2;

    fn lock() -> SingleflightLock {
        SingleflightLock::new(Arc::new(InMemoryL2::new())).with_wait_timeout(Duration::from_millis(500))
    }

    #[tokio::test]
    async fn first_caller_becomes_the_producer() {
        let lock = lock();
        match lock.acquire("tile-key", "holder-a").await.unwrap() {
            Lease::Producer(_) => {}
            Lease::Follower => panic!("first caller should be the producer"),
        }
    }

    #[tokio::test]
    async fn second_concurrent_caller_becomes_a_follower_and_unblocks_on_release() {
        let l2: Arc<dyn L2Store> = Arc::new(InMemoryL2::new());
        let lock = SingleflightLock::new(l2.clone()).with_wait_timeout(Duration::from_secs(5));

        let guard = match lock.acquire("tile-key", "holder-a").await.unwrap() {
            Lease::Producer(guard) => guard,
            Lease::Follower => panic!("first caller should be the producer"),
        };

        let lock2 = SingleflightLock::new(l2.clone()).with_wait_timeout(Duration::from_secs(5));
        let follower = tokio::spawn(async move { lock2.acquire("tile-key", "holder-b").await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        guard.release().await.unwrap();

        match follower.await.unwrap().unwrap() {
            Lease::Follower => {}
            Lease::Producer(_) => panic!("second caller should have followed"),
        }
    }

    #[tokio::test]
    async fn follower_gives_up_waiting_after_the_wait_timeout() {
        let l2: Arc<dyn L2Store> = Arc::new(InMemoryL2::new());
        let lock = SingleflightLock::new(l2.clone()).with_lock_ttl(Duration::from_secs(60)).with_wait_timeout(Duration::from_millis(50));

        let _guard = match lock.acquire("tile-key", "holder-a").await.unwrap() {
            Lease::Producer(guard) => guard,
            Lease::Follower => panic!("first caller should be the producer"),
        };

        let lock2 = SingleflightLock::new(l2).with_wait_timeout(Duration::from_millis(50));
        let start = tokio::time::Instant::now();
        let lease = lock2.acquire("tile-key", "holder-b").await.unwrap();
        assert!(matches!(lease, Lease::Follower));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
