use std::time::Duration;

use rand::Rng;

/// `fetch_tile` retry policy on `429`: `base * 2^attempt + jitter` up to 5
/// attempts (spec §4.4).
pub const THROTTLE_MAX_ATTEMPTS: u32 = 5;
/// `fetch_tile` retry policy on 5xx: exponential backoff up to 3 attempts.
pub const SERVER_ERROR_MAX_ATTEMPTS: u32 = 3;
pub const RETRY_BASE: Duration = Duration::from_millis(500);
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the caller should react to a backend response, mirroring
/// `net-utils::retry::classify`'s `ShouldRetry` shape but scoped to the
/// narrower 429/5xx/other split this client actually needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Throttled,
    ServerError,
    FailFast,
}

pub fn classify_status(status: reqwest::StatusCode) -> Classification {
    if status.is_success() {
        Classification::Success
    } else if status.as_u16() == 429 {
        Classification::Throttled
    } else if status.is_server_error() {
        Classification::ServerError
    } else {
        Classification::FailFast
    }
}

/// `base * 2^attempt + jitter(0..1s)`, grounded in
/// `original_source/app/tasks/cache_tasks.py`'s `countdown = 2 ** attempt`.
pub fn backoff_delay(attempt: u32) -> Duration {
    let exp = RETRY_BASE.saturating_mul(1 << attempt.min(16));
    let jitter = Duration::from_millis(rand::rng().random_range(0..1000));
    exp + jitter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses_correctly() {
        assert_eq!(classify_status(reqwest::StatusCode::OK), Classification::Success);
        assert_eq!(classify_status(reqwest::StatusCode::TOO_MANY_REQUESTS), Classification::Throttled);
        assert_eq!(classify_status(reqwest::StatusCode::BAD_GATEWAY), Classification::ServerError);
        assert_eq!(classify_status(reqwest::StatusCode::NOT_FOUND), Classification::FailFast);
    }

    #[test]
    fn backoff_grows_with_attempt_and_stays_above_the_exponential_floor() {
        let first = backoff_delay(0);
        let third = backoff_delay(2);
        assert!(first >= RETRY_BASE);
        assert!(third >= RETRY_BASE.saturating_mul(4));
    }
}
