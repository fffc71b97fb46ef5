//! Process configuration (spec §6): a single namespaced bag of settings
//! loaded once at startup from environment variables, with typed defaults
//! for everything an operator doesn't have to set explicitly.
//!
//! Grounded in `map-render::Config`'s redacted-secret `Debug` impl; env-var
//! parsing itself follows the plain `std::env::var` style used throughout
//! the pack (e.g. `gcr::timeout`, `gcp-logging::env_filter`) rather than
//! reaching for an env/config crate nothing else here uses.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Config loading failed: a required variable is missing, malformed, or
/// violates an invariant (e.g. `MIN_ZOOM > MAX_ZOOM`). The process must
/// exit with [`EXIT_CONFIG_ERROR`] when this is returned from `main`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {key} has invalid value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },

    #[error("invalid configuration: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// `main`'s process exit code on normal shutdown (spec §6).
pub const EXIT_OK: i32 = 0;
/// `main`'s process exit code when [`Config::from_env`] fails.
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// `main`'s process exit code for any other startup invariant violation
/// (e.g. a storage adapter failing its initial connectivity check).
pub const EXIT_FATAL: i32 = 1;

const DEFAULT_PNG_TTL: Duration = Duration::from_secs(30 * 24 * 3600);
const DEFAULT_META_TTL: Duration = Duration::from_secs(7 * 24 * 3600);
const DEFAULT_LIFESPAN_URL: Duration = Duration::from_secs(24 * 3600);
const DEFAULT_L1_MAX: usize = 1000;
const DEFAULT_L1_MAX_AGE: Duration = Duration::from_secs(3600);
const DEFAULT_MAX_WORKERS_BACKEND: usize = 20;
const DEFAULT_MIN_ZOOM: u8 = 6;
const DEFAULT_MAX_ZOOM: u8 = 18;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// The tile server's complete startup configuration (spec §6). Recognized
/// keys: `L2_URL`, `L3_ENDPOINT`, `L3_ACCESS_KEY`, `L3_SECRET_KEY`,
/// `L3_BUCKET`, `BACKEND_BASE_URL`, `PNG_TTL`, `META_TTL`, `LIFESPAN_URL`,
/// `L1_MAX`, `L1_MAX_AGE`, `MAX_WORKERS_BACKEND`, `MIN_ZOOM`, `MAX_ZOOM`,
/// `BIND_ADDR`.
///
/// The rate-limit table and periodic schedule named by the spec alongside
/// these are compiled-in tables, not environment-tunable --
/// [`tiled_worker::DEFAULT_WARMING_LIMIT_PER_MINUTE`] and
/// [`tiled_worker::SCHEDULE`] respectively.
#[derive(Clone)]
pub struct Config {
    pub l2_url: String,
    pub l3_endpoint: String,
    pub l3_access_key: String,
    pub l3_secret_key: String,
    pub l3_bucket: String,
    pub backend_base_url: String,
    pub png_ttl: Duration,
    pub meta_ttl: Duration,
    pub lifespan_url: Duration,
    pub l1_max: usize,
    pub l1_max_age: Duration,
    pub max_workers_backend: usize,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub bind_addr: String,
}

// Manual impl so a stray `{:?}` in a log line never leaks L3 credentials.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("l2_url", &self.l2_url)
            .field("l3_endpoint", &self.l3_endpoint)
            .field("l3_access_key", &"...")
            .field("l3_secret_key", &"...")
            .field("l3_bucket", &self.l3_bucket)
            .field("backend_base_url", &self.backend_base_url)
            .field("png_ttl", &self.png_ttl)
            .field("meta_ttl", &self.meta_ttl)
            .field("lifespan_url", &self.lifespan_url)
            .field("l1_max", &self.l1_max)
            .field("l1_max_age", &self.l1_max_age)
            .field("max_workers_backend", &self.max_workers_backend)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            l2_url: required("L2_URL")?,
            l3_endpoint: required("L3_ENDPOINT")?,
            l3_access_key: required("L3_ACCESS_KEY")?,
            l3_secret_key: required("L3_SECRET_KEY")?,
            l3_bucket: required("L3_BUCKET")?,
            backend_base_url: required("BACKEND_BASE_URL")?,
            png_ttl: duration_days("PNG_TTL", DEFAULT_PNG_TTL)?,
            meta_ttl: duration_days("META_TTL", DEFAULT_META_TTL)?,
            lifespan_url: duration_hours("LIFESPAN_URL", DEFAULT_LIFESPAN_URL)?,
            l1_max: parsed("L1_MAX", DEFAULT_L1_MAX)?,
            l1_max_age: duration_hours("L1_MAX_AGE", DEFAULT_L1_MAX_AGE)?,
            max_workers_backend: parsed("MAX_WORKERS_BACKEND", DEFAULT_MAX_WORKERS_BACKEND)?,
            min_zoom: parsed("MIN_ZOOM", DEFAULT_MIN_ZOOM)?,
            max_zoom: parsed("MAX_ZOOM", DEFAULT_MAX_ZOOM)?,
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
        };

        config.validate()?;
        tracing::info!(?config, "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invariant(format!(
                "MIN_ZOOM ({}) must be <= MAX_ZOOM ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.l1_max == 0 {
            return Err(ConfigError::Invariant("L1_MAX must be greater than zero".to_string()));
        }
        if self.max_workers_backend == 0 {
            return Err(ConfigError::Invariant("MAX_WORKERS_BACKEND must be greater than zero".to_string()));
        }
        Ok(())
    }
}

fn required(key: &'static str) -> Result<String> {
    std::env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn optional(key: &'static str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed<T>(key: &'static str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid { key, value, reason: e.to_string() }),
        Err(_) => Ok(default),
    }
}

fn duration_days(key: &'static str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(value) => {
            let days: u64 = value.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid { key, value, reason: e.to_string() })?;
            Ok(Duration::from_secs(days * 24 * 3600))
        }
        Err(_) => Ok(default),
    }
}

fn duration_hours(key: &'static str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(value) => {
            let hours: u64 = value.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid { key, value, reason: e.to_string() })?;
            Ok(Duration::from_secs(hours * 3600))
        }
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // std::env is process-global; serialize tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn required_vars() -> [(&'static str, &'static str); 6] {
        [
            ("L2_URL", "redis://localhost:6379"),
            ("L3_ENDPOINT", "https://storage.example.test"),
            ("L3_ACCESS_KEY", "key"),
            ("L3_SECRET_KEY", "secret"),
            ("L3_BUCKET", "tiles"),
            ("BACKEND_BASE_URL", "https://earthengine.example.test"),
        ]
    }

    fn clear_optional() {
        for key in ["PNG_TTL", "META_TTL", "LIFESPAN_URL", "L1_MAX", "L1_MAX_AGE", "MAX_WORKERS_BACKEND", "MIN_ZOOM", "MAX_ZOOM", "BIND_ADDR"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn missing_required_variable_is_a_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, _) in required_vars() {
            std::env::remove_var(key);
        }
        clear_optional();

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn defaults_apply_when_optional_variables_are_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, value) in required_vars() {
            std::env::set_var(key, value);
        }
        clear_optional();

        let config = Config::from_env().unwrap();
        assert_eq!(config.png_ttl, DEFAULT_PNG_TTL);
        assert_eq!(config.l1_max, DEFAULT_L1_MAX);
        assert_eq!(config.min_zoom, DEFAULT_MIN_ZOOM);
        assert_eq!(config.max_zoom, DEFAULT_MAX_ZOOM);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn min_zoom_above_max_zoom_is_an_invariant_violation() {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, value) in required_vars() {
            std::env::set_var(key, value);
        }
        clear_optional();
        std::env::set_var("MIN_ZOOM", "19");
        std::env::set_var("MAX_ZOOM", "18");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invariant(_)));
        std::env::remove_var("MIN_ZOOM");
        std::env::remove_var("MAX_ZOOM");
    }

    #[test]
    fn debug_output_redacts_l3_credentials() {
        let config = Config {
            l2_url: "redis://x".to_string(),
            l3_endpoint: "https://x".to_string(),
            l3_access_key: "super-secret-key".to_string(),
            l3_secret_key: "super-secret-value".to_string(),
            l3_bucket: "tiles".to_string(),
            backend_base_url: "https://earthengine.example.test".to_string(),
            png_ttl: DEFAULT_PNG_TTL,
            meta_ttl: DEFAULT_META_TTL,
            lifespan_url: DEFAULT_LIFESPAN_URL,
            l1_max: DEFAULT_L1_MAX,
            l1_max_age: DEFAULT_L1_MAX_AGE,
            max_workers_backend: DEFAULT_MAX_WORKERS_BACKEND,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(!debug.contains("super-secret-value"));
    }
}
