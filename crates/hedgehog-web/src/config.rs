//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8000").
    pub bind_addr: String,

    /// SQLite database path, or ":memory:".
    pub database_path: String,

    /// Upper bound on how long a store call waits for the database.
    pub db_timeout: Duration,

    /// Lifetime of a session cookie and its flash messages.
    pub session_ttl: Duration,

    /// Site name shown in page titles and the header.
    pub site_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            database_path: "hedgehogs.db".to_string(),
            db_timeout: Duration::from_millis(5000),
            session_ttl: Duration::from_secs(60),
            site_name: "Hedgehogs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `HEDGEHOG_BIND_ADDR`: Server bind address (default: "0.0.0.0:8000")
    /// - `HEDGEHOG_DATABASE`: SQLite path (default: "hedgehogs.db")
    /// - `HEDGEHOG_DB_TIMEOUT_MS`: Store busy timeout (default: 5000)
    /// - `HEDGEHOG_SESSION_TTL_SECS`: Session and flash lifetime (default: 60)
    /// - `HEDGEHOG_SITE_NAME`: Site name (default: "Hedgehogs")
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("HEDGEHOG_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let database_path = std::env::var("HEDGEHOG_DATABASE").unwrap_or(defaults.database_path);

        let db_timeout = match std::env::var("HEDGEHOG_DB_TIMEOUT_MS") {
            Ok(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("invalid HEDGEHOG_DB_TIMEOUT_MS: {raw:?}"))?,
            ),
            Err(_) => defaults.db_timeout,
        };

        let session_ttl = match std::env::var("HEDGEHOG_SESSION_TTL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid HEDGEHOG_SESSION_TTL_SECS: {raw:?}"))?;
                if secs == 0 {
                    anyhow::bail!("HEDGEHOG_SESSION_TTL_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            Err(_) => defaults.session_ttl,
        };

        let site_name = std::env::var("HEDGEHOG_SITE_NAME").unwrap_or(defaults.site_name);

        tracing::info!(
            bind_addr = %bind_addr,
            database = %database_path,
            db_timeout_ms = db_timeout.as_millis() as u64,
            session_ttl_secs = session_ttl.as_secs(),
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_path,
            db_timeout,
            session_ttl,
            site_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "HEDGEHOG_BIND_ADDR",
        "HEDGEHOG_DATABASE",
        "HEDGEHOG_DB_TIMEOUT_MS",
        "HEDGEHOG_SESSION_TTL_SECS",
        "HEDGEHOG_SITE_NAME",
    ];

    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8000");
            assert_eq!(config.database_path, "hedgehogs.db");
            assert_eq!(config.db_timeout, Duration::from_millis(5000));
            assert_eq!(config.session_ttl, Duration::from_secs(60));
            assert_eq!(config.site_name, "Hedgehogs");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("HEDGEHOG_BIND_ADDR", "127.0.0.1:9090"),
                ("HEDGEHOG_DATABASE", ":memory:"),
                ("HEDGEHOG_DB_TIMEOUT_MS", "250"),
                ("HEDGEHOG_SESSION_TTL_SECS", " 120 "),
                ("HEDGEHOG_SITE_NAME", "Erinaceidae"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.database_path, ":memory:");
                assert_eq!(config.db_timeout, Duration::from_millis(250));
                assert_eq!(config.session_ttl, Duration::from_secs(120));
                assert_eq!(config.site_name, "Erinaceidae");
            },
        );
    }

    #[test]
    fn config_rejects_bad_timeout() {
        with_env_vars(&[("HEDGEHOG_DB_TIMEOUT_MS", "soon")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("HEDGEHOG_DB_TIMEOUT_MS"));
        });
    }

    #[test]
    fn config_rejects_zero_session_ttl() {
        with_env_vars(&[("HEDGEHOG_SESSION_TTL_SECS", "0")], || {
            assert!(Config::from_env().is_err());
        });
    }
}
