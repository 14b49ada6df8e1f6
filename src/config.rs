//! Server configuration from environment variables.
//!
//! | Variable                 | Default             |
//! |--------------------------|---------------------|
//! | `HOST`                   | `0.0.0.0`           |
//! | `PORT`                   | `8080`              |
//! | `ADMIN_PASSWORD`         | `admin`             |
//! | `DATA_FILE`              | `pickems.json`      |
//! | `SESSION_SECRET`         | random per process  |
//! | `SNAPSHOT_INTERVAL_SECS` | `30`                |
//! | `ROUND_POLICY`           | `exclude_third_place` |

use crate::models::RoundPolicy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Minimum length of a session secret (cookie signing + encryption key material).
pub const SESSION_SECRET_MIN_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin_password: String,
    /// Where the store snapshot is read from and written to; `None` keeps everything in memory.
    pub data_file: Option<PathBuf>,
    /// At least [`SESSION_SECRET_MIN_LEN`] bytes; `None` means sessions die with the process.
    pub session_secret: Option<Vec<u8>>,
    pub snapshot_interval: Duration,
    /// Round policy for newly created tournaments.
    pub round_policy: RoundPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            admin_password: "admin".to_string(),
            data_file: Some(PathBuf::from("pickems.json")),
            session_secret: None,
            snapshot_interval: Duration::from_secs(30),
            round_policy: RoundPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration, falling back to defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT").map(|p| p.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(_)) => {
                log::warn!("PORT is not a valid port number, using {}", defaults.port);
                defaults.port
            }
            None => defaults.port,
        };

        let admin_password = lookup("ADMIN_PASSWORD").unwrap_or_else(|| {
            log::warn!("ADMIN_PASSWORD not set, using the default password");
            defaults.admin_password.clone()
        });

        let data_file = match lookup("DATA_FILE") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => defaults.data_file.clone(),
        };

        let session_secret = lookup("SESSION_SECRET").and_then(|s| {
            if s.len() >= SESSION_SECRET_MIN_LEN {
                Some(s.into_bytes())
            } else {
                log::warn!(
                    "SESSION_SECRET shorter than {SESSION_SECRET_MIN_LEN} bytes, using a random key"
                );
                None
            }
        });

        let snapshot_interval = lookup("SNAPSHOT_INTERVAL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.snapshot_interval);

        let round_policy = match lookup("ROUND_POLICY").map(|p| p.parse::<RoundPolicy>()) {
            Some(Ok(policy)) => policy,
            Some(Err(e)) => {
                log::warn!("{e}, using exclude_third_place");
                defaults.round_policy
            }
            None => defaults.round_policy,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            admin_password,
            data_file,
            session_secret,
            snapshot_interval,
            round_policy,
        }
    }
}
