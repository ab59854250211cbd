//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::persistence::DEFAULT_RECORD_PATH;
use crate::settings::DEFAULT_SHIP_LIMIT;

pub const DEFAULT_LOG_PATH: &str = "alien_invasion.log";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Where the high score is kept.
    pub record_path: PathBuf,
    /// Log output; the terminal itself belongs to the game.
    pub log_path: PathBuf,
    pub ship_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            record_path: PathBuf::from(DEFAULT_RECORD_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            ship_limit: DEFAULT_SHIP_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Just the log path, so logging can be up before the rest is parsed.
    pub fn log_path_from_env() -> PathBuf {
        Self::log_path_from_lookup(|key| env::var(key).ok())
    }

    pub fn log_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        lookup("ALIEN_INVASION_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            record_path: lookup("ALIEN_INVASION_RECORD")
                .map(PathBuf::from)
                .unwrap_or(defaults.record_path),
            log_path: Self::log_path_from_lookup(&lookup),
            ship_limit: read_u32(&lookup, "ALIEN_INVASION_SHIP_LIMIT", defaults.ship_limit),
        }
    }
}

fn read_u32(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("{key}={raw:?} is not a valid count, using {default}");
                default
            }
        },
    }
}
