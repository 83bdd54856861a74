//! Process-wide configuration, built once at startup and passed down by reference.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{parse_or_default, ConfigError, DEFAULT_DISPLAY_TIMEZONE, DEFAULT_SQLITE_POOL_SIZE};

pub const PASSWORD_HASH_VAR: &str = "HOMESENSE_PASSWORD_HASH";
pub const TIMEZONE_VAR: &str = "HOMESENSE_TIMEZONE";
pub const MISSING_DEVICES_VAR: &str = "HOMESENSE_MISSING_DEVICES";
pub const DB_PATH_VAR: &str = "HOMESENSE_DB_PATH";
pub const DB_POOL_SIZE_VAR: &str = "HOMESENSE_DB_POOL_SIZE";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// What the page request does when a device has no stored reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDevicePolicy {
    /// Fail the whole request on the first missing device.
    #[default]
    Abort,
    /// Leave the device out of the page.
    Skip,
    /// Show a row with the location and placeholder values.
    Placeholder,
}

impl MissingDevicePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
            Self::Placeholder => "placeholder",
        }
    }
}

impl FromStr for MissingDevicePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            "placeholder" => Ok(Self::Placeholder),
            _ => Err(ConfigError::InvalidPolicy { var: MISSING_DEVICES_VAR, value: s.to_owned() }),
        }
    }
}

impl fmt::Display for MissingDevicePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where measurements and locations live.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Sqlite { path: PathBuf, pool_size: u32 },
    Postgres { url: String },
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite { path, pool_size } => f
                .debug_struct("Sqlite")
                .field("path", path)
                .field("pool_size", pool_size)
                .finish(),
            // URL may embed credentials
            Self::Postgres { .. } => f.debug_struct("Postgres").finish_non_exhaustive(),
        }
    }
}

/// Default SQLite location: `<data_local_dir>/homesense/readings.db`.
#[must_use]
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("homesense")
        .join("readings.db")
}

#[derive(Clone)]
pub struct Config {
    /// Lowercase hex SHA-256 digest of the page password.
    pub password_hash: String,
    pub timezone: Tz,
    pub missing_devices: MissingDevicePolicy,
    pub storage: StorageConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("password_hash", &"<redacted>")
            .field("timezone", &self.timezone)
            .field("missing_devices", &self.missing_devices)
            .field("storage", &self.storage)
            .finish()
    }
}

impl Config {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let password_hash = lookup(PASSWORD_HASH_VAR)
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(PASSWORD_HASH_VAR))?;
        validate_password_hash(&password_hash)?;

        let timezone = match lookup(TIMEZONE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone { var: TIMEZONE_VAR, value: name })?,
            None => default_timezone(),
        };

        let missing_devices = match lookup(MISSING_DEVICES_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => MissingDevicePolicy::default(),
        };

        let storage = match lookup(DATABASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(url) => StorageConfig::Postgres { url },
            None => StorageConfig::Sqlite {
                path: lookup(DB_PATH_VAR)
                    .filter(|v| !v.trim().is_empty())
                    .map_or_else(default_db_path, PathBuf::from),
                pool_size: parse_or_default(
                    DB_POOL_SIZE_VAR,
                    lookup(DB_POOL_SIZE_VAR),
                    DEFAULT_SQLITE_POOL_SIZE,
                ),
            },
        };

        Ok(Self { password_hash, timezone, missing_devices, storage })
    }
}

fn default_timezone() -> Tz {
    DEFAULT_DISPLAY_TIMEZONE.parse().unwrap_or(chrono_tz::Europe::London)
}

fn validate_password_hash(hash: &str) -> Result<(), ConfigError> {
    if hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPasswordHash { var: PASSWORD_HASH_VAR })
    }
}
