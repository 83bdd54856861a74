use thiserror::Error;

/// Startup configuration failures. Any of these stop the process before the
/// first request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("{var} must be a 64-character hex SHA-256 digest")]
    InvalidPasswordHash { var: &'static str },

    #[error("unknown time zone {value:?} in {var}")]
    InvalidTimezone { var: &'static str, value: String },

    #[error("invalid value {value:?} for {var}: expected one of abort, skip, placeholder")]
    InvalidPolicy { var: &'static str, value: String },
}
