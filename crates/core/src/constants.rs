//! Shared constants for homesense.

/// Maximum number of device identifiers a single page request may name.
/// Checked before any storage access to bound per-request fan-out.
pub const MAX_DEVICES_PER_REQUEST: usize = 10;

/// Time zone used for `lastModifiedTime` when none is configured.
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "Europe/London";

/// Rendered in place of a missing device's values under the placeholder policy.
pub const PLACEHOLDER_VALUE: &str = "-";

/// Rendered when a stored timestamp cannot be represented as a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// SQLite connection pool size when `HOMESENSE_DB_POOL_SIZE` is unset.
pub const DEFAULT_SQLITE_POOL_SIZE: u32 = 8;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Header carrying the shared secret on the ingest endpoint.
pub const PASSWORD_HEADER: &str = "x-homesense-password";
