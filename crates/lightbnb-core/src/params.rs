//! Default values and environment variable names shared by the workspace.

/// Number of rows returned by list operations when the caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default size of the database connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time (in seconds) spent waiting for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

pub mod env {
    /// Connection url of the PostgreSQL database
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const MAX_CONNECTIONS: &str = "LIGHTBNB_MAX_CONNECTIONS";
    pub const ACQUIRE_TIMEOUT_SECS: &str = "LIGHTBNB_ACQUIRE_TIMEOUT_SECS";
}
