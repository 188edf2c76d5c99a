//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records returned by a list call
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Maximum allowed records per list call to prevent excessive queries
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Default offset for list calls
pub const DEFAULT_PAGE_SKIP: u64 = 0;

/// Largest offset the store can bind (offsets are signed 64-bit in SQL)
pub const MAX_PAGE_SKIP: u64 = i64::MAX as u64;

// =============================================================================
// Authentication
// =============================================================================

/// Authorization scheme accepted by the token gate (compared case-insensitively)
pub const BEARER_SCHEME: &str = "bearer";

/// Token used in debug builds when none is configured
pub const DEV_AUTH_TOKEN: &str = "dev-static-token";

// =============================================================================
// User record
// =============================================================================

/// Maximum nickname length (matches the column definition)
pub const MAX_NICKNAME_LENGTH: u32 = 50;

/// Maximum external platform uid length (matches the column definition)
pub const MAX_EXTERNAL_UID_LENGTH: u32 = 20;

// =============================================================================
// Statistics
// =============================================================================

/// A user counts as online if their last login is within this window
pub const ONLINE_WINDOW_SECONDS: i64 = 300;

/// Coins a user must exceed to count as unique
pub const UNIQUE_MIN_COINS: i32 = 100;

/// Rating a user must exceed to count as unique
pub const UNIQUE_MIN_RATING: i32 = 50;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://telewebmanager.db?mode=rwc";

/// Default upper bound on pooled store connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled connection before failing the request
pub const DB_ACQUIRE_TIMEOUT_SECONDS: u64 = 8;

// =============================================================================
// Logging
// =============================================================================

/// File name used when file logging is enabled
pub const LOG_FILE_NAME: &str = "backend.log";
