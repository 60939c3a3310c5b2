//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// JUDGE0 CE
// =============================================================================

/// Judge0 CE status id for an accepted run
pub const JUDGE0_STATUS_ACCEPTED: i32 = 3;

/// Judge0 CE status id for a compilation error
pub const JUDGE0_STATUS_COMPILE_ERROR: i32 = 6;

/// Judge0 CE language ids
pub mod judge0_languages {
    pub const PYTHON: i32 = 71;
    pub const CPP: i32 = 54;
    pub const JAVA: i32 = 62;
    pub const C: i32 = 50;
}

// =============================================================================
// PROGRESSION
// =============================================================================

/// XP required per level
pub const LEVEL_STEP: i32 = 100;

/// XP rewards by problem difficulty
pub mod rewards {
    pub const EASY: i32 = 10;
    pub const MEDIUM: i32 = 20;
    pub const HARD: i32 = 40;
}

// =============================================================================
// PROBLEM DIFFICULTIES
// =============================================================================

/// Problem difficulty identifiers
pub mod difficulties {
    pub const EASY: &str = "EASY";
    pub const MEDIUM: &str = "MEDIUM";
    pub const HARD: &str = "HARD";

    /// All recognized difficulties
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "ADMIN";
    pub const USER: &str = "USER";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, USER];
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status identifiers
pub mod statuses {
    pub const PASSED: &str = "PASSED";
    pub const FAILED: &str = "FAILED";
    pub const COMPILE_ERROR: &str = "COMPILE_ERROR";
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 1024 * 1024;

/// Maximum slug length
pub const MAX_SLUG_LENGTH: u64 = 128;
