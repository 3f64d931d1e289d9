// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Android 4.4; Mobile; rv:41.0) Gecko/41.0 Firefox/41.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local page store
pub const STORE_DIR: &str = "items";
pub const FETCHED_SUBDIR: &str = "fetched";
pub const FAILED_SUBDIR: &str = "failed";
pub const FETCHED_EXT: &str = "html";

// Failed pages are left alone for this long before another attempt
pub const RETRY_AFTER_SECS: u64 = 60 * 60 * 24;

// Concurrency
pub const WORKERS: usize = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "items";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
