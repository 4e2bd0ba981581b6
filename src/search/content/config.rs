//! Configuration for page content fetching

use std::env;

/// Configuration for page content fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Number of concurrent requests per batch (default: 5)
    pub batch_size: usize,
    /// Timeout per page fetch in seconds (default: 10)
    pub timeout_secs: u64,
    /// Maximum redirect hops per request (default: 3)
    pub max_redirects: usize,
    /// Maximum characters kept per normalized page (default: 10000)
    pub max_chars_per_page: usize,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            batch_size: env::var("CONTENT_FETCH_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            timeout_secs: env::var("CONTENT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_redirects: env::var("CONTENT_FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            max_chars_per_page: env::var("CONTENT_FETCH_MAX_CHARS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.max_chars_per_page < 100 {
            return Err("max_chars_per_page must be at least 100".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            timeout_secs: 10,
            max_redirects: 3,
            max_chars_per_page: 10_000,
        }
    }
}
