//! Ripple-Robots: robots.txt rules for a single origin
//!
//! This crate parses the robots exclusion protocol text served by one web origin and
//! answers the questions a polite crawler asks before issuing a request: may this URL
//! be fetched, how long to wait between requests, which host is preferred, and where
//! the sitemaps live. It performs no network I/O.
//!
//! # Example
//!
//! ```
//! use ripple_robots::{RobotsDocument, Verdict};
//!
//! let text = "User-agent: *\nDisallow: /private\nAllow: /private/public\nCrawl-delay: 2";
//! let robots = RobotsDocument::parse("http://www.example.com/robots.txt", Some(text));
//!
//! assert_eq!(
//!     robots.is_allowed("http://www.example.com/private/public/a.html", "RippleBot/1.0"),
//!     Verdict::Allowed
//! );
//! assert_eq!(
//!     robots.is_allowed("http://www.example.com/private", "RippleBot/1.0"),
//!     Verdict::Disallowed
//! );
//! assert_eq!(
//!     robots.is_allowed("http://other.example.com/", "RippleBot/1.0"),
//!     Verdict::Indeterminate
//! );
//! assert_eq!(robots.crawl_delay("RippleBot"), Some(2.0));
//! ```

pub mod config;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Ripple-Robots operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Errors raised while compiling an allow/disallow pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Failed to compile pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        source: regex::Error,
    },
}

/// Result type alias for Ripple-Robots operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::robots::{normalize_agent, RobotsDocument, Verdict};
pub use crate::url::{normalize_percent_case, Origin};
