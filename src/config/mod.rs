//! Configuration module for Ripple-Robots
//!
//! This module handles loading, parsing, and validating the TOML configuration used
//! by the `ripple-robots` command-line front end.
//!
//! # Example
//!
//! ```no_run
//! use ripple_robots::config::{load_config, load_robots_text};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots-check.toml")).unwrap();
//! let text = load_robots_text(&config).unwrap();
//! println!("{} bytes of rules for {}", text.len(), config.robots.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CheckEntry, Config, RobotsSourceConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_robots_text};
