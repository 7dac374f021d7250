//! Robots.txt handling module
//!
//! This module parses robots.txt text into a frozen [`RobotsDocument`] and answers
//! allow/disallow, crawl-delay, sitemap and preferred-host queries against it.
//!
//! Parsing runs in stages: the [`lexer`] turns text into directive lines, the group
//! builder files them under user-agent groups (compiling each path [`Pattern`] on the
//! way) and the resulting [`RuleStore`] is handed to the document read-only.

mod agent;
mod builder;
mod document;
pub mod lexer;
mod matcher;
mod pattern;
mod rules;

pub use agent::{normalize_agent, WILDCARD_AGENT};
pub use document::{RobotsDocument, Verdict};
pub use matcher::find_rule;
pub use pattern::Pattern;
pub use rules::{Rule, RuleStore};

/// Checks if a URL is allowed by robots.txt
///
/// # Arguments
///
/// * `robots` - The parsed robots.txt document
/// * `url` - The absolute URL to check
/// * `user_agent` - The user agent string (versions are ignored)
///
/// # Returns
///
/// * `true` - If the URL is allowed
/// * `false` - If the URL is disallowed or the document does not govern it
pub fn is_allowed(robots: &RobotsDocument, url: &str, user_agent: &str) -> bool {
    robots.is_allowed(url, user_agent).is_allowed()
}
