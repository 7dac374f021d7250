//! URL handling module for Ripple-Robots
//!
//! This module provides origin extraction for same-origin checks and the
//! percent-encoding normalization shared by patterns and match subjects.

mod encoding;
mod origin;

// Re-export main functions
pub use encoding::{normalize_pattern_encoding, normalize_percent_case};
pub use origin::{parse_host_url, parse_url, Origin, DEFAULT_PORT};

use url::Url;

/// Builds the string that robots.txt patterns are matched against
///
/// The subject is the URL path followed by `?query` when the query is non-empty,
/// with every percent-escape upper-cased. The fragment never takes part.
///
/// The path keeps the `url` crate's own encoding, which leaves `|`, `^`, `[` and `]`
/// raw. Patterns escape those characters, so a rule written with them only matches
/// URLs that percent-encode them too.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ripple_robots::url::match_subject;
///
/// let url = Url::parse("http://example.com/fish/%2a%ef?x=1#top").unwrap();
/// assert_eq!(match_subject(&url), "/fish/%2A%EF?x=1");
///
/// let url = Url::parse("http://example.com/page?").unwrap();
/// assert_eq!(match_subject(&url), "/page");
/// ```
pub fn match_subject(url: &Url) -> String {
    let subject = match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    };
    normalize_percent_case(&subject)
}
