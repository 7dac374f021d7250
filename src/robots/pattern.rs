//! Allow/disallow pattern compilation
//!
//! Patterns without `*` or `$` stay plain strings and are matched by prefix. The
//! others compile to a [`regex::Regex`], whose automata run in time linear in the
//! length of the subject, so hostile wildcard patterns cannot stall a query.

use crate::url::normalize_pattern_encoding;
use crate::PatternError;
use regex::{Regex, RegexBuilder};

/// Upper bound on the memory of a single compiled pattern
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

/// A compiled allow/disallow path pattern
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches any subject that starts with the string
    LiteralPrefix(String),

    /// Wildcard and/or end-anchored pattern
    Compiled(Regex),
}

impl Pattern {
    /// Compiles a raw pattern from an allow/disallow directive
    ///
    /// A pattern that cannot be compiled falls back to a literal prefix of the raw,
    /// unnormalized text instead of failing the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_robots::robots::Pattern;
    ///
    /// let literal = Pattern::compile("/fish/");
    /// assert!(literal.is_literal());
    /// assert!(literal.matches("/fish/index.php"));
    ///
    /// let wildcard = Pattern::compile("/fish*.php");
    /// assert!(!wildcard.is_literal());
    /// assert!(wildcard.matches("/fishheads/catfish.php?parameters"));
    /// assert!(!wildcard.matches("/Fish.PHP"));
    /// ```
    pub fn compile(raw: &str) -> Self {
        Self::try_compile(raw).unwrap_or_else(|e| {
            tracing::warn!("{}; treating it as a literal prefix", e);
            Self::LiteralPrefix(raw.to_string())
        })
    }

    /// Compiles a raw pattern, reporting compilation failures
    pub fn try_compile(raw: &str) -> Result<Self, PatternError> {
        let normalized = normalize_pattern_encoding(raw);

        if !normalized.contains(|c: char| c == '*' || c == '$') {
            return Ok(Self::LiteralPrefix(normalized));
        }

        RegexBuilder::new(&to_expression(&normalized))
            .dot_matches_new_line(true)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()
            .map(Self::Compiled)
            .map_err(|source| PatternError::Compile {
                pattern: raw.to_string(),
                source,
            })
    }

    /// Checks the pattern against a normalized match subject
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Self::LiteralPrefix(prefix) => subject.starts_with(prefix.as_str()),
            Self::Compiled(regex) => regex.is_match(subject),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::LiteralPrefix(_))
    }

    /// Returns the normalized literal or the compiled expression
    pub fn as_str(&self) -> &str {
        match self {
            Self::LiteralPrefix(prefix) => prefix,
            Self::Compiled(regex) => regex.as_str(),
        }
    }
}

/// Translates a normalized robots.txt pattern into a regular expression
///
/// Runs of `*` become a single `.*`, a trailing `$` anchors the end of the subject
/// and a leading `/` anchors the start. Everything else is matched literally.
fn to_expression(pattern: &str) -> String {
    let (body, anchored_end) = match pattern.strip_suffix('$') {
        Some(body) => (body, true),
        None => (pattern, false),
    };

    let mut expression = String::with_capacity(pattern.len() * 2);
    if pattern.starts_with('/') {
        expression.push('^');
    }

    let mut literal = String::new();
    let mut previous_was_wildcard = false;
    for c in body.chars() {
        if c == '*' {
            if !previous_was_wildcard {
                expression.push_str(&regex::escape(&literal));
                literal.clear();
                expression.push_str(".*");
            }
            previous_was_wildcard = true;
        } else {
            literal.push(c);
            previous_was_wildcard = false;
        }
    }
    expression.push_str(&regex::escape(&literal));

    if anchored_end {
        expression.push('$');
    }

    expression
}
