//! Parsed robots.txt document and its query surface

use crate::robots::agent::{normalize_agent, WILDCARD_AGENT};
use crate::robots::builder;
use crate::robots::matcher::find_rule;
use crate::robots::{Rule, RuleStore};
use crate::url::{match_subject, parse_url, Origin};
use crate::{PatternError, Result};
use std::fmt;

/// Outcome of an allow/disallow query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The URL may be fetched
    Allowed,
    /// The URL must not be fetched
    Disallowed,
    /// The document does not govern this URL (other origin or unparsable URL)
    Indeterminate,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn is_disallowed(&self) -> bool {
        matches!(self, Self::Disallowed)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }

    /// Returns `Some(allowed)` for a decided verdict, `None` when indeterminate
    pub fn as_allowed(&self) -> Option<bool> {
        match self {
            Self::Allowed => Some(true),
            Self::Disallowed => Some(false),
            Self::Indeterminate => None,
        }
    }
}

impl From<Verdict> for Option<bool> {
    fn from(verdict: Verdict) -> Self {
        verdict.as_allowed()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Allowed => "allowed",
            Self::Disallowed => "disallowed",
            Self::Indeterminate => "indeterminate",
        };
        f.pad(label)
    }
}

/// The rules of one robots.txt file, bound to the origin it was served from
///
/// A document is built once by [`RobotsDocument::parse`] and is read-only afterwards,
/// so it can be shared between threads without locking.
#[derive(Debug, Clone)]
pub struct RobotsDocument {
    /// `None` when the base URL could not be parsed; every URL query is then
    /// indeterminate
    origin: Option<Origin>,
    store: RuleStore,
}

impl RobotsDocument {
    /// Parses robots.txt text served from `base_url`
    ///
    /// Parsing never fails: invalid lines are skipped, and an unparsable base URL
    /// yields a document whose URL queries are all indeterminate. Absent or empty
    /// text allows everything on the origin.
    pub fn parse(base_url: &str, text: Option<&str>) -> Self {
        let origin = match Origin::parse(base_url) {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!(
                    "Invalid robots.txt base URL '{}': {}; URL queries will be indeterminate",
                    base_url,
                    e
                );
                None
            }
        };

        let (document, _) = Self::assemble(origin, base_url, text);
        document
    }

    /// Parses robots.txt text, failing on an invalid base URL or path pattern
    ///
    /// Where [`RobotsDocument::parse`] degrades, this returns the first problem
    /// instead.
    pub fn parse_strict(base_url: &str, text: Option<&str>) -> Result<Self> {
        let origin = Origin::parse(base_url)?;
        let (document, errors) = Self::assemble(Some(origin), base_url, text);
        match errors.into_iter().next() {
            Some(e) => Err(e.into()),
            None => Ok(document),
        }
    }

    fn assemble(
        origin: Option<Origin>,
        base_url: &str,
        text: Option<&str>,
    ) -> (Self, Vec<PatternError>) {
        let (store, errors) = builder::build(text.unwrap_or_default());

        tracing::debug!(
            "Parsed robots.txt for {}: {} agents, {} rules, {} sitemaps",
            base_url,
            store.agent_count(),
            store.rule_count(),
            store.sitemaps().len()
        );

        (Self { origin, store }, errors)
    }

    /// Creates a document with no rules for `base_url`
    pub fn allow_all(base_url: &str) -> Self {
        Self::parse(base_url, None)
    }

    /// Checks whether `agent` may fetch `url`
    ///
    /// An empty agent stands for `*`.
    pub fn is_allowed(&self, url: &str, agent: &str) -> Verdict {
        match self.resolve(url, agent) {
            None => Verdict::Indeterminate,
            Some(None) => Verdict::Allowed,
            Some(Some(rule)) if rule.allow => Verdict::Allowed,
            Some(Some(_)) => Verdict::Disallowed,
        }
    }

    /// Checks whether `agent` is forbidden to fetch `url`
    ///
    /// Returns `None` when the document does not govern the URL.
    pub fn is_disallowed(&self, url: &str, agent: &str) -> Option<bool> {
        self.is_allowed(url, agent).as_allowed().map(|allowed| !allowed)
    }

    /// Returns the 1-based line of the directive that decides `url` for `agent`
    ///
    /// `Some(-1)` means no directive matched; `None` means the document does not
    /// govern the URL.
    pub fn matching_line_number(&self, url: &str, agent: &str) -> Option<i64> {
        self.resolve(url, agent)
            .map(|rule| rule.map_or(-1, |rule| rule.line as i64))
    }

    /// Returns the crawl delay in seconds that applies to `agent`
    ///
    /// An agent that appears in any group never inherits the `*` delay, even when it
    /// has no valid delay of its own. Only agents the document never mentions fall
    /// back to `*`.
    pub fn crawl_delay(&self, agent: &str) -> Option<f64> {
        let agent = normalize_agent(agent);
        if self.store.is_known(&agent) {
            return self.store.crawl_delay_for(&agent);
        }
        self.store.crawl_delay_for(WILDCARD_AGENT)
    }

    /// Returns the host named by the last `host:` directive
    pub fn preferred_host(&self) -> Option<&str> {
        self.store.preferred_host()
    }

    /// Returns the sitemap URLs in the order they were declared
    pub fn sitemaps(&self) -> Vec<String> {
        self.store.sitemaps().to_vec()
    }

    /// Returns the origin this document governs, if its base URL was valid
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Outer `None`: indeterminate. Inner `None`: no rule matched.
    fn resolve(&self, url: &str, agent: &str) -> Option<Option<&Rule>> {
        let origin = self.origin.as_ref()?;

        let target = match parse_url(url) {
            Ok(target) => target,
            Err(e) => {
                tracing::trace!("Cannot check '{}': {}", url, e);
                return None;
            }
        };

        if Origin::from_url(&target) != *origin {
            tracing::trace!("'{}' is outside {}://{}", url, origin.scheme(), origin.host());
            return None;
        }

        let agent = normalize_agent(agent);
        let rules = self
            .store
            .rules_for(&agent)
            .or_else(|| self.store.rules_for(WILDCARD_AGENT))
            .unwrap_or_default();

        let subject = match_subject(&target);
        let rule = find_rule(&subject, rules);

        tracing::trace!(
            "'{}' for '{}' matched line {:?}",
            subject,
            agent,
            rule.map(|rule| rule.line)
        );

        Some(rule)
    }
}
