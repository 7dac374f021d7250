//! Group builder
//!
//! A single pass over the parsed lines that tracks which user-agent group is active
//! and files each directive under the right agents. The builder is the only writer
//! of a [`RuleStore`]; [`RulesBuilder::finish`] hands the tables over frozen.

use crate::robots::agent::normalize_agent;
use crate::robots::lexer::{self, Directive, Line};
use crate::robots::{Pattern, Rule, RuleStore};
use crate::PatternError;

/// Parses robots.txt text into a frozen rule store
///
/// Patterns that failed to compile are returned alongside the store; each of them
/// was registered as a literal prefix of its raw text.
pub(crate) fn build(text: &str) -> (RuleStore, Vec<PatternError>) {
    let mut builder = RulesBuilder::new();
    for line in lexer::parse(text) {
        builder.apply(line);
    }
    builder.finish()
}

#[derive(Debug, Default)]
pub(crate) struct RulesBuilder {
    store: RuleStore,

    /// Agents of the current group, in order of appearance
    active_agents: Vec<String>,

    previous_was_agent_line: bool,

    pattern_errors: Vec<PatternError>,
}

impl RulesBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Applies one directive line
    pub(crate) fn apply(&mut self, line: Line<'_>) {
        match line.directive {
            Directive::UserAgent => self.add_agent(line.value),
            Directive::Disallow => self.add_rule(line.value, false, line.number),
            Directive::Allow => self.add_rule(line.value, true, line.number),
            Directive::CrawlDelay => self.set_crawl_delay(line.value, line.number),
            Directive::Sitemap => {
                if !line.value.is_empty() {
                    self.store.sitemaps.push(line.value.to_string());
                }
            }
            Directive::Host => {
                if !line.value.is_empty() {
                    self.store.preferred_host = Some(line.value.to_lowercase());
                }
            }
        }

        self.previous_was_agent_line = line.directive == Directive::UserAgent;
    }

    pub(crate) fn finish(self) -> (RuleStore, Vec<PatternError>) {
        (self.store, self.pattern_errors)
    }

    fn add_agent(&mut self, value: &str) {
        if !self.previous_was_agent_line {
            self.active_agents.clear();
        }

        // A blank user-agent line still opens a group, it just names nobody
        if value.is_empty() {
            return;
        }

        let agent = normalize_agent(value);
        if !self.active_agents.contains(&agent) {
            self.active_agents.push(agent);
        }
    }

    fn add_rule(&mut self, value: &str, allow: bool, line: usize) {
        if self.active_agents.is_empty() {
            tracing::debug!("Ignoring rule on line {} outside any user-agent group", line);
            return;
        }

        let pattern = (!value.is_empty()).then(|| self.compile_pattern(value, line));

        for agent in &self.active_agents {
            let rules = self.store.rules.entry(agent.clone()).or_default();
            if let Some(pattern) = &pattern {
                rules.push(Rule {
                    pattern: pattern.clone(),
                    allow,
                    line,
                });
            }
        }
    }

    fn compile_pattern(&mut self, value: &str, line: usize) -> Pattern {
        match Pattern::try_compile(value) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Line {}: {}; treating it as a literal prefix", line, e);
                self.pattern_errors.push(e);
                Pattern::LiteralPrefix(value.to_string())
            }
        }
    }

    fn set_crawl_delay(&mut self, value: &str, line: usize) {
        let delay = parse_crawl_delay(value);
        if delay.is_none() {
            tracing::debug!("Ignoring invalid crawl-delay '{}' on line {}", value, line);
        }

        for agent in &self.active_agents {
            self.store.rules.entry(agent.clone()).or_default();
            if let Some(delay) = delay {
                self.store.crawl_delays.insert(agent.clone(), delay);
            }
        }
    }
}

/// Parses a crawl-delay value in seconds
///
/// Only finite, nonnegative base-10 numbers are accepted.
fn parse_crawl_delay(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
}
