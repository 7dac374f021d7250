use crate::robots::Pattern;
use std::collections::HashMap;

/// An allow or disallow rule registered for one agent
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Pattern,
    pub allow: bool,

    /// 1-based line of the directive in the robots.txt text
    pub line: usize,
}

/// The frozen tables produced by parsing a robots.txt document
///
/// An agent is "known" once it has an entry in the rule table, even an empty one.
/// The tables are filled during parsing and never change afterwards.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    pub(crate) rules: HashMap<String, Vec<Rule>>,
    pub(crate) crawl_delays: HashMap<String, f64>,
    pub(crate) sitemaps: Vec<String>,
    pub(crate) preferred_host: Option<String>,
}

impl RuleStore {
    /// Returns the rules registered for a normalized agent token, in directive order
    pub fn rules_for(&self, agent: &str) -> Option<&[Rule]> {
        self.rules.get(agent).map(Vec::as_slice)
    }

    /// Checks whether an agent token appeared in any group
    pub fn is_known(&self, agent: &str) -> bool {
        self.rules.contains_key(agent)
    }

    pub fn crawl_delay_for(&self, agent: &str) -> Option<f64> {
        self.crawl_delays.get(agent).copied()
    }

    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    pub fn preferred_host(&self) -> Option<&str> {
        self.preferred_host.as_deref()
    }

    /// Number of agents with a rule-table entry
    pub fn agent_count(&self) -> usize {
        self.rules.len()
    }

    /// Total number of registered allow/disallow rules across all agents
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}
