/// Agent token that stands for every crawler
pub const WILDCARD_AGENT: &str = "*";

/// Normalizes a user-agent string into a rule-table key
///
/// The token is lower-cased and cut at the first `/`, which drops any version suffix.
/// An empty or blank agent stands for `*`.
///
/// # Examples
///
/// ```
/// use ripple_robots::normalize_agent;
///
/// assert_eq!(normalize_agent("RippleBot/1.0"), "ripplebot");
/// assert_eq!(normalize_agent("b / 1.0"), "b");
/// assert_eq!(normalize_agent(""), "*");
/// ```
pub fn normalize_agent(agent: &str) -> String {
    let agent = if agent.trim().is_empty() {
        WILDCARD_AGENT
    } else {
        agent
    };

    let lowered = agent.to_lowercase();
    let token = match lowered.find('/') {
        Some(index) => &lowered[..index],
        None => lowered.as_str(),
    };
    token.trim().to_string()
}
