use crate::robots::{Pattern, Rule};

/// Finds the rule that decides a match subject
///
/// Rules are scanned in directive order. The first wildcard rule that matches wins
/// outright. Literal rules compete on length: the longest matching literal wins and
/// the earlier one is kept on a tie. Returns `None` when nothing matches.
pub fn find_rule<'a>(subject: &str, rules: &'a [Rule]) -> Option<&'a Rule> {
    let mut longest: Option<&Rule> = None;

    for rule in rules {
        match &rule.pattern {
            Pattern::Compiled(regex) => {
                if regex.is_match(subject) {
                    return Some(rule);
                }
            }
            Pattern::LiteralPrefix(prefix) => {
                if !subject.starts_with(prefix.as_str()) {
                    continue;
                }
                let is_longer = longest.map_or(true, |current| {
                    prefix.len() > current.pattern.as_str().len()
                });
                if is_longer {
                    longest = Some(rule);
                }
            }
        }
    }

    longest
}
