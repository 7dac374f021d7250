//! Robots.txt line parser
//!
//! Splits raw robots.txt text into directive lines. Comments, lines without a `:`
//! and unknown keys are dropped here, but every surviving line keeps the 1-based
//! number it had in the original text.

/// The directive vocabulary understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    UserAgent,
    Disallow,
    Allow,
    CrawlDelay,
    Sitemap,
    Host,
}

impl Directive {
    /// Matches a directive key case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "user-agent" => Some(Self::UserAgent),
            "disallow" => Some(Self::Disallow),
            "allow" => Some(Self::Allow),
            "crawl-delay" => Some(Self::CrawlDelay),
            "sitemap" => Some(Self::Sitemap),
            "host" => Some(Self::Host),
            _ => None,
        }
    }
}

/// A single recognized `key: value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub directive: Directive,

    /// Value with surrounding whitespace trimmed (may be empty)
    pub value: &'a str,

    /// 1-based position of the line in the original text
    pub number: usize,
}

/// Parses robots.txt text into its recognized directive lines
///
/// A leading byte order mark is ignored.
pub fn parse(input: &str) -> impl Iterator<Item = Line<'_>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    physical_lines(input)
        .enumerate()
        .filter_map(|(index, raw)| parse_line(raw, index + 1))
}

/// Parses one physical line
fn parse_line(raw: &str, number: usize) -> Option<Line<'_>> {
    let content = strip_comment(raw);
    if content.is_empty() {
        return None;
    }

    let Some((key, value)) = content.split_once(':') else {
        tracing::trace!("Skipping line {}: no ':' separator", number);
        return None;
    };

    let key = key.trim();
    if key.is_empty() {
        tracing::trace!("Skipping line {}: empty key", number);
        return None;
    }

    let Some(directive) = Directive::from_key(key) else {
        tracing::trace!("Skipping line {}: unknown directive '{}'", number, key);
        return None;
    };

    Some(Line {
        directive,
        value: value.trim(),
        number,
    })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Splits text on `\r\n`, `\r` and `\n`
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|c: char| c == '\r' || c == '\n') {
            Some(index) => {
                let width = if current[index..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                rest = Some(&current[index + width..]);
                Some(&current[..index])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
