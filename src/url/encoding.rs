use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when normalizing a robots.txt path pattern
///
/// Non-ASCII characters are always escaped as their UTF-8 bytes. `%` is absent from the
/// set, so escapes the author already wrote (including `%25`) pass through untouched.
const PATTERN_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Normalizes the percent-encoding of a robots.txt path pattern
///
/// Unicode and unsafe ASCII characters are percent-encoded, then every escape triplet
/// is upper-cased so the pattern compares equal to URL paths however either side
/// spelled its escapes.
///
/// # Examples
///
/// ```
/// use ripple_robots::url::normalize_pattern_encoding;
///
/// assert_eq!(normalize_pattern_encoding("/π"), "/%CF%80");
/// assert_eq!(normalize_pattern_encoding("/%e2%9d%83"), "/%E2%9D%83");
/// assert_eq!(normalize_pattern_encoding("/100%25"), "/100%25");
/// ```
pub fn normalize_pattern_encoding(pattern: &str) -> String {
    let encoded = utf8_percent_encode(pattern, PATTERN_ESCAPE_SET).to_string();
    normalize_percent_case(&encoded)
}

/// Upper-cases the hex digits of every `%XX` escape in the input
///
/// Anything that is not a complete escape triplet (such as `%a%a`) is left as written.
///
/// # Examples
///
/// ```
/// use ripple_robots::normalize_percent_case;
///
/// assert_eq!(normalize_percent_case("/%2a%ef"), "/%2A%EF");
/// assert_eq!(normalize_percent_case("/%a%a"), "/%a%a");
/// ```
pub fn normalize_percent_case(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());
    let mut pending_hex = 0;

    for (index, c) in input.char_indices() {
        if pending_hex > 0 {
            output.push(c.to_ascii_uppercase());
            pending_hex -= 1;
            continue;
        }

        if c == '%' && is_escape_at(bytes, index) {
            pending_hex = 2;
        }
        output.push(c);
    }

    output
}

/// Checks whether a complete `%XX` escape starts at `index`
fn is_escape_at(bytes: &[u8], index: usize) -> bool {
    matches!(
        bytes.get(index + 1..index + 3),
        Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit()
    )
}
