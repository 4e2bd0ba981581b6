//! HTML body extraction and normalization
//!
//! Pure text processing: no network, no time dependency, and total. Input
//! that defeats extraction comes back as-is rather than as an error.

use regex::Regex;
use std::sync::OnceLock;

/// Truncation marker appended when a page exceeds the character cap
pub const TRUNCATION_MARKER: &str = "... [content truncated]";

fn body_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap())
}

fn noise_regexes() -> &'static [Regex; 5] {
    static RES: OnceLock<[Regex; 5]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"(?is)<script.*?</script>").unwrap(),
            Regex::new(r"(?is)<style.*?</style>").unwrap(),
            Regex::new(r"(?is)<svg.*?</svg>").unwrap(),
            Regex::new(r"(?is)<noscript.*?</noscript>").unwrap(),
            Regex::new(r"(?s)<!--.*?-->").unwrap(),
        ]
    })
}

/// Extract and normalize the body content of an HTML page
///
/// 1. Take the first `<body>...</body>` region (case-insensitive); when no
///    complete region exists the whole input is treated as the body.
/// 2. Strip script, style, svg and noscript blocks plus HTML comments.
/// 3. Collapse whitespace runs to single spaces and trim.
/// 4. Truncate to `max_chars` characters, appending [`TRUNCATION_MARKER`]
///    when the cap is hit.
pub fn extract_body_content(raw_body: &str, max_chars: usize) -> String {
    let region = match body_regex().captures(raw_body) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(raw_body),
        None => raw_body,
    };

    let mut content = region.to_string();
    for re in noise_regexes() {
        content = re.replace_all(&content, "").into_owned();
    }

    let cleaned = collapse_whitespace(&content);
    truncate_content(&cleaned, max_chars)
}

/// Collapse whitespace runs to single spaces and trim the ends
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `max_chars` characters, appending the marker when cut
fn truncate_content(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
