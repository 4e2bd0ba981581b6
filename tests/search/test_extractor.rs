// Normalizer contract: pure, total, deterministic, capped at 10k chars.

use parallel_search_node::search::content::{extract_body_content, TRUNCATION_MARKER};

const MAX: usize = 10_000;

#[test]
fn test_basic_body_extraction() {
    let html = "<html><head><script>nav()</script></head><body>Page text</body></html>";
    assert_eq!(extract_body_content(html, MAX), "Page text");
}

#[test]
fn test_truncation_to_exactly_max_plus_marker() {
    let html = format!("<body>{}</body>", "z".repeat(MAX + 5_000));
    let content = extract_body_content(&html, MAX);

    assert!(content.ends_with(TRUNCATION_MARKER));
    assert_eq!(
        content.chars().count(),
        MAX + TRUNCATION_MARKER.chars().count()
    );
}

#[test]
fn test_total_on_malformed_html() {
    // Unterminated body tag: input comes back unchanged
    let html = "<body>unterminated";
    assert_eq!(extract_body_content(html, MAX), html);

    // Nothing resembling HTML at all
    assert_eq!(extract_body_content("plain words", MAX), "plain words");

    // Empty input
    assert_eq!(extract_body_content("", MAX), "");
}

#[test]
fn test_idempotent_on_normalized_output() {
    let html = "<html><body> A  mix <style>.x{}</style> of \n content </body></html>";
    let once = extract_body_content(html, MAX);
    assert_eq!(extract_body_content(&once, MAX), once);
}

#[test]
fn test_nested_noise_blocks_removed() {
    let html = concat!(
        "<body>",
        "intro ",
        "<script type=\"text/javascript\">if (a < b) { run(); }</script>",
        "<SVG viewBox=\"0 0 1 1\"><rect/></SVG>",
        "<noscript><img src=\"t.gif\"></noscript>",
        "<!-- tracking pixel -->",
        " outro",
        "</body>"
    );
    assert_eq!(extract_body_content(html, MAX), "intro outro");
}

#[test]
fn test_whitespace_collapse_and_trim() {
    let html = "<body>\n\n   lots\t\tof    gaps   \n</body>";
    assert_eq!(extract_body_content(html, MAX), "lots of gaps");
}
