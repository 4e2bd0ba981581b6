// Aggregation contract: partial success is success, total failure is an
// error, nothing-to-fetch is a soft failure.

use parallel_search_node::search::content::{aggregate, ContentFetchConfig};
use parallel_search_node::search::{FetchOutcome, SearchError};

fn success(url: &str, body: &str) -> FetchOutcome {
    FetchOutcome::Success {
        url: url.to_string(),
        raw_body: body.to_string(),
    }
}

fn failure(url: &str) -> FetchOutcome {
    FetchOutcome::Failure {
        url: url.to_string(),
        reason: "connection refused".to_string(),
    }
}

#[test]
fn test_two_page_scenario() {
    // Resolver returned two URLs, both fetches succeeded
    let outcomes = vec![
        success("https://example.com/1", "<html><body>A</body></html>"),
        success("https://example.com/2", "<html><body>B</body></html>"),
    ];

    let report = aggregate(outcomes, &ContentFetchConfig::default()).unwrap();
    assert!(report.success);
    assert_eq!(report.pages, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_all_succeed_page_count_matches_url_count() {
    for n in 1..=12 {
        let outcomes: Vec<_> = (0..n)
            .map(|i| success(&format!("https://example.com/{}", i), "<body>page</body>"))
            .collect();

        let report = aggregate(outcomes, &ContentFetchConfig::default()).unwrap();
        assert!(report.success);
        assert_eq!(report.pages.len(), n);
    }
}

#[test]
fn test_k_of_n_failures_still_success() {
    // 3 of 7 fail: report succeeds with the 4 recovered pages
    let mut outcomes = Vec::new();
    for i in 0..7 {
        if i % 2 == 0 {
            outcomes.push(success(&format!("https://example.com/{}", i), "<body>ok</body>"));
        } else {
            outcomes.push(failure(&format!("https://example.com/{}", i)));
        }
    }

    let report = aggregate(outcomes, &ContentFetchConfig::default()).unwrap();
    assert!(report.success);
    assert_eq!(report.pages.len(), 4);
}

#[test]
fn test_all_failed_raises_error() {
    for n in 1..=6 {
        let outcomes: Vec<_> = (0..n)
            .map(|i| failure(&format!("https://example.com/{}", i)))
            .collect();

        let result = aggregate(outcomes, &ContentFetchConfig::default());
        match result {
            Err(SearchError::AllFetchesFailed { attempted }) => assert_eq!(attempted, n),
            other => panic!("expected AllFetchesFailed, got {:?}", other.map(|r| r.success)),
        }
    }
}

#[test]
fn test_empty_outcomes_soft_failure() {
    let report = aggregate(vec![], &ContentFetchConfig::default()).unwrap();
    assert!(!report.success);
    assert!(report.pages.is_empty());
}

#[test]
fn test_pages_are_normalized() {
    let outcomes = vec![success(
        "https://example.com",
        "<html><body>  text <script>var a;</script> here  </body></html>",
    )];

    let report = aggregate(outcomes, &ContentFetchConfig::default()).unwrap();
    assert_eq!(report.pages, vec!["text here".to_string()]);
}
