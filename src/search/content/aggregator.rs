//! Outcome classification and report assembly
//!
//! Runs single-threaded after each batch join has resolved, so no locking
//! is needed around the success/failure partition.

use tracing::{info, warn};

use super::config::ContentFetchConfig;
use super::extractor::extract_body_content;
use crate::search::types::{FetchOutcome, FetchReport, SearchError};

/// Classify fetch outcomes into the final report
///
/// Successes are normalized in outcome order; failures are logged as
/// diagnostics and dropped from the report. Three terminal shapes:
/// - at least one page recovered → `success: true` with that subset,
/// - non-empty outcomes but zero pages → [`SearchError::AllFetchesFailed`],
/// - empty outcomes (resolver found nothing) → `success: false`, no pages.
pub fn aggregate(
    outcomes: Vec<FetchOutcome>,
    config: &ContentFetchConfig,
) -> Result<FetchReport, SearchError> {
    if outcomes.is_empty() {
        return Ok(FetchReport::empty());
    }

    let attempted = outcomes.len();
    let mut pages = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            FetchOutcome::Success { raw_body, .. } => {
                pages.push(extract_body_content(&raw_body, config.max_chars_per_page));
            }
            FetchOutcome::Failure { url, reason } => {
                failures.push(format!("{}: {}", url, reason));
            }
        }
    }

    info!(
        "Fetched {} of {} pages successfully",
        pages.len(),
        attempted
    );
    if !failures.is_empty() {
        warn!("{} page fetches failed: {:?}", failures.len(), failures);
    }

    if pages.is_empty() {
        return Err(SearchError::AllFetchesFailed { attempted });
    }

    Ok(FetchReport {
        success: true,
        pages,
    })
}
