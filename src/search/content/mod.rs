//! Page content retrieval and normalization
//!
//! The batched parallel fetch core: fetcher (bounded batch concurrency),
//! extractor (body normalization), and aggregator (outcome classification).

pub mod aggregator;
pub mod config;
pub mod extractor;
pub mod fetcher;

pub use aggregator::aggregate;
pub use config::ContentFetchConfig;
pub use extractor::{extract_body_content, TRUNCATION_MARKER};
pub use fetcher::{create_batches, ContentFetcher};
