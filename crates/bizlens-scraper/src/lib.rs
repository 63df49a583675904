//! Site fetching with URL-variant fallback, and markup-to-text extraction.

pub mod candidates;
pub mod client;
pub mod error;
pub mod extract;

pub use candidates::{candidate_urls, has_scheme};
pub use client::{FetchedPage, SiteFetcher, BROWSER_USER_AGENT};
pub use error::FetchError;
pub use extract::{extract_text, extract_text_with_limit, truncate_chars, MAX_TEXT_CHARS};
