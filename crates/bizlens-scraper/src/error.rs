use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty body from {url}")]
    EmptyBody { url: String },

    /// Every candidate failed. The display text is the conventional content
    /// value recorded for unreachable sites.
    #[error("SCRAPE_ERROR: Unable to fetch site")]
    Unreachable { identifier: String, attempts: usize },
}
