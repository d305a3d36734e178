//! Unexpected per-identifier failures.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops one identifier from being processed. Caught per
/// identifier; the batch moves on to the next one.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Connection, timeout or other libcurl error.
    #[error("{0}")]
    Transport(#[from] curl::Error),
    #[error("invalid portal URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
