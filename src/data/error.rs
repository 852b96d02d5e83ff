use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error kinds surfaced by the data layer
// ---------------------------------------------------------------------------

/// The resource could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// The CSV content is malformed. Parsing fails as a whole; no partial
/// record set is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: u64 },
    #[error("malformed CSV on line {line}: {message}")]
    Malformed { line: u64, message: String },
    #[error("reading CSV input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => ParseError::Io(source),
            _ => ParseError::Malformed { line, message },
        }
    }
}

/// Failure of a single retrieval strategy.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Terminal load failure: both the primary and the fallback strategy failed.
#[derive(Debug, thiserror::Error)]
#[error("catalog could not be loaded from {location}: {fallback} (primary attempt: {primary})")]
pub struct LoadError {
    pub location: String,
    pub primary: StrategyError,
    pub fallback: StrategyError,
}
