use thiserror::Error;

/// Failure decoding a diagram document. The routing core itself is total
/// over its inputs; only the document boundary can fail.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("failed to read diagram document: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse diagram document: {0}")]
    Parse(#[from] serde_json::Error),
}
