use thiserror::Error;

/// Errors raised while turning batches into a job matrix.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A batched locale has no entry in the resource mapping.
    #[error("No resources mapped for locale '{locale}' in batch '{batch}'")]
    MissingResource { batch: String, locale: String },

    /// Two mapping keys differ only by separator style.
    #[error("Resource mapping keys '{first}' and '{second}' refer to the same locale")]
    AmbiguousLocaleKey { first: String, second: String },

    #[error("Failed to serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write matrix: {0}")]
    Write(#[from] std::io::Error),
}
