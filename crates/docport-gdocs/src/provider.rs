//! Document provider trait and fetch errors.

use crate::source::SourceDocument;

/// Error from a document fetch.
///
/// Fetch failures are not degradable: the pipeline has nothing to import
/// without a source document, so these propagate to the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// No document exists under the requested id.
    #[error("document not found: {doc_id}")]
    NotFound {
        /// Requested document id.
        doc_id: String,
    },

    /// The caller is not allowed to read the document.
    #[error("access denied: {doc_id}")]
    AccessDenied {
        /// Requested document id.
        doc_id: String,
    },

    /// The document exists but cannot be represented.
    #[error("unsupported document: {0}")]
    Unsupported(String),
}

/// Abstraction over document retrieval.
///
/// Implementations own transport, authentication, and retries; the pipeline
/// only sees a typed result.
pub trait DocumentProvider: Send + Sync {
    /// Fetch a source document by id.
    fn fetch(&self, doc_id: &str) -> Result<SourceDocument, ProviderError>;
}
