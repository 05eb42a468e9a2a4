//! Block sink trait and errors.

use docport_model::Node;

/// Error from a document store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SinkError {
    /// The sink refused the document.
    #[error("sink rejected document: {0}")]
    Rejected(String),

    /// The sink could not be reached.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// A fully assembled document ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    /// Document title from the source, defaulted when the source has none.
    pub title: String,
    /// Final top-level node sequence.
    pub content: Vec<Node>,
}

/// Abstraction over document persistence.
///
/// Implementations own collections, upserts, and transactions; the pipeline
/// hands over one finished document per import.
pub trait BlockSink: Send + Sync {
    /// Persist an imported document.
    fn store(&self, document: &ImportedDocument) -> Result<(), SinkError>;
}
