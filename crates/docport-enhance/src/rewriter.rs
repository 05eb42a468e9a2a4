//! Rewrite collaborator traits and errors.

/// Error from a text-rewrite call.
///
/// All variants degrade to "skip enhancement": the caller keeps the original
/// content and the import proceeds. Quota state travels in the error value,
/// never in process globals.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RewriteError {
    /// The provider's quota is exhausted.
    #[error("rewrite quota exceeded")]
    QuotaExceeded {
        /// Minutes until the provider expects quota to reset, when known.
        reset_hint: Option<u64>,
    },

    /// The provider did not answer in time.
    #[error("rewrite timed out")]
    Timeout,

    /// Any other provider-side failure.
    #[error("rewrite provider error: {0}")]
    Provider(String),
}

/// Abstraction over whole-text rewriting.
///
/// Implementations own transport, model selection, and retries; the adapter
/// only sees text in and text out.
pub trait TextRewriter: Send + Sync {
    /// Rewrite `text` under the given instruction block.
    fn rewrite(&self, text: &str, instructions: &str) -> Result<String, RewriteError>;
}

/// One question/answer pair exchanged with the FAQ rewriter.
///
/// Answers travel as plain text: rich content is flattened on the way out
/// and re-parsed from markdown on the way back.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqRewriteItem {
    /// Question text.
    pub question: String,
    /// Answer as plain text.
    pub answer: String,
}

/// One FAQ block exchanged with the FAQ rewriter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaqRewriteBlock {
    /// Optional section title.
    pub title: Option<String>,
    /// Question/answer pairs in document order.
    pub items: Vec<FaqRewriteItem>,
}

/// Abstraction over batch FAQ rewriting.
///
/// One call covers every block in a document; implementations return blocks
/// in the same order they were given.
pub trait FaqRewriter: Send + Sync {
    /// Rewrite all FAQ blocks of a document in one call.
    fn rewrite_faqs(&self, blocks: &[FaqRewriteBlock]) -> Result<Vec<FaqRewriteBlock>, RewriteError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_display() {
        let err = RewriteError::QuotaExceeded {
            reset_hint: Some(12),
        };
        assert_eq!(err.to_string(), "rewrite quota exceeded");

        let err = RewriteError::Timeout;
        assert_eq!(err.to_string(), "rewrite timed out");

        let err = RewriteError::Provider("upstream 500".to_owned());
        assert_eq!(err.to_string(), "rewrite provider error: upstream 500");
    }

    #[test]
    fn test_rewriter_object_safety() {
        struct Echo;

        impl TextRewriter for Echo {
            fn rewrite(&self, text: &str, _instructions: &str) -> Result<String, RewriteError> {
                Ok(text.to_owned())
            }
        }

        let rewriter: &dyn TextRewriter = &Echo;
        assert_eq!(rewriter.rewrite("hi", "").expect("echo rewrite"), "hi");
    }
}
