//! Pipeline orchestration.

use docport_enhance::{FaqRewriter, TextRewriter, apply_faq_rewrites, enhance_nodes};
use docport_faq::{detect, reassemble};
use docport_gdocs::{DocumentProvider, ProviderError, is_valid_doc_id, parse_doc_id, translate};

use crate::images::{ImageSource, media_block_node};
use crate::options::ImportOptions;
use crate::sink::{BlockSink, ImportedDocument, SinkError};

/// Title used when the source document has none.
const UNTITLED: &str = "Untitled Document";

/// Error from a full import run.
///
/// Only the non-degradable stages surface here: an unparseable document
/// reference, a failed fetch, or a failed store. Enhancement and image
/// listing fall back silently inside the pipeline.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImportError {
    /// The input could not be resolved to a document id.
    #[error("unrecognized document reference: {input}")]
    InvalidDocId {
        /// The raw caller input.
        input: String,
    },

    /// The provider could not deliver the document.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The sink refused or could not store the document.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// The import pipeline over pluggable collaborators.
///
/// Provider and sink are required; image source and rewriters are optional
/// and the corresponding stages are skipped when absent.
pub struct Importer<'a> {
    provider: &'a dyn DocumentProvider,
    sink: &'a dyn BlockSink,
    image_source: Option<&'a dyn ImageSource>,
    text_rewriter: Option<&'a dyn TextRewriter>,
    faq_rewriter: Option<&'a dyn FaqRewriter>,
}

impl<'a> Importer<'a> {
    /// Pipeline with the two required collaborators.
    #[must_use]
    pub fn new(provider: &'a dyn DocumentProvider, sink: &'a dyn BlockSink) -> Self {
        Self {
            provider,
            sink,
            image_source: None,
            text_rewriter: None,
            faq_rewriter: None,
        }
    }

    /// Attach an image source.
    #[must_use]
    pub fn with_image_source(mut self, image_source: &'a dyn ImageSource) -> Self {
        self.image_source = Some(image_source);
        self
    }

    /// Attach a whole-text rewriter.
    #[must_use]
    pub fn with_text_rewriter(mut self, text_rewriter: &'a dyn TextRewriter) -> Self {
        self.text_rewriter = Some(text_rewriter);
        self
    }

    /// Attach a batch FAQ rewriter.
    #[must_use]
    pub fn with_faq_rewriter(mut self, faq_rewriter: &'a dyn FaqRewriter) -> Self {
        self.faq_rewriter = Some(faq_rewriter);
        self
    }

    /// Run a full import for one document reference.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::InvalidDocId`] when `input` does not resolve
    /// to a document id, and propagates provider and sink failures.
    pub fn import(
        &self,
        input: &str,
        options: &ImportOptions,
    ) -> Result<ImportedDocument, ImportError> {
        let doc_id = parse_doc_id(input)
            .filter(|id| is_valid_doc_id(id))
            .ok_or_else(|| ImportError::InvalidDocId {
                input: input.to_owned(),
            })?;
        tracing::info!(%doc_id, enhance = options.enhance, "starting import");

        let source = self.provider.fetch(&doc_id)?;
        let title = if source.title.trim().is_empty() {
            UNTITLED.to_owned()
        } else {
            source.title.clone()
        };

        let nodes = translate(&source);
        let detection = detect(nodes);
        tracing::debug!(
            faq_blocks = detection.blocks.len(),
            remaining = detection.remaining.len(),
            "detected faq sections"
        );

        let mut blocks = detection.blocks;
        let mut remaining = detection.remaining;

        if options.enhance {
            if let Some(rewriter) = self.faq_rewriter {
                blocks = apply_faq_rewrites(blocks, rewriter);
            }
            if let Some(rewriter) = self.text_rewriter {
                remaining = enhance_nodes(remaining, rewriter, options.audience.as_deref());
            }
        }

        let mut content = reassemble(remaining, blocks);

        if let Some(image_source) = self.image_source {
            match image_source.images(&doc_id) {
                Ok(images) => {
                    tracing::debug!(count = images.len(), "appending media blocks");
                    for image in &images {
                        content.push(media_block_node(image));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "image listing failed, importing without images");
                }
            }
        }

        let document = ImportedDocument { title, content };
        self.sink.store(&document)?;
        tracing::info!(
            title = %document.title,
            nodes = document.content.len(),
            "import stored"
        );
        Ok(document)
    }
}
