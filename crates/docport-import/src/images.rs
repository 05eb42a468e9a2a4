//! Image listing trait and media block serialization.

use serde_json::json;

use docport_model::Node;

/// One image attached to an imported document.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// Resolvable image URL.
    pub url: String,
    /// Alternative text, possibly empty.
    pub alt: String,
}

/// Error from an image listing.
///
/// Degradable: an import without images is still an import, so the pipeline
/// logs and continues.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageSourceError {
    /// The listing could not be produced.
    #[error("image listing failed: {0}")]
    Unavailable(String),
}

/// Abstraction over per-document image discovery.
pub trait ImageSource: Send + Sync {
    /// List the images attached to a document.
    fn images(&self, doc_id: &str) -> Result<Vec<ImageRef>, ImageSourceError>;
}

/// Serialize an image as an embedded media block node.
#[must_use]
pub fn media_block_node(image: &ImageRef) -> Node {
    Node::Block {
        block_type: "mediaBlock".to_owned(),
        fields: json!({
            "url": image.url,
            "alt": image.alt,
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_media_block_shape() {
        let node = media_block_node(&ImageRef {
            url: "https://example.com/diagram.png".to_owned(),
            alt: "architecture diagram".to_owned(),
        });

        let Node::Block { block_type, fields } = node else {
            panic!("expected block node");
        };
        assert_eq!(block_type, "mediaBlock");
        assert_eq!(fields["url"], "https://example.com/diagram.png");
        assert_eq!(fields["alt"], "architecture diagram");
    }

    #[test]
    fn test_error_display() {
        let err = ImageSourceError::Unavailable("drive export failed".to_owned());
        assert_eq!(err.to_string(), "image listing failed: drive export failed");
    }
}
