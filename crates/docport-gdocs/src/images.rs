//! Inline image recognition.
//!
//! The translator leaves image binaries alone; this pass only reports which
//! inline objects resolve to a fetchable image so an image collaborator can
//! deal with them.

use crate::source::SourceDocument;

/// An inline object that resolved to an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImageRef {
    /// Id of the inline object in the source document.
    pub inline_object_id: String,
    /// Fetchable content URI.
    pub content_uri: String,
}

/// Collect the inline objects referenced from paragraphs that carry an image
/// content URI. Objects without image properties are skipped.
#[must_use]
pub fn extract_inline_images(doc: &SourceDocument) -> Vec<InlineImageRef> {
    let Some(body) = &doc.body else {
        return Vec::new();
    };

    let mut images = Vec::new();
    for element in &body.content {
        let Some(paragraph) = &element.paragraph else {
            continue;
        };
        for inline in &paragraph.elements {
            let Some(id) = inline
                .inline_object_element
                .as_ref()
                .and_then(|e| e.inline_object_id.as_deref())
            else {
                continue;
            };
            let uri = doc
                .inline_objects
                .get(id)
                .and_then(|obj| obj.inline_object_properties.as_ref())
                .and_then(|props| props.embedded_object.as_ref())
                .and_then(|embedded| embedded.image_properties.as_ref())
                .and_then(|image| image.content_uri.as_deref());
            if let Some(uri) = uri {
                images.push(InlineImageRef {
                    inline_object_id: id.to_owned(),
                    content_uri: uri.to_owned(),
                });
            }
        }
    }
    images
}
