//! Google Docs source model and structure translation.
//!
//! [`source`] mirrors the relevant slice of the Docs API JSON, [`translate`]
//! turns a fetched document into the generic block tree, and
//! [`provider::DocumentProvider`] abstracts over how documents are fetched so
//! the pipeline never touches a network client directly.

pub mod docid;
pub mod images;
pub mod provider;
pub mod source;
pub mod translate;

pub use docid::{is_valid_doc_id, parse_doc_id};
pub use images::{InlineImageRef, extract_inline_images};
pub use provider::{DocumentProvider, ProviderError};
pub use source::SourceDocument;
pub use translate::translate;
