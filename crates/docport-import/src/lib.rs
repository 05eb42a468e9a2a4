//! The import pipeline.
//!
//! Wires the other crates together: fetch a source document through a
//! [`docport_gdocs::DocumentProvider`], translate it to the generic tree,
//! lift FAQ sections out, optionally rewrite text and FAQs through the
//! enhancement collaborators, splice everything back, append media blocks,
//! and hand the result to a [`BlockSink`].
//!
//! Structural import always completes: enhancement and image listing are
//! independently best-effort, while fetch and sink failures propagate.

pub mod images;
pub mod importer;
pub mod options;
pub mod sink;

pub use images::{ImageRef, ImageSource, ImageSourceError, media_block_node};
pub use importer::{ImportError, Importer};
pub use options::ImportOptions;
pub use sink::{BlockSink, ImportedDocument, SinkError};
