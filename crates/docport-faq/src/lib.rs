//! FAQ section detection and reassembly.
//!
//! [`classify`] is a pure per-node classifier; [`detect`] threads it through
//! an explicit state machine over the document's top-level node sequence;
//! [`assemble`] serializes detected blocks and splices them back into the
//! remaining nodes at their recorded positions.

pub mod assemble;
pub mod classify;
pub mod detect;

pub use assemble::{faq_block_node, reassemble, serialize_block};
pub use classify::{NodeClass, classify, clean_question_text};
pub use detect::{Detection, detect};
