//! Generic block-tree document model.
//!
//! Every pipeline stage (translation, FAQ detection, enhancement, reassembly)
//! speaks this tree. Nodes are ordered: the `children` sequence of any node is
//! reading order, and sibling order at the top level is document order.
//!
//! [`wire`] renders the tree into the JSON shape the block sink consumes.

pub mod faq;
pub mod node;
pub mod text;
pub mod wire;

pub use faq::{FaqBlock, FaqItem, PositionedFaqBlock};
pub use node::{HeadingLevel, ListKind, Node, StyleFlags};
pub use text::extract_block_text;
pub use wire::Document;
