//! Text enhancement via an external rewrite collaborator.
//!
//! [`rewriter`] defines the collaborator traits and their error type;
//! [`enhance`] re-splices a whole-document rewrite back into the node tree
//! by line identity; [`faq`] batches question/answer rewrites for detected
//! FAQ blocks. Every path in this crate degrades to the unmodified input:
//! enhancement is best-effort and never blocks an import.

pub mod enhance;
pub mod faq;
pub mod rewriter;

pub use enhance::{ENHANCE_INSTRUCTIONS, enhance_nodes};
pub use faq::apply_faq_rewrites;
pub use rewriter::{FaqRewriteBlock, FaqRewriteItem, FaqRewriter, RewriteError, TextRewriter};
