//! FAQ block model produced by detection and consumed by reassembly.

use crate::node::Node;

/// One question and its accumulated answer nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    /// Cleaned question text.
    pub question: String,
    /// Answer content in document order.
    pub answer: Vec<Node>,
}

/// A detected FAQ section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaqBlock {
    /// Optional section title, e.g. from a marker suffix or a heading.
    pub title: Option<String>,
    /// Question/answer pairs in document order.
    pub items: Vec<FaqItem>,
}

impl FaqBlock {
    /// Empty block with an optional title.
    #[must_use]
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            items: Vec::new(),
        }
    }
}

/// A FAQ block together with the position it was lifted from.
///
/// `insert_index` is the length of the remaining-node sequence at the moment
/// the section trigger was seen, so reassembly can splice the block back
/// where the section used to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedFaqBlock {
    /// The detected block.
    pub block: FaqBlock,
    /// Splice position into the remaining nodes.
    pub insert_index: usize,
}
