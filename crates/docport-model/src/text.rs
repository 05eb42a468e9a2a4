//! Plain-text extraction over node sequences.

use crate::node::Node;

/// Extract one trimmed line of text per non-blank top-level node.
///
/// Lines are joined with blank lines so paragraph boundaries survive a round
/// trip through a text-only rewrite service. Blank nodes contribute nothing,
/// which keeps the line count equal to the number of non-blank nodes.
#[must_use]
pub fn extract_block_text(nodes: &[Node]) -> String {
    nodes
        .iter()
        .filter_map(|node| {
            let text = node.plain_text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
