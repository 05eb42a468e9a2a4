//! FAQ block serialization and positional reassembly.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};

use docport_model::{FaqBlock, Node, PositionedFaqBlock, wire};

/// Serialize a FAQ block into an embedded block node.
///
/// Item ids are derived from `timestamp_millis` and the item ordinal, so a
/// fixed timestamp yields a deterministic node. Answers are rendered as full
/// wire documents under the item's `answer` field.
#[must_use]
pub fn serialize_block(block: &FaqBlock, timestamp_millis: u128) -> Node {
    let items: Vec<Value> = block
        .items
        .iter()
        .enumerate()
        .map(|(ordinal, item)| {
            json!({
                "id": format!("faq-item-{timestamp_millis}-{ordinal}"),
                "question": item.question,
                "answer": wire::root_json(&item.answer),
            })
        })
        .collect();

    Node::Block {
        block_type: "faq".to_owned(),
        fields: json!({
            "title": block.title,
            "items": items,
        }),
    }
}

/// Serialize a FAQ block using the current wall clock for item ids.
#[must_use]
pub fn faq_block_node(block: &FaqBlock) -> Node {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    serialize_block(block, millis)
}

/// Splice detected FAQ blocks back into the remaining nodes.
///
/// Blocks are inserted at their recorded positions, processed from the back
/// of the document forward so earlier insertions do not shift later indices.
/// Blocks sharing an index keep their detection order. Indices past the end
/// of the sequence clamp to an append.
#[must_use]
pub fn reassemble(remaining: Vec<Node>, blocks: Vec<PositionedFaqBlock>) -> Vec<Node> {
    let mut nodes = remaining;

    let mut ordered: Vec<(usize, PositionedFaqBlock)> = blocks.into_iter().enumerate().collect();
    ordered.sort_by(|(a_ord, a), (b_ord, b)| {
        b.insert_index
            .cmp(&a.insert_index)
            .then(b_ord.cmp(a_ord))
    });

    for (_, positioned) in ordered {
        let index = positioned.insert_index.min(nodes.len());
        nodes.insert(index, faq_block_node(&positioned.block));
    }

    tracing::debug!(node_count = nodes.len(), "reassembled document");
    nodes
}
