//! JSON wire rendering for the block sink.
//!
//! The sink stores rich text as a versioned JSON tree: every node carries a
//! `type` discriminator and a `version`, text leaves carry editor bookkeeping
//! fields (`detail`, `mode`, `style`), and embedded blocks flatten their
//! discriminator into a `fields` object at `version: 2`. Documents wrap their
//! children in a single `root` object.

use serde_json::{Value, json};

use crate::node::Node;

/// A complete document ready for wire rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Top-level nodes in document order.
    pub children: Vec<Node>,
}

impl Document {
    /// Wrap a node sequence as a document.
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Render the document into its wire JSON shape.
    #[must_use]
    pub fn into_json(self) -> Value {
        root_json(&self.children)
    }
}

/// Wrap a node sequence in the `root` envelope.
#[must_use]
pub fn root_json(children: &[Node]) -> Value {
    json!({
        "root": {
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "type": "root",
            "version": 1,
        }
    })
}

/// Render a single node into its wire JSON shape.
#[must_use]
pub fn node_json(node: &Node) -> Value {
    match node {
        Node::Text { text, format } => json!({
            "detail": 0,
            "format": format.bits(),
            "mode": "normal",
            "style": "",
            "text": text,
            "type": "text",
            "version": 1,
        }),
        Node::Paragraph { children, indent } => json!({
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": indent,
            "type": "paragraph",
            "version": 1,
        }),
        Node::Heading { children, level } => json!({
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "tag": level.tag(),
            "type": "heading",
            "version": 1,
        }),
        Node::ListItem {
            children, indent, ..
        } => json!({
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": indent,
            "type": "listitem",
            "value": 1,
            "version": 1,
        }),
        Node::Table {
            rows,
            row_count,
            column_count,
        } => json!({
            "children": rows.iter().map(node_json).collect::<Vec<_>>(),
            "columnCount": column_count,
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "rowCount": row_count,
            "type": "table",
            "version": 1,
        }),
        Node::TableRow { cells } => json!({
            "children": cells.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "type": "tablerow",
            "version": 1,
        }),
        Node::TableCell { children } => json!({
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "type": "tablecell",
            "version": 1,
        }),
        Node::Block { block_type, fields } => {
            let mut merged = match fields {
                Value::Object(map) => map.clone(),
                _ => serde_json::Map::new(),
            };
            merged.insert("blockType".to_owned(), Value::String(block_type.clone()));
            json!({
                "fields": merged,
                "format": "",
                "type": "block",
                "version": 2,
            })
        }
    }
}
