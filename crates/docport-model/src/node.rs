//! Tree node types shared by every pipeline stage.

use bitflags::bitflags;

bitflags! {
    /// Inline text style bitmask carried on text leaves.
    ///
    /// The wire format stores this as a plain integer in the `format` field,
    /// so the discriminant values are part of the contract.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u32 {
        /// Bold run.
        const BOLD = 1;
        /// Italic run.
        const ITALIC = 2;
        /// Underlined run.
        const UNDERLINE = 4;
    }
}

/// Heading depth. Source styles deeper than level four are not headings
/// and translate as plain paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    /// Top-level heading.
    H1,
    /// Section heading.
    H2,
    /// Subsection heading.
    H3,
    /// Minor heading.
    H4,
}

impl HeadingLevel {
    /// Wire tag for this level (`"h1"`..`"h4"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }

    /// Parse a wire tag back into a level.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            _ => None,
        }
    }
}

/// Kind of list an item belongs to.
///
/// Numbered items keep their kind but are never renumbered; the glyph they
/// carry is a fixed marker, not a computed ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted list item.
    Bullet,
    /// Ordered list item.
    Numbered,
}

/// A node in the document tree.
///
/// `children` order is reading order everywhere. Leaves are [`Node::Text`]
/// and [`Node::Block`]; everything else is a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Inline text run with a style bitmask.
    Text {
        /// Text payload.
        text: String,
        /// Inline style flags.
        format: StyleFlags,
    },
    /// Plain paragraph.
    Paragraph {
        /// Inline children, normally text runs.
        children: Vec<Node>,
        /// Indent depth inherited from list flattening.
        indent: usize,
    },
    /// Heading with a depth tag.
    Heading {
        /// Inline children.
        children: Vec<Node>,
        /// Heading depth.
        level: HeadingLevel,
    },
    /// List item prior to the bullet-prefix flattening pass.
    ListItem {
        /// Inline children.
        children: Vec<Node>,
        /// Nesting depth, zero-based.
        indent: usize,
        /// Bulleted or numbered.
        kind: ListKind,
        /// Resolved marker glyph, e.g. `"•"` or `"1."`.
        glyph: String,
    },
    /// Rectangular table.
    Table {
        /// Row children, each a [`Node::TableRow`].
        rows: Vec<Node>,
        /// Number of rows.
        row_count: usize,
        /// Number of columns, padded to row zero's width.
        column_count: usize,
    },
    /// Table row.
    TableRow {
        /// Cell children, each a [`Node::TableCell`].
        cells: Vec<Node>,
    },
    /// Table cell.
    TableCell {
        /// Inline children.
        children: Vec<Node>,
    },
    /// Opaque embedded block, e.g. a FAQ or media block.
    Block {
        /// Block discriminator, e.g. `"faq"` or `"mediaBlock"`.
        block_type: String,
        /// Block payload; merged with the discriminator on the wire.
        fields: serde_json::Value,
    },
}

impl Node {
    /// Unstyled text leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            format: StyleFlags::empty(),
        }
    }

    /// Text leaf with explicit style flags.
    #[must_use]
    pub fn styled_text(text: impl Into<String>, format: StyleFlags) -> Self {
        Self::Text {
            text: text.into(),
            format,
        }
    }

    /// Paragraph holding a single unstyled text run.
    #[must_use]
    pub fn text_paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            children: vec![Self::text(text)],
            indent: 0,
        }
    }

    /// Heading holding a single unstyled text run.
    #[must_use]
    pub fn text_heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            children: vec![Self::text(text)],
            level,
        }
    }

    /// Child nodes of a container, or an empty slice for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Text { .. } | Self::Block { .. } => &[],
            Self::Paragraph { children, .. }
            | Self::Heading { children, .. }
            | Self::ListItem { children, .. }
            | Self::TableCell { children } => children,
            Self::Table { rows, .. } => rows,
            Self::TableRow { cells } => cells,
        }
    }

    /// Concatenated text-leaf payloads of this subtree, in reading order.
    ///
    /// Embedded blocks contribute nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Self::Text { text, .. } = self {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }

    /// True when the subtree carries no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_style_flags_wire_values() {
        assert_eq!(StyleFlags::BOLD.bits(), 1);
        assert_eq!(StyleFlags::ITALIC.bits(), 2);
        assert_eq!(StyleFlags::UNDERLINE.bits(), 4);
        assert_eq!((StyleFlags::BOLD | StyleFlags::ITALIC).bits(), 3);
    }

    #[test]
    fn test_heading_level_tags() {
        assert_eq!(HeadingLevel::H1.tag(), "h1");
        assert_eq!(HeadingLevel::H4.tag(), "h4");
        assert_eq!(HeadingLevel::from_tag("h2"), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::from_tag("h5"), None);
    }

    #[test]
    fn test_plain_text_walks_subtree() {
        let node = Node::Paragraph {
            children: vec![
                Node::text("Hello "),
                Node::styled_text("world", StyleFlags::BOLD),
            ],
            indent: 0,
        };

        assert_eq!(node.plain_text(), "Hello world");
    }

    #[test]
    fn test_plain_text_table() {
        let table = Node::Table {
            rows: vec![Node::TableRow {
                cells: vec![
                    Node::TableCell {
                        children: vec![Node::text("a")],
                    },
                    Node::TableCell {
                        children: vec![Node::text("b")],
                    },
                ],
            }],
            row_count: 1,
            column_count: 2,
        };

        assert_eq!(table.plain_text(), "ab");
    }

    #[test]
    fn test_block_is_blank() {
        let block = Node::Block {
            block_type: "faq".to_owned(),
            fields: serde_json::json!({}),
        };

        assert!(block.is_blank());
    }

    #[test]
    fn test_is_blank_whitespace_only() {
        assert!(Node::text_paragraph("   ").is_blank());
        assert!(!Node::text_paragraph(" x ").is_blank());
    }
}
