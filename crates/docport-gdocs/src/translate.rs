//! Structure translation from the source model into the block tree.

use docport_model::{HeadingLevel, ListKind, Node, StyleFlags};
use tracing::debug;

use crate::source::{
    Bullet, SourceDocument, SourceParagraph, SourceTable, SourceTableCell, TextStyle,
};

/// Bullet symbols the source emits, mapped to the glyphs the tree carries.
/// Anything not listed falls back to [`DEFAULT_GLYPH`].
const GLYPH_SYMBOLS: &[(&str, &str)] = &[
    ("●", "•"),
    ("○", "◦"),
    ("■", "▪"),
    ("□", "▫"),
    ("◆", "◆"),
    ("❖", "❖"),
    ("➤", "➤"),
    ("➔", "➔"),
    ("→", "→"),
    ("☐", "☐"),
    ("✓", "✓"),
];

/// Glyph kinds that mark an ordered list.
const NUMBERED_GLYPH_TYPES: &[&str] = &[
    "DECIMAL",
    "ZERO_DECIMAL",
    "ALPHA",
    "UPPER_ALPHA",
    "ROMAN",
    "UPPER_ROMAN",
];

/// Fallback bullet glyph.
const DEFAULT_GLYPH: &str = "•";

/// Fixed marker for numbered items. Sequential numbering is never computed;
/// the item keeps [`ListKind::Numbered`] so consumers can tell the kinds apart.
const NUMBERED_GLYPH: &str = "1.";

/// Translate a source document into a flat sequence of block-tree nodes.
///
/// A document without a body yields an empty sequence, never an error.
#[must_use]
pub fn translate(doc: &SourceDocument) -> Vec<Node> {
    let Some(body) = &doc.body else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    for element in &body.content {
        if let Some(paragraph) = &element.paragraph {
            if let Some(node) = translate_paragraph(paragraph, doc) {
                nodes.push(node);
            }
        } else if let Some(table) = &element.table {
            if let Some(node) = translate_table(table) {
                nodes.push(node);
            }
        }
    }

    let nodes = flatten_list_items(nodes);
    debug!(node_count = nodes.len(), title = %doc.title, "translated source document");
    nodes
}

fn translate_paragraph(paragraph: &SourceParagraph, doc: &SourceDocument) -> Option<Node> {
    let children = run_children(paragraph);
    if children.is_empty() {
        return None;
    }

    if let Some(level) = heading_level(paragraph) {
        return Some(Node::Heading { children, level });
    }

    if let Some(bullet) = &paragraph.bullet {
        let (kind, glyph) = resolve_glyph(bullet, doc);
        return Some(Node::ListItem {
            children,
            indent: bullet.nesting_level,
            kind,
            glyph,
        });
    }

    Some(Node::Paragraph {
        children,
        indent: 0,
    })
}

/// Text-run children of a paragraph, with replacement characters and
/// paragraph-final newlines removed. Runs left empty after cleaning are
/// dropped, so an empty result means an empty paragraph.
fn run_children(paragraph: &SourceParagraph) -> Vec<Node> {
    paragraph
        .elements
        .iter()
        .filter_map(|element| element.text_run.as_ref())
        .filter_map(|run| {
            let text = clean_run(&run.content);
            if text.is_empty() {
                None
            } else {
                Some(Node::styled_text(text, style_flags(run.text_style)))
            }
        })
        .collect()
}

fn clean_run(content: &str) -> String {
    content
        .chars()
        .filter(|c| *c != '\u{FFFD}' && *c != '\n')
        .collect()
}

/// Convert character style to the tree's flag word. Strikethrough has no
/// counterpart and is dropped.
fn style_flags(style: TextStyle) -> StyleFlags {
    let mut flags = StyleFlags::empty();
    if style.bold {
        flags |= StyleFlags::BOLD;
    }
    if style.italic {
        flags |= StyleFlags::ITALIC;
    }
    if style.underline {
        flags |= StyleFlags::UNDERLINE;
    }
    flags
}

fn heading_level(paragraph: &SourceParagraph) -> Option<HeadingLevel> {
    match paragraph
        .paragraph_style
        .as_ref()?
        .named_style_type
        .as_deref()?
    {
        "HEADING_1" => Some(HeadingLevel::H1),
        "HEADING_2" => Some(HeadingLevel::H2),
        "HEADING_3" => Some(HeadingLevel::H3),
        "HEADING_4" => Some(HeadingLevel::H4),
        _ => None,
    }
}

/// Resolve a bullet's glyph through the document's list registry.
fn resolve_glyph(bullet: &Bullet, doc: &SourceDocument) -> (ListKind, String) {
    let level = bullet
        .list_id
        .as_deref()
        .and_then(|id| doc.lists.get(id))
        .and_then(|list| list.list_properties.as_ref())
        .and_then(|props| props.nesting_levels.get(bullet.nesting_level));

    if let Some(level) = level {
        if let Some(glyph_type) = level.glyph_type.as_deref() {
            if NUMBERED_GLYPH_TYPES.contains(&glyph_type) {
                return (ListKind::Numbered, NUMBERED_GLYPH.to_owned());
            }
        }
        if let Some(symbol) = level.glyph_symbol.as_deref() {
            let glyph = GLYPH_SYMBOLS
                .iter()
                .find(|(raw, _)| *raw == symbol)
                .map_or(DEFAULT_GLYPH, |(_, mapped)| *mapped);
            return (ListKind::Bullet, glyph.to_owned());
        }
    }

    (ListKind::Bullet, DEFAULT_GLYPH.to_owned())
}

/// Build a rectangular table node. Rows are padded (or clipped) to the first
/// row's width so every row carries `column_count` cells.
fn translate_table(table: &SourceTable) -> Option<Node> {
    let first = table.table_rows.first()?;
    let column_count = first.table_cells.len();
    if column_count == 0 {
        return None;
    }

    let rows: Vec<Node> = table
        .table_rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Node> = row
                .table_cells
                .iter()
                .take(column_count)
                .map(|cell| Node::TableCell {
                    children: vec![Node::text(cell_text(cell))],
                })
                .collect();
            while cells.len() < column_count {
                cells.push(Node::TableCell {
                    children: vec![Node::text(String::new())],
                });
            }
            Node::TableRow { cells }
        })
        .collect();

    Some(Node::Table {
        row_count: rows.len(),
        column_count,
        rows,
    })
}

/// Flatten a cell's nested paragraphs into one trimmed line.
fn cell_text(cell: &SourceTableCell) -> String {
    let mut parts = Vec::new();
    for element in &cell.content {
        if let Some(paragraph) = &element.paragraph {
            let text: String = paragraph
                .elements
                .iter()
                .filter_map(|e| e.text_run.as_ref())
                .map(|run| clean_run(&run.content))
                .collect();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_owned());
            }
        }
    }
    parts.join(" ")
}

/// Replace every list item with a paragraph whose text starts with the
/// indent-scaled glyph prefix. The sink has no native list rendering, so the
/// marker travels inside the text.
fn flatten_list_items(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::ListItem {
                children,
                indent,
                glyph,
                ..
            } => {
                let mut flattened = Vec::with_capacity(children.len() + 1);
                flattened.push(Node::text(format!("{}{glyph} ", "  ".repeat(indent))));
                flattened.extend(children);
                Node::Paragraph {
                    children: flattened,
                    indent: 0,
                }
            }
            other => other,
        })
        .collect()
}
