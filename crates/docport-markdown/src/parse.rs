//! Line scanner over a markdown-ish text blob.
//!
//! Deliberately shallow: headings to four levels, bullet and numbered lines
//! rendered as prefixed paragraphs rather than list items, single-span bold
//! as a whole-node style flag, and pipe-delimited table blocks. Everything
//! else is a plain paragraph; blank lines are dropped.

use std::sync::LazyLock;

use regex::Regex;

use docport_model::{HeadingLevel, Node, StyleFlags};

static SEPARATOR_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:]+\|$").unwrap());

static NUMBERED_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

static NUMBERED_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s\-*]+\s*").unwrap());

static BOLD_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Parse a markdown text blob into a generic node sequence.
#[must_use]
pub fn parse_markdown(markdown: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut table_lines: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if line.contains('|') && line.trim_start().starts_with('|') {
            table_lines.push(line);
            continue;
        }

        if !table_lines.is_empty() {
            if let Some(table) = parse_table(&table_lines) {
                nodes.push(table);
            }
            table_lines.clear();
        }

        if let Some(node) = parse_line(line) {
            nodes.push(node);
        }
    }

    if !table_lines.is_empty()
        && let Some(table) = parse_table(&table_lines)
    {
        nodes.push(table);
    }

    tracing::debug!(node_count = nodes.len(), "parsed markdown fallback");
    nodes
}

fn parse_line(line: &str) -> Option<Node> {
    let headings = [
        ("#### ", HeadingLevel::H4),
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];
    for (prefix, level) in headings {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(Node::text_heading(level, rest.trim()));
        }
    }

    let trimmed = line.trim();

    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        let text = BULLET_PREFIX_RE.replace(line, "");
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        return Some(Node::text_paragraph(&format!("\u{2022} {text}")));
    }

    if NUMBERED_LINE_RE.is_match(line) {
        let text = NUMBERED_PREFIX_RE.replace(line, "");
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        return Some(Node::text_paragraph(text));
    }

    if trimmed.is_empty() {
        return None;
    }

    let format = if BOLD_SPAN_RE.is_match(trimmed) {
        StyleFlags::BOLD
    } else {
        StyleFlags::empty()
    };
    let text = BOLD_SPAN_RE.replace_all(trimmed, "$1");

    Some(Node::Paragraph {
        children: vec![Node::styled_text(&*text, format)],
        indent: 0,
    })
}

/// Parse a collected pipe-table block.
///
/// Needs at least a header and a separator line. Separator rows are
/// discarded, cells are trimmed, and every row is padded to the first data
/// row's column count.
fn parse_table(lines: &[&str]) -> Option<Node> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in lines {
        if SEPARATOR_ROW_RE.is_match(line) {
            continue;
        }
        let cells: Vec<String> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_owned)
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return None;
    }

    let column_count = rows[0].len();
    let table_rows: Vec<Node> = rows
        .into_iter()
        .map(|row| {
            let mut cells: Vec<Node> = row
                .into_iter()
                .map(|text| Node::TableCell {
                    children: vec![Node::text(&text)],
                })
                .collect();
            while cells.len() < column_count {
                cells.push(Node::TableCell {
                    children: vec![Node::text("")],
                });
            }
            Node::TableRow { cells }
        })
        .collect();

    let row_count = table_rows.len();
    Some(Node::Table {
        rows: table_rows,
        row_count,
        column_count,
    })
}
