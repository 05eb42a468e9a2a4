//! Leaf-level text enhancement.
//!
//! The rewritten text is re-spliced into the tree by line identity rather
//! than regenerated as structure, so formatting survives the round trip.
//! If the rewrite drifts structurally (line counts differ) the whole tree
//! is returned unchanged.

use docport_model::{Node, extract_block_text};

use crate::rewriter::TextRewriter;

/// Instruction block sent with every whole-document rewrite.
///
/// The rewriter must correct text in place: same line breaks, same list
/// markers, same headings. Anything else breaks the line-identity splice.
pub const ENHANCE_INSTRUCTIONS: &str = "\
You are a content enhancer for a block-based CMS. Your task is to improve the TEXT CONTENT ONLY while preserving the original structure and formatting.

CRITICAL INSTRUCTIONS:
- DO NOT change the structure, spacing, or formatting
- DO NOT reorganize paragraphs or sections
- DO NOT convert lists to different formats
- DO NOT add or remove headings
- ONLY improve the clarity, grammar, and readability of the text itself
- PRESERVE all original bullet points, spacing, and design elements
- PRESERVE all original formatting (bold, italic, etc.)
- Keep the exact same paragraph breaks and structure

What you SHOULD do:
- Fix grammar and spelling errors
- Improve sentence clarity and flow
- Enhance readability without changing meaning
- Make minor wording improvements
- Keep the same tone and style

What you SHOULD NOT do:
- Change paragraph structure
- Reorganize content
- Add or remove headings
- Change list formatting
- Modify spacing or indentation
- Restructure tables (only improve text within them)

Return the enhanced content with EXACTLY the same structure, spacing, and formatting:";

/// Rewrite the document's text through the collaborator and splice the
/// result back in.
///
/// Returns the input unchanged when there is nothing to send, when the
/// rewrite fails, or when the rewritten text has a different non-blank
/// line count than the original.
#[must_use]
pub fn enhance_nodes(
    nodes: Vec<Node>,
    rewriter: &dyn TextRewriter,
    audience: Option<&str>,
) -> Vec<Node> {
    let original = extract_block_text(&nodes);
    if original.trim().is_empty() {
        return nodes;
    }

    let instructions = match audience {
        Some(audience) => format!("{ENHANCE_INSTRUCTIONS}\n\nTarget audience: {audience}"),
        None => ENHANCE_INSTRUCTIONS.to_owned(),
    };

    let rewritten = match rewriter.rewrite(&original, &instructions) {
        Ok(rewritten) => rewritten,
        Err(err) => {
            tracing::warn!(error = %err, "text rewrite failed, keeping original content");
            return nodes;
        }
    };

    let original_lines = non_blank_lines(&original);
    let rewritten_lines = non_blank_lines(&rewritten);
    if original_lines.len() != rewritten_lines.len() {
        tracing::warn!(
            original = original_lines.len(),
            rewritten = rewritten_lines.len(),
            "rewrite changed line count, keeping original content"
        );
        return nodes;
    }

    let replacements: Vec<(&str, &str)> = original_lines
        .into_iter()
        .zip(rewritten_lines)
        .filter(|(original, rewritten)| original != rewritten)
        .collect();
    if replacements.is_empty() {
        return nodes;
    }

    let mut nodes = nodes;
    for node in &mut nodes {
        substitute_leaves(node, &replacements);
    }
    tracing::debug!(replaced_lines = replacements.len(), "spliced rewritten text");
    nodes
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Replace the first mapped line found in each text leaf.
///
/// First-match-wins per leaf, so one leaf is never substituted twice.
fn substitute_leaves(node: &mut Node, replacements: &[(&str, &str)]) {
    match node {
        Node::Text { text, .. } => {
            for (original, rewritten) in replacements {
                if text.contains(original) {
                    *text = text.replacen(original, rewritten, 1);
                    break;
                }
            }
        }
        Node::Paragraph { children, .. }
        | Node::Heading { children, .. }
        | Node::ListItem { children, .. }
        | Node::TableCell { children } => {
            for child in children {
                substitute_leaves(child, replacements);
            }
        }
        Node::Table { rows, .. } => {
            for row in rows {
                substitute_leaves(row, replacements);
            }
        }
        Node::TableRow { cells } => {
            for cell in cells {
                substitute_leaves(cell, replacements);
            }
        }
        Node::Block { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use crate::rewriter::RewriteError;

    use super::*;

    struct FixedRewriter {
        output: String,
    }

    impl TextRewriter for FixedRewriter {
        fn rewrite(&self, _text: &str, _instructions: &str) -> Result<String, RewriteError> {
            Ok(self.output.clone())
        }
    }

    struct FailingRewriter;

    impl TextRewriter for FailingRewriter {
        fn rewrite(&self, _text: &str, _instructions: &str) -> Result<String, RewriteError> {
            Err(RewriteError::QuotaExceeded {
                reset_hint: Some(5),
            })
        }
    }

    struct CapturingRewriter {
        seen_instructions: Mutex<String>,
    }

    impl TextRewriter for CapturingRewriter {
        fn rewrite(&self, text: &str, instructions: &str) -> Result<String, RewriteError> {
            *self
                .seen_instructions
                .lock()
                .expect("instructions lock poisoned") = instructions.to_owned();
            Ok(text.to_owned())
        }
    }

    fn two_paragraphs() -> Vec<Node> {
        vec![
            Node::text_paragraph("The quick brown fox."),
            Node::text_paragraph("It jump over the dog."),
        ]
    }

    #[test]
    fn test_differing_lines_are_substituted() {
        let rewriter = FixedRewriter {
            output: "The quick brown fox.\n\nIt jumps over the dog.".to_owned(),
        };

        let nodes = enhance_nodes(two_paragraphs(), &rewriter, None);

        assert_eq!(nodes[0], Node::text_paragraph("The quick brown fox."));
        assert_eq!(nodes[1], Node::text_paragraph("It jumps over the dog."));
    }

    #[test]
    fn test_line_count_mismatch_keeps_input() {
        let rewriter = FixedRewriter {
            output: "Only one line now.".to_owned(),
        };

        let nodes = enhance_nodes(two_paragraphs(), &rewriter, None);

        assert_eq!(nodes, two_paragraphs());
    }

    #[test]
    fn test_rewrite_failure_keeps_input() {
        let nodes = enhance_nodes(two_paragraphs(), &FailingRewriter, None);

        assert_eq!(nodes, two_paragraphs());
    }

    #[test]
    fn test_identical_rewrite_keeps_input() {
        let rewriter = FixedRewriter {
            output: "The quick brown fox.\n\nIt jump over the dog.".to_owned(),
        };

        let nodes = enhance_nodes(two_paragraphs(), &rewriter, None);

        assert_eq!(nodes, two_paragraphs());
    }

    #[test]
    fn test_empty_document_is_not_sent() {
        let rewriter = FixedRewriter {
            output: "unexpected".to_owned(),
        };

        let nodes = enhance_nodes(Vec::new(), &rewriter, None);

        assert_eq!(nodes, Vec::new());
    }

    #[test]
    fn test_audience_is_appended_to_instructions() {
        let rewriter = CapturingRewriter {
            seen_instructions: Mutex::new(String::new()),
        };

        let _ = enhance_nodes(two_paragraphs(), &rewriter, Some("field engineers"));

        let seen = rewriter
            .seen_instructions
            .lock()
            .expect("instructions lock poisoned");
        assert!(seen.starts_with(ENHANCE_INSTRUCTIONS));
        assert!(seen.ends_with("Target audience: field engineers"));
    }

    #[test]
    fn test_substitution_reaches_table_cells() {
        let table = Node::Table {
            rows: vec![Node::TableRow {
                cells: vec![Node::TableCell {
                    children: vec![Node::text("teh value")],
                }],
            }],
            row_count: 1,
            column_count: 1,
        };
        let rewriter = FixedRewriter {
            output: "the value".to_owned(),
        };

        let nodes = enhance_nodes(vec![table], &rewriter, None);

        let Node::Table { rows, .. } = &nodes[0] else {
            panic!("expected table");
        };
        let Node::TableRow { cells } = &rows[0] else {
            panic!("expected row");
        };
        assert_eq!(
            cells[0],
            Node::TableCell {
                children: vec![Node::text("the value")],
            }
        );
    }
}
