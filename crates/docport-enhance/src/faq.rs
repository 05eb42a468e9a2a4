//! Batch FAQ rewriting.
//!
//! All detected blocks travel to the collaborator in a single call. Answers
//! go out as plain text and come back as markdown, which is re-parsed into
//! the generic tree. Fallback is per-item and per-block: an empty or missing
//! rewrite keeps the original, a failed call keeps everything.

use docport_markdown::parse_markdown;
use docport_model::{PositionedFaqBlock, extract_block_text};

use crate::rewriter::{FaqRewriteBlock, FaqRewriteItem, FaqRewriter};

/// Rewrite the questions and answers of every detected FAQ block.
#[must_use]
pub fn apply_faq_rewrites(
    blocks: Vec<PositionedFaqBlock>,
    rewriter: &dyn FaqRewriter,
) -> Vec<PositionedFaqBlock> {
    if blocks.is_empty() {
        return blocks;
    }

    let requests: Vec<FaqRewriteBlock> = blocks
        .iter()
        .map(|positioned| FaqRewriteBlock {
            title: positioned.block.title.clone(),
            items: positioned
                .block
                .items
                .iter()
                .map(|item| FaqRewriteItem {
                    question: item.question.clone(),
                    answer: extract_block_text(&item.answer),
                })
                .collect(),
        })
        .collect();

    let rewritten = match rewriter.rewrite_faqs(&requests) {
        Ok(rewritten) => rewritten,
        Err(err) => {
            tracing::warn!(error = %err, "faq rewrite failed, keeping original blocks");
            return blocks;
        }
    };

    blocks
        .into_iter()
        .enumerate()
        .map(|(block_index, mut positioned)| {
            let Some(update) = rewritten.get(block_index) else {
                tracing::warn!(block = block_index, "missing rewritten faq block, keeping original");
                return positioned;
            };

            if let Some(title) = &update.title
                && !title.trim().is_empty()
            {
                positioned.block.title = Some(title.clone());
            }

            for (item_index, item) in positioned.block.items.iter_mut().enumerate() {
                let Some(rewrite) = update.items.get(item_index) else {
                    continue;
                };
                if !rewrite.question.trim().is_empty() {
                    item.question = rewrite.question.clone();
                }
                if !rewrite.answer.trim().is_empty() {
                    let answer = parse_markdown(&rewrite.answer);
                    if !answer.is_empty() {
                        item.answer = answer;
                    }
                }
            }

            positioned
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use docport_model::{FaqBlock, FaqItem, Node, StyleFlags};

    use crate::rewriter::RewriteError;

    use super::*;

    struct FixedFaqRewriter {
        output: Vec<FaqRewriteBlock>,
    }

    impl FaqRewriter for FixedFaqRewriter {
        fn rewrite_faqs(
            &self,
            _blocks: &[FaqRewriteBlock],
        ) -> Result<Vec<FaqRewriteBlock>, RewriteError> {
            Ok(self.output.clone())
        }
    }

    struct FailingFaqRewriter;

    impl FaqRewriter for FailingFaqRewriter {
        fn rewrite_faqs(
            &self,
            _blocks: &[FaqRewriteBlock],
        ) -> Result<Vec<FaqRewriteBlock>, RewriteError> {
            Err(RewriteError::Timeout)
        }
    }

    fn one_block() -> Vec<PositionedFaqBlock> {
        vec![PositionedFaqBlock {
            block: FaqBlock {
                title: Some("Support".to_owned()),
                items: vec![FaqItem {
                    question: "how do i reset my password".to_owned(),
                    answer: vec![Node::text_paragraph("Click forgot password.")],
                }],
            },
            insert_index: 0,
        }]
    }

    #[test]
    fn test_rewrite_replaces_question_and_reparses_answer() {
        let rewriter = FixedFaqRewriter {
            output: vec![FaqRewriteBlock {
                title: Some("Account Support".to_owned()),
                items: vec![FaqRewriteItem {
                    question: "How do I reset my password?".to_owned(),
                    answer: "Click **Forgot password** on the sign-in page.".to_owned(),
                }],
            }],
        };

        let blocks = apply_faq_rewrites(one_block(), &rewriter);

        assert_eq!(blocks[0].block.title.as_deref(), Some("Account Support"));
        assert_eq!(blocks[0].block.items[0].question, "How do I reset my password?");
        assert_eq!(
            blocks[0].block.items[0].answer,
            vec![Node::Paragraph {
                children: vec![Node::styled_text(
                    "Click Forgot password on the sign-in page.",
                    StyleFlags::BOLD,
                )],
                indent: 0,
            }]
        );
    }

    #[test]
    fn test_call_failure_keeps_all_blocks() {
        let blocks = apply_faq_rewrites(one_block(), &FailingFaqRewriter);

        assert_eq!(blocks, one_block());
    }

    #[test]
    fn test_empty_rewrites_fall_back_per_item() {
        let rewriter = FixedFaqRewriter {
            output: vec![FaqRewriteBlock {
                title: None,
                items: vec![FaqRewriteItem {
                    question: "  ".to_owned(),
                    answer: String::new(),
                }],
            }],
        };

        let blocks = apply_faq_rewrites(one_block(), &rewriter);

        assert_eq!(blocks, one_block());
    }

    #[test]
    fn test_missing_block_falls_back_whole() {
        let rewriter = FixedFaqRewriter { output: Vec::new() };

        let blocks = apply_faq_rewrites(one_block(), &rewriter);

        assert_eq!(blocks, one_block());
    }

    #[test]
    fn test_missing_item_falls_back_per_item() {
        let mut input = one_block();
        input[0].block.items.push(FaqItem {
            question: "Second question?".to_owned(),
            answer: vec![Node::text_paragraph("Second answer.")],
        });
        let rewriter = FixedFaqRewriter {
            output: vec![FaqRewriteBlock {
                title: None,
                items: vec![FaqRewriteItem {
                    question: "First, polished?".to_owned(),
                    answer: "Polished answer.".to_owned(),
                }],
            }],
        };

        let blocks = apply_faq_rewrites(input, &rewriter);

        assert_eq!(blocks[0].block.items[0].question, "First, polished?");
        assert_eq!(blocks[0].block.items[1].question, "Second question?");
        assert_eq!(
            blocks[0].block.items[1].answer,
            vec![Node::text_paragraph("Second answer.")]
        );
    }

    #[test]
    fn test_empty_input_makes_no_call() {
        let blocks = apply_faq_rewrites(Vec::new(), &FailingFaqRewriter);

        assert!(blocks.is_empty());
    }
}
