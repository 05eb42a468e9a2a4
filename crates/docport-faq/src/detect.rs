//! FAQ section detection over a top-level node sequence.
//!
//! A single left-to-right scan threads an explicit state machine through the
//! per-node classifier. The scanner commits to FAQ mode eagerly on a marker
//! or keyword heading and bails back out by flushing whatever it accumulated
//! the moment a non-Q&A node appears, so a false trigger costs nothing but
//! the trigger node itself.

use docport_model::{FaqBlock, FaqItem, Node, PositionedFaqBlock};
use tracing::debug;

use crate::classify::{NodeClass, classify, is_marker};

/// Result of a detection scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Detection {
    /// Detected blocks with their splice positions, in document order.
    pub blocks: Vec<PositionedFaqBlock>,
    /// All non-FAQ nodes, relative order preserved.
    pub remaining: Vec<Node>,
}

/// A section that has been opened but not yet finalized.
#[derive(Debug)]
struct OpenSection {
    block: FaqBlock,
    insert_index: usize,
}

/// A question waiting for its answer nodes.
#[derive(Debug)]
struct PendingItem {
    question: String,
    answer: Vec<Node>,
}

#[derive(Debug)]
enum ScanState {
    Outside,
    /// Marker seen without an inline title; consuming nodes until a title
    /// heading or the first question.
    SeekingTitle { section: OpenSection },
    Collecting {
        section: OpenSection,
        pending: Option<PendingItem>,
    },
}

/// Scan a node sequence and lift FAQ sections out of it.
#[must_use]
pub fn detect(nodes: Vec<Node>) -> Detection {
    let mut scanner = Scanner {
        state: ScanState::Outside,
        result: Detection::default(),
    };
    for node in nodes {
        scanner.step(node);
    }
    scanner.finish()
}

struct Scanner {
    state: ScanState,
    result: Detection,
}

impl Scanner {
    fn step(&mut self, node: Node) {
        match std::mem::replace(&mut self.state, ScanState::Outside) {
            ScanState::Outside => self.step_outside(node),
            ScanState::SeekingTitle { section } => self.step_seeking_title(section, node),
            ScanState::Collecting { section, pending } => self.collect(section, pending, node),
        }
    }

    fn step_outside(&mut self, node: Node) {
        match classify(&node, false) {
            NodeClass::Marker { title } => self.open_section(title),
            NodeClass::FaqHeading { title } => self.open_section(Some(title)),
            _ => self.result.remaining.push(node),
        }
    }

    /// Open a new section at the current remaining-sequence position. The
    /// trigger node itself is consumed.
    fn open_section(&mut self, title: Option<String>) {
        let section = OpenSection {
            insert_index: self.result.remaining.len(),
            block: FaqBlock::new(title),
        };
        self.state = if section.block.title.is_some() {
            ScanState::Collecting {
                section,
                pending: None,
            }
        } else {
            ScanState::SeekingTitle { section }
        };
    }

    /// Title search after a bare marker: the first non-marker heading becomes
    /// the title, the first question-like node starts collection untitled,
    /// and everything else (blanks included) is consumed without a trace.
    fn step_seeking_title(&mut self, mut section: OpenSection, node: Node) {
        if matches!(node, Node::Heading { .. }) {
            let text = node.plain_text().trim().to_owned();
            if is_marker(&text) {
                self.state = ScanState::SeekingTitle { section };
                return;
            }
            section.block.title = Some(text);
            self.state = ScanState::Collecting {
                section,
                pending: None,
            };
            return;
        }

        match classify(&node, false) {
            NodeClass::Question(_) | NodeClass::CombinedQa { .. } => {
                self.collect(section, None, node);
            }
            _ => {
                self.state = ScanState::SeekingTitle { section };
            }
        }
    }

    fn collect(&mut self, mut section: OpenSection, mut pending: Option<PendingItem>, node: Node) {
        match classify(&node, pending.is_some()) {
            NodeClass::Marker { title } => {
                close_pending(&mut section.block, &mut pending);
                self.finalize(section);
                self.open_section(title);
            }
            NodeClass::FaqHeading { title } => {
                close_pending(&mut section.block, &mut pending);
                self.finalize(section);
                self.open_section(Some(title));
            }
            NodeClass::CombinedQa { question, answer } => {
                section.block.items.push(FaqItem {
                    question,
                    answer: vec![Node::text_paragraph(answer)],
                });
                self.state = ScanState::Collecting { section, pending };
            }
            NodeClass::Question(question) => {
                close_pending(&mut section.block, &mut pending);
                self.state = ScanState::Collecting {
                    section,
                    pending: Some(PendingItem {
                        question,
                        answer: Vec::new(),
                    }),
                };
            }
            NodeClass::Answer => {
                if let Some(item) = &mut pending {
                    item.answer.push(node);
                } else {
                    // No question to attach to; the node is ordinary content
                    // but does not end the section.
                    self.result.remaining.push(node);
                }
                self.state = ScanState::Collecting { section, pending };
            }
            NodeClass::Terminator => {
                close_pending(&mut section.block, &mut pending);
                self.finalize(section);
                self.result.remaining.push(node);
            }
            NodeClass::Blank => {
                self.state = ScanState::Collecting { section, pending };
            }
        }
    }

    /// Push a closed section if it collected at least one item. The recorded
    /// position is kept on every path, including when a new marker terminates
    /// a still-open section.
    fn finalize(&mut self, section: OpenSection) {
        if !section.block.items.is_empty() {
            self.result.blocks.push(PositionedFaqBlock {
                block: section.block,
                insert_index: section.insert_index,
            });
        }
    }

    fn finish(mut self) -> Detection {
        match std::mem::replace(&mut self.state, ScanState::Outside) {
            ScanState::Outside => {}
            ScanState::SeekingTitle { section } => self.finalize(section),
            ScanState::Collecting {
                mut section,
                mut pending,
            } => {
                close_pending(&mut section.block, &mut pending);
                self.finalize(section);
            }
        }
        debug!(
            block_count = self.result.blocks.len(),
            remaining_count = self.result.remaining.len(),
            "FAQ detection finished"
        );
        self.result
    }
}

/// Complete the pending item if it has collected any answer content. A
/// question with no answer is dropped.
fn close_pending(block: &mut FaqBlock, pending: &mut Option<PendingItem>) {
    if let Some(item) = pending.take() {
        if !item.answer.is_empty() {
            block.items.push(FaqItem {
                question: item.question,
                answer: item.answer,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use docport_model::HeadingLevel;
    use pretty_assertions::assert_eq;

    use super::*;

    fn p(text: &str) -> Node {
        Node::text_paragraph(text)
    }

    fn h(level: HeadingLevel, text: &str) -> Node {
        Node::text_heading(level, text)
    }

    #[test]
    fn test_combined_line_form() {
        let detection = detect(vec![p("##FAQ"), p("What is X? X is Y.")]);

        assert_eq!(detection.blocks.len(), 1);
        let block = &detection.blocks[0].block;
        assert_eq!(block.title, None);
        assert_eq!(
            block.items,
            vec![FaqItem {
                question: "What is X?".to_owned(),
                answer: vec![p("X is Y.")],
            }]
        );
        assert_eq!(detection.remaining, Vec::<Node>::new());
    }

    #[test]
    fn test_split_form_with_marker_title() {
        let detection = detect(vec![
            p("##FAQ Frequently Asked Questions"),
            h(HeadingLevel::H3, "What is X?"),
            p("X is Y."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        let block = &detection.blocks[0].block;
        assert_eq!(block.title.as_deref(), Some("Frequently Asked Questions"));
        assert_eq!(
            block.items,
            vec![FaqItem {
                question: "What is X?".to_owned(),
                answer: vec![p("X is Y.")],
            }]
        );
    }

    #[test]
    fn test_title_from_following_heading() {
        let detection = detect(vec![
            p("##FAQ"),
            p("   "),
            h(HeadingLevel::H2, "Billing and Payments"),
            p("How do I pay? By card."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        assert_eq!(
            detection.blocks[0].block.title.as_deref(),
            Some("Billing and Payments")
        );
        assert_eq!(detection.blocks[0].block.items.len(), 1);
    }

    #[test]
    fn test_title_search_stops_at_first_question() {
        let detection = detect(vec![
            p("##FAQ"),
            p("Can I pay later? Yes, within 30 days."),
            h(HeadingLevel::H2, "Unrelated Heading"),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        let block = &detection.blocks[0].block;
        assert_eq!(block.title, None);
        assert_eq!(block.items[0].question, "Can I pay later?");
        // The heading after the Q&A terminates the section.
        assert_eq!(
            detection.remaining,
            vec![h(HeadingLevel::H2, "Unrelated Heading")]
        );
    }

    #[test]
    fn test_keyword_heading_trigger_uses_heading_as_title() {
        let detection = detect(vec![
            h(HeadingLevel::H2, "Frequently Asked Questions"),
            h(HeadingLevel::H3, "Why?"),
            p("Because."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        let block = &detection.blocks[0].block;
        assert_eq!(block.title.as_deref(), Some("Frequently Asked Questions"));
        assert_eq!(
            block.items,
            vec![FaqItem {
                question: "Why?".to_owned(),
                answer: vec![p("Because.")],
            }]
        );
    }

    #[test]
    fn test_insert_index_records_position_at_trigger() {
        let detection = detect(vec![
            p("Intro one."),
            p("Intro two."),
            p("##FAQ"),
            p("What is X? X is Y."),
            h(HeadingLevel::H1, "Appendix"),
            p("Tail."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        assert_eq!(detection.blocks[0].insert_index, 2);
        assert_eq!(
            detection.remaining,
            vec![
                p("Intro one."),
                p("Intro two."),
                h(HeadingLevel::H1, "Appendix"),
                p("Tail."),
            ]
        );
    }

    #[test]
    fn test_section_with_no_items_yields_no_block() {
        let detection = detect(vec![p("##FAQ"), h(HeadingLevel::H1, "Next Chapter")]);

        assert_eq!(detection.blocks, Vec::new());
        assert_eq!(detection.remaining, vec![h(HeadingLevel::H1, "Next Chapter")]);
    }

    #[test]
    fn test_multi_paragraph_answer_accumulates() {
        let detection = detect(vec![
            p("##FAQ"),
            h(HeadingLevel::H3, "How does it work?"),
            p("First part."),
            p("Second part."),
        ]);

        assert_eq!(
            detection.blocks[0].block.items,
            vec![FaqItem {
                question: "How does it work?".to_owned(),
                answer: vec![p("First part."), p("Second part.")],
            }]
        );
    }

    #[test]
    fn test_question_without_answer_is_dropped() {
        let detection = detect(vec![
            p("##FAQ"),
            h(HeadingLevel::H3, "Answered question?"),
            p("The answer."),
            h(HeadingLevel::H3, "Unanswered question?"),
        ]);

        let items = &detection.blocks[0].block.items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].question, "Answered question?");
    }

    #[test]
    fn test_answer_before_any_question_stays_in_remaining() {
        let detection = detect(vec![
            p("##FAQ Support"),
            p("Orphan paragraph."),
            p("What is X? X is Y."),
        ]);

        // The orphan does not end the section and keeps its document order.
        assert_eq!(detection.remaining, vec![p("Orphan paragraph.")]);
        assert_eq!(detection.blocks.len(), 1);
        assert_eq!(detection.blocks[0].block.items.len(), 1);
    }

    #[test]
    fn test_blank_nodes_skipped_inside_section() {
        let detection = detect(vec![
            p("##FAQ Support"),
            h(HeadingLevel::H3, "Why?"),
            p("   "),
            p("Because."),
        ]);

        assert_eq!(
            detection.blocks[0].block.items,
            vec![FaqItem {
                question: "Why?".to_owned(),
                answer: vec![p("Because.")],
            }]
        );
        assert_eq!(detection.remaining, Vec::<Node>::new());
    }

    #[test]
    fn test_second_marker_closes_first_section_with_its_position() {
        let detection = detect(vec![
            p("Intro."),
            p("##FAQ First"),
            p("What is A? A is one."),
            p("##FAQ Second"),
            p("What is B? B is two."),
        ]);

        assert_eq!(detection.blocks.len(), 2);
        assert_eq!(detection.blocks[0].block.title.as_deref(), Some("First"));
        assert_eq!(detection.blocks[0].insert_index, 1);
        assert_eq!(detection.blocks[1].block.title.as_deref(), Some("Second"));
        assert_eq!(detection.blocks[1].insert_index, 1);
        assert_eq!(detection.remaining, vec![p("Intro.")]);
    }

    #[test]
    fn test_second_marker_completes_pending_pair() {
        let detection = detect(vec![
            p("##FAQ First"),
            h(HeadingLevel::H3, "Open question?"),
            p("Collected answer."),
            p("##FAQ Second"),
            p("What is B? B is two."),
        ]);

        assert_eq!(detection.blocks.len(), 2);
        assert_eq!(
            detection.blocks[0].block.items,
            vec![FaqItem {
                question: "Open question?".to_owned(),
                answer: vec![p("Collected answer.")],
            }]
        );
    }

    #[test]
    fn test_end_of_input_flushes_open_section() {
        let detection = detect(vec![
            p("##FAQ"),
            h(HeadingLevel::H3, "Last question?"),
            p("Last answer."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        assert_eq!(detection.blocks[0].block.items.len(), 1);
    }

    #[test]
    fn test_no_faq_content_passes_through() {
        let nodes = vec![
            h(HeadingLevel::H1, "Title"),
            p("Body text."),
            p("More body text."),
        ];

        let detection = detect(nodes.clone());

        assert_eq!(detection.blocks, Vec::new());
        assert_eq!(detection.remaining, nodes);
    }

    #[test]
    fn test_terminator_reprocessed_as_normal_node() {
        let detection = detect(vec![
            p("##FAQ"),
            p("What is X? X is Y."),
            p("Answer: labelled paragraphs end the section."),
            p("Plain tail."),
        ]);

        assert_eq!(detection.blocks.len(), 1);
        assert_eq!(
            detection.remaining,
            vec![
                p("Answer: labelled paragraphs end the section."),
                p("Plain tail."),
            ]
        );
    }
}
