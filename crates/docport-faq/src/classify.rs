//! Pure per-node classification for FAQ scanning.
//!
//! All heuristics live here as named tables so they can be tested without
//! running the scanner. Classification depends on the node alone plus one bit
//! of scanner context: whether a question is currently pending (the combined
//! question-and-answer split is only attempted when none is).

use std::sync::LazyLock;

use docport_model::{HeadingLevel, Node};
use regex::Regex;

/// Substrings that mark a heading as a FAQ section start.
pub const FAQ_KEYWORDS: &[&str] = &[
    "faq",
    "frequently asked questions",
    "questions and answers",
    "q&a",
    "q and a",
    "faqs",
    "common questions",
];

/// Interrogative prefixes accepted for heading-form questions.
const HEADING_QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "will", "should", "does", "is",
    "are",
];

/// Interrogative prefixes accepted for paragraph-form questions. Wider than
/// the heading set; matched against a word boundary.
const PARAGRAPH_QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "will", "should", "does", "is",
    "are", "do", "did", "has", "have", "was", "were",
];

/// Length cap for interrogative-prefix headings.
const HEADING_QUESTION_MAX_LEN: usize = 100;

/// Length cap for interrogative-prefix paragraphs.
const PARAGRAPH_QUESTION_MAX_LEN: usize = 200;

/// Title suffix of a marker node, e.g. `##FAQ Frequently Asked Questions`.
static MARKER_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s?FAQ\s*(.+)$").unwrap());

/// Question and answer on one line: greedy question part ending in `?`,
/// whitespace, then the answer remainder.
static COMBINED_QA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+\?)\s+(.+)$").unwrap());

/// `Q:` / `Question:` prefix.
static QUESTION_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(q|question):\s*").unwrap());

/// Numbered list form ending in `?`, e.g. `3. Why?`.
static NUMBERED_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+.*\?$").unwrap());

/// Lettered list form ending in `?`, e.g. `b. Why?`.
static LETTERED_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]\.\s+.*\?$").unwrap());

/// Any Q/A label prefix; such paragraphs are never answers.
static ANSWER_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(q|question|a|answer):\s*").unwrap());

/// Numbering prefix stripped from question text.
static CLEAN_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Lettering prefix stripped from question text.
static CLEAN_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]\.\s*").unwrap());

/// Scanner-facing classification of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeClass {
    /// Explicit section marker, with an optional inline title suffix.
    Marker {
        /// Title extracted from the marker text, if any.
        title: Option<String>,
    },
    /// Heading whose text names a FAQ section; its text becomes the title.
    FaqHeading {
        /// Trimmed heading text.
        title: String,
    },
    /// Question and answer on the same line.
    CombinedQa {
        /// Cleaned question part.
        question: String,
        /// Trimmed answer remainder.
        answer: String,
    },
    /// A question opening a new pending item; payload is the cleaned text.
    Question(String),
    /// A paragraph that can extend the pending answer.
    Answer,
    /// Anything else with visible text; ends the section.
    Terminator,
    /// No visible text.
    Blank,
}

/// Classify one node.
///
/// Precedence: marker, FAQ heading, blank, combined line (only when no
/// question is pending), question, answer, terminator. With a question
/// pending, a combined line classifies as a question over its whole text,
/// embedded `?` and all; the ambiguity is inherited from the source format.
#[must_use]
pub fn classify(node: &Node, pending_question: bool) -> NodeClass {
    let raw = node.plain_text();
    let text = raw.trim();

    if is_marker(text) {
        return NodeClass::Marker {
            title: marker_title(text),
        };
    }
    if matches!(node, Node::Heading { .. }) && is_faq_heading(text) {
        return NodeClass::FaqHeading {
            title: text.to_owned(),
        };
    }
    if text.is_empty() {
        return NodeClass::Blank;
    }

    if !pending_question && matches!(node, Node::Paragraph { .. }) {
        if let Some(captures) = COMBINED_QA_RE.captures(text) {
            return NodeClass::CombinedQa {
                question: clean_question_text(captures[1].trim()),
                answer: captures[2].trim().to_owned(),
            };
        }
    }

    if is_question(node, text) {
        return NodeClass::Question(clean_question_text(text));
    }
    if is_answer(node, text) {
        return NodeClass::Answer;
    }
    NodeClass::Terminator
}

/// Whether trimmed text is an explicit section marker.
#[must_use]
pub fn is_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.starts_with("##faq") || lower.starts_with("## faq") || lower.contains("##faq")
}

/// Title suffix of a marker, if the marker carries one.
#[must_use]
pub fn marker_title(text: &str) -> Option<String> {
    let captures = MARKER_TITLE_RE.captures(text.trim())?;
    let title = captures[1].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_owned())
    }
}

/// Whether heading text names a FAQ section.
#[must_use]
pub fn is_faq_heading(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    if lower.starts_with("##faq") || lower.starts_with("## faq") {
        return true;
    }
    FAQ_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Strip `Q:` / `Question:` labels and numbering or lettering prefixes.
#[must_use]
pub fn clean_question_text(text: &str) -> String {
    let stripped = QUESTION_LABEL_RE.replace(text, "");
    let stripped = CLEAN_NUMBER_RE.replace(&stripped, "");
    let stripped = CLEAN_LETTER_RE.replace(&stripped, "");
    stripped.trim().to_owned()
}

fn is_question(node: &Node, text: &str) -> bool {
    match node {
        Node::Heading { level, .. } if *level >= HeadingLevel::H2 => {
            if text.ends_with('?') {
                return true;
            }
            let lower = text.to_lowercase();
            HEADING_QUESTION_WORDS
                .iter()
                .any(|word| lower.starts_with(word))
                && text.chars().count() < HEADING_QUESTION_MAX_LEN
        }
        Node::Paragraph { .. } => {
            // For a combined line the tests run against the question part only.
            let captures = COMBINED_QA_RE.captures(text);
            let question = captures
                .as_ref()
                .and_then(|c| c.get(1))
                .map_or(text, |m| m.as_str().trim());

            if QUESTION_LABEL_RE.is_match(question)
                || NUMBERED_QUESTION_RE.is_match(question)
                || LETTERED_QUESTION_RE.is_match(question)
                || question.ends_with('?')
            {
                return true;
            }

            let lower = question.to_lowercase();
            let interrogative = PARAGRAPH_QUESTION_WORDS.iter().any(|word| {
                lower
                    .strip_prefix(word)
                    .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('?'))
            });
            if interrogative && question.chars().count() < PARAGRAPH_QUESTION_MAX_LEN {
                // A period before the first question mark means the text is
                // prose that merely contains a question.
                return match (question.find('?'), question.find('.')) {
                    (None, _) | (_, None) => true,
                    (Some(mark), Some(period)) => mark < period,
                };
            }
            false
        }
        _ => false,
    }
}

fn is_answer(node: &Node, text: &str) -> bool {
    matches!(node, Node::Paragraph { .. })
        && !text.is_empty()
        && !text.ends_with('?')
        && !ANSWER_LABEL_RE.is_match(text)
}
