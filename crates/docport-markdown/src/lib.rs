//! Markdown fallback parser.
//!
//! Secondary translator for the HTML-export fallback path: converts a flat
//! markdown-ish text blob into the same generic node tree the structured
//! translator produces.

pub mod parse;

pub use parse::parse_markdown;
