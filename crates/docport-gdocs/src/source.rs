//! Serde model of the Docs API document JSON.
//!
//! Only the fields the translator reads are modelled; everything else in the
//! API payload is ignored during deserialization. All fields are defaulted
//! because the API omits empty ones.

use std::collections::HashMap;

use serde::Deserialize;

/// A fetched source document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Document body. Absent for empty documents.
    #[serde(default)]
    pub body: Option<Body>,
    /// List definitions keyed by list id.
    #[serde(default)]
    pub lists: HashMap<String, ListDefinition>,
    /// Inline objects (images and drawings) keyed by object id.
    #[serde(default)]
    pub inline_objects: HashMap<String, InlineObject>,
}

/// Document body: a flat sequence of structural elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Structural elements in document order.
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// One structural element. Exactly one of the fields is populated; elements
/// carrying neither (section breaks, tables of contents) are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    /// Paragraph content.
    #[serde(default)]
    pub paragraph: Option<SourceParagraph>,
    /// Table content.
    #[serde(default)]
    pub table: Option<SourceTable>,
}

/// A source paragraph: inline elements plus style and list membership.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceParagraph {
    /// Inline elements in reading order.
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
    /// Paragraph-level style.
    #[serde(default)]
    pub paragraph_style: Option<ParagraphStyle>,
    /// List membership, present only on list items.
    #[serde(default)]
    pub bullet: Option<Bullet>,
}

/// One inline element inside a paragraph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    /// A styled text run.
    #[serde(default)]
    pub text_run: Option<TextRun>,
    /// A reference to an inline object.
    #[serde(default)]
    pub inline_object_element: Option<InlineObjectElement>,
}

/// A contiguous run of identically styled text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// Text payload, newline-terminated at paragraph ends.
    #[serde(default)]
    pub content: String,
    /// Character style of the run.
    #[serde(default)]
    pub text_style: TextStyle,
}

/// Character style attributes. Attributes without a block-tree counterpart
/// (strikethrough) are carried here but dropped during translation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
}

/// Paragraph style; only the named style matters for translation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Named style, e.g. `"HEADING_1"` or `"NORMAL_TEXT"`.
    #[serde(default)]
    pub named_style_type: Option<String>,
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    /// Id into [`SourceDocument::lists`].
    #[serde(default)]
    pub list_id: Option<String>,
    /// Zero-based nesting depth.
    #[serde(default)]
    pub nesting_level: usize,
}

/// A list definition from the document's list registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDefinition {
    #[serde(default)]
    pub list_properties: Option<ListProperties>,
}

/// Per-depth glyph configuration of a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProperties {
    /// Glyph configuration indexed by nesting depth.
    #[serde(default)]
    pub nesting_levels: Vec<NestingLevel>,
}

/// Glyph configuration for one nesting depth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    /// Ordered-list glyph kind, e.g. `"DECIMAL"`.
    #[serde(default)]
    pub glyph_type: Option<String>,
    /// Bullet symbol, e.g. `"●"`.
    #[serde(default)]
    pub glyph_symbol: Option<String>,
}

/// Reference from a paragraph to an inline object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectElement {
    #[serde(default)]
    pub inline_object_id: Option<String>,
}

/// An inline object from the document's object registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObject {
    #[serde(default)]
    pub inline_object_properties: Option<InlineObjectProperties>,
}

/// Properties wrapper around an embedded object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectProperties {
    #[serde(default)]
    pub embedded_object: Option<EmbeddedObject>,
}

/// An embedded object; only images are of interest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObject {
    #[serde(default)]
    pub image_properties: Option<ImageProperties>,
}

/// Image payload location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    /// Fetchable content URI of the image.
    #[serde(default)]
    pub content_uri: Option<String>,
}

/// A table in the source document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTable {
    /// Rows in document order.
    #[serde(default)]
    pub table_rows: Vec<SourceTableRow>,
}

/// One table row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTableRow {
    /// Cells in reading order.
    #[serde(default)]
    pub table_cells: Vec<SourceTableCell>,
}

/// One table cell holding nested structural elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}
