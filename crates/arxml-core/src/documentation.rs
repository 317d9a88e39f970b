//! Multi-language text and documentation blocks.
//!
//! Texts in ARXML are mixed content: plain character data interleaved with
//! inline spans such as emphasis, sub/superscript and technical terms. A
//! [`LanguageText`] holds one language's content as a sequence of
//! [`InlineContent`] items. The multi-language containers group several of
//! them under the tag their usage requires (`DESC`, `LONG-NAME`, `P`, ...).

use crate::{
    base::IsEmpty,
    enumeration::{EmphasisFont, EmphasisType, Language, ListKind},
};

// =============================================================================
// Inline Content
// =============================================================================

/// One piece of mixed content inside a language-specific text.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    /// Plain character data.
    Text(String),
    /// `E` span.
    Emphasis(Emphasis),
    /// `IE` index entry.
    IndexEntry(String),
    /// `SUP` span.
    Superscript(String),
    /// `SUB` span.
    Subscript(String),
    /// `TT` span.
    TechnicalTerm(TechnicalTerm),
    /// `BR` line break.
    Break,
}

impl From<&str> for InlineContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for InlineContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Emphasis> for InlineContent {
    fn from(emphasis: Emphasis) -> Self {
        Self::Emphasis(emphasis)
    }
}

impl From<TechnicalTerm> for InlineContent {
    fn from(term: TechnicalTerm) -> Self {
        Self::TechnicalTerm(term)
    }
}

/// Emphasized text, rendered as `E` with optional `COLOR`, `FONT` and
/// `TYPE` attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Emphasis {
    text: String,
    color: Option<String>,
    font: Option<EmphasisFont>,
    kind: Option<EmphasisType>,
}

impl Emphasis {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            font: None,
            kind: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font(mut self, font: EmphasisFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_kind(mut self, kind: EmphasisType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn font(&self) -> Option<EmphasisFont> {
        self.font
    }

    pub fn kind(&self) -> Option<EmphasisType> {
        self.kind
    }
}

/// Technical term, rendered as `TT` with an optional `TYPE` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalTerm {
    text: String,
    kind: Option<String>,
}

impl TechnicalTerm {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

// =============================================================================
// Language-Specific Texts
// =============================================================================

/// Mixed content in one language.
///
/// The tag (`L-1`, `L-2`, `L-4` or `L-5`) depends on the container holding
/// the text. The language is mandatory and rendered as the `L` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageText {
    language: Language,
    content: Vec<InlineContent>,
}

impl LanguageText {
    /// Creates a text holding a single plain-text item.
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            content: vec![InlineContent::Text(text.into())],
        }
    }

    /// Creates a text without content.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            content: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Appends an inline item.
    pub fn with_inline(mut self, item: impl Into<InlineContent>) -> Self {
        self.content.push(item.into());
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &[InlineContent] {
        &self.content
    }
}

/// Plain text in one language, rendered as `L-10`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePlainText {
    language: Language,
    text: String,
}

impl LanguagePlainText {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// =============================================================================
// Multi-Language Containers
// =============================================================================

macro_rules! multi_language {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            texts: Vec<$item>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Appends a language-specific text.
            pub fn with_text(mut self, text: $item) -> Self {
                self.texts.push(text);
                self
            }

            pub fn texts(&self) -> &[$item] {
                &self.texts
            }
        }

        impl From<$item> for $name {
            fn from(text: $item) -> Self {
                Self { texts: vec![text] }
            }
        }
    };
}

multi_language! {
    /// Short description, rendered as `DESC` with `L-2` children.
    MultiLanguageOverviewParagraph, LanguageText
}

multi_language! {
    /// Long name, rendered as `LONG-NAME` (or `LABEL`) with `L-4` children.
    MultiLanguageLongName, LanguageText
}

multi_language! {
    /// Verbatim text, rendered as `VERBATIM` with `L-5` children.
    MultiLanguageVerbatim, LanguageText
}

multi_language! {
    /// Plain texts, rendered as a list of `L-10` children.
    MultiLanguagePlainText, LanguagePlainText
}

impl IsEmpty for MultiLanguageOverviewParagraph {
    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl IsEmpty for MultiLanguageLongName {
    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl IsEmpty for MultiLanguageVerbatim {
    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl IsEmpty for MultiLanguagePlainText {
    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Paragraph, rendered as `P` with `L-1` children and an optional
/// `HELP-ENTRY` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLanguageParagraph {
    help_entry: Option<String>,
    texts: Vec<LanguageText>,
}

impl MultiLanguageParagraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: LanguageText) -> Self {
        self.texts.push(text);
        self
    }

    pub fn with_help_entry(mut self, help_entry: impl Into<String>) -> Self {
        self.help_entry = Some(help_entry.into());
        self
    }

    pub fn help_entry(&self) -> Option<&str> {
        self.help_entry.as_deref()
    }

    pub fn texts(&self) -> &[LanguageText] {
        &self.texts
    }
}

impl From<LanguageText> for MultiLanguageParagraph {
    fn from(text: LanguageText) -> Self {
        Self::new().with_text(text)
    }
}

impl IsEmpty for MultiLanguageParagraph {
    fn is_empty(&self) -> bool {
        self.help_entry.is_none() && self.texts.is_empty()
    }
}

// =============================================================================
// Unit Names
// =============================================================================

/// One piece of a unit name.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitNamePart {
    Text(String),
    /// `SUB` span.
    Subscript(String),
    /// `SUP` span.
    Superscript(String),
}

/// Language-neutral unit name, rendered as `DISPLAY-NAME` or
/// `UNIT-DISPLAY-NAME`.
///
/// Only plain text, subscripts and superscripts are allowed, so `m/s²` is
/// written as the text `m/s` followed by the superscript `2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleLanguageUnitNames {
    parts: Vec<UnitNamePart>,
}

impl SingleLanguageUnitNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(UnitNamePart::Text(text.into()));
        self
    }

    pub fn with_subscript(mut self, text: impl Into<String>) -> Self {
        self.parts.push(UnitNamePart::Subscript(text.into()));
        self
    }

    pub fn with_superscript(mut self, text: impl Into<String>) -> Self {
        self.parts.push(UnitNamePart::Superscript(text.into()));
        self
    }

    pub fn parts(&self) -> &[UnitNamePart] {
        &self.parts
    }
}

impl From<&str> for SingleLanguageUnitNames {
    fn from(text: &str) -> Self {
        Self::new().with_text(text)
    }
}

impl From<String> for SingleLanguageUnitNames {
    fn from(text: String) -> Self {
        Self::new().with_text(text)
    }
}

impl IsEmpty for SingleLanguageUnitNames {
    fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// =============================================================================
// Documentation Blocks
// =============================================================================

/// One item of a documentation block.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentationItem {
    Paragraph(MultiLanguageParagraph),
    Verbatim(MultiLanguageVerbatim),
    List(List),
}

/// Ordered sequence of paragraphs, verbatim texts and lists.
///
/// Used for `INTRODUCTION`, `ANNOTATION-TEXT` and list `ITEM`s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentationBlock {
    items: Vec<DocumentationItem>,
}

impl DocumentationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paragraph(mut self, paragraph: impl Into<MultiLanguageParagraph>) -> Self {
        self.items.push(DocumentationItem::Paragraph(paragraph.into()));
        self
    }

    pub fn with_verbatim(mut self, verbatim: MultiLanguageVerbatim) -> Self {
        self.items.push(DocumentationItem::Verbatim(verbatim));
        self
    }

    pub fn with_list(mut self, list: List) -> Self {
        self.items.push(DocumentationItem::List(list));
        self
    }

    pub fn items(&self) -> &[DocumentationItem] {
        &self.items
    }
}

impl IsEmpty for DocumentationBlock {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Documentation list, rendered as `LIST` with one `ITEM` per block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    kind: Option<ListKind>,
    items: Vec<DocumentationBlock>,
}

impl List {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind: Some(kind),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: DocumentationBlock) -> Self {
        self.items.push(item);
        self
    }

    pub fn kind(&self) -> Option<ListKind> {
        self.kind
    }

    pub fn items(&self) -> &[DocumentationBlock] {
        &self.items
    }
}

impl IsEmpty for List {
    fn is_empty(&self) -> bool {
        self.kind.is_none() && self.items.is_empty()
    }
}

// =============================================================================
// Annotations and Administrative Data
// =============================================================================

/// Free-form annotation attached to an identifiable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    label: Option<MultiLanguageLongName>,
    origin: Option<String>,
    text: Option<DocumentationBlock>,
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<MultiLanguageLongName>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_text(mut self, text: DocumentationBlock) -> Self {
        self.text = Some(text);
        self
    }

    pub fn label(&self) -> Option<&MultiLanguageLongName> {
        self.label.as_ref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn text(&self) -> Option<&DocumentationBlock> {
        self.text.as_ref()
    }
}

impl IsEmpty for Annotation {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.origin.is_none() && self.text.is_none()
    }
}

/// Revision entry of [`AdminData`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocRevision {
    revision_label: Option<String>,
    revision_label_p1: Option<String>,
    revision_label_p2: Option<String>,
    state: Option<String>,
    issued_by: Option<String>,
    date: Option<String>,
}

impl DocRevision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revision_label(mut self, label: impl Into<String>) -> Self {
        self.revision_label = Some(label.into());
        self
    }

    pub fn with_revision_label_p1(mut self, label: impl Into<String>) -> Self {
        self.revision_label_p1 = Some(label.into());
        self
    }

    pub fn with_revision_label_p2(mut self, label: impl Into<String>) -> Self {
        self.revision_label_p2 = Some(label.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_issued_by(mut self, issued_by: impl Into<String>) -> Self {
        self.issued_by = Some(issued_by.into());
        self
    }

    /// Sets the date, an ISO 8601 date or date-time string.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn revision_label(&self) -> Option<&str> {
        self.revision_label.as_deref()
    }

    pub fn revision_label_p1(&self) -> Option<&str> {
        self.revision_label_p1.as_deref()
    }

    pub fn revision_label_p2(&self) -> Option<&str> {
        self.revision_label_p2.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn issued_by(&self) -> Option<&str> {
        self.issued_by.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl IsEmpty for DocRevision {
    fn is_empty(&self) -> bool {
        self.revision_label.is_none()
            && self.revision_label_p1.is_none()
            && self.revision_label_p2.is_none()
            && self.state.is_none()
            && self.issued_by.is_none()
            && self.date.is_none()
    }
}

/// Administrative data: master language, used languages and revisions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminData {
    language: Option<Language>,
    used_languages: Option<MultiLanguagePlainText>,
    doc_revisions: Vec<DocRevision>,
}

impl AdminData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_used_languages(mut self, used_languages: MultiLanguagePlainText) -> Self {
        self.used_languages = Some(used_languages);
        self
    }

    pub fn with_doc_revision(mut self, revision: DocRevision) -> Self {
        self.doc_revisions.push(revision);
        self
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn used_languages(&self) -> Option<&MultiLanguagePlainText> {
        self.used_languages.as_ref()
    }

    pub fn doc_revisions(&self) -> &[DocRevision] {
        &self.doc_revisions
    }
}

impl IsEmpty for AdminData {
    fn is_empty(&self) -> bool {
        self.language.is_none() && self.used_languages.is_none() && self.doc_revisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_text_content_order() {
        let text = LanguageText::new(Language::En, "Speed in ")
            .with_inline(Emphasis::new("km/h").with_kind(EmphasisType::Bold))
            .with_inline(InlineContent::Break)
            .with_inline("end");

        assert_eq!(text.language(), Language::En);
        assert_eq!(text.content().len(), 4);
        assert_eq!(text.content()[0], InlineContent::Text("Speed in ".to_string()));
        assert!(matches!(&text.content()[1], InlineContent::Emphasis(e) if e.text() == "km/h"));
        assert_eq!(text.content()[3], InlineContent::Text("end".to_string()));
    }

    #[test]
    fn test_emptiness() {
        assert!(MultiLanguageOverviewParagraph::new().is_empty());
        assert!(!MultiLanguageOverviewParagraph::from(LanguageText::new(Language::En, "x")).is_empty());
        assert!(MultiLanguageParagraph::new().is_empty());
        assert!(!MultiLanguageParagraph::new().with_help_entry("h").is_empty());
        assert!(Annotation::new().is_empty());
        assert!(AdminData::new().is_empty());
        assert!(DocRevision::new().is_empty());
        assert!(!DocRevision::new().with_state("draft").is_empty());
    }

    #[test]
    fn test_unit_names_keep_part_order() {
        let name = SingleLanguageUnitNames::from("m/s").with_superscript("2");
        assert_eq!(
            name.parts(),
            &[
                UnitNamePart::Text("m/s".to_string()),
                UnitNamePart::Superscript("2".to_string()),
            ]
        );
        assert!(SingleLanguageUnitNames::new().is_empty());
    }

    #[test]
    fn test_documentation_block_items() {
        let block = DocumentationBlock::new()
            .with_paragraph(LanguageText::new(Language::En, "First"))
            .with_list(
                List::new(ListKind::Unnumber)
                    .with_item(DocumentationBlock::new().with_paragraph(LanguageText::new(Language::En, "a"))),
            );

        assert_eq!(block.items().len(), 2);
        match &block.items()[1] {
            DocumentationItem::List(list) => {
                assert_eq!(list.kind(), Some(ListKind::Unnumber));
                assert_eq!(list.items().len(), 1);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }
}
