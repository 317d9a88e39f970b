//! Rendering of documentation, administrative data and the identifiable group.

use arxml_core::{
    base::IsEmpty,
    documentation::{
        AdminData, Annotation, DocRevision, DocumentationBlock, DocumentationItem, InlineContent,
        LanguageText, List, MultiLanguageLongName, MultiLanguageOverviewParagraph,
        MultiLanguageParagraph, MultiLanguagePlainText, MultiLanguageVerbatim,
    },
    enumeration::XmlEnum,
    identifiable::Identifiable,
};

use super::{Result, Writer};

impl Writer {
    /// Opens `tag` for an identifiable object and writes its shared group.
    /// The caller closes the tag after the object's own fields.
    pub(crate) fn open_identifiable(
        &mut self,
        tag: &'static str,
        identifiable: &Identifiable,
    ) -> Result<()> {
        let attributes: Vec<_> = identifiable
            .uuid()
            .map(|uuid| ("UUID", uuid.to_string()))
            .into_iter()
            .collect();
        self.add_child(tag, &attributes)?;

        self.add_content("SHORT-NAME", Some(identifiable.short_name()), &[])?;
        if let Some(long_name) = identifiable.long_name() {
            self.write_long_name("LONG-NAME", long_name)?;
        }
        if let Some(desc) = identifiable.desc() {
            self.write_overview_paragraph("DESC", desc)?;
        }
        self.add_value("CATEGORY", identifiable.category())?;
        if let Some(admin_data) = identifiable.admin_data() {
            self.write_admin_data(admin_data)?;
        }
        if let Some(introduction) = identifiable.introduction() {
            self.write_documentation_block("INTRODUCTION", introduction)?;
        }
        self.write_annotations(identifiable.annotations())
    }

    pub(crate) fn write_annotations(&mut self, annotations: &[Annotation]) -> Result<()> {
        if annotations.is_empty() {
            return Ok(());
        }
        self.add_child("ANNOTATIONS", &[])?;
        for annotation in annotations {
            self.write_annotation(annotation)?;
        }
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Language-specific texts
    // -------------------------------------------------------------------------

    fn write_language_texts(
        &mut self,
        tag: &'static str,
        item_tag: &'static str,
        texts: &[LanguageText],
    ) -> Result<()> {
        if texts.is_empty() {
            return self.add_empty(tag);
        }
        self.add_child(tag, &[])?;
        for text in texts {
            self.write_language_text(item_tag, text)?;
        }
        self.leave_child()
    }

    fn write_language_text(&mut self, tag: &'static str, text: &LanguageText) -> Result<()> {
        let attributes = [("L", text.language().token().to_string())];

        if text.content().is_empty() {
            return self.add_content(tag, None, &attributes);
        }

        self.begin_line(tag, &attributes)?;
        for item in text.content() {
            match item {
                InlineContent::Text(value) => self.add_inline_text(value)?,
                InlineContent::Emphasis(emphasis) => {
                    let mut attributes = Vec::new();
                    if let Some(color) = emphasis.color() {
                        attributes.push(("COLOR", color.to_string()));
                    }
                    if let Some(font) = emphasis.font() {
                        attributes.push(("FONT", font.token().to_string()));
                    }
                    if let Some(kind) = emphasis.kind() {
                        attributes.push(("TYPE", kind.token().to_string()));
                    }
                    self.add_inline("E", Some(emphasis.text()), &attributes)?;
                }
                InlineContent::IndexEntry(value) => self.add_inline("IE", Some(value.as_str()), &[])?,
                InlineContent::Superscript(value) => self.add_inline("SUP", Some(value.as_str()), &[])?,
                InlineContent::Subscript(value) => self.add_inline("SUB", Some(value.as_str()), &[])?,
                InlineContent::TechnicalTerm(term) => {
                    let attributes: Vec<_> = term
                        .kind()
                        .map(|kind| ("TYPE", kind.to_string()))
                        .into_iter()
                        .collect();
                    self.add_inline("TT", Some(term.text()), &attributes)?;
                }
                InlineContent::Break => self.add_inline("BR", None, &[])?,
            }
        }
        self.end_line()
    }

    /// Writes a long name under `tag`, which is `LONG-NAME` or `LABEL`.
    pub(crate) fn write_long_name(
        &mut self,
        tag: &'static str,
        long_name: &MultiLanguageLongName,
    ) -> Result<()> {
        self.write_language_texts(tag, "L-4", long_name.texts())
    }

    pub(crate) fn write_overview_paragraph(
        &mut self,
        tag: &'static str,
        paragraph: &MultiLanguageOverviewParagraph,
    ) -> Result<()> {
        self.write_language_texts(tag, "L-2", paragraph.texts())
    }

    pub(crate) fn write_paragraph(&mut self, paragraph: &MultiLanguageParagraph) -> Result<()> {
        if paragraph.is_empty() {
            return self.add_empty("P");
        }
        let attributes: Vec<_> = paragraph
            .help_entry()
            .map(|entry| ("HELP-ENTRY", entry.to_string()))
            .into_iter()
            .collect();
        self.add_child("P", &attributes)?;
        for text in paragraph.texts() {
            self.write_language_text("L-1", text)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_verbatim(&mut self, verbatim: &MultiLanguageVerbatim) -> Result<()> {
        self.write_language_texts("VERBATIM", "L-5", verbatim.texts())
    }

    fn write_plain_texts(&mut self, tag: &'static str, texts: &MultiLanguagePlainText) -> Result<()> {
        if texts.is_empty() {
            return self.add_empty(tag);
        }
        self.add_child(tag, &[])?;
        for text in texts.texts() {
            let attributes = [("L", text.language().token().to_string())];
            self.add_content("L-10", Some(text.text()), &attributes)?;
        }
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Documentation blocks
    // -------------------------------------------------------------------------

    /// Writes a block under `tag`: `INTRODUCTION`, `ANNOTATION-TEXT` or `ITEM`.
    pub(crate) fn write_documentation_block(
        &mut self,
        tag: &'static str,
        block: &DocumentationBlock,
    ) -> Result<()> {
        if block.is_empty() {
            return self.add_empty(tag);
        }
        self.add_child(tag, &[])?;
        for item in block.items() {
            match item {
                DocumentationItem::Paragraph(paragraph) => self.write_paragraph(paragraph)?,
                DocumentationItem::Verbatim(verbatim) => self.write_verbatim(verbatim)?,
                DocumentationItem::List(list) => self.write_list(list)?,
            }
        }
        self.leave_child()
    }

    pub(crate) fn write_list(&mut self, list: &List) -> Result<()> {
        let attributes: Vec<_> = list
            .kind()
            .map(|kind| ("TYPE", kind.token().to_string()))
            .into_iter()
            .collect();
        if list.items().is_empty() {
            return self.add_content("LIST", None, &attributes);
        }
        self.add_child("LIST", &attributes)?;
        for item in list.items() {
            self.write_documentation_block("ITEM", item)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_annotation(&mut self, annotation: &Annotation) -> Result<()> {
        if annotation.is_empty() {
            return self.add_empty("ANNOTATION");
        }
        self.add_child("ANNOTATION", &[])?;
        if let Some(label) = annotation.label() {
            self.write_long_name("LABEL", label)?;
        }
        self.add_value("ANNOTATION-ORIGIN", annotation.origin())?;
        if let Some(text) = annotation.text() {
            self.write_documentation_block("ANNOTATION-TEXT", text)?;
        }
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Administrative data
    // -------------------------------------------------------------------------

    pub(crate) fn write_admin_data(&mut self, admin_data: &AdminData) -> Result<()> {
        if admin_data.is_empty() {
            return self.add_empty("ADMIN-DATA");
        }
        self.add_child("ADMIN-DATA", &[])?;
        self.add_token("LANGUAGE", admin_data.language())?;
        if let Some(used_languages) = admin_data.used_languages() {
            self.write_plain_texts("USED-LANGUAGES", used_languages)?;
        }
        if !admin_data.doc_revisions().is_empty() {
            self.add_child("DOC-REVISIONS", &[])?;
            for revision in admin_data.doc_revisions() {
                self.write_doc_revision(revision)?;
            }
            self.leave_child()?;
        }
        self.leave_child()
    }

    pub(crate) fn write_doc_revision(&mut self, revision: &DocRevision) -> Result<()> {
        if revision.is_empty() {
            return self.add_empty("DOC-REVISION");
        }
        self.add_child("DOC-REVISION", &[])?;
        self.add_value("REVISION-LABEL", revision.revision_label())?;
        self.add_value("REVISION-LABEL-P-1", revision.revision_label_p1())?;
        self.add_value("REVISION-LABEL-P-2", revision.revision_label_p2())?;
        self.add_value("STATE", revision.state())?;
        self.add_value("ISSUED-BY", revision.issued_by())?;
        self.add_value("DATE", revision.date())?;
        self.leave_child()
    }
}

#[cfg(test)]
mod tests {
    use arxml_core::{
        documentation::{Emphasis, TechnicalTerm},
        enumeration::{EmphasisType, Language, ListKind},
    };

    use super::*;

    #[test]
    fn test_desc_with_mixed_content() {
        let desc = MultiLanguageOverviewParagraph::from(
            LanguageText::new(Language::En, "Speed ")
                .with_inline(Emphasis::new("in km/h").with_kind(EmphasisType::Bold))
                .with_inline(InlineContent::Break)
                .with_inline(TechnicalTerm::new("ECU").with_kind("acronym")),
        );
        let xml = Writer::default().write_str_element(&desc).unwrap();
        assert_eq!(
            xml,
            "<DESC>\n  <L-2 L=\"EN\">Speed <E TYPE=\"BOLD\">in km/h</E><BR/><TT TYPE=\"acronym\">ECU</TT></L-2>\n</DESC>"
        );
    }

    #[test]
    fn test_empty_containers_collapse() {
        let mut writer = Writer::default();
        assert_eq!(
            writer.write_str_element(&MultiLanguageLongName::new()).unwrap(),
            "<LONG-NAME/>"
        );
        assert_eq!(writer.write_str_element(&AdminData::new()).unwrap(), "<ADMIN-DATA/>");
        assert_eq!(writer.write_str_element(&Annotation::new()).unwrap(), "<ANNOTATION/>");
        assert_eq!(
            writer.write_str_element(&DocumentationBlock::new()).unwrap(),
            "<INTRODUCTION/>"
        );
    }

    #[test]
    fn test_verbatim_lines_carry_language_only() {
        let verbatim = MultiLanguageVerbatim::from(LanguageText::new(Language::En, "a  b"));
        let xml = Writer::default().write_str_element(&verbatim).unwrap();
        assert_eq!(xml, "<VERBATIM>\n  <L-5 L=\"EN\">a  b</L-5>\n</VERBATIM>");
    }

    #[test]
    fn test_every_language_text_has_language_attribute() {
        let long_name = MultiLanguageLongName::new().with_text(LanguageText::empty(Language::ForAll));
        let xml = Writer::default().write_str_element(&long_name).unwrap();
        assert_eq!(xml, "<LONG-NAME>\n  <L-4 L=\"FOR-ALL\"/>\n</LONG-NAME>");
    }

    #[test]
    fn test_list_items() {
        let list = List::new(ListKind::Unnumber)
            .with_item(DocumentationBlock::new().with_paragraph(LanguageText::new(Language::En, "one")));
        let xml = Writer::default().write_str_element(&list).unwrap();
        assert_eq!(
            xml,
            "<LIST TYPE=\"UNNUMBER\">\n  <ITEM>\n    <P>\n      <L-1 L=\"EN\">one</L-1>\n    </P>\n  </ITEM>\n</LIST>"
        );
    }

    #[test]
    fn test_admin_data() {
        let admin_data = AdminData::new()
            .with_language(Language::De)
            .with_doc_revision(DocRevision::new().with_revision_label("1.0.0").with_date("2024-01-01"));
        let xml = Writer::default().write_str_element(&admin_data).unwrap();
        assert_eq!(
            xml,
            "<ADMIN-DATA>\n  <LANGUAGE>DE</LANGUAGE>\n  <DOC-REVISIONS>\n    <DOC-REVISION>\n      \
             <REVISION-LABEL>1.0.0</REVISION-LABEL>\n      <DATE>2024-01-01</DATE>\n    \
             </DOC-REVISION>\n  </DOC-REVISIONS>\n</ADMIN-DATA>"
        );
    }

    #[test]
    fn test_annotation_uses_label() {
        let annotation = Annotation::new()
            .with_label(LanguageText::new(Language::En, "Note"))
            .with_origin("review");
        let xml = Writer::default().write_str_element(&annotation).unwrap();
        assert!(xml.contains("<LABEL>\n    <L-4 L=\"EN\">Note</L-4>\n  </LABEL>"));
        assert!(xml.contains("<ANNOTATION-ORIGIN>review</ANNOTATION-ORIGIN>"));
    }
}
