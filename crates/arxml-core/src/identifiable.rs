//! The identifiable attribute group and the [`Referrable`] capability.
//!
//! Every package element embeds an [`Identifiable`] holding its short name
//! and the optional descriptive attributes shared by all of them. The
//! [`Referrable`] trait gives generic code access to that group together
//! with the element's [`DestinationKind`].

use crate::{
    base,
    documentation::{
        AdminData, Annotation, DocumentationBlock, MultiLanguageLongName,
        MultiLanguageOverviewParagraph,
    },
    enumeration::DestinationKind,
    error::Result,
};

/// Short name plus the optional descriptive attributes of an identifiable.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifiable {
    short_name: String,
    long_name: Option<MultiLanguageLongName>,
    desc: Option<MultiLanguageOverviewParagraph>,
    category: Option<String>,
    uuid: Option<String>,
    admin_data: Option<AdminData>,
    introduction: Option<DocumentationBlock>,
    annotations: Vec<Annotation>,
}

impl Identifiable {
    /// Creates the group with a validated short name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShortName`](crate::ModelError::InvalidShortName)
    /// for an empty name or one containing `/`.
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            short_name: base::short_name(short_name)?,
            long_name: None,
            desc: None,
            category: None,
            uuid: None,
            admin_data: None,
            introduction: None,
            annotations: Vec::new(),
        })
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> Option<&MultiLanguageLongName> {
        self.long_name.as_ref()
    }

    pub fn desc(&self) -> Option<&MultiLanguageOverviewParagraph> {
        self.desc.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The UUID, rendered as the `UUID` attribute of the element tag.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn admin_data(&self) -> Option<&AdminData> {
        self.admin_data.as_ref()
    }

    pub fn introduction(&self) -> Option<&DocumentationBlock> {
        self.introduction.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn set_long_name(&mut self, long_name: impl Into<MultiLanguageLongName>) {
        self.long_name = Some(long_name.into());
    }

    pub fn set_desc(&mut self, desc: impl Into<MultiLanguageOverviewParagraph>) {
        self.desc = Some(desc.into());
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        self.uuid = Some(uuid.into());
    }

    pub fn set_admin_data(&mut self, admin_data: AdminData) {
        self.admin_data = Some(admin_data);
    }

    pub fn set_introduction(&mut self, introduction: DocumentationBlock) {
        self.introduction = Some(introduction);
    }

    pub fn push_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}

/// Capability of objects that carry an [`Identifiable`] group and can be
/// the target of a reference.
pub trait Referrable {
    /// Kind rendered as `DEST` when this object is referenced.
    const DESTINATION: DestinationKind;

    fn identifiable(&self) -> &Identifiable;

    fn identifiable_mut(&mut self) -> &mut Identifiable;

    fn short_name(&self) -> &str {
        self.identifiable().short_name()
    }
}

/// Implements [`Referrable`] for a struct with an `identifiable` field and
/// adds builder methods forwarding to the group.
macro_rules! referrable {
    ($name:ident, $kind:ident) => {
        impl $crate::identifiable::Referrable for $name {
            const DESTINATION: $crate::enumeration::DestinationKind =
                $crate::enumeration::DestinationKind::$kind;

            fn identifiable(&self) -> &$crate::identifiable::Identifiable {
                &self.identifiable
            }

            fn identifiable_mut(&mut self) -> &mut $crate::identifiable::Identifiable {
                &mut self.identifiable
            }
        }

        impl $name {
            pub fn short_name(&self) -> &str {
                self.identifiable.short_name()
            }

            pub fn with_long_name(
                mut self,
                long_name: impl Into<$crate::documentation::MultiLanguageLongName>,
            ) -> Self {
                self.identifiable.set_long_name(long_name);
                self
            }

            pub fn with_desc(
                mut self,
                desc: impl Into<$crate::documentation::MultiLanguageOverviewParagraph>,
            ) -> Self {
                self.identifiable.set_desc(desc);
                self
            }

            pub fn with_category(mut self, category: impl Into<String>) -> Self {
                self.identifiable.set_category(category);
                self
            }

            pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
                self.identifiable.set_uuid(uuid);
                self
            }

            pub fn with_admin_data(mut self, admin_data: $crate::documentation::AdminData) -> Self {
                self.identifiable.set_admin_data(admin_data);
                self
            }

            pub fn with_introduction(
                mut self,
                introduction: $crate::documentation::DocumentationBlock,
            ) -> Self {
                self.identifiable.set_introduction(introduction);
                self
            }

            pub fn with_annotation(mut self, annotation: $crate::documentation::Annotation) -> Self {
                self.identifiable.push_annotation(annotation);
                self
            }
        }
    };
}

pub(crate) use referrable;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        documentation::LanguageText,
        enumeration::Language,
        error::ModelError,
    };

    #[test]
    fn test_short_name_is_validated() {
        assert!(Identifiable::new("Speed").is_ok());
        assert_eq!(
            Identifiable::new("A/B"),
            Err(ModelError::InvalidShortName("A/B".to_string()))
        );
    }

    #[test]
    fn test_optional_attributes() {
        let mut group = Identifiable::new("Speed").unwrap();
        assert!(group.long_name().is_none());
        assert!(group.annotations().is_empty());

        group.set_long_name(LanguageText::new(Language::En, "Vehicle speed"));
        group.set_category("VALUE");
        group.set_uuid("4c3f");
        group.push_annotation(crate::documentation::Annotation::new().with_origin("tool"));

        assert_eq!(group.long_name().map(|n| n.texts().len()), Some(1));
        assert_eq!(group.category(), Some("VALUE"));
        assert_eq!(group.uuid(), Some("4c3f"));
        assert_eq!(group.annotations().len(), 1);
    }
}
