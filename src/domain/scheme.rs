//! Tag vocabulary per document format and entity kind

use super::{DocumentFormat, EntityKind};

/// Markup used for one entity kind within a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMarkup {
    pub tag: &'static str,
    /// Value of the `type` attribute, for formats that carry one
    pub type_attr: Option<&'static str>,
}

/// Dispatch table for one document format
#[derive(Debug, PartialEq, Eq)]
pub struct FormatTagScheme {
    pub format: DocumentFormat,
    /// Tag used when the entity kind is unknown
    pub fallback_tag: &'static str,
    personal: KindMarkup,
    corporate: KindMarkup,
    geographic: KindMarkup,
}

const EAD_SCHEME: FormatTagScheme = FormatTagScheme {
    format: DocumentFormat::Ead,
    fallback_tag: "name",
    personal: KindMarkup {
        tag: "persname",
        type_attr: None,
    },
    corporate: KindMarkup {
        tag: "corpname",
        type_attr: None,
    },
    geographic: KindMarkup {
        tag: "geogname",
        type_attr: None,
    },
};

const TEI_SCHEME: FormatTagScheme = FormatTagScheme {
    format: DocumentFormat::Tei,
    fallback_tag: "name",
    personal: KindMarkup {
        tag: "name",
        type_attr: Some("person"),
    },
    corporate: KindMarkup {
        tag: "name",
        type_attr: Some("org"),
    },
    geographic: KindMarkup {
        tag: "name",
        type_attr: Some("place"),
    },
};

impl FormatTagScheme {
    pub fn for_format(format: DocumentFormat) -> &'static FormatTagScheme {
        match format {
            DocumentFormat::Ead => &EAD_SCHEME,
            DocumentFormat::Tei => &TEI_SCHEME,
        }
    }

    pub fn markup(&self, kind: EntityKind) -> KindMarkup {
        match kind {
            EntityKind::Personal => self.personal,
            EntityKind::Corporate => self.corporate,
            EntityKind::Geographic => self.geographic,
        }
    }
}

/// Tag name for `kind` in `format`.
///
/// An unknown kind never fails here: EAD degrades to the generic `name`
/// element, and TEI always uses `name`.
pub fn resolve_tag_name(format: DocumentFormat, kind: Option<EntityKind>) -> &'static str {
    let scheme = FormatTagScheme::for_format(format);
    match kind {
        Some(kind) => scheme.markup(kind).tag,
        None => scheme.fallback_tag,
    }
}

/// Value of the `type` attribute for `kind` in `format`.
///
/// EAD never carries one. TEI has no generic type, so an unknown kind is
/// `None` and callers must reject it.
pub fn resolve_tag_type(format: DocumentFormat, kind: Option<EntityKind>) -> Option<&'static str> {
    kind.and_then(|kind| FormatTagScheme::for_format(format).markup(kind).type_attr)
}
