//! Dispatch table listing use case

use crate::domain::{resolve_tag_name, resolve_tag_type, DocumentFormat, EntityKind};

/// One row of the dispatch table; `kind == None` is the unknown-kind fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRow {
    pub format: DocumentFormat,
    pub kind: Option<EntityKind>,
    pub tag: &'static str,
    pub type_attr: Option<&'static str>,
}

/// Rows for one format, or for every format when `format` is `None`
pub fn describe_scheme(format: Option<DocumentFormat>) -> Vec<SchemeRow> {
    let formats: Vec<DocumentFormat> = match format {
        Some(format) => vec![format],
        None => DocumentFormat::ALL.to_vec(),
    };

    formats
        .into_iter()
        .flat_map(|format| {
            EntityKind::ALL
                .into_iter()
                .map(Some)
                .chain(std::iter::once(None))
                .map(move |kind| SchemeRow {
                    format,
                    kind,
                    tag: resolve_tag_name(format, kind),
                    type_attr: resolve_tag_type(format, kind),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats() {
        let rows = describe_scheme(None);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].format, DocumentFormat::Ead);
        assert_eq!(rows[4].format, DocumentFormat::Tei);
    }

    #[test]
    fn test_ead_rows() {
        let rows = describe_scheme(Some(DocumentFormat::Ead));
        let tags: Vec<&str> = rows.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec!["persname", "corpname", "geogname", "name"]);
        assert!(rows.iter().all(|r| r.type_attr.is_none()));
        assert_eq!(rows[3].kind, None);
    }

    #[test]
    fn test_tei_rows() {
        let rows = describe_scheme(Some(DocumentFormat::Tei));
        let types: Vec<Option<&str>> = rows.iter().map(|r| r.type_attr).collect();
        assert_eq!(
            types,
            vec![Some("person"), Some("org"), Some("place"), None]
        );
        assert!(rows.iter().all(|r| r.tag == "name"));
    }
}
