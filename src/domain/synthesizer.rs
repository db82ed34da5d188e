//! Markup synthesis for resolved entities

use super::{resolve_tag_name, resolve_tag_type, AuthorityResource, DocumentFormat};
use crate::error::{NameDropperError, Result};

/// Render `display_text` as a name tag for `format`, identified by `resource`.
///
/// The kind must be known even for EAD, where tag-name resolution alone would
/// fall back to `name`: TEI's type attribute has no generic value, and both
/// formats share this contract.
///
/// Values are substituted literally; nothing is escaped.
pub fn synthesize(
    format: DocumentFormat,
    display_text: &str,
    resource: &AuthorityResource,
) -> Result<String> {
    let kind = resource
        .entity_kind()
        .ok_or_else(|| NameDropperError::UnsupportedEntityKind(resource.kind.clone()))?;

    let tag = resolve_tag_name(format, Some(kind));

    let markup = match format {
        DocumentFormat::Tei => {
            let tag_type = resolve_tag_type(format, Some(kind))
                .ok_or_else(|| NameDropperError::UnsupportedEntityKind(resource.kind.clone()))?;
            format!(
                "<{tag} ref=\"{}\" type=\"{tag_type}\">{display_text}</{tag}>",
                resource.uri
            )
        }
        DocumentFormat::Ead => format!(
            "<{tag} source=\"viaf\" authfilenumber=\"{}\">{display_text}</{tag}>",
            resource.authority_id
        ),
    };

    Ok(markup)
}
