//! Resolved authority records

use super::{parse_entity_kind, EntityKind};
use serde::{Deserialize, Serialize};

/// An entity as resolved by a name-authority service.
///
/// Field names on the wire follow the authority service (`type`, `uri`,
/// `viafid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityResource {
    /// Free-form kind string, parsed with [`parse_entity_kind`]
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub uri: String,
    /// Stable identifier within the authority source
    #[serde(rename = "viafid", alias = "authority_id", default)]
    pub authority_id: String,
}

impl AuthorityResource {
    pub fn new(
        kind: impl Into<String>,
        uri: impl Into<String>,
        authority_id: impl Into<String>,
    ) -> Self {
        AuthorityResource {
            kind: kind.into(),
            uri: uri.into(),
            authority_id: authority_id.into(),
        }
    }

    pub fn entity_kind(&self) -> Option<EntityKind> {
        parse_entity_kind(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_parses_type() {
        let resource = AuthorityResource::new("Personal", "", "1");
        assert_eq!(resource.entity_kind(), Some(EntityKind::Personal));

        let resource = AuthorityResource::new("family", "", "1");
        assert_eq!(resource.entity_kind(), None);
    }

    #[test]
    fn test_deserialize_authority_fields() {
        let json = r#"{"type": "corporate", "uri": "http://viaf.org/viaf/98765", "viafid": "98765"}"#;
        let resource: AuthorityResource = serde_json::from_str(json).unwrap();
        assert_eq!(
            resource,
            AuthorityResource::new("corporate", "http://viaf.org/viaf/98765", "98765")
        );
    }

    #[test]
    fn test_deserialize_authority_id_alias() {
        let json = r#"{"type": "geographic", "authority_id": "42"}"#;
        let resource: AuthorityResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.authority_id, "42");
        assert_eq!(resource.uri, "");
    }

    #[test]
    fn test_deserialize_requires_type() {
        let json = r#"{"uri": "http://viaf.org/viaf/1", "viafid": "1"}"#;
        assert!(serde_json::from_str::<AuthorityResource>(json).is_err());
    }
}
