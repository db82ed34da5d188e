//! Semantic categories of named entities

use std::fmt;
use std::str::FromStr;

/// Category of a named entity, independent of any document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Personal,
    Corporate,
    Geographic,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Personal,
        EntityKind::Corporate,
        EntityKind::Geographic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Personal => "PERSONAL",
            EntityKind::Corporate => "CORPORATE",
            EntityKind::Geographic => "GEOGRAPHIC",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts the canonical names plus "person", the form authority
    /// services commonly report for personal names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" | "person" => Ok(EntityKind::Personal),
            "corporate" => Ok(EntityKind::Corporate),
            "geographic" => Ok(EntityKind::Geographic),
            _ => Err(format!(
                "Unsupported entity kind: '{}'. Valid kinds are: personal, corporate, geographic",
                s
            )),
        }
    }
}

/// Case-insensitive lookup; unknown strings are `None`, never an error
pub fn parse_entity_kind(s: &str) -> Option<EntityKind> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!(parse_entity_kind("PERSONAL"), Some(EntityKind::Personal));
        assert_eq!(parse_entity_kind("CORPORATE"), Some(EntityKind::Corporate));
        assert_eq!(
            parse_entity_kind("GEOGRAPHIC"),
            Some(EntityKind::Geographic)
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_entity_kind("personal"), Some(EntityKind::Personal));
        assert_eq!(parse_entity_kind("Corporate"), Some(EntityKind::Corporate));
        assert_eq!(
            parse_entity_kind("gEoGrApHiC"),
            Some(EntityKind::Geographic)
        );
    }

    #[test]
    fn test_parse_person_short_form() {
        assert_eq!(parse_entity_kind("person"), Some(EntityKind::Personal));
        assert_eq!(parse_entity_kind("PERSON"), Some(EntityKind::Personal));
    }

    #[test]
    fn test_tei_type_values_are_not_kinds() {
        // "org" and "place" are TEI attribute values, not entity kinds
        assert_eq!(parse_entity_kind("org"), None);
        assert_eq!(parse_entity_kind("Org"), None);
        assert_eq!(parse_entity_kind("place"), None);
        assert_eq!(parse_entity_kind("PLACE"), None);
    }

    #[test]
    fn test_parse_non_members() {
        assert_eq!(parse_entity_kind(""), None);
        assert_eq!(parse_entity_kind("unknown-kind-xyz"), None);
        assert_eq!(parse_entity_kind("persname"), None);
        assert_eq!(parse_entity_kind(" personal"), None);
        assert_eq!(parse_entity_kind("family"), None);
    }

    #[test]
    fn test_from_str_error_keeps_raw_value() {
        let err = EntityKind::from_str("Family").unwrap_err();
        assert!(err.contains("'Family'"));
        assert!(err.contains("personal, corporate, geographic"));
    }

    #[test]
    fn test_display_roundtrips_through_parser() {
        for kind in EntityKind::ALL {
            assert_eq!(parse_entity_kind(&kind.to_string()), Some(kind));
        }
    }
}
