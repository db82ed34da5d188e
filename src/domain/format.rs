//! Target document formats

use std::fmt;
use std::str::FromStr;

/// Markup dialect a synthesized tag is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Encoded Archival Description (finding aids)
    Ead,
    /// Text Encoding Initiative (encoded texts)
    Tei,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 2] = [DocumentFormat::Ead, DocumentFormat::Tei];

    /// Canonical upper-case name (e.g., "EAD")
    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Ead => "EAD",
            DocumentFormat::Tei => "TEI",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ead" => Ok(DocumentFormat::Ead),
            "tei" => Ok(DocumentFormat::Tei),
            _ => Err(format!(
                "Invalid document format: '{}'. Valid formats are: ead, tei",
                s
            )),
        }
    }
}

/// Case-insensitive lookup; anything other than "ead" or "tei" is `None`
pub fn parse_document_format(s: &str) -> Option<DocumentFormat> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!(parse_document_format("EAD"), Some(DocumentFormat::Ead));
        assert_eq!(parse_document_format("TEI"), Some(DocumentFormat::Tei));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_document_format("ead"), Some(DocumentFormat::Ead));
        assert_eq!(parse_document_format("Ead"), Some(DocumentFormat::Ead));
        assert_eq!(parse_document_format("tEi"), Some(DocumentFormat::Tei));
    }

    #[test]
    fn test_parse_non_members() {
        assert_eq!(parse_document_format(""), None);
        assert_eq!(parse_document_format("xml"), None);
        assert_eq!(parse_document_format("ead "), None);
        assert_eq!(parse_document_format("teixml"), None);
    }

    #[test]
    fn test_from_str_error_lists_formats() {
        let err = DocumentFormat::from_str("mods").unwrap_err();
        assert!(err.contains("Invalid document format"));
        assert!(err.contains("ead, tei"));
    }

    #[test]
    fn test_display_roundtrips_through_parser() {
        for format in DocumentFormat::ALL {
            assert_eq!(parse_document_format(&format.to_string()), Some(format));
        }
    }
}
