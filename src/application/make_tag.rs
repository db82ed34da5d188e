//! Tag generation use case

use crate::domain::{synthesize, AuthorityResource, DocumentFormat};
use crate::error::{NameDropperError, Result};
use crate::infrastructure::Config;
use std::str::FromStr;

/// Everything a caller hands over to get a tag; absent parts are rejected
#[derive(Debug, Clone, Default)]
pub struct TagRequest {
    /// Format name; falls back to the configured default when `None`
    pub format: Option<String>,
    pub display_text: Option<String>,
    pub resource: Option<AuthorityResource>,
}

/// Service for turning resolved entities into markup
pub struct MakeTagService {
    config: Config,
}

impl MakeTagService {
    pub fn new(config: Config) -> Self {
        MakeTagService { config }
    }

    /// Pick the explicit format, else the configured one
    pub fn resolve_format(&self, requested: Option<&str>) -> Result<DocumentFormat> {
        if let Some(name) = requested {
            return DocumentFormat::from_str(name).map_err(NameDropperError::InvalidInput);
        }

        self.config.document_format()?.ok_or_else(|| {
            NameDropperError::InvalidInput("No document format given".to_string())
        })
    }

    pub fn execute(&self, request: &TagRequest) -> Result<String> {
        let format = self.resolve_format(request.format.as_deref())?;

        let display_text = request
            .display_text
            .as_deref()
            .ok_or_else(|| NameDropperError::InvalidInput("No display text given".to_string()))?;

        let resource = request.resource.as_ref().ok_or_else(|| {
            NameDropperError::InvalidInput("No authority resource given".to_string())
        })?;

        // The core renders literally; an empty identifier would produce
        // `authfilenumber=""` or `ref=""`
        match format {
            DocumentFormat::Ead if resource.authority_id.trim().is_empty() => {
                return Err(NameDropperError::InvalidInput(
                    "No authority id given: EAD tags need authfilenumber".to_string(),
                ))
            }
            DocumentFormat::Tei if resource.uri.trim().is_empty() => {
                return Err(NameDropperError::InvalidInput(
                    "No authority uri given: TEI tags need ref".to_string(),
                ))
            }
            _ => {}
        }

        tracing::debug!(
            %format,
            kind = %resource.kind,
            authority_id = %resource.authority_id,
            "synthesizing tag"
        );

        synthesize(format, display_text, resource)
    }
}
