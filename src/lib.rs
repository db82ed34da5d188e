//! namedropper - Name tag synthesis for archival and text-encoding markup
//!
//! Turns a named entity resolved against a name-authority service into the
//! tag that embeds it in an EAD finding aid or a TEI document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{
    parse_document_format, parse_entity_kind, synthesize, AuthorityResource, DocumentFormat,
    EntityKind,
};
pub use error::NameDropperError;
