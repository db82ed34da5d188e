//! Domain layer - Tag vocabulary and markup synthesis
//!
//! Everything here is pure: no I/O, no logging, no shared mutable state.

pub mod format;
pub mod kind;
pub mod resource;
pub mod scheme;
pub mod synthesizer;

pub use format::{parse_document_format, DocumentFormat};
pub use kind::{parse_entity_kind, EntityKind};
pub use resource::AuthorityResource;
pub use scheme::{resolve_tag_name, resolve_tag_type, FormatTagScheme, KindMarkup};
pub use synthesizer::synthesize;
