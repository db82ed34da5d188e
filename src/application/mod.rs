//! Application layer - Use cases and orchestration

pub mod describe_scheme;
pub mod make_tag;
pub mod manage_config;

pub use describe_scheme::{describe_scheme, SchemeRow};
pub use make_tag::{MakeTagService, TagRequest};
pub use manage_config::ConfigService;
