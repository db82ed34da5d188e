//! Infrastructure layer - Config files and resource input

pub mod config;
pub mod resource_file;

pub use config::Config;
pub use resource_file::{load_resource, parse_resource};
