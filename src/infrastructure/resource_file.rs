//! Reading authority resources from JSON files

use crate::domain::AuthorityResource;
use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a resource from `path`, or from stdin when `path` is `-`
pub fn load_resource(path: &Path) -> Result<AuthorityResource> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let resource = parse_resource(&contents)?;
    tracing::debug!(
        source = %path.display(),
        kind = %resource.kind,
        "loaded authority resource"
    );
    Ok(resource)
}

pub fn parse_resource(contents: &str) -> Result<AuthorityResource> {
    Ok(serde_json::from_str(contents)?)
}
