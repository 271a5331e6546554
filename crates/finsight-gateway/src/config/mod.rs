//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use finsight_core::error::{FinsightError, Result};

pub use schema::{CorsSection, GatewayConfig, GatewaySection};

/// Looked up in the working directory at startup.
pub const DEFAULT_PATH: &str = "finsight.yaml";

pub fn load_from_file(path: &Path) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        FinsightError::Config(format!("read {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file is `Ok(None)`.
pub fn load_optional(path: &Path) -> Result<Option<GatewayConfig>> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FinsightError::Config(format!(
            "read {} failed: {e}",
            path.display()
        ))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| FinsightError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
