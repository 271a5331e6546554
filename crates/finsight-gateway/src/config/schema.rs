use std::net::SocketAddr;

use finsight_core::error::{FinsightError, Result};
use serde::Deserialize;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub cors: CorsSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            gateway: GatewaySection::default(),
            cors: CorsSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(FinsightError::UnsupportedVersion(self.version));
        }
        self.gateway.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Debug-level logging and per-request tracing.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            debug: default_debug(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FinsightError::Config(format!(
                "gateway.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:5000".into()
}
fn default_debug() -> bool {
    true
}

/// Cross-origin policy. When enabled, any origin, method, and header is allowed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
        }
    }
}

fn default_cors_enabled() -> bool {
    true
}
