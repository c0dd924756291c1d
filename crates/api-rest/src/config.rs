//! Server configuration.
//!
//! Resolved once at process startup and then handed to the router. Handlers never read the
//! process environment, so every request sees the same artifact path for the process lifetime.

use apk_artifact::{ArtifactFile, DEFAULT_ARTIFACT_PATH};
use std::net::{Ipv4Addr, SocketAddr};

/// Port the server listens on unless overridden.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable overriding the bind address.
pub const ADDR_ENV: &str = "APK_DOWNLOAD_ADDR";

/// Environment variable overriding the artifact path.
pub const ARTIFACT_ENV: &str = "APK_DOWNLOAD_ARTIFACT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    addr: SocketAddr,
    artifact: ArtifactFile,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr, artifact: ArtifactFile) -> Self {
        Self { addr, artifact }
    }

    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAddr` if `APK_DOWNLOAD_ADDR` is set but not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(std::env::var(ADDR_ENV).ok(), std::env::var(ARTIFACT_ENV).ok())
    }

    /// Resolve configuration from optional raw values.
    ///
    /// `None` or blank values fall back to `0.0.0.0:5000` and the fixed artifact path.
    pub fn from_env_values(
        addr: Option<String>,
        artifact_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = match non_blank(addr) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?,
            None => default_addr(),
        };

        let artifact = ArtifactFile::at(
            non_blank(artifact_path).unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_string()),
        );

        Ok(Self { addr, artifact })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn artifact(&self) -> &ArtifactFile {
        &self.artifact
    }

    pub fn into_artifact(self) -> ArtifactFile {
        self.artifact
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_addr(), ArtifactFile::default())
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
