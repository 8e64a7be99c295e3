//! Registry configuration.
//!
//! Loaded from JSON, by default `~/.classpath/registry.json`:
//!
//! ```json
//! {
//!   "classpaths": { "runtime": ["/libs/a.jar", "/libs/b.jar"] },
//!   "jdk": { "enabled": true, "home": "/usr/lib/jvm/java-17" },
//!   "gradle": { "enabled": false }
//! }
//! ```

use crate::classpath::StaticClassPathProvider;
use crate::error::{CoreError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name reported by the provider built from `classpaths`.
pub const CONFIGURED_PROVIDER_NAME: &str = "Configured Classpaths";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Explicit classpaths, consulted before any discovered ones.
    pub classpaths: IndexMap<String, Vec<PathBuf>>,
    pub jdk: JdkConfig,
    pub gradle: GradleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JdkConfig {
    pub enabled: bool,
    /// JDK root to use instead of searching `JAVA_HOME` and install locations.
    pub home: Option<PathBuf>,
}

impl Default for JdkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            home: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GradleConfig {
    pub enabled: bool,
    /// Overrides `~/.gradle/caches/modules-2/files-2.1`.
    pub cache_dir: Option<PathBuf>,
}

impl Default for GradleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Default config location: `~/.classpath/registry.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".classpath/registry.json"))
    }

    /// Read the config at `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&content)?;
        info!("Loaded registry config from {}", path.display());
        Ok(config)
    }

    /// Read the config at `path`, or the default location when `path` is
    /// `None`. Only the default location may be absent.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                debug!("No registry config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Provider for the explicit `classpaths`, if any are configured.
    pub fn static_provider(&self) -> Option<StaticClassPathProvider> {
        if self.classpaths.is_empty() {
            return None;
        }

        Some(self.classpaths.iter().fold(
            StaticClassPathProvider::new(CONFIGURED_PROVIDER_NAME),
            |provider, (name, files)| provider.with_class_path(name.clone(), files.clone()),
        ))
    }
}
