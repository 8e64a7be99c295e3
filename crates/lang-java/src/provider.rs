//! Classpath provider for the JDK class library.

use crate::discoverer::JdkInstallation;
use classpath_plugin::{ClassPathFiles, ClassPathProvider};
use std::path::Path;
use tracing::{debug, info};

/// Classpath name answered by [`JdkClassPathProvider`].
pub const JDK_CLASSPATH: &str = "jdk";

/// Maps [`JDK_CLASSPATH`] to the runtime assets of one JDK installation.
///
/// The JDK is located once, at construction. Without an installation the
/// provider declines every name.
#[derive(Debug, Clone)]
pub struct JdkClassPathProvider {
    installation: Option<JdkInstallation>,
}

impl JdkClassPathProvider {
    /// Locate a JDK from the environment and common install locations.
    pub fn new() -> Self {
        Self::from_installation(JdkInstallation::locate())
    }

    /// Use the JDK at `home` only; no search is performed.
    pub fn with_home(home: &Path) -> Self {
        Self::from_installation(JdkInstallation::at(home))
    }

    pub fn from_installation(installation: Option<JdkInstallation>) -> Self {
        match &installation {
            Some(jdk) => info!(
                "Using JDK {} at {}",
                jdk.version.as_deref().unwrap_or("(unknown version)"),
                jdk.root.display()
            ),
            None => debug!("No JDK found, '{}' classpath unavailable", JDK_CLASSPATH),
        }
        Self { installation }
    }

    pub fn installation(&self) -> Option<&JdkInstallation> {
        self.installation.as_ref()
    }
}

impl Default for JdkClassPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassPathProvider for JdkClassPathProvider {
    fn resolve(&self, name: &str) -> Option<ClassPathFiles> {
        if name != JDK_CLASSPATH {
            return None;
        }
        self.installation
            .as_ref()
            .map(|jdk| jdk.runtime_assets.iter().cloned().collect())
    }

    fn name(&self) -> &str {
        "JDK"
    }
}
