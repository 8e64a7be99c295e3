//! Gradle module cache classpath provider.
//!
//! Resolves module coordinates to JAR files in the Gradle cache directory:
//! `~/.gradle/caches/modules-2/files-2.1`

use crate::model::ModuleCoordinate;
use classpath_plugin::{ClassPathFiles, ClassPathProvider};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Maps `group:artifact:version` to the module's JARs in the Gradle cache.
///
/// Cache layout: `{root}/{group}/{artifact}/{version}/{hash}/{file}`
#[derive(Debug, Clone)]
pub struct GradleCacheClassPathProvider {
    cache_path: Option<PathBuf>,
}

impl GradleCacheClassPathProvider {
    pub fn new() -> Self {
        let cache_path = dirs::home_dir().map(|h| h.join(".gradle/caches/modules-2/files-2.1"));

        Self { cache_path }
    }

    /// Create with a custom cache path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            cache_path: Some(path),
        }
    }

    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    fn module_jars(version_dir: &Path) -> ClassPathFiles {
        let mut jars: Vec<PathBuf> = WalkDir::new(version_dir)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("jar"))
            .filter(|path| {
                // Exclude sources and javadoc JARs
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                !name.ends_with("-sources.jar") && !name.ends_with("-javadoc.jar")
            })
            .collect();

        // Hash directories come back in filesystem order
        jars.sort();
        jars.into_iter().collect()
    }
}

impl Default for GradleCacheClassPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassPathProvider for GradleCacheClassPathProvider {
    fn resolve(&self, name: &str) -> Option<ClassPathFiles> {
        let cache_path = self.cache_path.as_ref()?;
        let coordinate = ModuleCoordinate::parse(name)?;

        let version_dir = cache_path
            .join(&coordinate.group)
            .join(&coordinate.artifact)
            .join(&coordinate.version);
        if !version_dir.is_dir() {
            trace!("{} not in Gradle cache", coordinate);
            return None;
        }

        Some(Self::module_jars(&version_dir))
    }

    fn name(&self) -> &str {
        "Gradle Cache"
    }
}
