//! Provider backed by hardcoded classpath lists.

use classpath_plugin::{ClassPathFiles, ClassPathProvider};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Resolves only the names it was given; declines everything else.
#[derive(Debug, Clone)]
pub struct StaticClassPathProvider {
    name: String,
    classpaths: IndexMap<String, ClassPathFiles>,
}

impl StaticClassPathProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classpaths: IndexMap::new(),
        }
    }

    /// Register `files` under `classpath`.
    ///
    /// Registering the same name twice replaces the earlier list. Duplicate
    /// files within one list are collapsed, keeping the first occurrence.
    pub fn with_class_path(
        mut self,
        classpath: impl Into<String>,
        files: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        self.classpaths
            .insert(classpath.into(), files.into_iter().collect());
        self
    }

    /// Names this provider answers for, in registration order
    pub fn class_path_names(&self) -> impl Iterator<Item = &str> {
        self.classpaths.keys().map(String::as_str)
    }
}

impl ClassPathProvider for StaticClassPathProvider {
    fn resolve(&self, name: &str) -> Option<ClassPathFiles> {
        self.classpaths.get(name).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_registered_names_only() {
        let provider = StaticClassPathProvider::new("static").with_class_path(
            "runtime",
            vec![PathBuf::from("/libs/a.jar"), PathBuf::from("/libs/b.jar")],
        );

        let files = provider.resolve("runtime").unwrap();
        assert_eq!(
            files.into_iter().collect::<Vec<_>>(),
            vec![PathBuf::from("/libs/a.jar"), PathBuf::from("/libs/b.jar")]
        );
        assert!(provider.resolve("testing").is_none());
    }

    #[test]
    fn test_empty_list_is_still_handled() {
        let provider = StaticClassPathProvider::new("static").with_class_path("empty", Vec::new());

        let files = provider.resolve("empty");
        assert!(files.is_some());
        assert!(files.unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_collapse_in_order() {
        let provider = StaticClassPathProvider::new("static").with_class_path(
            "runtime",
            vec![
                PathBuf::from("/libs/b.jar"),
                PathBuf::from("/libs/a.jar"),
                PathBuf::from("/libs/b.jar"),
            ],
        );

        let files: Vec<_> = provider.resolve("runtime").unwrap().into_iter().collect();
        assert_eq!(
            files,
            vec![PathBuf::from("/libs/b.jar"), PathBuf::from("/libs/a.jar")]
        );
    }

    #[test]
    fn test_class_path_names() {
        let provider = StaticClassPathProvider::new("static")
            .with_class_path("runtime", Vec::new())
            .with_class_path("testing", Vec::new());
        assert_eq!(
            provider.class_path_names().collect::<Vec<_>>(),
            vec!["runtime", "testing"]
        );
        assert_eq!(provider.name(), "static");
    }
}
