//! First-match classpath registry.

use classpath_api::{ClassPath, ClassPathError, ClassPathRegistry, ClassPathResult};
use classpath_plugin::ClassPathProvider;
use std::sync::Arc;
use tracing::{debug, trace};

/// Registry that asks each provider in turn and returns the first answer.
///
/// The provider list is copied at construction and never changes. Lookups
/// hold no locks, so the registry can be shared freely across threads.
#[derive(Clone)]
pub struct DefaultClassPathRegistry {
    providers: Arc<[Arc<dyn ClassPathProvider>]>,
}

impl DefaultClassPathRegistry {
    /// Build a registry; earlier providers take priority.
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn ClassPathProvider>>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// Build a registry from a borrowed provider list.
    pub fn from_slice(providers: &[Arc<dyn ClassPathProvider>]) -> Self {
        Self::new(providers.iter().cloned())
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for DefaultClassPathRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultClassPathRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl ClassPathRegistry for DefaultClassPathRegistry {
    fn lookup(&self, name: &str) -> ClassPathResult<ClassPath> {
        for provider in self.providers.iter() {
            match provider.resolve(name) {
                Some(files) => {
                    debug!(
                        "Classpath '{}' resolved by {} ({} entries)",
                        name,
                        provider.name(),
                        files.len()
                    );
                    return Ok(ClassPath::new(files));
                }
                None => trace!("{} declined classpath '{}'", provider.name(), name),
            }
        }

        Err(ClassPathError::NotFound(name.to_string()))
    }
}
