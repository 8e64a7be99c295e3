use classpath_core::{DefaultClassPathRegistry, RegistryConfig};
use classpath_gradle::GradleCacheClassPathProvider;
use classpath_java::JdkClassPathProvider;
use classpath_plugin::ClassPathProvider;
use std::sync::Arc;

/// Assembles the default classpath registry from configuration.
///
/// Provider priority: configured classpaths, then the JDK, then the Gradle
/// module cache. Disabled providers are left out entirely.
pub fn build_default_registry(config: &RegistryConfig) -> DefaultClassPathRegistry {
    let mut providers: Vec<Arc<dyn ClassPathProvider>> = Vec::new();

    if let Some(configured) = config.static_provider() {
        providers.push(Arc::new(configured));
    }

    if config.jdk.enabled {
        let jdk = match &config.jdk.home {
            Some(home) => JdkClassPathProvider::with_home(home),
            None => JdkClassPathProvider::new(),
        };
        providers.push(Arc::new(jdk));
    }

    if config.gradle.enabled {
        let gradle = match &config.gradle.cache_dir {
            Some(dir) => GradleCacheClassPathProvider::with_path(dir.clone()),
            None => GradleCacheClassPathProvider::new(),
        };
        providers.push(Arc::new(gradle));
    }

    let registry = DefaultClassPathRegistry::new(providers);
    tracing::debug!("Classpath providers: {:?}", registry.provider_names());
    registry
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(classpath_core::logging::init_logging(component, to_stderr))
}
