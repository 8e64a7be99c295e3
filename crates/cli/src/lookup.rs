use classpath_api::{ClassPath, ClassPathRegistry};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Filesystem paths
    Files,
    /// file: URIs
    Uris,
    /// file: URLs
    Urls,
    /// A single platform search path, as passed to `java -classpath`
    SearchPath,
}

pub fn run(
    registry: &dyn ClassPathRegistry,
    name: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let classpath = registry.lookup(name)?;
    tracing::info!("Resolved '{}' to {} entries", name, classpath.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in render(&classpath, format)? {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render(
    classpath: &ClassPath,
    format: OutputFormat,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let lines = match format {
        OutputFormat::Files => classpath
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        OutputFormat::Uris => classpath
            .as_uris()?
            .iter()
            .map(|u| u.as_str().to_string())
            .collect(),
        OutputFormat::Urls => classpath.as_urls()?.into_iter().map(String::from).collect(),
        OutputFormat::SearchPath => {
            vec![classpath.to_search_path()?.to_string_lossy().into_owned()]
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classpath_core::{DefaultClassPathRegistry, StaticClassPathProvider};
    use classpath_plugin::ClassPathProvider;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn sample() -> ClassPath {
        ClassPath::new(vec![PathBuf::from("/libs/a.jar"), PathBuf::from("/libs/b.jar")])
    }

    #[cfg(unix)]
    #[test]
    fn test_render_formats() {
        let classpath = sample();

        assert_eq!(
            render(&classpath, OutputFormat::Files).unwrap(),
            vec!["/libs/a.jar", "/libs/b.jar"]
        );
        assert_eq!(
            render(&classpath, OutputFormat::Urls).unwrap(),
            vec!["file:///libs/a.jar", "file:///libs/b.jar"]
        );
        assert_eq!(
            render(&classpath, OutputFormat::Uris).unwrap(),
            vec!["file:///libs/a.jar", "file:///libs/b.jar"]
        );
        assert_eq!(
            render(&classpath, OutputFormat::SearchPath).unwrap(),
            vec!["/libs/a.jar:/libs/b.jar"]
        );
    }

    #[test]
    fn test_render_surfaces_conversion_errors() {
        let classpath = ClassPath::new(vec![PathBuf::from("/libs/a.jar"), PathBuf::new()]);
        assert!(render(&classpath, OutputFormat::Urls).is_err());
        assert!(render(&classpath, OutputFormat::Uris).is_err());
        assert_eq!(render(&classpath, OutputFormat::Files).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = DefaultClassPathRegistry::new(Vec::new());

        let err = run(&registry, "docs", OutputFormat::Files).unwrap_err();
        assert_eq!(err.to_string(), "unknown classpath 'docs' requested.");
    }

    #[test]
    fn test_conversion_failure_is_an_error() {
        let provider = StaticClassPathProvider::new("static")
            .with_class_path("broken", vec![PathBuf::from("/libs/a.jar"), PathBuf::new()]);
        let provider: Arc<dyn ClassPathProvider> = Arc::new(provider);
        let registry = DefaultClassPathRegistry::new([provider]);

        let err = run(&registry, "broken", OutputFormat::Urls).unwrap_err();
        assert!(err.to_string().starts_with("cannot convert"));
    }
}
