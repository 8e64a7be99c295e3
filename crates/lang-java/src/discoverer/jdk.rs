//! JDK installation discovery.
//!
//! Looks for a JDK in:
//! - JAVA_HOME environment variable
//! - macOS java_home tool
//! - Common installation paths
//! - SDKMAN

use std::path::{Path, PathBuf};
use tracing::debug;

/// A located JDK and the runtime assets that make up its class library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkInstallation {
    pub root: PathBuf,
    /// e.g. "17.0.1"
    pub version: Option<String>,
    pub runtime_assets: Vec<PathBuf>,
}

impl JdkInstallation {
    /// Inspect `root` as a JDK home. Returns `None` if no runtime assets exist there.
    pub fn at(root: &Path) -> Option<Self> {
        let runtime_assets = collect_runtime_assets(root)?;
        Some(Self {
            root: root.to_path_buf(),
            version: detect_jdk_version(root),
            runtime_assets,
        })
    }

    /// Search the usual places for a JDK, first hit wins.
    pub fn locate() -> Option<Self> {
        // 1. Check JAVA_HOME
        if let Ok(java_home) = std::env::var("JAVA_HOME") {
            if let Some(jdk) = Self::at(Path::new(&java_home)) {
                debug!("Found JDK via JAVA_HOME at {}", jdk.root.display());
                return Some(jdk);
            }
        }

        // 2. macOS specific: Use java_home tool
        #[cfg(target_os = "macos")]
        if let Ok(output) = std::process::Command::new("/usr/libexec/java_home").output() {
            if output.status.success() {
                let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if let Some(jdk) = Self::at(Path::new(&path_str)) {
                    return Some(jdk);
                }
            }
        }

        // 3. Search common installation paths
        search_roots().iter().find_map(|root| Self::search_root(root))
    }

    /// `root` is either a JDK itself or a directory holding several.
    fn search_root(root: &Path) -> Option<Self> {
        if !root.exists() {
            return None;
        }

        // If root itself is a JDK (e.g. Homebrew symlink)
        if let Some(jdk) = Self::at(root) {
            return Some(jdk);
        }

        let mut candidates: Vec<PathBuf> = std::fs::read_dir(root)
            .ok()?
            .flatten()
            .map(|entry| entry.path())
            .collect();
        candidates.sort();

        candidates.into_iter().find_map(|mut sdk_path| {
            if cfg!(target_os = "macos") && sdk_path.join("Contents/Home").exists() {
                sdk_path = sdk_path.join("Contents/Home");
            }
            Self::at(&sdk_path)
        })
    }
}

fn search_roots() -> Vec<PathBuf> {
    let mut search_roots = Vec::new();

    #[cfg(target_os = "macos")]
    {
        search_roots.push(PathBuf::from("/Library/Java/JavaVirtualMachines/"));
        search_roots.push(PathBuf::from("/opt/homebrew/opt/openjdk/"));
        search_roots.push(PathBuf::from("/usr/local/opt/openjdk/"));
    }
    #[cfg(target_os = "linux")]
    {
        search_roots.push(PathBuf::from("/usr/lib/jvm/"));
    }
    #[cfg(target_os = "windows")]
    {
        search_roots.push(PathBuf::from("C:\\Program Files\\Java\\"));
    }

    // SDKMAN
    if let Some(mut sdkman) = dirs::home_dir() {
        sdkman.push(".sdkman/candidates/java/");
        search_roots.push(sdkman);
    }

    search_roots
}

fn collect_runtime_assets(sdk_path: &Path) -> Option<Vec<PathBuf>> {
    if !sdk_path.exists() {
        return None;
    }

    // Priority 1: Java 9+ runtime image
    let modules = sdk_path.join("lib/modules");
    if modules.exists() {
        return Some(vec![modules]);
    }

    // Priority 2: Java 8 legacy runtime
    for rt_jar in [sdk_path.join("jre/lib/rt.jar"), sdk_path.join("lib/rt.jar")] {
        if rt_jar.exists() {
            return Some(vec![rt_jar]);
        }
    }

    // Priority 3: jmods (some JDK builds ship without lib/modules)
    let mut jmods: Vec<PathBuf> = std::fs::read_dir(sdk_path.join("jmods"))
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("jmod"))
        .collect();
    if jmods.is_empty() {
        return None;
    }
    jmods.sort();
    Some(jmods)
}

fn detect_jdk_version(jdk_root: &Path) -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(jdk_root.join("release")) {
        if let Some(line) = content.lines().find(|l| l.starts_with("JAVA_VERSION=")) {
            return Some(
                line.trim_start_matches("JAVA_VERSION=")
                    .trim_matches('"')
                    .to_string(),
            );
        }
    }

    // Fallback: try to extract from path
    let path_str = jdk_root.to_string_lossy();
    regex::Regex::new(r"jdk-?(\d+(?:\.\d+)*)")
        .ok()
        .and_then(|re| re.captures(&path_str))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(path).unwrap();
    }

    #[test]
    fn test_java_11_runtime_image() {
        let temp = tempfile::tempdir().unwrap();
        let modules_path = temp.path().join("lib/modules");
        touch(&modules_path);

        let jdk = JdkInstallation::at(temp.path()).unwrap();
        assert_eq!(jdk.runtime_assets, vec![modules_path]);
    }

    #[test]
    fn test_java_8_rt_jar() {
        let temp = tempfile::tempdir().unwrap();
        let rt_jar_path = temp.path().join("jre/lib/rt.jar");
        touch(&rt_jar_path);

        let jdk = JdkInstallation::at(temp.path()).unwrap();
        assert_eq!(jdk.runtime_assets, vec![rt_jar_path]);
    }

    #[test]
    fn test_jmods_are_sorted() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("jmods/java.sql.jmod"));
        touch(&temp.path().join("jmods/java.base.jmod"));
        touch(&temp.path().join("jmods/README"));

        let jdk = JdkInstallation::at(temp.path()).unwrap();
        assert_eq!(
            jdk.runtime_assets,
            vec![
                temp.path().join("jmods/java.base.jmod"),
                temp.path().join("jmods/java.sql.jmod"),
            ]
        );
    }

    #[test]
    fn test_not_a_jdk() {
        let temp = tempfile::tempdir().unwrap();
        assert!(JdkInstallation::at(temp.path()).is_none());
        assert!(JdkInstallation::at(&temp.path().join("missing")).is_none());
    }

    #[test]
    fn test_version_from_release_file() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("lib/modules"));
        fs::write(
            temp.path().join("release"),
            "IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_VERSION=\"17.0.9\"\n",
        )
        .unwrap();

        let jdk = JdkInstallation::at(temp.path()).unwrap();
        assert_eq!(jdk.version.as_deref(), Some("17.0.9"));
    }

    #[test]
    fn test_version_from_directory_name() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("jdk-21.0.2");
        touch(&root.join("lib/modules"));

        let jdk = JdkInstallation::at(&root).unwrap();
        assert_eq!(jdk.version.as_deref(), Some("21.0.2"));
    }

    #[test]
    fn test_search_root_with_several_jdks() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("not-a-jdk/README"));
        touch(&temp.path().join("temurin-17/lib/modules"));

        let jdk = JdkInstallation::search_root(temp.path()).unwrap();
        assert_eq!(jdk.root, temp.path().join("temurin-17"));
    }
}
