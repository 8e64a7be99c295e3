use std::fmt;

/// Maven-style module coordinate: `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl ModuleCoordinate {
    /// Parse `group:artifact:version`.
    ///
    /// Each part must be non-empty and usable as a single cache directory
    /// name, so no path separators and no `.`/`..`.
    pub fn parse(name: &str) -> Option<Self> {
        let mut parts = name.split(':');
        let group = parts.next()?;
        let artifact = parts.next()?;
        let version = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if ![group, artifact, version].iter().all(|p| is_path_segment(p)) {
            return None;
        }

        Some(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        })
    }
}

fn is_path_segment(part: &str) -> bool {
    !part.is_empty() && part != "." && part != ".." && !part.contains(['/', '\\'])
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
