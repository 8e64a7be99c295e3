use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClassPathError {
    /// No provider claimed the requested name.
    #[error("unknown classpath '{0}' requested.")]
    NotFound(String),
    /// A stored entry could not be projected into the requested representation.
    #[error("cannot convert '{}' to {target}: {reason}", path.display())]
    Conversion {
        path: PathBuf,
        target: &'static str,
        reason: String,
    },
}

impl ClassPathError {
    pub fn conversion(
        path: impl Into<PathBuf>,
        target: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ClassPathError::Conversion {
            path: path.into(),
            target,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClassPathError::NotFound(_))
    }
}

pub type ClassPathResult<T> = std::result::Result<T, ClassPathError>;
