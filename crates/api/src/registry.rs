use crate::ClassPath;
use crate::error::ClassPathResult;

/// Resolves a symbolic classpath name to the set of files it stands for.
///
/// Callers depend on this trait rather than on a concrete registry so the
/// embedding system decides how providers are assembled.
pub trait ClassPathRegistry: Send + Sync {
    /// Look up `name` and return a fresh [`ClassPath`].
    ///
    /// Fails with [`ClassPathError::NotFound`](crate::ClassPathError::NotFound)
    /// when nothing claims the name.
    fn lookup(&self, name: &str) -> ClassPathResult<ClassPath>;
}
