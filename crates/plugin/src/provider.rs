//! Classpath provider contract.
//!
//! Providers know how a named classpath is assembled: from a hardcoded list,
//! from an installation layout, from a dependency cache. The registry only
//! asks them, in priority order, whether they recognise a name.

use indexmap::IndexSet;
use std::path::PathBuf;

/// Ordered, duplicate-free set of classpath entries produced by a provider.
pub type ClassPathFiles = IndexSet<PathBuf>;

/// Capability to resolve a classpath name to files.
///
/// Implementations are shared across threads and may be consulted
/// concurrently.
pub trait ClassPathProvider: Send + Sync {
    /// Resolve `name`.
    ///
    /// Returns `None` when this provider has no opinion about `name`, so the
    /// next provider is consulted. `Some` of an empty set means the name is
    /// known and maps to no files; resolution stops there.
    fn resolve(&self, name: &str) -> Option<ClassPathFiles>;

    /// Provider name (for logging/debugging)
    fn name(&self) -> &str;
}
