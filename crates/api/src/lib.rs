pub mod classpath;
pub mod error;
pub mod registry;

// Re-export commonly used types
pub use classpath::ClassPath;
pub use error::{ClassPathError, ClassPathResult};
pub use registry::ClassPathRegistry;
