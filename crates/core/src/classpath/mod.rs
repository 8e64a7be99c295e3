//! Classpath lookup: named classpaths resolved through ordered providers.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   ClassPathProvider[]    │   priority order, fixed at construction
//! │   (static, JDK, Gradle)  │
//! └────────────┬─────────────┘
//!              │ first Some(..) wins
//!              ▼
//! ┌──────────────────────────┐
//! │ DefaultClassPathRegistry │───▶ ClassPath (files / URIs / URLs)
//! └──────────────────────────┘
//! ```
//!
//! Concrete installation-derived providers live in their own crates:
//! - `classpath-java::JdkClassPathProvider` - JDK runtime image
//! - `classpath-gradle::GradleCacheClassPathProvider` - Gradle module cache

pub mod fixed;
pub mod registry;

pub use fixed::StaticClassPathProvider;
pub use registry::DefaultClassPathRegistry;
