//! Gradle module cache classpath support.

pub mod discoverer;
pub mod model;

pub use discoverer::GradleCacheClassPathProvider;
pub use model::ModuleCoordinate;
