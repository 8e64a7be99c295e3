//! JDK classpath support.

pub mod discoverer;
pub mod provider;

pub use discoverer::JdkInstallation;
pub use provider::{JDK_CLASSPATH, JdkClassPathProvider};
