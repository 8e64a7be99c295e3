pub mod classpath;
pub mod config;
pub mod error;
pub mod logging;

pub use classpath::{DefaultClassPathRegistry, StaticClassPathProvider};
pub use config::RegistryConfig;
pub use error::{CoreError, Result};
