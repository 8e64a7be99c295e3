pub mod provider;

pub use provider::{ClassPathFiles, ClassPathProvider};
