pub mod cache;

pub use cache::GradleCacheClassPathProvider;
