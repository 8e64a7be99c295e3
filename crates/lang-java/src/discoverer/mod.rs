pub mod jdk;

pub use jdk::JdkInstallation;
