//! Cross-cutting pieces: configuration and the seed catalog.

pub mod config;
pub mod seed;

pub use config::AppConfig;
pub use seed::SeedCatalog;
