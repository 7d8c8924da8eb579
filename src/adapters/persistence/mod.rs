//! Persistence adapters. The document store behind the event and registration ports.

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
