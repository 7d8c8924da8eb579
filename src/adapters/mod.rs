//! Infrastructure adapters. Implement outbound ports.
//!
//! SQLite store, AI backends, organizer directory, clock, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod auth;
pub mod clock;
pub mod persistence;
pub mod ui;
