//! Organizer authentication adapters. Implement AuthPort.

pub mod static_directory;

pub use static_directory::StaticOrganizerDirectory;
