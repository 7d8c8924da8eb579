//! campus-events: campus event listings, registration, organizer submissions and a
//! grounded AI assistant, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;
