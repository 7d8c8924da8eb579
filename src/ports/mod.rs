//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod clock;
pub mod inbound;
pub mod outbound;

pub use clock::Clock;
pub use inbound::InputPort;
pub use outbound::{AiPort, AuthPort, EventReaderPort, RegistrationPort, SubmissionPort};
