//! JSON context for the assistant. Uses `serde_json` for field-preserving output.
//!
//! Converts domain events into the payload placed in front of the LLM.

use crate::domain::Event;

/// Serialize events as a pretty-printed JSON array.
///
/// Every `Event` field is emitted under its own name; order is preserved.
/// An empty slice yields `[]`, which is still a well-formed payload.
pub fn events_to_json_context(events: &[Event]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(events)
}
