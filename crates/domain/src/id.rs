//! Typed identifier newtypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Protocol endpoint carrying the pump.
///
/// Endpoints are small numbers assigned by the node's data model, not
/// generated identifiers: the pump's attributes and commands all live on
/// one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(u16);

impl EndpointId {
    /// Wrap a raw endpoint number.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Access the raw endpoint number.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for an [`Event`](crate::event::Event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(uuid::Uuid);

impl Default for EventId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl EventId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_event_ids() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn should_round_trip_event_ids_through_strings() {
        let id = EventId::new();
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_reject_malformed_event_ids() {
        assert!("not-a-uuid".parse::<EventId>().is_err());
    }

    #[test]
    fn should_display_endpoints_as_plain_numbers() {
        assert_eq!(EndpointId::new(1).to_string(), "1");
        assert_eq!(EndpointId::new(42).as_u16(), 42);
    }

    #[test]
    fn should_serialize_endpoints_transparently() {
        let json = serde_json::to_value(EndpointId::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }
}
