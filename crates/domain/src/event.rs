//! Events — immutable records of actuator activity.
//!
//! Produced by the controller's observer path when a movement is initiated
//! or completes, and fanned out on the in-process event bus.

use serde::{Deserialize, Serialize};

use crate::id::{EndpointId, EventId};
use crate::state::{Actor, PumpAction};
use crate::time::{Timestamp, now};

/// Kind of actuator activity an [`Event`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An action passed the transition guard and its movement started.
    ActionInitiated,
    /// A movement finished and the actuator settled.
    ActionCompleted,
}

/// An immutable record of something the actuator did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of this record.
    pub id: EventId,
    /// What happened.
    pub event_type: EventType,
    /// Endpoint whose actuator produced the event, when known.
    pub endpoint: Option<EndpointId>,
    /// Structured payload (action, actor, …).
    pub data: serde_json::Value,
    /// When it happened.
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        event_type: EventType,
        endpoint: Option<EndpointId>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            endpoint,
            data,
            timestamp: now(),
        }
    }

    /// Record an initiated action.
    #[must_use]
    pub fn action_initiated(endpoint: Option<EndpointId>, action: PumpAction, actor: Actor) -> Self {
        Self::new(
            EventType::ActionInitiated,
            endpoint,
            serde_json::json!({ "action": action, "actor": actor }),
        )
    }

    /// Record a completed action.
    #[must_use]
    pub fn action_completed(endpoint: Option<EndpointId>, action: PumpAction) -> Self {
        Self::new(
            EventType::ActionCompleted,
            endpoint,
            serde_json::json!({ "action": action }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_new_events_with_unique_ids() {
        let endpoint = Some(EndpointId::new(1));
        let a = Event::action_completed(endpoint, PumpAction::Stop);
        let b = Event::action_completed(endpoint, PumpAction::Stop);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_record_action_and_actor_on_initiation() {
        let event =
            Event::action_initiated(Some(EndpointId::new(2)), PumpAction::Start, Actor::Remote(9));
        assert_eq!(event.event_type, EventType::ActionInitiated);
        assert_eq!(event.endpoint, Some(EndpointId::new(2)));
        assert_eq!(
            event.data,
            serde_json::json!({ "action": "start", "actor": { "remote": 9 } })
        );
    }

    #[test]
    fn should_record_action_on_completion() {
        let event = Event::action_completed(None, PumpAction::Stop);
        assert_eq!(event.event_type, EventType::ActionCompleted);
        assert_eq!(event.endpoint, None);
        assert_eq!(event.data, serde_json::json!({ "action": "stop" }));
    }

    #[test]
    fn should_round_trip_events_through_serde() {
        let event =
            Event::action_initiated(Some(EndpointId::new(3)), PumpAction::Stop, Actor::Local);
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.event_type, event.event_type);
        assert_eq!(back.endpoint, event.endpoint);
        assert_eq!(back.data, event.data);
    }
}
