//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use pumpkit_domain::event::Event;
use pumpkit_domain::id::EndpointId;
use pumpkit_domain::state::{Actor, PumpAction};

use crate::ports::ActuatorObserver;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing is synchronous and succeeds even when there are no active
/// subscribers (the event is simply dropped). Cheap to clone; clones feed
/// the same subscribers.
#[derive(Debug, Clone)]
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after* the
    /// subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: Event) {
        // broadcast::send fails only when there are zero receivers,
        // which is fine; the event is simply dropped.
        let _ = self.sender.send(event);
    }
}

/// [`ActuatorObserver`] that reflects actuator activity onto the bus.
///
/// This is how protocol glue gets to see the actuator: it subscribes to
/// the bus and receives [`Event`]s tagged with the pump's endpoint, while
/// the controller stays unaware of who is listening.
#[derive(Debug, Clone)]
pub struct EventBusObserver {
    bus: InProcessEventBus,
    endpoint: EndpointId,
}

impl EventBusObserver {
    /// Create an observer publishing on behalf of `endpoint`.
    #[must_use]
    pub fn new(bus: InProcessEventBus, endpoint: EndpointId) -> Self {
        Self { bus, endpoint }
    }
}

impl ActuatorObserver for EventBusObserver {
    fn on_action_initiated(&self, action: PumpAction, actor: Actor) {
        self.bus
            .publish(Event::action_initiated(Some(self.endpoint), action, actor));
    }

    fn on_action_completed(&self, action: PumpAction) {
        self.bus
            .publish(Event::action_completed(Some(self.endpoint), action));
    }
}
