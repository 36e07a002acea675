//! Notification sink for actuator activity.

use pumpkit_domain::state::{Actor, PumpAction};

/// Receives actuator activity synchronously from the controller's
/// execution context.
///
/// Both methods are invoked *after* the corresponding state change has
/// been committed, so an implementation may read the controller's queries
/// without seeing a stale phase. Implementations must be quick and
/// non-blocking; any cross-task marshalling (channels, attribute
/// reflection) is the sink's own responsibility.
pub trait ActuatorObserver {
    /// An action passed the transition guard and its movement started.
    fn on_action_initiated(&self, action: PumpAction, actor: Actor);

    /// A movement finished and the actuator settled.
    fn on_action_completed(&self, action: PumpAction);
}

/// Observer that discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ActuatorObserver for NoopObserver {
    fn on_action_initiated(&self, _action: PumpAction, _actor: Actor) {}

    fn on_action_completed(&self, _action: PumpAction) {}
}

impl<T: ActuatorObserver> ActuatorObserver for std::sync::Arc<T> {
    fn on_action_initiated(&self, action: PumpAction, actor: Actor) {
        (**self).on_action_initiated(action, actor);
    }

    fn on_action_completed(&self, action: PumpAction) {
        (**self).on_action_completed(action);
    }
}
