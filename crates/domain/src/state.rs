//! Pump actuator state machine — states, actions, and transition rules.
//!
//! The pump is a two-position actuator: it is either settled ([`Stopped`],
//! [`Running`]) or in a timed movement between the two ([`Starting`],
//! [`Stopping`]). A new action may only be initiated from the settled
//! state opposite its target; every other combination is rejected.
//!
//! [`Stopped`]: PumpState::Stopped
//! [`Running`]: PumpState::Running
//! [`Starting`]: PumpState::Starting
//! [`Stopping`]: PumpState::Stopping

use serde::{Deserialize, Serialize};

/// Discrete phase of the pump actuator. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpState {
    /// Motor off, settled in the default position.
    #[default]
    Stopped,
    /// Motor spinning up after a [`PumpAction::Start`].
    Starting,
    /// Motor at speed, settled in the active position.
    Running,
    /// Motor spinning down after a [`PumpAction::Stop`].
    Stopping,
}

impl PumpState {
    /// Whether `action` may be initiated from this state.
    ///
    /// Only the settled state opposite the action's target qualifies:
    /// `Start` from `Stopped`, `Stop` from `Running`. A pump that is
    /// already moving, or already at the requested position, rejects the
    /// action.
    #[must_use]
    pub const fn permits(self, action: PumpAction) -> bool {
        matches!(
            (self, action),
            (Self::Stopped, PumpAction::Start) | (Self::Running, PumpAction::Stop)
        )
    }

    /// Whether a movement is in flight.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Starting | Self::Stopping)
    }

    /// Whether the pump is settled in its active position.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// The action a movement completion finishes from this state, or
    /// `None` if the state is not a transition.
    #[must_use]
    pub const fn completed_action(self) -> Option<PumpAction> {
        match self {
            Self::Starting => Some(PumpAction::Start),
            Self::Stopping => Some(PumpAction::Stop),
            Self::Stopped | Self::Running => None,
        }
    }
}

impl std::fmt::Display for PumpState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Stopped => "stopped",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
        })
    }
}

/// A requested position change for the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpAction {
    /// Spin the motor up to the running position.
    Start,
    /// Spin the motor down to the stopped position.
    Stop,
}

impl PumpAction {
    /// The transition state entered when this action is initiated.
    #[must_use]
    pub const fn transition_state(self) -> PumpState {
        match self {
            Self::Start => PumpState::Starting,
            Self::Stop => PumpState::Stopping,
        }
    }

    /// The settled state reached when this action's movement completes.
    #[must_use]
    pub const fn settled_state(self) -> PumpState {
        match self {
            Self::Start => PumpState::Running,
            Self::Stop => PumpState::Stopped,
        }
    }
}

impl std::fmt::Display for PumpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Stop => "stop",
        })
    }
}

/// Who asked for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    /// Internal controller logic, e.g. the auto-stop path.
    System,
    /// A local interaction, e.g. a physical button on the device.
    Local,
    /// A remote client, tagged with its session id.
    Remote(u32),
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Local => f.write_str("local"),
            Self::Remote(session) => write!(f, "remote({session})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_stopped() {
        assert_eq!(PumpState::default(), PumpState::Stopped);
    }

    #[test]
    fn should_permit_start_only_from_stopped() {
        assert!(PumpState::Stopped.permits(PumpAction::Start));
        assert!(!PumpState::Starting.permits(PumpAction::Start));
        assert!(!PumpState::Running.permits(PumpAction::Start));
        assert!(!PumpState::Stopping.permits(PumpAction::Start));
    }

    #[test]
    fn should_permit_stop_only_from_running() {
        assert!(PumpState::Running.permits(PumpAction::Stop));
        assert!(!PumpState::Stopped.permits(PumpAction::Stop));
        assert!(!PumpState::Starting.permits(PumpAction::Stop));
        assert!(!PumpState::Stopping.permits(PumpAction::Stop));
    }

    #[test]
    fn should_report_transitioning_only_while_moving() {
        assert!(PumpState::Starting.is_transitioning());
        assert!(PumpState::Stopping.is_transitioning());
        assert!(!PumpState::Stopped.is_transitioning());
        assert!(!PumpState::Running.is_transitioning());
    }

    #[test]
    fn should_report_running_only_when_settled_active() {
        assert!(PumpState::Running.is_running());
        assert!(!PumpState::Starting.is_running());
        assert!(!PumpState::Stopped.is_running());
        assert!(!PumpState::Stopping.is_running());
    }

    #[test]
    fn should_resolve_completed_action_from_transition_states() {
        assert_eq!(
            PumpState::Starting.completed_action(),
            Some(PumpAction::Start)
        );
        assert_eq!(
            PumpState::Stopping.completed_action(),
            Some(PumpAction::Stop)
        );
        assert_eq!(PumpState::Stopped.completed_action(), None);
        assert_eq!(PumpState::Running.completed_action(), None);
    }

    #[test]
    fn should_relate_transition_and_settled_states_per_action() {
        for action in [PumpAction::Start, PumpAction::Stop] {
            assert_eq!(action.transition_state().completed_action(), Some(action));
            assert!(!action.settled_state().permits(action));
            assert!(action.transition_state().is_transitioning());
        }
    }

    #[test]
    fn should_display_lowercase_names() {
        assert_eq!(PumpState::Starting.to_string(), "starting");
        assert_eq!(PumpAction::Stop.to_string(), "stop");
        assert_eq!(Actor::System.to_string(), "system");
        assert_eq!(Actor::Remote(7).to_string(), "remote(7)");
    }

    #[test]
    fn should_serialize_actors_with_session_payload() {
        let json = serde_json::to_value(Actor::Remote(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "remote": 42 }));
        let json = serde_json::to_value(Actor::Local).unwrap();
        assert_eq!(json, serde_json::json!("local"));
    }

    #[test]
    fn should_round_trip_states_through_serde() {
        for state in [
            PumpState::Stopped,
            PumpState::Starting,
            PumpState::Running,
            PumpState::Stopping,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let back: PumpState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }
}
