//! Pump actuator controller — validates and executes start/stop requests,
//! drives the movement timer, and arms the optional auto-stop timer.
//!
//! ## Execution model
//!
//! All mutations (requests and timer fires) run inside one mutex, so
//! [`PumpController::request_action`] and the two fire handlers never
//! interleave. Timer fires are delivered on spawned tasks that take the
//! same lock; a fire that lost a race against a manual action finds the
//! armed flag cleared (or the state already settled) and backs off.
//! Observer notifications are emitted after the state commit, outside the
//! lock, so a sink may call back into the controller's queries.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;

use pumpkit_domain::error::StartupError;
use pumpkit_domain::ratings::PumpRatings;
use pumpkit_domain::state::{Actor, PumpAction, PumpState};

use crate::ports::ActuatorObserver;
use crate::timer::OneShotTimer;

/// Movement duration of the reference actuator.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Static configuration for a [`PumpController`].
#[derive(Debug, Clone, Copy)]
pub struct PumpConfig {
    /// How long a motor spin-up or spin-down takes.
    pub transition_duration: Duration,
    /// Whether reaching [`PumpState::Running`] arms the auto-stop timer.
    pub auto_stop_enabled: bool,
    /// How long the pump runs before auto-stop fires.
    pub auto_stop_duration: Duration,
    /// Capability limits reported for this pump.
    pub ratings: PumpRatings,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            transition_duration: DEFAULT_TRANSITION_DURATION,
            auto_stop_enabled: false,
            auto_stop_duration: Duration::ZERO,
            ratings: PumpRatings::default(),
        }
    }
}

/// Mutable controller state. Lives behind the mutex in [`Inner`].
#[derive(Debug)]
struct Core {
    state: PumpState,
    auto_stop_armed: bool,
    auto_stop_enabled: bool,
    auto_stop_duration: Duration,
}

struct Inner<O> {
    core: Mutex<Core>,
    observer: O,
    transition_duration: Duration,
    ratings: PumpRatings,
    movement_timer: OneShotTimer,
    auto_stop_timer: OneShotTimer,
}

impl<O> Inner<O> {
    fn lock_core(&self) -> MutexGuard<'_, Core> {
        self.core
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Cheaply cloneable handle to one pump actuator.
///
/// Clones share the same state and timers; the observer is injected once
/// at construction and notified of every initiation and completion.
pub struct PumpController<O> {
    inner: Arc<Inner<O>>,
}

impl<O> Clone for PumpController<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O> PumpController<O> {
    /// Current actuator phase.
    #[must_use]
    pub fn state(&self) -> PumpState {
        self.inner.lock_core().state
    }

    /// Whether a movement is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state().is_transitioning()
    }

    /// Whether the pump is settled in its active position.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Whether an auto-stop is pending.
    #[must_use]
    pub fn is_auto_stop_armed(&self) -> bool {
        self.inner.lock_core().auto_stop_armed
    }

    /// Capability limits of this pump.
    #[must_use]
    pub fn ratings(&self) -> PumpRatings {
        self.inner.ratings
    }

    /// Enable or disable auto-stop.
    ///
    /// Takes effect the next time the pump reaches
    /// [`PumpState::Running`]; an already armed auto-stop is neither
    /// cancelled nor rescheduled.
    pub fn enable_auto_stop(&self, enabled: bool) {
        self.inner.lock_core().auto_stop_enabled = enabled;
    }

    /// Set how long the pump runs before auto-stop fires.
    ///
    /// Read at the moment the timer is armed; an already armed auto-stop
    /// keeps its original deadline.
    pub fn set_auto_stop_duration(&self, duration: Duration) {
        self.inner.lock_core().auto_stop_duration = duration;
    }
}

impl<O> PumpController<O>
where
    O: ActuatorObserver + Send + Sync + 'static,
{
    /// Create a controller in the [`PumpState::Stopped`] state.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::NoRuntime`] when called outside a tokio
    /// runtime. The controller is useless without its movement timer, so
    /// startup halts instead of continuing with an actuator that could
    /// never settle.
    pub fn new(config: PumpConfig, observer: O) -> Result<Self, StartupError> {
        let runtime = Handle::try_current().map_err(|_| StartupError::NoRuntime)?;
        Ok(Self {
            inner: Arc::new(Inner {
                core: Mutex::new(Core {
                    state: PumpState::Stopped,
                    auto_stop_armed: false,
                    auto_stop_enabled: config.auto_stop_enabled,
                    auto_stop_duration: config.auto_stop_duration,
                }),
                observer,
                transition_duration: config.transition_duration,
                ratings: config.ratings,
                movement_timer: OneShotTimer::new(runtime.clone()),
                auto_stop_timer: OneShotTimer::new(runtime),
            }),
        })
    }

    /// Request a position change on behalf of `actor`.
    ///
    /// Succeeds only from the settled state opposite the action's target;
    /// a pump that is mid-movement or already at the target leaves the
    /// request rejected and the controller untouched. Rejection is silent
    /// and recoverable — callers retry once the current movement settles.
    ///
    /// A manual [`PumpAction::Stop`] pre-empts a pending auto-stop.
    #[must_use = "the request may be rejected"]
    pub fn request_action(&self, actor: Actor, action: PumpAction) -> bool {
        let mut core = self.inner.lock_core();
        if !core.state.permits(action) {
            let state = core.state;
            drop(core);
            tracing::debug!(%state, %action, %actor, "action rejected");
            return false;
        }

        if core.auto_stop_armed && action == PumpAction::Stop {
            // The stop supersedes the pending auto-stop.
            core.auto_stop_armed = false;
            self.inner.auto_stop_timer.cancel();
        }

        let weak = Arc::downgrade(&self.inner);
        self.inner
            .movement_timer
            .arm(self.inner.transition_duration, move || {
                if let Some(inner) = weak.upgrade() {
                    Self { inner }.on_movement_settled();
                }
            });
        core.state = action.transition_state();
        drop(core);

        tracing::info!(%action, %actor, state = %action.transition_state(), "movement started");
        self.inner.observer.on_action_initiated(action, actor);
        true
    }

    /// Movement timer expiry: settle the in-flight transition.
    fn on_movement_settled(&self) {
        let mut core = self.inner.lock_core();
        let Some(action) = core.state.completed_action() else {
            // Stale fire: the movement it timed was already superseded.
            return;
        };
        core.state = action.settled_state();

        let mut auto_stop_in = None;
        if action == PumpAction::Start && core.auto_stop_enabled {
            core.auto_stop_armed = true;
            let delay = core.auto_stop_duration;
            let weak = Arc::downgrade(&self.inner);
            self.inner.auto_stop_timer.arm(delay, move || {
                if let Some(inner) = weak.upgrade() {
                    Self { inner }.on_auto_stop_due();
                }
            });
            auto_stop_in = Some(delay);
        }
        drop(core);

        tracing::info!(%action, state = %action.settled_state(), "movement settled");
        self.inner.observer.on_action_completed(action);
        if let Some(delay) = auto_stop_in {
            tracing::info!(?delay, "auto-stop armed");
        }
    }

    /// Auto-stop timer expiry: stop the pump unless a manual action
    /// already took over.
    fn on_auto_stop_due(&self) {
        {
            let mut core = self.inner.lock_core();
            if !core.auto_stop_armed {
                // A manual stop won the race against this fire.
                return;
            }
            core.auto_stop_armed = false;
        }
        tracing::info!("auto-stop elapsed");
        if !self.request_action(Actor::System, PumpAction::Stop) {
            tracing::debug!("auto-stop superseded by a concurrent action");
        }
    }
}
