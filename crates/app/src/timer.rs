//! One-shot timers backed by spawned tasks.

use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A single-slot one-shot timer.
///
/// Arming spawns a task that sleeps for the delay and then runs the
/// callback on its own stack; whoever needs serialization takes its own
/// lock inside the callback. Re-arming replaces the pending fire rather
/// than stacking a second one, and cancelling a timer that already fired
/// (or was never armed) is a silent no-op.
///
/// Cancellation is best-effort: a callback that has already started
/// running cannot be revoked, so callers guard their fire handlers with
/// their own state flags.
#[derive(Debug)]
pub struct OneShotTimer {
    runtime: Handle,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl OneShotTimer {
    /// Create a disarmed timer that spawns onto `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            task: Mutex::new(None),
        }
    }

    /// Arm the timer: after `delay`, run `on_fire`.
    ///
    /// Replaces any previously armed fire. Returns immediately; the
    /// callback runs on the spawned task once the delay elapses.
    pub fn arm<F>(&self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });
        if let Some(previous) = self.swap(Some(task)) {
            previous.abort();
        }
    }

    /// Cancel the pending fire, if any.
    pub fn cancel(&self) {
        if let Some(task) = self.swap(None) {
            task.abort();
        }
    }

    fn swap(&self, next: Option<JoinHandle<()>>) -> Option<JoinHandle<()>> {
        let mut slot = self
            .task
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        std::mem::replace(&mut *slot, next)
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
