//! Mode selector — derives the pump's effective control mode from the
//! operation mode and the attached remote sensor, and reflects it into
//! the attribute store.
//!
//! Recomputation happens on [`init`](ModeSelector::init), on every
//! operation-mode write, and on [`refresh`](ModeSelector::refresh) when
//! the sensor context may have changed. The selector holds no timers and
//! never touches the actuator.

use std::sync::{Mutex, MutexGuard};

use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::{
    ControlMode, OperationMode, RemoteSensorType, SensorlessFallback, derive_control_mode,
};

use crate::ports::{ControlModeSink, RemoteSensorProvider};

/// Derives and publishes the effective control mode of one endpoint.
pub struct ModeSelector<S, W> {
    endpoint: EndpointId,
    fallback: SensorlessFallback,
    sensor: S,
    sink: W,
    operation_mode: Mutex<OperationMode>,
    control_mode: Mutex<ControlMode>,
}

impl<S, W> ModeSelector<S, W>
where
    S: RemoteSensorProvider,
    W: ControlModeSink,
{
    /// Create a selector for `endpoint`.
    ///
    /// The control mode starts at the attribute's power-on value
    /// ([`ControlMode::ConstantSpeed`]) until the first recomputation.
    pub fn new(endpoint: EndpointId, fallback: SensorlessFallback, sensor: S, sink: W) -> Self {
        Self {
            endpoint,
            fallback,
            sensor,
            sink,
            operation_mode: Mutex::new(OperationMode::default()),
            control_mode: Mutex::new(ControlMode::default()),
        }
    }

    /// Announce the selector and perform the first recomputation.
    pub async fn init(&self) {
        tracing::info!(endpoint = %self.endpoint, "mode selector initialised");
        self.recompute().await;
    }

    /// Apply an externally written operation mode and recompute.
    pub async fn set_operation_mode(&self, mode: OperationMode) {
        *lock(&self.operation_mode) = mode;
        tracing::debug!(endpoint = %self.endpoint, %mode, "operation mode changed");
        self.recompute().await;
    }

    /// Recompute without changing the stored operation mode.
    ///
    /// For events that may have changed the sensor context, e.g. a remote
    /// sensor being attached or removed.
    pub async fn refresh(&self) {
        self.recompute().await;
    }

    /// Last operation mode written by the attribute layer.
    #[must_use]
    pub fn operation_mode(&self) -> OperationMode {
        *lock(&self.operation_mode)
    }

    /// Last derived control mode.
    #[must_use]
    pub fn control_mode(&self) -> ControlMode {
        *lock(&self.control_mode)
    }

    async fn recompute(&self) {
        let mode = self.operation_mode();
        let sensor = if mode == OperationMode::Normal {
            self.sensor.remote_sensor_type(self.endpoint).await
        } else {
            // The overriding modes ignore the sensor; skip the query.
            RemoteSensorType::None
        };

        let derived = derive_control_mode(mode, sensor, self.fallback);
        *lock(&self.control_mode) = derived;

        // A failed write is reported but not retried here; the in-memory
        // value stands and the next recomputation writes again.
        match self.sink.write_control_mode(self.endpoint, derived).await {
            Ok(()) => {
                tracing::debug!(
                    endpoint = %self.endpoint,
                    %mode,
                    %sensor,
                    control_mode = %derived,
                    "control mode updated"
                );
            }
            Err(error) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    control_mode = %derived,
                    %error,
                    "control mode write failed"
                );
            }
        }
    }
}

fn lock<T>(cell: &Mutex<T>) -> MutexGuard<'_, T> {
    cell.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
