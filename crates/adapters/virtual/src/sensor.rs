//! Virtual remote sensor — reports a swappable simulated sensor kind.

use std::sync::{Arc, Mutex, MutexGuard};

use pumpkit_app::ports::RemoteSensorProvider;
use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::RemoteSensorType;

/// A simulated remote sensor whose kind can be swapped at runtime, as if
/// sensor hardware were attached or removed.
///
/// Cheap to clone; clones share the same simulated hardware. Reports the
/// same kind for every endpoint.
#[derive(Debug, Clone, Default)]
pub struct VirtualSensor {
    kind: Arc<Mutex<RemoteSensorType>>,
}

impl VirtualSensor {
    /// Create a sensor reporting `kind`.
    #[must_use]
    pub fn new(kind: RemoteSensorType) -> Self {
        Self {
            kind: Arc::new(Mutex::new(kind)),
        }
    }

    /// Swap the simulated sensor kind.
    pub fn set_kind(&self, kind: RemoteSensorType) {
        *self.lock() = kind;
    }

    /// The currently simulated kind.
    #[must_use]
    pub fn kind(&self) -> RemoteSensorType {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, RemoteSensorType> {
        self.kind
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RemoteSensorProvider for VirtualSensor {
    async fn remote_sensor_type(&self, _endpoint: EndpointId) -> RemoteSensorType {
        self.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_no_sensor() {
        assert_eq!(VirtualSensor::default().kind(), RemoteSensorType::None);
    }

    #[tokio::test]
    async fn should_report_the_simulated_kind_for_any_endpoint() {
        let sensor = VirtualSensor::new(RemoteSensorType::Pressure);
        assert_eq!(
            sensor.remote_sensor_type(EndpointId::new(1)).await,
            RemoteSensorType::Pressure
        );
        assert_eq!(
            sensor.remote_sensor_type(EndpointId::new(99)).await,
            RemoteSensorType::Pressure
        );
    }

    #[tokio::test]
    async fn should_share_kind_changes_between_clones() {
        let sensor = VirtualSensor::default();
        let clone = sensor.clone();

        clone.set_kind(RemoteSensorType::Flow);
        assert_eq!(
            sensor.remote_sensor_type(EndpointId::new(1)).await,
            RemoteSensorType::Flow
        );
    }
}
