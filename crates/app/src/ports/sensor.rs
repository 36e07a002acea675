//! Remote sensor query.

use std::future::Future;

use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::RemoteSensorType;

/// Reports the kind of remote sensor currently driving the pump on an
/// endpoint.
///
/// Implementations typically ask the hardware integration; the query is a
/// pure read with no side effects, and [`RemoteSensorType::None`] is the
/// answer when nothing is attached.
pub trait RemoteSensorProvider: Send + Sync {
    /// The sensor currently attached to `endpoint`.
    fn remote_sensor_type(
        &self,
        endpoint: EndpointId,
    ) -> impl Future<Output = RemoteSensorType> + Send;
}

/// Provider used when no sensor hardware is integrated: every endpoint
/// reports [`RemoteSensorType::None`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteSensor;

impl RemoteSensorProvider for NoRemoteSensor {
    async fn remote_sensor_type(&self, _endpoint: EndpointId) -> RemoteSensorType {
        RemoteSensorType::None
    }
}
