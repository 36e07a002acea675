//! Outward reflection of derived attribute values.

use std::future::Future;

use pumpkit_domain::error::AttributeWriteError;
use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::ControlMode;

/// Writes the derived control mode into the externally visible attribute
/// store of an endpoint.
///
/// The selector treats a failed write as reportable but not fatal: the
/// in-memory value stands and the next recomputation writes again.
pub trait ControlModeSink: Send + Sync {
    /// Reflect `mode` into the endpoint's effective-control-mode
    /// attribute.
    fn write_control_mode(
        &self,
        endpoint: EndpointId,
        mode: ControlMode,
    ) -> impl Future<Output = Result<(), AttributeWriteError>> + Send;
}
