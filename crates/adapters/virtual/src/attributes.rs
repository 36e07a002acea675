//! In-memory attribute table — records control-mode writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use pumpkit_app::ports::ControlModeSink;
use pumpkit_domain::error::AttributeWriteError;
use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::ControlMode;

/// In-memory stand-in for the node's attribute store.
///
/// Endpoints must be provisioned up front; a write to anything else fails
/// with [`AttributeWriteError::UnknownEndpoint`], the way a protocol stack
/// rejects writes to endpoints it does not serve. Cheap to clone; clones
/// share the same table.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    cells: Arc<Mutex<HashMap<EndpointId, Option<ControlMode>>>>,
}

impl AttributeTable {
    /// Create a table serving the given endpoints.
    #[must_use]
    pub fn with_endpoints(endpoints: impl IntoIterator<Item = EndpointId>) -> Self {
        let cells = endpoints.into_iter().map(|endpoint| (endpoint, None)).collect();
        Self {
            cells: Arc::new(Mutex::new(cells)),
        }
    }

    /// The last control mode written to `endpoint`, if any.
    #[must_use]
    pub fn control_mode(&self, endpoint: EndpointId) -> Option<ControlMode> {
        self.lock().get(&endpoint).copied().flatten()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<EndpointId, Option<ControlMode>>> {
        self.cells
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ControlModeSink for AttributeTable {
    async fn write_control_mode(
        &self,
        endpoint: EndpointId,
        mode: ControlMode,
    ) -> Result<(), AttributeWriteError> {
        let mut cells = self.lock();
        match cells.get_mut(&endpoint) {
            Some(cell) => {
                *cell = Some(mode);
                Ok(())
            }
            None => Err(AttributeWriteError::UnknownEndpoint(endpoint)),
        }
    }
}
