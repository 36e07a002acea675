//! # pumpkit-adapter-virtual
//!
//! Virtual/demo adapter that stands in for the protocol stack and sensor
//! hardware, for testing and demonstration purposes.
//!
//! ## Provided pieces
//!
//! | Piece | Port | Behaviour |
//! |-------|------|-----------|
//! | [`VirtualSensor`] | `RemoteSensorProvider` | Reports a swappable simulated sensor kind |
//! | [`AttributeTable`] | `ControlModeSink` | Records control-mode writes per provisioned endpoint |
//!
//! ## Dependency rule
//!
//! Depends on `pumpkit-app` (port traits) and `pumpkit-domain` only.

mod attributes;
mod sensor;

pub use attributes::AttributeTable;
pub use sensor::VirtualSensor;
