//! Port definitions — traits the protocol and hardware glue implements.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the controller
//! layer and the adapter layer can depend on them without creating
//! circular dependencies.

pub mod attributes;
pub mod observer;
pub mod sensor;

pub use attributes::ControlModeSink;
pub use observer::{ActuatorObserver, NoopObserver};
pub use sensor::{NoRemoteSensor, RemoteSensorProvider};
