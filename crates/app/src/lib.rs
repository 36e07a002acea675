//! # pumpkit-app
//!
//! Application layer — the pump actuator controller, the mode selector,
//! and the **port definitions** (traits) the outside world implements.
//!
//! ## Responsibilities
//! - Define **port traits** for the protocol and hardware glue
//!   (driven/outbound ports):
//!   - `ActuatorObserver` — notification sink for actuator activity
//!   - `RemoteSensorProvider` — query the attached remote sensor
//!   - `ControlModeSink` — reflect the derived control mode outward
//! - Run the **pump actuator state machine** (`PumpController`) with its
//!   movement and auto-stop timers
//! - Derive the **effective control mode** (`ModeSelector`)
//! - Provide **in-process infrastructure** (event bus, one-shot timers)
//!   that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `pumpkit-domain` only (plus `tokio` for timers and
//! channels). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod controller;
pub mod event_bus;
pub mod mode_selector;
pub mod ports;
pub mod timer;
