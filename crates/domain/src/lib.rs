//! # pumpkit-domain
//!
//! Pure domain model for the pumpkit pump controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **pump state machine** (states, actions, transition rules)
//! - Define **operating modes** (operation mode, control mode, remote
//!   sensor types) and the control-mode derivation
//! - Define **ratings** (static capability limits of the pump)
//! - Define **events** (actuator activity records)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod id;
pub mod mode;
pub mod ratings;
pub mod state;
pub mod time;
