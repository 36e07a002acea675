//! Pump operating modes — operation mode, control mode, remote sensor
//! types, and the control-mode derivation.
//!
//! The derivation is a pure, total function: every combination of
//! operation mode and sensor type maps to exactly one control mode. In
//! [`OperationMode::Normal`] the control mode follows the attached remote
//! sensor; the overriding modes (`Min`, `Max`, `Local`) always resolve to
//! constant-speed operation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Externally written operation mode of the pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Regulate according to the control mode derived from the sensor
    /// context.
    #[default]
    Normal,
    /// Run at the configured minimum speed.
    Min,
    /// Run at the configured maximum speed.
    Max,
    /// Follow local settings on the pump itself.
    Local,
}

impl OperationMode {
    /// Decode the cluster encoding (`0..=3`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOperationMode`] for values outside
    /// the encoding, so an out-of-range attribute write can be rejected
    /// before it is applied.
    pub const fn from_raw(raw: u8) -> Result<Self, ValidationError> {
        match raw {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Min),
            2 => Ok(Self::Max),
            3 => Ok(Self::Local),
            _ => Err(ValidationError::InvalidOperationMode { value: raw }),
        }
    }

    /// The cluster encoding of this mode.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Min => 1,
            Self::Max => 2,
            Self::Local => 3,
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Min => "min",
            Self::Max => "max",
            Self::Local => "local",
        })
    }
}

/// Regulation strategy derived from the operation mode and sensor context.
///
/// This is the value reflected into the pump's effective-control-mode
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Fixed-speed operation. This is the attribute's power-on value.
    #[default]
    ConstantSpeed,
    /// Regulate towards a pressure setpoint.
    ConstantPressure,
    /// Regulate towards a flow-dependent pressure setpoint.
    ProportionalPressure,
    /// Regulate towards a flow setpoint.
    ConstantFlow,
    /// Regulate towards a temperature setpoint.
    ConstantTemperature,
    /// The pump picks its own regulation strategy.
    Automatic,
}

impl ControlMode {
    /// The cluster encoding of this mode. The gaps in the numbering (4, 6)
    /// belong to modes this pump does not implement.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::ConstantSpeed => 0,
            Self::ConstantPressure => 1,
            Self::ProportionalPressure => 2,
            Self::ConstantFlow => 3,
            Self::ConstantTemperature => 5,
            Self::Automatic => 7,
        }
    }
}

impl std::fmt::Display for ControlMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ConstantSpeed => "constant_speed",
            Self::ConstantPressure => "constant_pressure",
            Self::ProportionalPressure => "proportional_pressure",
            Self::ConstantFlow => "constant_flow",
            Self::ConstantTemperature => "constant_temperature",
            Self::Automatic => "automatic",
        })
    }
}

/// The kind of remote sensor driving the pump, as reported by the
/// hardware integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteSensorType {
    /// No remote sensor is attached.
    #[default]
    None,
    /// A remote temperature sensor.
    Temperature,
    /// A remote pressure sensor.
    Pressure,
    /// A remote flow sensor.
    Flow,
}

impl RemoteSensorType {
    /// The cluster encoding of this sensor type.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Temperature => 1,
            Self::Pressure => 2,
            Self::Flow => 3,
        }
    }
}

impl std::fmt::Display for RemoteSensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::Flow => "flow",
        })
    }
}

/// Control mode applied in [`OperationMode::Normal`] when no remote sensor
/// is attached.
///
/// The pump cluster leaves this mapping open: letting the pump regulate
/// itself ([`ControlMode::Automatic`]) and falling back to fixed-speed
/// operation are both defensible readings, so the choice is a policy input
/// rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorlessFallback {
    /// Let the pump regulate itself.
    #[default]
    Automatic,
    /// Fall back to fixed-speed operation.
    ConstantSpeed,
}

impl SensorlessFallback {
    /// The control mode this policy resolves to.
    #[must_use]
    pub const fn control_mode(self) -> ControlMode {
        match self {
            Self::Automatic => ControlMode::Automatic,
            Self::ConstantSpeed => ControlMode::ConstantSpeed,
        }
    }
}

/// Derive the effective control mode from the operation mode and the
/// attached remote sensor.
///
/// Total over both inputs: `Min`, `Max`, and `Local` force constant-speed
/// operation regardless of the sensor, while `Normal` follows the sensor,
/// with `fallback` deciding the sensorless case.
#[must_use]
pub const fn derive_control_mode(
    mode: OperationMode,
    sensor: RemoteSensorType,
    fallback: SensorlessFallback,
) -> ControlMode {
    match mode {
        OperationMode::Normal => match sensor {
            RemoteSensorType::None => fallback.control_mode(),
            RemoteSensorType::Temperature => ControlMode::ConstantTemperature,
            RemoteSensorType::Pressure => ControlMode::ConstantPressure,
            RemoteSensorType::Flow => ControlMode::ConstantFlow,
        },
        OperationMode::Min | OperationMode::Max | OperationMode::Local => {
            ControlMode::ConstantSpeed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_operation_modes_from_raw() {
        assert_eq!(OperationMode::from_raw(0), Ok(OperationMode::Normal));
        assert_eq!(OperationMode::from_raw(1), Ok(OperationMode::Min));
        assert_eq!(OperationMode::from_raw(2), Ok(OperationMode::Max));
        assert_eq!(OperationMode::from_raw(3), Ok(OperationMode::Local));
    }

    #[test]
    fn should_reject_out_of_range_operation_modes() {
        for raw in [4, 5, 17, u8::MAX] {
            assert_eq!(
                OperationMode::from_raw(raw),
                Err(ValidationError::InvalidOperationMode { value: raw })
            );
        }
    }

    #[test]
    fn should_round_trip_operation_modes_through_raw() {
        for mode in [
            OperationMode::Normal,
            OperationMode::Min,
            OperationMode::Max,
            OperationMode::Local,
        ] {
            assert_eq!(OperationMode::from_raw(mode.as_raw()), Ok(mode));
        }
    }

    #[test]
    fn should_encode_control_modes_with_reserved_gaps() {
        assert_eq!(ControlMode::ConstantSpeed.as_raw(), 0);
        assert_eq!(ControlMode::ConstantPressure.as_raw(), 1);
        assert_eq!(ControlMode::ProportionalPressure.as_raw(), 2);
        assert_eq!(ControlMode::ConstantFlow.as_raw(), 3);
        assert_eq!(ControlMode::ConstantTemperature.as_raw(), 5);
        assert_eq!(ControlMode::Automatic.as_raw(), 7);
    }

    #[test]
    fn should_follow_sensor_in_normal_operation() {
        let fallback = SensorlessFallback::default();
        assert_eq!(
            derive_control_mode(OperationMode::Normal, RemoteSensorType::Temperature, fallback),
            ControlMode::ConstantTemperature
        );
        assert_eq!(
            derive_control_mode(OperationMode::Normal, RemoteSensorType::Pressure, fallback),
            ControlMode::ConstantPressure
        );
        assert_eq!(
            derive_control_mode(OperationMode::Normal, RemoteSensorType::Flow, fallback),
            ControlMode::ConstantFlow
        );
    }

    #[test]
    fn should_apply_fallback_when_normal_and_sensorless() {
        assert_eq!(
            derive_control_mode(
                OperationMode::Normal,
                RemoteSensorType::None,
                SensorlessFallback::Automatic
            ),
            ControlMode::Automatic
        );
        assert_eq!(
            derive_control_mode(
                OperationMode::Normal,
                RemoteSensorType::None,
                SensorlessFallback::ConstantSpeed
            ),
            ControlMode::ConstantSpeed
        );
    }

    #[test]
    fn should_force_constant_speed_in_overriding_modes() {
        for mode in [OperationMode::Min, OperationMode::Max, OperationMode::Local] {
            for sensor in [
                RemoteSensorType::None,
                RemoteSensorType::Temperature,
                RemoteSensorType::Pressure,
                RemoteSensorType::Flow,
            ] {
                assert_eq!(
                    derive_control_mode(mode, sensor, SensorlessFallback::default()),
                    ControlMode::ConstantSpeed
                );
            }
        }
    }

    #[test]
    fn should_default_control_mode_to_power_on_value() {
        assert_eq!(ControlMode::default(), ControlMode::ConstantSpeed);
    }

    #[test]
    fn should_serialize_modes_as_snake_case() {
        let json = serde_json::to_value(ControlMode::ProportionalPressure).unwrap();
        assert_eq!(json, serde_json::json!("proportional_pressure"));
        let json = serde_json::to_value(RemoteSensorType::Flow).unwrap();
        assert_eq!(json, serde_json::json!("flow"));
    }
}
