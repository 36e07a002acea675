//! Pump ratings — static capability limits reported by the device.
//!
//! Values use the pump cluster's scaled-integer units: pressures in
//! 0.1 kPa, speeds in RPM, flows in 0.1 m³/h, temperatures in 0.01 °C.
//! The extreme value of each numeric type (`i16::MIN`, `u16::MAX`) is the
//! cluster's null sentinel and therefore never a valid rating.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Coldest representable setpoint, in 0.01 °C (absolute zero).
const MIN_TEMPERATURE: i16 = -27315;

/// Static capability limits of a pump.
///
/// These are read-only properties of the device: they describe what the
/// pump *can* do, not what it is currently doing. [`PumpRatings::default`]
/// carries the reference pump's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpRatings {
    /// Maximum pressure the pump can achieve, in 0.1 kPa.
    pub max_pressure: i16,
    /// Maximum motor speed, in RPM.
    pub max_speed: u16,
    /// Maximum flow, in 0.1 m³/h.
    pub max_flow: u16,
    /// Lowest setpoint for constant-pressure regulation, in 0.1 kPa.
    pub min_const_pressure: i16,
    /// Highest setpoint for constant-pressure regulation, in 0.1 kPa.
    pub max_const_pressure: i16,
    /// Lowest setpoint for proportional-pressure regulation, in 0.1 kPa.
    pub min_comp_pressure: i16,
    /// Highest setpoint for proportional-pressure regulation, in 0.1 kPa.
    pub max_comp_pressure: i16,
    /// Lowest setpoint for constant-speed regulation, in RPM.
    pub min_const_speed: u16,
    /// Highest setpoint for constant-speed regulation, in RPM.
    pub max_const_speed: u16,
    /// Lowest setpoint for constant-flow regulation, in 0.1 m³/h.
    pub min_const_flow: u16,
    /// Highest setpoint for constant-flow regulation, in 0.1 m³/h.
    pub max_const_flow: u16,
    /// Lowest setpoint for constant-temperature regulation, in 0.01 °C.
    pub min_const_temp: i16,
    /// Highest setpoint for constant-temperature regulation, in 0.01 °C.
    pub max_const_temp: i16,
}

impl Default for PumpRatings {
    /// Ratings of the reference pump: 2000 kPa / 1000 RPM / 200 m³/h,
    /// with setpoint ranges for every regulation mode.
    fn default() -> Self {
        Self {
            max_pressure: 20000,
            max_speed: 1000,
            max_flow: 2000,
            min_const_pressure: -1000,
            max_const_pressure: 1000,
            min_comp_pressure: -200,
            max_comp_pressure: 200,
            min_const_speed: 200,
            max_const_speed: 2000,
            min_const_flow: 125,
            max_const_flow: 6557,
            min_const_temp: 3000,
            max_const_temp: 5600,
        }
    }
}

impl PumpRatings {
    /// Check that no rating collides with a null sentinel and that every
    /// min stays at or below its max counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] or
    /// [`ValidationError::RatingOrder`] naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let pressures = [
            ("max_pressure", self.max_pressure),
            ("min_const_pressure", self.min_const_pressure),
            ("max_const_pressure", self.max_const_pressure),
            ("min_comp_pressure", self.min_comp_pressure),
            ("max_comp_pressure", self.max_comp_pressure),
        ];
        for (field, value) in pressures {
            if value == i16::MIN {
                return Err(ValidationError::RatingOutOfRange { field });
            }
        }

        let unsigned = [
            ("max_speed", self.max_speed),
            ("max_flow", self.max_flow),
            ("min_const_speed", self.min_const_speed),
            ("max_const_speed", self.max_const_speed),
            ("min_const_flow", self.min_const_flow),
            ("max_const_flow", self.max_const_flow),
        ];
        for (field, value) in unsigned {
            if value == u16::MAX {
                return Err(ValidationError::RatingOutOfRange { field });
            }
        }

        let temperatures = [
            ("min_const_temp", self.min_const_temp),
            ("max_const_temp", self.max_const_temp),
        ];
        for (field, value) in temperatures {
            if value < MIN_TEMPERATURE {
                return Err(ValidationError::RatingOutOfRange { field });
            }
        }

        if self.min_const_pressure > self.max_const_pressure {
            return Err(ValidationError::RatingOrder {
                field: "const_pressure",
            });
        }
        if self.min_comp_pressure > self.max_comp_pressure {
            return Err(ValidationError::RatingOrder {
                field: "comp_pressure",
            });
        }
        if self.min_const_speed > self.max_const_speed {
            return Err(ValidationError::RatingOrder {
                field: "const_speed",
            });
        }
        if self.min_const_flow > self.max_const_flow {
            return Err(ValidationError::RatingOrder { field: "const_flow" });
        }
        if self.min_const_temp > self.max_const_temp {
            return Err(ValidationError::RatingOrder { field: "const_temp" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_validate_reference_ratings() {
        assert_eq!(PumpRatings::default().validate(), Ok(()));
    }

    #[test]
    fn should_reject_null_sentinel_pressure() {
        let ratings = PumpRatings {
            min_const_pressure: i16::MIN,
            ..PumpRatings::default()
        };
        assert_eq!(
            ratings.validate(),
            Err(ValidationError::RatingOutOfRange {
                field: "min_const_pressure"
            })
        );
    }

    #[test]
    fn should_reject_null_sentinel_speed() {
        let ratings = PumpRatings {
            max_const_speed: u16::MAX,
            ..PumpRatings::default()
        };
        assert_eq!(
            ratings.validate(),
            Err(ValidationError::RatingOutOfRange {
                field: "max_const_speed"
            })
        );
    }

    #[test]
    fn should_reject_temperature_below_absolute_zero() {
        let ratings = PumpRatings {
            min_const_temp: -28000,
            ..PumpRatings::default()
        };
        assert_eq!(
            ratings.validate(),
            Err(ValidationError::RatingOutOfRange {
                field: "min_const_temp"
            })
        );
    }

    #[test]
    fn should_reject_inverted_setpoint_ranges() {
        let ratings = PumpRatings {
            min_const_flow: 7000,
            ..PumpRatings::default()
        };
        assert_eq!(
            ratings.validate(),
            Err(ValidationError::RatingOrder { field: "const_flow" })
        );
    }

    #[test]
    fn should_expose_reference_limits() {
        let ratings = PumpRatings::default();
        assert_eq!(ratings.max_pressure, 20000);
        assert_eq!(ratings.max_speed, 1000);
        assert_eq!(ratings.max_flow, 2000);
        assert_eq!(ratings.min_const_temp, 3000);
        assert_eq!(ratings.max_const_temp, 5600);
    }
}
