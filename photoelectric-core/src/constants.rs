//! Physical constants used by the stopping-voltage model.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planck constant (J·s), to the precision used by the model.
pub const PLANCK: f64 = 6.626e-34;

/// Elementary charge (C), to the precision used by the model.
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;

/// Default work function in electron-volts.
pub const DEFAULT_WORK_FUNCTION_EV: f64 = 2.14;

/// Immutable set of constants for one metal surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalConstants {
    /// Planck constant `h` (J·s).
    pub planck: f64,
    /// Elementary charge `e` (C).
    pub elementary_charge: f64,
    /// Work function `W` (J).
    pub work_function: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            planck: PLANCK,
            elementary_charge: ELEMENTARY_CHARGE,
            work_function: DEFAULT_WORK_FUNCTION_EV * ELEMENTARY_CHARGE,
        }
    }
}

impl PhysicalConstants {
    /// Creates constants with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the work function in joules.
    #[must_use]
    pub fn with_work_function(mut self, joules: f64) -> Self {
        self.work_function = joules;
        self
    }

    /// Sets the work function in electron-volts, using this set's elementary charge.
    #[must_use]
    pub fn with_work_function_ev(mut self, ev: f64) -> Self {
        self.work_function = ev * self.elementary_charge;
        self
    }

    /// Work function expressed in electron-volts.
    #[must_use]
    pub fn work_function_ev(&self) -> f64 {
        self.work_function / self.elementary_charge
    }

    /// Lowest frequency able to eject an electron, `W / h` (Hz).
    #[must_use]
    pub fn threshold_frequency(&self) -> f64 {
        self.work_function / self.planck
    }

    /// Checks that every constant is usable.
    ///
    /// `h` and `e` must be finite and positive; `W` must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("planck", self.planck),
            ("elementary_charge", self.elementary_charge),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConstant { name, value });
            }
        }
        if !self.work_function.is_finite() || self.work_function < 0.0 {
            return Err(Error::InvalidConstant {
                name: "work_function",
                value: self.work_function,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_constants() {
        let c = PhysicalConstants::default();
        assert_relative_eq!(c.planck, 6.626e-34);
        assert_relative_eq!(c.elementary_charge, 1.602e-19);
        assert_relative_eq!(c.work_function, 2.14 * 1.602e-19);
        assert_relative_eq!(c.work_function_ev(), 2.14, max_relative = 1e-12);
    }

    #[test]
    fn test_threshold_frequency() {
        let c = PhysicalConstants::default();
        // 2.14 * 1.602e-19 / 6.626e-34
        assert_relative_eq!(c.threshold_frequency(), 5.173_98e14, max_relative = 1e-5);
    }

    #[test]
    fn test_work_function_ev_builder() {
        // Caesium
        let c = PhysicalConstants::new().with_work_function_ev(1.95);
        assert_relative_eq!(c.work_function, 1.95 * ELEMENTARY_CHARGE);
        assert_relative_eq!(c.work_function_ev(), 1.95, max_relative = 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        assert!(PhysicalConstants::default().validate().is_ok());
        assert!(PhysicalConstants::default()
            .with_work_function(0.0)
            .validate()
            .is_ok());

        let bad_h = PhysicalConstants {
            planck: 0.0,
            ..PhysicalConstants::default()
        };
        assert_eq!(
            bad_h.validate(),
            Err(Error::InvalidConstant {
                name: "planck",
                value: 0.0
            })
        );

        let bad_e = PhysicalConstants {
            elementary_charge: f64::NAN,
            ..PhysicalConstants::default()
        };
        assert!(bad_e.validate().is_err());

        let bad_w = PhysicalConstants::default().with_work_function(-1e-19);
        assert!(matches!(
            bad_w.validate(),
            Err(Error::InvalidConstant {
                name: "work_function",
                ..
            })
        ));
    }
}
