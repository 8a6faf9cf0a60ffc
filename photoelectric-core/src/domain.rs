//! Frequency domain and the stepped frequency selector.
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of the default frequency domain (Hz).
pub const DEFAULT_MIN_FREQUENCY: f64 = 1e14;

/// Upper bound of the default frequency domain (Hz).
pub const DEFAULT_MAX_FREQUENCY: f64 = 1e15;

/// Default selector step (Hz).
pub const DEFAULT_STEP: f64 = 1e13;

/// Default selected frequency (Hz).
pub const DEFAULT_FREQUENCY: f64 = 5e14;

/// Most steps a selector range may be divided into.
pub const MAX_SELECTOR_STEPS: f64 = 1e6;

/// Closed frequency interval `[min, max]` with `max > min`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrequencyDomain {
    min: f64,
    max: f64,
}

impl Default for FrequencyDomain {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FREQUENCY,
            max: DEFAULT_MAX_FREQUENCY,
        }
    }
}

impl FrequencyDomain {
    /// Creates a domain, failing with [`Error::InvalidDomain`] unless both
    /// bounds are finite and `max > min`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let domain = Self { min, max };
        domain.validate()?;
        Ok(domain)
    }

    /// Re-checks the bounds. Needed for domains built by deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.max > self.min {
            Ok(())
        } else {
            Err(Error::InvalidDomain {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Lower bound (Hz).
    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (Hz).
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval (Hz).
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `frequency` in the domain, `0` at `min` and `1` at `max`.
    ///
    /// Not clamped: frequencies outside the domain give values outside `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn normalize(&self, frequency: f64) -> f64 {
        (frequency - self.min) / self.span()
    }

    /// Returns true if `frequency` lies inside the closed interval.
    #[inline]
    #[must_use]
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min && frequency <= self.max
    }

    /// Frequency at the left edge of pixel `index` when the domain is split
    /// into `count` equal cells. Index 0 is `min`; the last cell starts one
    /// cell width below `max`.
    #[inline]
    #[must_use]
    pub fn pixel_frequency(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.min;
        }
        self.min + (index as f64 / count as f64) * self.span()
    }

    /// Frequency of sample `index` out of `count` inclusive, evenly spaced
    /// samples. The first sample is `min` and the last is exactly `max`.
    #[inline]
    #[must_use]
    pub fn linspace_frequency(&self, index: usize, count: usize) -> f64 {
        if count <= 1 || index == 0 {
            return self.min;
        }
        if index + 1 >= count {
            return self.max;
        }
        let step = self.span() / (count - 1) as f64;
        self.min + index as f64 * step
    }
}

/// The stepped frequency control: a range, a step and a default value.
///
/// Only the step and default are serialized; the range comes from the
/// enclosing [`ModelConfig`](crate::ModelConfig) domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrequencySelector {
    #[cfg_attr(feature = "serde", serde(skip))]
    domain: FrequencyDomain,
    step: f64,
    default: f64,
}

impl Default for FrequencySelector {
    fn default() -> Self {
        Self {
            domain: FrequencyDomain::default(),
            step: DEFAULT_STEP,
            default: DEFAULT_FREQUENCY,
        }
    }
}

impl FrequencySelector {
    /// Creates a selector. The default value must lie in the range and is
    /// snapped onto the step grid.
    ///
    /// Fails with [`Error::InvalidStep`] for a non-positive step or one that
    /// splits the range into more than [`MAX_SELECTOR_STEPS`] steps.
    pub fn new(domain: FrequencyDomain, step: f64, default: f64) -> Result<Self> {
        domain.validate()?;
        if !step.is_finite() || step <= 0.0 || domain.span() / step > MAX_SELECTOR_STEPS {
            return Err(Error::InvalidStep(step));
        }
        let mut selector = Self {
            domain,
            step,
            default: domain.min(),
        };
        selector.default = selector.snap(selector.validate(default)?);
        Ok(selector)
    }

    /// Moves the selector onto `domain`, clamping and re-snapping the default.
    #[must_use]
    pub fn with_domain(mut self, domain: FrequencyDomain) -> Self {
        self.domain = domain;
        self.default = self.snap(self.default);
        self
    }

    /// Selectable range.
    #[must_use]
    pub fn domain(&self) -> FrequencyDomain {
        self.domain
    }

    /// Step between selectable frequencies (Hz).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Frequency selected before any user input (Hz).
    #[must_use]
    pub fn default_frequency(&self) -> f64 {
        self.default
    }

    /// Clamps `frequency` into the range and rounds it to the nearest step
    /// counted from the range minimum. `NaN` selects the default.
    #[must_use]
    pub fn snap(&self, frequency: f64) -> f64 {
        if frequency.is_nan() {
            return self.default;
        }
        let clamped = frequency.clamp(self.domain.min(), self.domain.max());
        let steps = ((clamped - self.domain.min()) / self.step).round();
        (self.domain.min() + steps * self.step).min(self.domain.max())
    }

    /// Accepts `frequency` unchanged if it lies inside the range.
    pub fn validate(&self, frequency: f64) -> Result<f64> {
        if frequency.is_finite() && self.domain.contains(frequency) {
            Ok(frequency)
        } else {
            Err(Error::FrequencyOutOfRange {
                frequency,
                min: self.domain.min(),
                max: self.domain.max(),
            })
        }
    }

    /// Number of selectable positions, both ends included.
    #[must_use]
    pub fn position_count(&self) -> usize {
        // Tolerate spans that are a whole number of steps up to rounding.
        ((self.domain.span() / self.step + 1e-9).floor() as usize).saturating_add(1)
    }

    /// Every selectable frequency in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.position_count())
            .map(move |i| (self.domain.min() + i as f64 * self.step).min(self.domain.max()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_domain() {
        let d = FrequencyDomain::default();
        assert_eq!(d.min(), 1e14);
        assert_eq!(d.max(), 1e15);
        assert_relative_eq!(d.span(), 9e14);
    }

    #[test]
    fn test_invalid_domains() {
        assert!(matches!(
            FrequencyDomain::new(1e15, 1e14),
            Err(Error::InvalidDomain { .. })
        ));
        assert!(FrequencyDomain::new(1e14, 1e14).is_err());
        assert!(FrequencyDomain::new(f64::NAN, 1e15).is_err());
        assert!(FrequencyDomain::new(1e14, f64::INFINITY).is_err());
    }

    #[test]
    fn test_normalize_is_unclamped() {
        let d = FrequencyDomain::default();
        assert_eq!(d.normalize(1e14), 0.0);
        assert_eq!(d.normalize(1e15), 1.0);
        assert!(d.normalize(0.0) < 0.0);
        assert!(d.normalize(2e15) > 1.0);
    }

    #[test]
    fn test_pixel_frequency() {
        let d = FrequencyDomain::default();
        assert_eq!(d.pixel_frequency(0, 600), 1e14);
        let last = d.pixel_frequency(599, 600);
        assert!(last < 1e15);
        assert_relative_eq!(last, 1e15 - 9e14 / 600.0, max_relative = 1e-12);
    }

    #[test]
    fn test_linspace_frequency() {
        let d = FrequencyDomain::default();
        assert_eq!(d.linspace_frequency(0, 100), 1e14);
        assert_eq!(d.linspace_frequency(99, 100), 1e15);
        assert_relative_eq!(d.linspace_frequency(1, 10), 2e14, max_relative = 1e-12);
        assert_eq!(d.linspace_frequency(0, 1), 1e14);
    }

    #[test]
    fn test_selector_defaults() {
        let s = FrequencySelector::default();
        assert_eq!(s.default_frequency(), 5e14);
        assert_eq!(s.step(), 1e13);
        assert_eq!(s.position_count(), 91);
        let positions: Vec<f64> = s.positions().collect();
        assert_eq!(positions.len(), 91);
        assert_eq!(positions[0], 1e14);
        assert_relative_eq!(positions[90], 1e15, max_relative = 1e-12);
    }

    #[test]
    fn test_selector_snap() {
        let s = FrequencySelector::default();
        assert_relative_eq!(s.snap(5.04e14), 5e14, max_relative = 1e-12);
        assert_relative_eq!(s.snap(5.06e14), 5.1e14, max_relative = 1e-12);
        assert_eq!(s.snap(1e13), 1e14);
        assert_eq!(s.snap(5e15), 1e15);
        assert_eq!(s.snap(f64::NAN), 5e14);
    }

    #[test]
    fn test_selector_validate() {
        let s = FrequencySelector::default();
        assert_eq!(s.validate(7e14), Ok(7e14));
        assert!(matches!(
            s.validate(2e15),
            Err(Error::FrequencyOutOfRange { .. })
        ));
        assert!(s.validate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_selector_rejects_bad_step() {
        let d = FrequencyDomain::default();
        assert_eq!(
            FrequencySelector::new(d, 0.0, 5e14),
            Err(Error::InvalidStep(0.0))
        );
        assert!(FrequencySelector::new(d, f64::NAN, 5e14).is_err());
    }

    #[test]
    fn test_selector_rejects_step_too_fine() {
        let d = FrequencyDomain::default();
        assert_eq!(
            FrequencySelector::new(d, 1e-300, 5e14),
            Err(Error::InvalidStep(1e-300))
        );
        assert!(FrequencySelector::new(d, d.span() / MAX_SELECTOR_STEPS, 5e14).is_ok());
    }

    #[test]
    fn test_position_count_saturates() {
        let s = FrequencySelector {
            domain: FrequencyDomain::default(),
            step: 1e-300,
            default: 5e14,
        };
        assert_eq!(s.position_count(), usize::MAX);
    }

    #[test]
    fn test_selector_rejects_default_outside_range() {
        let d = FrequencyDomain::default();
        assert!(matches!(
            FrequencySelector::new(d, 1e13, 5e20),
            Err(Error::FrequencyOutOfRange { .. })
        ));
        assert!(FrequencySelector::new(d, 1e13, f64::NAN).is_err());
    }

    #[test]
    fn test_positions_stay_in_range() {
        let d = FrequencyDomain::new(1e14, 1e15).unwrap();
        let s = FrequencySelector::new(d, 3e13, 5e14).unwrap();
        let positions: Vec<f64> = s.positions().collect();
        assert_eq!(positions.len(), 31);
        assert!(positions.iter().all(|&f| d.contains(f)));
        assert_relative_eq!(positions[30], 1e15, max_relative = 1e-12);
    }

    #[test]
    fn test_selector_with_domain() {
        let d = FrequencyDomain::new(6e14, 8e14).unwrap();
        let s = FrequencySelector::default().with_domain(d);
        assert_eq!(s.domain().min(), 6e14);
        assert_eq!(s.default_frequency(), 6e14);
        assert_eq!(s.snap(1e14), 6e14);
    }

    #[test]
    fn test_selector_snaps_default() {
        let d = FrequencyDomain::default();
        let s = FrequencySelector::new(d, 1e14, 4.4e14).unwrap();
        assert_relative_eq!(s.default_frequency(), 4e14, max_relative = 1e-12);
    }
}
