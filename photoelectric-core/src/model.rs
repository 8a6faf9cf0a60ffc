//! Stopping-voltage model and the configured model facade.

use crate::color::{color_in_domain, frequency_to_wavelength, Rgb};
use crate::config::ModelConfig;
use crate::constants::PhysicalConstants;
use crate::domain::FrequencyDomain;
use crate::error::Result;
use crate::spectrum::{SpectrumStrip, VoltageCurve};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Photon energy `h * f` (J).
#[inline]
#[must_use]
pub fn photon_energy(constants: &PhysicalConstants, frequency: f64) -> f64 {
    constants.planck * frequency
}

/// Stopping voltage (V) for light of `frequency` (Hz).
///
/// `(h*f - W) / e` when the photon energy exceeds the work function,
/// otherwise 0. Any finite frequency is accepted.
#[inline]
#[must_use]
pub fn stopping_voltage(constants: &PhysicalConstants, frequency: f64) -> f64 {
    let energy = photon_energy(constants, frequency);
    if energy > constants.work_function {
        (energy - constants.work_function) / constants.elementary_charge
    } else {
        0.0
    }
}

/// Everything the model says about one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Light frequency (Hz).
    pub frequency: f64,
    /// Photon energy (eV).
    pub photon_energy_ev: f64,
    /// Stopping voltage (V).
    pub stopping_voltage: f64,
    /// Whether photoelectrons are emitted at all.
    pub emits_electrons: bool,
    /// Wavelength used for the display color (nm).
    pub wavelength_nm: f64,
    /// Display color.
    pub color: Rgb,
}

/// The photoelectric model bound to one validated [`ModelConfig`].
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhotoelectricModel {
    config: ModelConfig,
}

impl PhotoelectricModel {
    /// Builds a model from the validated, normalized form of `config`.
    pub fn new(config: ModelConfig) -> Result<Self> {
        Ok(Self {
            config: config.normalized()?,
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Active constants.
    #[must_use]
    pub fn constants(&self) -> &PhysicalConstants {
        &self.config.constants
    }

    /// Active frequency domain.
    #[must_use]
    pub fn domain(&self) -> FrequencyDomain {
        self.config.domain
    }

    /// Stopping voltage (V) at `frequency`.
    #[must_use]
    pub fn compute_stopping_voltage(&self, frequency: f64) -> f64 {
        stopping_voltage(&self.config.constants, frequency)
    }

    /// Photon energy (J) at `frequency`.
    #[must_use]
    pub fn photon_energy(&self, frequency: f64) -> f64 {
        photon_energy(&self.config.constants, frequency)
    }

    /// Photon energy (eV) at `frequency`.
    #[must_use]
    pub fn photon_energy_ev(&self, frequency: f64) -> f64 {
        self.photon_energy(frequency) / self.config.constants.elementary_charge
    }

    /// Lowest frequency that ejects electrons (Hz).
    #[must_use]
    pub fn threshold_frequency(&self) -> f64 {
        self.config.constants.threshold_frequency()
    }

    /// Display wavelength (nm) for `frequency` in the configured domain.
    #[must_use]
    pub fn wavelength(&self, frequency: f64) -> f64 {
        frequency_to_wavelength(frequency, &self.config.domain, self.config.orientation)
    }

    /// Display color for `frequency` in the configured domain.
    #[must_use]
    pub fn color(&self, frequency: f64) -> Rgb {
        color_in_domain(frequency, &self.config.domain, self.config.orientation)
    }

    /// Display color for `frequency` in an explicit domain, using the
    /// configured orientation.
    pub fn frequency_to_color(
        &self,
        frequency: f64,
        min_frequency: f64,
        max_frequency: f64,
    ) -> Result<Rgb> {
        crate::color::frequency_to_color(
            frequency,
            min_frequency,
            max_frequency,
            self.config.orientation,
        )
    }

    /// Spectrum strip over an explicit domain.
    pub fn build_spectrum_strip(
        &self,
        min_frequency: f64,
        max_frequency: f64,
        sample_count: usize,
    ) -> Result<SpectrumStrip> {
        crate::spectrum::build_spectrum_strip(
            min_frequency,
            max_frequency,
            sample_count,
            self.config.orientation,
        )
    }

    /// Voltage curve over an explicit domain.
    pub fn build_voltage_curve(
        &self,
        min_frequency: f64,
        max_frequency: f64,
        sample_count: usize,
    ) -> Result<VoltageCurve> {
        crate::spectrum::build_voltage_curve(
            &self.config.constants,
            min_frequency,
            max_frequency,
            sample_count,
        )
    }

    /// Spectrum strip over the configured domain.
    #[must_use]
    pub fn spectrum_strip(&self, sample_count: usize) -> SpectrumStrip {
        SpectrumStrip::new(self.config.domain, self.config.orientation, sample_count)
    }

    /// Voltage curve over the configured domain.
    #[must_use]
    pub fn voltage_curve(&self, sample_count: usize) -> VoltageCurve {
        VoltageCurve::new(self.config.constants, self.config.domain, sample_count)
    }

    /// Evaluates `frequency` as given.
    #[must_use]
    pub fn evaluate(&self, frequency: f64) -> Reading {
        let voltage = self.compute_stopping_voltage(frequency);
        Reading {
            frequency,
            photon_energy_ev: self.photon_energy_ev(frequency),
            stopping_voltage: voltage,
            emits_electrons: self.photon_energy(frequency) > self.config.constants.work_function,
            wavelength_nm: self.wavelength(frequency),
            color: self.color(frequency),
        }
    }

    /// Evaluates `frequency` after snapping it onto the selector grid.
    #[must_use]
    pub fn select(&self, frequency: f64) -> Reading {
        self.evaluate(self.config.selector.snap(frequency))
    }

    /// Evaluates `frequency` if the selector accepts it.
    pub fn select_exact(&self, frequency: f64) -> Result<Reading> {
        let frequency = self.config.selector.validate(frequency)?;
        Ok(self.evaluate(frequency))
    }

    /// Evaluates the selector's default frequency.
    #[must_use]
    pub fn default_reading(&self) -> Reading {
        self.evaluate(self.config.selector.default_frequency())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::color::SpectrumOrientation;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_below_threshold_is_zero() {
        let c = PhysicalConstants::default();
        assert_eq!(stopping_voltage(&c, 5e14), 0.0);
        assert_eq!(stopping_voltage(&c, 0.0), 0.0);
        assert_eq!(stopping_voltage(&c, -1e15), 0.0);
    }

    #[test]
    fn test_known_voltage() {
        let c = PhysicalConstants::default();
        // (6.626e-34 * 1e15 - 2.14 * 1.602e-19) / 1.602e-19
        let expected = (6.626e-34 * 1e15 - 2.14 * 1.602e-19) / 1.602e-19;
        assert_relative_eq!(stopping_voltage(&c, 1e15), expected, max_relative = 1e-9);
        assert_relative_eq!(stopping_voltage(&c, 1e15), 1.996, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_work_function() {
        let c = PhysicalConstants::default().with_work_function(0.0);
        assert_relative_eq!(
            stopping_voltage(&c, 1e15),
            6.626e-34 * 1e15 / 1.602e-19,
            max_relative = 1e-12
        );
        assert_eq!(stopping_voltage(&c, 0.0), 0.0);
    }

    #[test]
    fn test_model_rejects_invalid_config() {
        let config = ModelConfig::new().with_work_function_ev(f64::NAN);
        assert!(matches!(
            PhotoelectricModel::new(config),
            Err(Error::InvalidConstant { .. })
        ));
    }

    #[test]
    fn test_evaluate_default_reading() {
        let model = PhotoelectricModel::default();
        let reading = model.default_reading();
        assert_eq!(reading.frequency, 5e14);
        assert_eq!(reading.stopping_voltage, 0.0);
        assert!(!reading.emits_electrons);
        assert_relative_eq!(reading.photon_energy_ev, 6.626e-34 * 5e14 / 1.602e-19);
        // t = 4/9 under red-to-violet: 400 + (5/9) * 300 nm
        assert_relative_eq!(reading.wavelength_nm, 400.0 + 500.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_select_snaps_and_validates() {
        let model = PhotoelectricModel::default();
        assert_relative_eq!(model.select(7.02e14).frequency, 7e14, max_relative = 1e-12);
        assert_eq!(model.select(9e15).frequency, 1e15);
        assert!(model.select_exact(9e15).is_err());
        assert!(model.select_exact(7e14).unwrap().emits_electrons);
    }

    #[test]
    fn test_explicit_domain_operations() {
        let model = PhotoelectricModel::new(
            ModelConfig::new().with_orientation(SpectrumOrientation::VioletToRed),
        )
        .unwrap();
        assert_eq!(
            model.frequency_to_color(1e14, 1e14, 1e15).unwrap(),
            crate::color::wavelength_to_color(400.0)
        );
        assert!(model.frequency_to_color(1e14, 1e15, 1e15).is_err());
        assert!(model.build_spectrum_strip(2e14, 1e14, 4).is_err());
        assert!(model.build_voltage_curve(1e14, 1e15, 4).is_ok());
    }

    #[test]
    fn test_threshold_matches_constants() {
        let model = PhotoelectricModel::default();
        let f0 = model.threshold_frequency();
        assert_relative_eq!(f0, 2.14 * 1.602e-19 / 6.626e-34, max_relative = 1e-12);
        assert_eq!(model.compute_stopping_voltage(f0 * (1.0 - 1e-9)), 0.0);
        assert!(model.compute_stopping_voltage(f0 * (1.0 + 1e-6)) > 0.0);
    }
}
