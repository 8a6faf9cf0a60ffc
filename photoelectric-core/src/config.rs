//! Model configuration.

use crate::color::SpectrumOrientation;
use crate::constants::PhysicalConstants;
use crate::domain::{FrequencyDomain, FrequencySelector};
use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the model depends on besides the frequency itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Constants for the illuminated metal.
    pub constants: PhysicalConstants,
    /// Frequency domain the color mapping and samplers cover.
    pub domain: FrequencyDomain,
    /// How the domain is laid onto the visible band.
    pub orientation: SpectrumOrientation,
    /// Stepped control for choosing a frequency. Its range follows `domain`.
    pub selector: FrequencySelector,
}

impl ModelConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set physical constants.
    #[must_use]
    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Set the work function in electron-volts.
    #[must_use]
    pub fn with_work_function_ev(mut self, ev: f64) -> Self {
        self.constants = self.constants.with_work_function_ev(ev);
        self
    }

    /// Set the frequency domain. The selector is moved onto it.
    #[must_use]
    pub fn with_domain(mut self, domain: FrequencyDomain) -> Self {
        self.domain = domain;
        self.selector = self.selector.with_domain(domain);
        self
    }

    /// Set the spectrum orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: SpectrumOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the frequency selector. Its range becomes the domain.
    #[must_use]
    pub fn with_selector(mut self, selector: FrequencySelector) -> Self {
        self.domain = selector.domain();
        self.selector = selector;
        self
    }

    /// Validates constants, domain and selector.
    ///
    /// The selector is checked against `domain`, not the range it carries:
    /// its default must lie in the domain and its step must be usable there.
    pub fn validate(&self) -> Result<()> {
        self.domain_selector()?;
        Ok(())
    }

    /// Validates and returns the config with its selector rebuilt over
    /// `domain` and its default snapped onto the step grid.
    ///
    /// Deserialized configs skip the constructors' checks, so models are
    /// built from the normalized form.
    pub fn normalized(mut self) -> Result<Self> {
        self.selector = self.domain_selector()?;
        Ok(self)
    }

    fn domain_selector(&self) -> Result<FrequencySelector> {
        self.constants.validate()?;
        self.domain.validate()?;
        let selector = FrequencySelector::new(
            self.domain,
            self.selector.step(),
            self.selector.default_frequency(),
        )?;
        log::debug!(
            "validated config: W = {:.3} eV, domain = [{:e}, {:e}] Hz, {}",
            self.constants.work_function_ev(),
            self.domain.min(),
            self.domain.max(),
            self.orientation
        );
        Ok(selector)
    }
}
