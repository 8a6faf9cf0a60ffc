//! photoelectric-core: Stopping-voltage model and visible-spectrum color
//! mapping for the photoelectric effect.
//!
//! This crate provides the pure computation behind a photoelectric effect
//! demonstration: the stopping voltage `(h*f - W) / e`, the mapping from a
//! light frequency to a display color, and lazily sampled spectrum strips
//! and voltage curves for a presentation layer to draw.
//!
//! ```
//! use photoelectric_core::{PhotoelectricModel, Sampling};
//!
//! let model = PhotoelectricModel::default();
//! let reading = model.evaluate(1e15);
//! assert!(reading.stopping_voltage > 1.99);
//!
//! let strip = model.spectrum_strip(600);
//! assert_eq!(strip.iter().count(), 600);
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod model;
pub mod spectrum;

pub use color::{
    frequency_to_color, frequency_to_wavelength, wavelength_to_color, Rgb, SpectrumOrientation,
};
pub use config::ModelConfig;
pub use constants::PhysicalConstants;
pub use domain::{FrequencyDomain, FrequencySelector};
pub use error::{Error, Result};
pub use model::{photon_energy, stopping_voltage, PhotoelectricModel, Reading};
pub use spectrum::{
    build_spectrum_strip, build_voltage_curve, CurvePoint, SampleIter, Sampling, SpectrumStrip,
    VoltageCurve,
};
