//! Frequency to visible-light color mapping.
//!
//! A frequency is first placed on the 400–700 nm band according to its
//! position in the active [`FrequencyDomain`], then converted to RGB with a
//! seven-band piecewise-linear approximation of the visible spectrum.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]

use std::fmt;

use crate::domain::FrequencyDomain;
use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wavelength assigned to the violet end of the domain (nm).
pub const VIOLET_WAVELENGTH_NM: f64 = 400.0;

/// Width of the wavelength band the domain is spread over (nm).
pub const VISIBLE_SPAN_NM: f64 = 300.0;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black, used outside the visible range.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unit-interval channels: each channel is clamped
    /// to `[0, 1]`, scaled by 255 and truncated.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as opaque RGBA bytes.
    #[inline]
    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Clamp to [0, 1], scale by 255, truncate.
fn unit_to_u8(value: f64) -> u8 {
    // NaN clamps to NaN and casts to 0.
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Direction in which the domain is laid onto the wavelength band.
///
/// Named after the colors met while walking from the low-frequency end of
/// the domain to the high-frequency end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SpectrumOrientation {
    /// Low frequency at 700 nm, high frequency at 400 nm: `λ = 400 + (1 - t) * 300`.
    /// Higher frequency gives shorter wavelength, as in nature.
    #[default]
    RedToViolet,
    /// Low frequency at 400 nm, high frequency at 700 nm: `λ = 400 + t * 300`.
    VioletToRed,
}

impl fmt::Display for SpectrumOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumOrientation::RedToViolet => write!(f, "red-to-violet"),
            SpectrumOrientation::VioletToRed => write!(f, "violet-to-red"),
        }
    }
}

impl SpectrumOrientation {
    /// Wavelength (nm) for normalized domain position `t`.
    #[inline]
    #[must_use]
    pub fn wavelength(self, t: f64) -> f64 {
        let position = match self {
            SpectrumOrientation::RedToViolet => 1.0 - t,
            SpectrumOrientation::VioletToRed => t,
        };
        VIOLET_WAVELENGTH_NM + position * VISIBLE_SPAN_NM
    }
}

/// One channel of a spectral band as a function of wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ramp {
    /// Channel off.
    Zero,
    /// Channel fully on.
    Full,
    /// Rises linearly from 0 at `from` to 1 at `to`.
    Up { from: f64, to: f64 },
    /// Falls linearly from 1 at `from` to 0 at `to`.
    Down { from: f64, to: f64 },
}

impl Ramp {
    /// Unclamped channel intensity at `wavelength`.
    #[inline]
    #[must_use]
    pub fn eval(self, wavelength: f64) -> f64 {
        match self {
            Ramp::Zero => 0.0,
            Ramp::Full => 1.0,
            Ramp::Up { from, to } => (wavelength - from) / (to - from),
            Ramp::Down { from, to } => -(wavelength - to) / (to - from),
        }
    }
}

/// A half-open wavelength interval with one ramp per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralBand {
    /// Inclusive lower edge (nm).
    pub start: f64,
    /// Upper edge (nm).
    pub end: f64,
    /// Whether `end` belongs to this band.
    pub end_inclusive: bool,
    pub red: Ramp,
    pub green: Ramp,
    pub blue: Ramp,
}

impl SpectralBand {
    /// Returns true if `wavelength` falls in this band.
    #[inline]
    #[must_use]
    pub fn contains(&self, wavelength: f64) -> bool {
        wavelength >= self.start
            && (wavelength < self.end || (self.end_inclusive && wavelength == self.end))
    }

    /// Unclamped `(r, g, b)` intensities at `wavelength`.
    #[inline]
    #[must_use]
    pub fn channels(&self, wavelength: f64) -> (f64, f64, f64) {
        (
            self.red.eval(wavelength),
            self.green.eval(wavelength),
            self.blue.eval(wavelength),
        )
    }
}

/// The visible spectrum, violet to red. Evaluated in order; wavelengths
/// matched by no band are black.
pub static SPECTRAL_BANDS: [SpectralBand; 6] = [
    SpectralBand {
        start: 380.0,
        end: 440.0,
        end_inclusive: false,
        red: Ramp::Down { from: 380.0, to: 440.0 },
        green: Ramp::Zero,
        blue: Ramp::Full,
    },
    SpectralBand {
        start: 440.0,
        end: 490.0,
        end_inclusive: false,
        red: Ramp::Zero,
        green: Ramp::Up { from: 440.0, to: 490.0 },
        blue: Ramp::Full,
    },
    SpectralBand {
        start: 490.0,
        end: 510.0,
        end_inclusive: false,
        red: Ramp::Zero,
        green: Ramp::Full,
        blue: Ramp::Down { from: 490.0, to: 510.0 },
    },
    SpectralBand {
        start: 510.0,
        end: 580.0,
        end_inclusive: false,
        red: Ramp::Up { from: 510.0, to: 580.0 },
        green: Ramp::Full,
        blue: Ramp::Zero,
    },
    SpectralBand {
        start: 580.0,
        end: 645.0,
        end_inclusive: false,
        red: Ramp::Full,
        green: Ramp::Down { from: 580.0, to: 645.0 },
        blue: Ramp::Zero,
    },
    SpectralBand {
        start: 645.0,
        end: 780.0,
        end_inclusive: true,
        red: Ramp::Full,
        green: Ramp::Zero,
        blue: Ramp::Zero,
    },
];

/// Band containing `wavelength`, if it is visible.
#[must_use]
pub fn band_for(wavelength: f64) -> Option<&'static SpectralBand> {
    SPECTRAL_BANDS.iter().find(|band| band.contains(wavelength))
}

/// Converts a wavelength (nm) to RGB.
#[must_use]
pub fn wavelength_to_color(wavelength: f64) -> Rgb {
    match band_for(wavelength) {
        Some(band) => {
            let (r, g, b) = band.channels(wavelength);
            Rgb::from_unit(r, g, b)
        }
        None => Rgb::BLACK,
    }
}

/// Wavelength (nm) assigned to `frequency` inside `domain`.
#[inline]
#[must_use]
pub fn frequency_to_wavelength(
    frequency: f64,
    domain: &FrequencyDomain,
    orientation: SpectrumOrientation,
) -> f64 {
    orientation.wavelength(domain.normalize(frequency))
}

/// Maps `frequency` to a display color for the domain `[min_frequency, max_frequency]`.
///
/// Frequencies outside the domain extrapolate the wavelength mapping and may
/// come out black. Fails with [`Error::InvalidDomain`](crate::Error::InvalidDomain)
/// if `max_frequency <= min_frequency`.
pub fn frequency_to_color(
    frequency: f64,
    min_frequency: f64,
    max_frequency: f64,
    orientation: SpectrumOrientation,
) -> Result<Rgb> {
    let domain = FrequencyDomain::new(min_frequency, max_frequency)?;
    Ok(color_in_domain(frequency, &domain, orientation))
}

/// [`frequency_to_color`] for an already validated domain.
#[inline]
#[must_use]
pub fn color_in_domain(
    frequency: f64,
    domain: &FrequencyDomain,
    orientation: SpectrumOrientation,
) -> Rgb {
    wavelength_to_color(frequency_to_wavelength(frequency, domain, orientation))
}
