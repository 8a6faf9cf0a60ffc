//! Lazily sampled spectrum strips and voltage curves.
//!
//! Neither type stores its samples. Each element is computed on demand from
//! its index, so a strip or curve can be iterated any number of times,
//! indexed directly, or materialised in parallel with rayon.

use rayon::prelude::*;

use crate::color::{color_in_domain, Rgb, SpectrumOrientation};
use crate::constants::PhysicalConstants;
use crate::domain::FrequencyDomain;
use crate::error::Result;
use crate::model::stopping_voltage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite sequence whose elements are pure functions of their index.
pub trait Sampling: Copy + Send + Sync {
    /// Element type.
    type Item: Send;

    /// Number of samples.
    fn len(&self) -> usize;

    /// Returns true if there are no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes sample `index`. Callers keep `index < len()`.
    fn sample(&self, index: usize) -> Self::Item;

    /// Sample `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item> {
        (index < self.len()).then(|| self.sample(index))
    }

    /// Iterates the samples in order.
    fn iter(&self) -> SampleIter<Self> {
        SampleIter {
            source: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Computes every sample in parallel. The result equals `iter().collect()`.
    fn par_collect(&self) -> Vec<Self::Item> {
        let source = *self;
        (0..source.len())
            .into_par_iter()
            .map(|i| source.sample(i))
            .collect()
    }
}

/// Iterator over a [`Sampling`] source.
#[derive(Debug, Clone)]
pub struct SampleIter<S> {
    source: S,
    front: usize,
    back: usize,
}

impl<S: Sampling> Iterator for SampleIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.source.sample(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Sampling> DoubleEndedIterator for SampleIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.source.sample(self.back))
    }
}

impl<S: Sampling> ExactSizeIterator for SampleIter<S> {}

impl<S: Sampling> std::iter::FusedIterator for SampleIter<S> {}

/// Colors across a frequency domain, one per pixel column.
///
/// Sample `i` of `n` sits at the left edge of pixel `i`:
/// `min + (i / n) * (max - min)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumStrip {
    domain: FrequencyDomain,
    orientation: SpectrumOrientation,
    len: usize,
}

impl SpectrumStrip {
    /// Strip of `sample_count` colors over `domain`.
    #[must_use]
    pub fn new(
        domain: FrequencyDomain,
        orientation: SpectrumOrientation,
        sample_count: usize,
    ) -> Self {
        log::debug!(
            "spectrum strip: {sample_count} samples over [{:e}, {:e}] Hz, {orientation}",
            domain.min(),
            domain.max()
        );
        Self {
            domain,
            orientation,
            len: sample_count,
        }
    }

    /// Domain the strip covers.
    #[must_use]
    pub fn domain(&self) -> FrequencyDomain {
        self.domain
    }

    /// Orientation used for the color mapping.
    #[must_use]
    pub fn orientation(&self) -> SpectrumOrientation {
        self.orientation
    }

    /// Frequency sampled for pixel `index`.
    #[must_use]
    pub fn frequency(&self, index: usize) -> f64 {
        self.domain.pixel_frequency(index, self.len)
    }

    /// Colors as `#rrggbb` strings.
    #[must_use]
    pub fn hex_colors(&self) -> Vec<String> {
        self.iter().map(Rgb::to_hex).collect()
    }
}

impl Sampling for SpectrumStrip {
    type Item = Rgb;

    fn len(&self) -> usize {
        self.len
    }

    fn sample(&self, index: usize) -> Rgb {
        color_in_domain(self.frequency(index), &self.domain, self.orientation)
    }
}

impl IntoIterator for &SpectrumStrip {
    type Item = Rgb;
    type IntoIter = SampleIter<SpectrumStrip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One point of the stopping-voltage chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// Light frequency (Hz).
    pub frequency: f64,
    /// Stopping voltage (V).
    pub voltage: f64,
}

/// Stopping voltage sampled at evenly spaced frequencies, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageCurve {
    constants: PhysicalConstants,
    domain: FrequencyDomain,
    len: usize,
}

impl VoltageCurve {
    /// Curve of `sample_count` points over `domain`.
    #[must_use]
    pub fn new(constants: PhysicalConstants, domain: FrequencyDomain, sample_count: usize) -> Self {
        log::debug!(
            "voltage curve: {sample_count} samples over [{:e}, {:e}] Hz",
            domain.min(),
            domain.max()
        );
        Self {
            constants,
            domain,
            len: sample_count,
        }
    }

    /// Domain the curve covers.
    #[must_use]
    pub fn domain(&self) -> FrequencyDomain {
        self.domain
    }

    /// Frequency of point `index`.
    #[must_use]
    pub fn frequency(&self, index: usize) -> f64 {
        self.domain.linspace_frequency(index, self.len)
    }

    /// Highest voltage on the curve, reached at the last point.
    #[must_use]
    pub fn peak_voltage(&self) -> f64 {
        self.iter().next_back().map_or(0.0, |p| p.voltage)
    }
}

impl Sampling for VoltageCurve {
    type Item = CurvePoint;

    fn len(&self) -> usize {
        self.len
    }

    fn sample(&self, index: usize) -> CurvePoint {
        let frequency = self.frequency(index);
        CurvePoint {
            frequency,
            voltage: stopping_voltage(&self.constants, frequency),
        }
    }
}

impl IntoIterator for &VoltageCurve {
    type Item = CurvePoint;
    type IntoIter = SampleIter<VoltageCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a spectrum strip over `[min_frequency, max_frequency]`.
///
/// Fails with [`Error::InvalidDomain`](crate::Error::InvalidDomain) if
/// `max_frequency <= min_frequency`.
pub fn build_spectrum_strip(
    min_frequency: f64,
    max_frequency: f64,
    sample_count: usize,
    orientation: SpectrumOrientation,
) -> Result<SpectrumStrip> {
    let domain = FrequencyDomain::new(min_frequency, max_frequency)?;
    Ok(SpectrumStrip::new(domain, orientation, sample_count))
}

/// Builds a voltage curve over `[min_frequency, max_frequency]`.
///
/// Fails with [`Error::InvalidDomain`](crate::Error::InvalidDomain) if
/// `max_frequency <= min_frequency`.
pub fn build_voltage_curve(
    constants: &PhysicalConstants,
    min_frequency: f64,
    max_frequency: f64,
    sample_count: usize,
) -> Result<VoltageCurve> {
    let domain = FrequencyDomain::new(min_frequency, max_frequency)?;
    Ok(VoltageCurve::new(*constants, domain, sample_count))
}
