//! Text, CSV and JSON rendering of model outputs.

use std::fmt::Write;

use clap::ValueEnum;
use photoelectric_core::{CurvePoint, ModelConfig, Reading, Rgb, Sampling, SpectrumStrip};
use serde::Serialize;

use crate::Result;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable
    Text,
    /// Comma separated, one row per sample
    Csv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct StripSample {
    index: usize,
    frequency: f64,
    color: Rgb,
    hex: String,
}

#[derive(Serialize)]
struct ReadingOutput<'a> {
    #[serde(flatten)]
    reading: &'a Reading,
    hex: String,
    threshold_frequency: f64,
}

/// Render one evaluated frequency.
pub fn render_reading(
    reading: &Reading,
    threshold_frequency: f64,
    format: OutputFormat,
) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let mut s = String::new();
            writeln!(s, "Frequency:        {:.2e} Hz", reading.frequency)?;
            writeln!(s, "Photon energy:    {:.3} eV", reading.photon_energy_ev)?;
            writeln!(s, "Threshold:        {threshold_frequency:.4e} Hz")?;
            writeln!(s, "Stopping voltage: {:.2} V", reading.stopping_voltage)?;
            if !reading.emits_electrons {
                writeln!(s, "                  (below threshold, no electrons ejected)")?;
            }
            writeln!(s, "Wavelength:       {:.1} nm", reading.wavelength_nm)?;
            write!(s, "Color:            {}", reading.color)?;
            s
        }
        OutputFormat::Csv => {
            let mut s = String::from(
                "frequency_hz,photon_energy_ev,stopping_voltage_v,emits_electrons,wavelength_nm,hex\n",
            );
            write!(
                s,
                "{:e},{},{},{},{},{}",
                reading.frequency,
                reading.photon_energy_ev,
                reading.stopping_voltage,
                reading.emits_electrons,
                reading.wavelength_nm,
                reading.color
            )?;
            s
        }
        OutputFormat::Json => serde_json::to_string_pretty(&ReadingOutput {
            reading,
            hex: reading.color.to_hex(),
            threshold_frequency,
        })?,
    };
    Ok(out)
}

/// Render a spectrum strip, computing samples in parallel when asked.
pub fn render_strip(strip: &SpectrumStrip, format: OutputFormat, parallel: bool) -> Result<String> {
    let colors = if parallel {
        strip.par_collect()
    } else {
        strip.iter().collect()
    };
    let samples = colors.into_iter().enumerate().map(|(index, color)| StripSample {
        index,
        frequency: strip.frequency(index),
        color,
        hex: color.to_hex(),
    });

    let out = match format {
        OutputFormat::Text => {
            let mut s = String::new();
            for sample in samples {
                writeln!(s, "{:>5}  {:.4e} Hz  {}", sample.index, sample.frequency, sample.hex)?;
            }
            s
        }
        OutputFormat::Csv => {
            let mut s = String::from("index,frequency_hz,r,g,b,hex\n");
            for sample in samples {
                let Rgb { r, g, b } = sample.color;
                writeln!(s, "{},{:e},{r},{g},{b},{}", sample.index, sample.frequency, sample.hex)?;
            }
            s
        }
        OutputFormat::Json => serde_json::to_string_pretty(&samples.collect::<Vec<_>>())?,
    };
    Ok(out)
}

/// Render voltage curve points, optionally marking a selected reading.
pub fn render_curve(
    points: &[CurvePoint],
    marker: Option<&Reading>,
    format: OutputFormat,
) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let mut s = String::new();
            for p in points {
                writeln!(s, "{:.4e} Hz  {:>6.3} V", p.frequency, p.voltage)?;
            }
            if let Some(m) = marker {
                writeln!(s, "* {:.4e} Hz  {:>6.3} V", m.frequency, m.stopping_voltage)?;
            }
            s
        }
        OutputFormat::Csv => {
            let mut s = String::from("frequency_hz,stopping_voltage_v,marker\n");
            for p in points {
                writeln!(s, "{:e},{},false", p.frequency, p.voltage)?;
            }
            if let Some(m) = marker {
                writeln!(s, "{:e},{},true", m.frequency, m.stopping_voltage)?;
            }
            s
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CurveOutput<'a> {
                points: &'a [CurvePoint],
                #[serde(skip_serializing_if = "Option::is_none")]
                marker: Option<CurvePoint>,
            }
            serde_json::to_string_pretty(&CurveOutput {
                points,
                marker: marker.map(|m| CurvePoint {
                    frequency: m.frequency,
                    voltage: m.stopping_voltage,
                }),
            })?
        }
    };
    Ok(out)
}

/// Render the effective configuration. Always JSON; it doubles as a
/// starting point for a `--config` file.
pub fn render_config(config: &ModelConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
