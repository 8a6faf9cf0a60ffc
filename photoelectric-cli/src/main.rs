//! Command-line front end for the photoelectric effect model.
//!
//! Prints the stopping voltage and display color for a chosen frequency,
//! and the spectrum strip and voltage curve a chart would be drawn from.

mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use photoelectric_core::{ModelConfig, PhotoelectricModel, Sampling, SpectrumOrientation};
use thiserror::Error;

use output::OutputFormat;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Model(#[from] photoelectric_core::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Spectrum orientation selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Orientation {
    /// Low frequencies red, high frequencies violet
    RedToViolet,
    /// Low frequencies violet, high frequencies red
    VioletToRed,
}

impl From<Orientation> for SpectrumOrientation {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::RedToViolet => SpectrumOrientation::RedToViolet,
            Orientation::VioletToRed => SpectrumOrientation::VioletToRed,
        }
    }
}

/// Photoelectric effect model: stopping voltage and spectrum colors.
#[derive(Parser)]
#[command(name = "photoelectric")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(short, long = "config", global = true)]
    config_file: Option<PathBuf>,

    /// Mapping of the frequency domain onto the visible band
    #[arg(long, value_enum, global = true)]
    orientation: Option<Orientation>,

    /// Work function of the metal (eV)
    #[arg(long, global = true)]
    work_function_ev: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Compute samples in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one light frequency
    Simulate {
        /// Light frequency (Hz); defaults to the selector default
        #[arg(long)]
        frequency: Option<f64>,

        /// Use the frequency as given instead of snapping it to the selector step
        #[arg(long)]
        no_snap: bool,
    },

    /// Print the spectrum strip colors
    Spectrum {
        /// Number of pixel columns
        #[arg(short, long, default_value = "600")]
        samples: usize,
    },

    /// Print the stopping-voltage curve
    Curve {
        /// Number of points
        #[arg(short, long, default_value = "100")]
        samples: usize,

        /// Mark this frequency on the curve (snapped to the selector step)
        #[arg(long)]
        marker: Option<f64>,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Merge the config file and command-line overrides into one configuration.
fn resolve_config(cli: &Cli) -> Result<ModelConfig> {
    let mut config = match &cli.config_file {
        Some(path) => config::from_file(path)?,
        None => ModelConfig::default(),
    };
    if let Some(orientation) = cli.orientation {
        config = config.with_orientation(orientation.into());
    }
    if let Some(ev) = cli.work_function_ev {
        config = config.with_work_function_ev(ev);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let model = PhotoelectricModel::new(resolve_config(cli)?)?;
    let format = cli.format;

    let rendered = match &cli.command {
        Commands::Simulate { frequency, no_snap } => {
            let reading = match (frequency, no_snap) {
                (Some(f), true) => model.select_exact(*f)?,
                (Some(f), false) => model.select(*f),
                (None, _) => model.default_reading(),
            };
            log::debug!("selected {:e} Hz", reading.frequency);
            output::render_reading(&reading, model.threshold_frequency(), format)?
        }

        Commands::Spectrum { samples } => {
            let strip = model.spectrum_strip(*samples);
            output::render_strip(&strip, format, cli.parallel)?
        }

        Commands::Curve { samples, marker } => {
            let curve = model.voltage_curve(*samples);
            let points = if cli.parallel {
                curve.par_collect()
            } else {
                curve.iter().collect()
            };
            let marker = marker.map(|f| model.select(f));
            output::render_curve(&points, marker.as_ref(), format)?
        }

        Commands::Config => output::render_config(model.config())?,
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "photoelectric",
            "simulate",
            "--orientation",
            "violet-to-red",
            "--work-function-ev",
            "2.3",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.orientation, SpectrumOrientation::VioletToRed);
        assert!((config.constants.work_function_ev() - 2.3).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_override_fails_model_build() {
        let cli = Cli::parse_from(["photoelectric", "config", "--work-function-ev=-1"]);
        let config = resolve_config(&cli).unwrap();
        assert!(PhotoelectricModel::new(config).is_err());
    }

    #[test]
    fn test_exact_out_of_range_frequency_fails() {
        let cli = Cli::parse_from([
            "photoelectric",
            "simulate",
            "--frequency",
            "2e15",
            "--no-snap",
        ]);
        assert!(matches!(
            run(&cli),
            Err(CliError::Model(
                photoelectric_core::Error::FrequencyOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_model_error_message_passes_through() {
        let err = photoelectric_core::Error::InvalidDomain { min: 8e14, max: 4e14 };
        let expected = err.to_string();
        assert_eq!(CliError::from(err).to_string(), expected);
        assert!(expected.starts_with("invalid frequency domain"));
    }

    #[test]
    fn test_run_subcommands() {
        for args in [
            vec!["photoelectric", "simulate", "--frequency", "7.3e14"],
            vec!["photoelectric", "spectrum", "--samples", "8", "--format", "csv"],
            vec!["photoelectric", "curve", "--samples", "8", "--parallel", "--marker", "6e14"],
            vec!["photoelectric", "curve", "--samples", "8", "--marker", "7e14", "--format", "csv"],
            vec!["photoelectric", "config"],
        ] {
            let cli = Cli::parse_from(args.iter().copied());
            assert!(run(&cli).is_ok(), "failed: {args:?}");
        }
    }
}
