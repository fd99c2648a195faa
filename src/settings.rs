use std::fmt;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use itertools::Itertools;
use nalgebra::Complex;
use serde::Deserialize;

use crate::layer::{Layer, Stack};

/// Built-in configuration, used as the lowest-priority source.
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
/// Prefix for environment variable overrides, e.g. `TMM_WAVELENGTH=633`.
pub const ENV_PREFIX: &str = "TMM";


/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration for a single solve.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Wavelength in the length unit of the layer thicknesses.
    pub wavelength: f64,
    /// Angle of incidence from the stack normal, in the ambient medium.
    pub angle: f64,
    /// Interpret `angle` in degrees rather than radians.
    #[serde(default)]
    pub degrees: bool,
    /// Ambient medium, interior layers, then substrate.
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Settings {
    pub fn angle_radians(&self) -> f64 {
        if self.degrees {
            self.angle.to_radians()
        } else {
            self.angle
        }
    }

    /// Builds the validated layer stack.
    pub fn stack(&self) -> Result<Stack> {
        Ok(Stack::new(self.layers.clone())?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.wavelength.is_finite() && self.wavelength > 0.0) {
            return Err(anyhow!(
                "wavelength must be greater than 0, got {}",
                self.wavelength
            ));
        }
        if !self.angle.is_finite() {
            return Err(anyhow!("angle must be finite, got {}", self.angle));
        }
        if self.layers.len() < 2 {
            return Err(anyhow!(
                "at least an ambient and a substrate layer are required, got {}",
                self.layers.len()
            ));
        }
        Ok(())
    }
}

/// Loads settings from the built-in defaults, an optional config file,
/// `TMM_*` environment variables and finally the command line, each source
/// overriding the previous one.
pub fn load_config(args: &CliArgs) -> Result<Settings> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(path) = &args.config {
        log::info!("using configuration file {:?}", path);
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("failed to load configuration")?;

    let mut settings: Settings = config
        .try_deserialize()
        .context("failed to deserialize configuration")?;

    // Command-line arguments take precedence over all files.
    if let Some(wavelength) = args.wavelength {
        settings.wavelength = wavelength;
    }
    if let Some(angle) = args.angle {
        settings.angle = angle;
    }
    if args.degrees {
        settings.degrees = true;
    }
    if args.json {
        settings.output = OutputFormat::Json;
    }
    if !args.layers.is_empty() {
        settings.layers = parse_layers(&args.layers)?;
    }

    settings.validate()?;

    log::debug!("{:#?}", settings);

    Ok(settings)
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "TMM - reflectance and transmittance of thin film stacks",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Wavelength, in the same length unit as the layer thicknesses.
    pub wavelength: Option<f64>,

    /// Angle of incidence from the stack normal (radians unless --degrees is given).
    pub angle: Option<f64>,

    /// Layers as pairs of "index thickness", starting with the ambient medium
    /// and ending with the substrate. Indices may be complex, e.g. 1.5+0.01i.
    /// The thicknesses of the first and last layer are ignored.
    #[arg(value_name = "INDEX THICKNESS", num_args = 0..)]
    pub layers: Vec<String>,

    /// Configuration file (TOML) overriding the built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interpret the angle in degrees.
    #[arg(long)]
    pub degrees: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses "index thickness" token pairs into layers.
pub fn parse_layers(tokens: &[String]) -> Result<Vec<Layer>> {
    if tokens.len() % 2 != 0 {
        return Err(anyhow!(
            "layers must be given as \"index thickness\" pairs, got {} token(s)",
            tokens.len()
        ));
    }
    tokens
        .iter()
        .tuples()
        .map(|(index, thickness)| {
            let n = parse_index(index)?;
            let d = thickness
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid layer thickness '{}'", thickness))?;
            Ok(Layer::new(n, d))
        })
        .collect()
}

/// Parses a refractive index written as `re`, `re+imi` or `re-imj`.
///
/// The imaginary unit may be omitted when both parts are given, so `1.5+0.1`
/// reads as `1.5+0.1i`.
pub fn parse_index(s: &str) -> Result<Complex<f64>> {
    let s = s.trim();
    if let Ok(n) = s.parse::<Complex<f64>>() {
        return Ok(n);
    }

    // a sign that is neither leading nor part of an exponent separates the parts
    let has_inner_sign = s
        .char_indices()
        .skip(1)
        .any(|(i, c)| matches!(c, '+' | '-') && !s[..i].ends_with(['e', 'E']));
    let unitless = !s.ends_with(['i', 'j', '+', '-']);

    if has_inner_sign && unitless {
        if let Ok(n) = format!("{}i", s).parse::<Complex<f64>>() {
            return Ok(n);
        }
    }

    Err(anyhow!("invalid refractive index '{}'", s))
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings:")?;
        writeln!(f, "  - Wavelength: {:.6}", self.wavelength)?;
        writeln!(
            f,
            "  - Angle: {:.6} {}",
            self.angle,
            if self.degrees { "deg" } else { "rad" }
        )?;
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(
                f,
                "  - Layer {}: n = {:.6} + {:.6}i, d = {:.6}",
                i, layer.n.re, layer.n.im, layer.d
            )?;
        }
        Ok(())
    }
}
