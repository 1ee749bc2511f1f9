//! Request configuration: what to sample and how to hand it back.

use std::fmt;

use huebound_color::ColorFormat;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::hue::HueSelector;
use crate::seed::Seed;

// ---------------------------------------------------------------------------
// Luminosity
// ---------------------------------------------------------------------------

/// A coarse brightness preset layered on a family's envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Luminosity {
    /// The family's own saturation range and envelope.
    #[default]
    Natural,
    /// Saturation of at least 55.
    Bright,
    /// The top ten points of saturation, brightness capped 20 above the
    /// envelope.
    Dark,
    /// Saturation of at most 55, brightness in the upper half above the
    /// envelope.
    Light,
    /// Saturation and brightness anywhere in 0–100.
    Random,
}

impl Luminosity {
    /// The option name, or `None` for [`Luminosity::Natural`], which has
    /// no name of its own.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Natural => None,
            Self::Bright => Some("bright"),
            Self::Dark => Some("dark"),
            Self::Light => Some("light"),
            Self::Random => Some("random"),
        }
    }

    /// Parse a preset name. Unknown names are the natural envelope.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bright" => Self::Bright,
            "dark" => Self::Dark,
            "light" => Self::Light,
            "random" => Self::Random,
            _ => Self::Natural,
        }
    }
}

impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("natural"))
    }
}

// ---------------------------------------------------------------------------
// SampleRequest
// ---------------------------------------------------------------------------

/// Everything one `generate` call needs.
///
/// Defaults: any hue, natural luminosity, hex output, unseeded, a single
/// color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleRequest {
    pub hue: HueSelector,
    pub luminosity: Luminosity,
    pub format: ColorFormat,
    /// Alpha for `hsla` / `rgba`. Drawn fresh (and unseeded) when absent.
    pub alpha: Option<f64>,
    pub seed: Option<Seed>,
    /// `Some(n)` asks for a batch of `n` colors, even when `n` is 1.
    pub count: Option<usize>,
}

impl SampleRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hue(mut self, hue: impl Into<HueSelector>) -> Self {
        self.hue = hue.into();
        self
    }

    #[must_use]
    pub const fn with_luminosity(mut self, luminosity: Luminosity) -> Self {
        self.luminosity = luminosity;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Parse a JSON options document such as
    /// `{"hue": "blue", "luminosity": "dark", "count": 3, "seed": 7}`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOptions`] for malformed JSON or mistyped fields,
    /// [`Error::InvalidSeed`] for a seed that is neither integer nor string.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Build a request from an already-parsed options object.
    ///
    /// Unknown keys are ignored. Unrecognised `luminosity` and `format`
    /// names fall back to their defaults, and an unusable `hue` selects
    /// the full spectrum.
    ///
    /// # Errors
    ///
    /// See [`SampleRequest::from_json`].
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidOptions(format!("expected an options object, got {value}")));
        }

        let options = RawOptions::deserialize(value)?;
        let seed = match &options.seed {
            Some(seed) => Seed::from_value(seed)?,
            None => None,
        };

        Ok(Self {
            hue: options.hue.as_ref().map_or(HueSelector::Any, HueSelector::from_value),
            luminosity: options.luminosity.as_deref().map_or(Luminosity::Natural, Luminosity::from_name),
            format: options
                .format
                .as_deref()
                .and_then(ColorFormat::from_name)
                .unwrap_or_default(),
            alpha: options.alpha,
            seed,
            count: options.count,
        })
    }
}

/// The options object as it arrives, before interpretation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOptions {
    hue: Option<Value>,
    luminosity: Option<String>,
    format: Option<String>,
    alpha: Option<f64>,
    seed: Option<Value>,
    count: Option<usize>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
