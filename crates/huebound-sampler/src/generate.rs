//! The public entry point: a request in, one color or a batch out.

use std::fmt;

use huebound_color::FormattedColor;
use rand::RngExt;
use serde::Serialize;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::request::SampleRequest;
use crate::sampler::Sampler;
use crate::seed::Seed;

/// The result of one `generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// The request had no `count`.
    Single(FormattedColor),
    /// The request asked for `count` colors.
    Batch(Vec<FormattedColor>),
}

impl Output {
    /// All colors, whichever variant this is.
    #[must_use]
    pub fn colors(&self) -> &[FormattedColor] {
        match self {
            Self::Single(color) => std::slice::from_ref(color),
            Self::Batch(colors) => colors,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FormattedColor> {
        match self {
            Self::Single(color) => vec![color],
            Self::Batch(colors) => colors,
        }
    }
}

/// One color per line.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// Generate with the standard dictionary.
///
/// # Errors
///
/// [`crate::Error::ColorFamilyNotFound`] if a drawn hue matches no family.
/// Nothing is returned for a batch that fails part-way.
pub fn generate(request: &SampleRequest) -> Result<Output> {
    generate_with(Dictionary::standard(), request)
}

/// Generate against a specific dictionary, such as one built with
/// [`Dictionary::new`].
///
/// A seeded batch bumps the seed by one before every color, so color `i`
/// (from 0) is drawn with `seed + i + 1`: reproducible, but not `count`
/// copies of the same color.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with(dictionary: &Dictionary, request: &SampleRequest) -> Result<Output> {
    let seed = request.seed.as_ref().map(Seed::value);
    debug!(
        hue = ?request.hue,
        luminosity = %request.luminosity,
        format = %request.format,
        seed = ?seed,
        count = ?request.count,
        "generating"
    );

    let Some(count) = request.count else {
        return sample_one(dictionary, request, seed).map(Output::Single);
    };

    // `count` is caller-controlled; grow as colors arrive.
    let mut colors = Vec::new();
    let mut seed = seed;
    for _ in 0..count {
        seed = seed.map(|s| s.wrapping_add(1));
        colors.push(sample_one(dictionary, request, seed)?);
    }
    Ok(Output::Batch(colors))
}

fn sample_one(
    dictionary: &Dictionary,
    request: &SampleRequest,
    seed: Option<i64>,
) -> Result<FormattedColor> {
    let color = Sampler::new(dictionary, seed).sample(request.hue, request.luminosity)?;
    Ok(FormattedColor::render(color, request.format, || {
        request.alpha.unwrap_or_else(random_alpha)
    }))
}

/// Alpha is never seeded.
fn random_alpha() -> f64 {
    rand::rng().random::<f64>()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
