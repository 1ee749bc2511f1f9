// SPDX-License-Identifier: MIT
//
// Command-line arguments and their translation into a `SampleRequest`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use huebound_sampler::{ColorFormat, HueSelector, Luminosity, SampleRequest, Seed};

#[derive(Parser, Debug)]
#[command(
    name = "huebound",
    version,
    about = "Random colors that stay within pleasing regions of HSB space"
)]
pub struct Cli {
    /// Hue: a family name (red, blue, monochrome, ...), a degree in
    /// (0, 360) or a hex color.
    #[arg(long)]
    pub hue: Option<String>,

    /// Luminosity preset: bright, dark, light or random.
    #[arg(short, long)]
    pub luminosity: Option<String>,

    /// Output format: hex, hsvArray, hslArray, hsl, hsla, rgbArray, rgb, rgba.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Alpha for hsla / rgba. Random when omitted.
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Seed for reproducible output. Integers are used as is; any other
    /// text is hashed.
    #[arg(short, long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Generate this many colors.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// A JSON options document, e.g. '{"hue": "blue", "count": 3}'.
    #[arg(
        long,
        conflicts_with_all = ["hue", "luminosity", "format", "alpha", "seed", "count"]
    )]
    pub options: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Prefix each color with a 24-bit background swatch.
    #[arg(long, conflicts_with = "json")]
    pub swatch: bool,
}

impl Cli {
    /// Build the sampling request these arguments describe.
    pub fn request(&self) -> Result<SampleRequest> {
        if let Some(doc) = &self.options {
            return SampleRequest::from_json(doc).context("invalid --options document");
        }

        let mut request = SampleRequest::new();
        if let Some(hue) = &self.hue {
            request.hue = HueSelector::parse(hue);
            if request.hue == HueSelector::Any {
                warn!(hue = %hue, "unrecognised hue, sampling the full spectrum");
            }
        }
        if let Some(name) = &self.luminosity {
            request.luminosity = Luminosity::from_name(name);
            if request.luminosity.name() != Some(name.as_str()) {
                warn!(luminosity = %name, "unrecognised luminosity, using the natural envelope");
            }
        }
        if let Some(name) = &self.format {
            request.format = ColorFormat::from_name(name).unwrap_or_else(|| {
                warn!(format = %name, "unrecognised format, using hex");
                ColorFormat::Hex
            });
        }
        if let Some(alpha) = self.alpha {
            if !request.format.has_alpha() {
                warn!(alpha, format = %request.format, "alpha is ignored by this format");
            }
        }
        request.alpha = self.alpha;
        request.seed = self.seed.as_deref().map(str::parse::<Seed>).transpose()?;
        request.count = self.count;
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
