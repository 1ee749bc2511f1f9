// SPDX-License-Identifier: MIT
//
// Output formats.
//
// A request names one `ColorFormat`; rendering an `Hsb` with it yields a
// `FormattedColor`, a closed set of variants whose `Display` produces the
// CSS-like strings and whose `Serialize` produces either that string or
// a plain JSON array.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::hsb::{Hsb, Hsl, Rgb};

// ─── ColorFormat ─────────────────────────────────────────────────────────────

/// The representation a sampled color is returned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `#rrggbb`.
    #[default]
    Hex,
    /// `[h, s, b]`.
    HsvArray,
    /// `[h, s, l]`.
    HslArray,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
    /// `[r, g, b]`.
    RgbArray,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
}

impl ColorFormat {
    /// The option name of this format (`"hsvArray"`, `"rgba"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::HsvArray => "hsvArray",
            Self::HslArray => "hslArray",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::RgbArray => "rgbArray",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }

    /// Parse a format from its option name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|f| f.name() == name).copied()
    }

    /// All supported formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Hex, Self::HsvArray, Self::HslArray, Self::Hsl,
            Self::Hsla, Self::RgbArray, Self::Rgb, Self::Rgba,
        ]
    }

    /// Whether this format carries an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Hsla | Self::Rgba)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── FormattedColor ──────────────────────────────────────────────────────────

/// A sampled color rendered in one specific format.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedColor {
    Hex(String),
    HsvArray([f64; 3]),
    HslArray([f64; 3]),
    Hsl(Hsl),
    Hsla(Hsl, f64),
    RgbArray([u8; 3]),
    Rgb(Rgb),
    Rgba(Rgb, f64),
}

impl FormattedColor {
    /// Render `color` in `format`.
    ///
    /// `alpha` is only called for the alpha-carrying formats, so a caller
    /// that draws a random alpha does not pay for it otherwise.
    pub fn render(color: Hsb, format: ColorFormat, alpha: impl FnOnce() -> f64) -> Self {
        match format {
            ColorFormat::Hex => Self::Hex(color.to_hex()),
            ColorFormat::HsvArray => Self::HsvArray(color.to_array()),
            ColorFormat::HslArray => Self::HslArray(color.to_hsl().to_array()),
            ColorFormat::Hsl => Self::Hsl(color.to_hsl()),
            ColorFormat::Hsla => Self::Hsla(color.to_hsl(), alpha()),
            ColorFormat::RgbArray => Self::RgbArray(color.to_rgb().to_array()),
            ColorFormat::Rgb => Self::Rgb(color.to_rgb()),
            ColorFormat::Rgba => Self::Rgba(color.to_rgb(), alpha()),
        }
    }

    /// The format this value was rendered in.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::Hex(_) => ColorFormat::Hex,
            Self::HsvArray(_) => ColorFormat::HsvArray,
            Self::HslArray(_) => ColorFormat::HslArray,
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Hsla(..) => ColorFormat::Hsla,
            Self::RgbArray(_) => ColorFormat::RgbArray,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Rgba(..) => ColorFormat::Rgba,
        }
    }

    /// The 8-bit RGB value behind this color, when the format keeps enough
    /// information to recover it.
    ///
    /// HSL views are lossy (saturation is rounded) and return `None`.
    #[must_use]
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Hex(hex) => Rgb::from_hex(hex),
            Self::HsvArray([h, s, b]) => Some(Hsb::new(*h, *s, *b).to_rgb()),
            Self::RgbArray([r, g, b]) => Some(Rgb::new(*r, *g, *b)),
            Self::Rgb(rgb) | Self::Rgba(rgb, _) => Some(*rgb),
            Self::HslArray(_) | Self::Hsl(_) | Self::Hsla(..) => None,
        }
    }
}

impl fmt::Display for FormattedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::HsvArray([a, b, c]) | Self::HslArray([a, b, c]) => {
                write!(f, "[{a}, {b}, {c}]")
            }
            Self::Hsl(hsl) => write!(f, "{hsl}"),
            Self::Hsla(hsl, alpha) => {
                write!(f, "hsla({}, {}%, {}%, {alpha})", hsl.h, hsl.s, hsl.l)
            }
            Self::RgbArray([r, g, b]) => write!(f, "[{r}, {g}, {b}]"),
            Self::Rgb(rgb) => write!(f, "{rgb}"),
            Self::Rgba(rgb, alpha) => {
                write!(f, "rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b)
            }
        }
    }
}

impl Serialize for FormattedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::HsvArray(values) | Self::HslArray(values) => serializer.collect_seq(values),
            Self::RgbArray(values) => serializer.collect_seq(values),
            _ => serializer.collect_str(self),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
