// SPDX-License-Identifier: MIT
//
// HSB, RGB and HSL value types and the conversions between them.
//
// Single-character names (h, s, b, v, r, g, k, p, q, t) follow the usual
// HSV/HSL notation.
#![allow(clippy::many_single_char_names)]
//
// None of these conversions use fused multiply-add: the seeded palettes
// are pinned to the exact rounding of the plain `a * b + c` sequence.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

use serde::Serialize;

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// A color in HSB (hue, saturation, brightness) space.
///
/// - `h`: hue angle in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `b`: brightness (value) in percent, `[0, 100]`
///
/// Sampled colors always carry whole numbers; colors recovered from hex
/// input may carry fractional components.
///
/// # Examples
///
/// ```
/// use huebound_color::Hsb;
///
/// let steel = Hsb::from_hex("#336699").unwrap();
/// assert_eq!(steel.h, 210.0);
/// assert_eq!(Hsb::new(210.0, 50.0, 60.0).to_hex(), "#4c7299");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsb {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation, 0 to 100.
    pub s: f64,
    /// Brightness, 0 to 100.
    pub b: f64,
}

impl Hsb {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// Parse a `#rgb` / `#rrggbb` string (the `#` is optional) into HSB.
    ///
    /// Returns `None` for anything else, including the 4- and 8-digit
    /// alpha forms.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        Rgb::from_hex(s).map(Rgb::to_hsb)
    }

    /// The triple as `[h, s, b]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.b]
    }

    /// Convert to 8-bit RGB using the six-sector formula.
    ///
    /// Hues of exactly 0 and 360 are nudged to 1 and 359: the sector
    /// formula is degenerate at the seam. Channels are truncated, not
    /// rounded.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = if self.h == 0.0 {
            1.0
        } else if self.h == 360.0 {
            359.0
        } else {
            normalize_hue(self.h)
        };

        let h = h / 360.0;
        let s = self.s / 100.0;
        let v = self.b / 100.0;

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        #[allow(clippy::cast_possible_truncation)]
        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Convert to HSL. Hue passes through untouched; saturation is
    /// rounded to two decimals, lightness is left exact.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let s = self.s / 100.0;
        let v = self.b / 100.0;
        let k = (2.0 - s) * v;

        // Black and pure white have no defined HSL saturation.
        let denom = if k < 1.0 { k } else { 2.0 - k };
        let saturation = if denom == 0.0 {
            0.0
        } else {
            (s * v / denom * 10000.0).round() / 100.0
        };

        Hsl::new(self.h, saturation, k / 2.0 * 100.0)
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.h, self.s, self.b)
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive, `#` optional).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();

        match bytes.len() {
            3 => {
                let r = parse_hex_digit(bytes[0])?;
                let g = parse_hex_digit(bytes[1])?;
                let b = parse_hex_digit(bytes[2])?;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Some(Self::new(
                parse_hex_byte(&bytes[0..2])?,
                parse_hex_byte(&bytes[2..4])?,
                parse_hex_byte(&bytes[4..6])?,
            )),
            _ => None,
        }
    }

    /// The channels as `[r, g, b]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`, always two digits per channel.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSB with saturation and brightness in percent.
    ///
    /// Greys (no chroma) get hue 0. The hue is normalised into `[0, 360)`.
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let c_max = r.max(g).max(b);
        let delta = c_max - r.min(g).min(b);
        let saturation = if c_max > 0.0 { delta / c_max } else { 0.0 };

        // `%` keeps the sign of the dividend, so a red-dominant color with
        // more blue than green lands below zero before normalisation.
        let hue = if delta == 0.0 {
            0.0
        } else if c_max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if c_max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsb::new(normalize_hue(hue), saturation * 100.0, c_max * 100.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Truncate a unit-range channel to 0–255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
