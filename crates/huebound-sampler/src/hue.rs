//! Hue selectors: which slice of the color wheel a request samples from.

use std::convert::Infallible;
use std::str::FromStr;

use huebound_color::Hsb;
use serde_json::Value;

use crate::dictionary::{ColorFamily, Dictionary};

/// The whole wheel, both ends included.
const FULL_SPECTRUM: (f64, f64) = (0.0, 360.0);

/// What a request asks for in terms of hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HueSelector {
    /// Any hue.
    #[default]
    Any,
    /// Anywhere in a named family's interval.
    Family(ColorFamily),
    /// One exact degree. Only honoured strictly inside (0, 360); 0 and
    /// anything at or past 360 mean [`HueSelector::Any`].
    Degree(u16),
    /// The hue of a hex color, exactly as recovered (may be fractional).
    Hex(f64),
}

impl HueSelector {
    /// Parse free-form hue input.
    ///
    /// Tried in order: a leading integer strictly inside (0, 360), a
    /// family name, a 3- or 6-digit hex color. Anything else selects the
    /// full spectrum; malformed input is never an error. Note that `"123"`
    /// is therefore a degree, not `#112233`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if let Some(degree) = leading_integer(input).and_then(in_open_circle) {
            return Self::Degree(degree);
        }
        if let Some(family) = ColorFamily::from_name(input) {
            return Self::Family(family);
        }
        Self::hex(input).unwrap_or(Self::Any)
    }

    /// The hue of a `#rgb` / `#rrggbb` color.
    #[must_use]
    pub fn hex(input: &str) -> Option<Self> {
        Hsb::from_hex(input).map(|hsb| Self::Hex(hsb.h))
    }

    /// Read a selector from a JSON options value.
    ///
    /// Strings go through [`HueSelector::parse`]; numbers are truncated
    /// toward zero and kept when strictly inside (0, 360). Anything else
    /// is the full spectrum.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_f64()
                .map(f64::trunc)
                .filter(|d| *d > 0.0 && *d < 360.0)
                .map_or(Self::Any, |d| Self::Degree(d as u16)),
            _ => Self::Any,
        }
    }

    /// Whether this selects the grey family.
    #[must_use]
    pub fn is_monochrome(self) -> bool {
        self == Self::Family(ColorFamily::Monochrome)
    }

    /// The closed degree interval to draw from.
    ///
    /// Red's interval starts below zero; callers wrap negative draws.
    #[must_use]
    pub fn range(self, dictionary: &Dictionary) -> (f64, f64) {
        match self {
            Self::Any => FULL_SPECTRUM,
            Self::Family(family) => dictionary
                .get(family)
                .hue_range
                .map_or(FULL_SPECTRUM, |(lo, hi)| (f64::from(lo), f64::from(hi))),
            Self::Degree(d) if d > 0 && d < 360 => (f64::from(d), f64::from(d)),
            Self::Degree(_) => FULL_SPECTRUM,
            Self::Hex(h) => (h, h),
        }
    }
}

impl From<ColorFamily> for HueSelector {
    fn from(family: ColorFamily) -> Self {
        Self::Family(family)
    }
}

impl From<u16> for HueSelector {
    fn from(degree: u16) -> Self {
        Self::Degree(degree)
    }
}

impl From<&str> for HueSelector {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl FromStr for HueSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Parse the integer a string starts with: optional leading whitespace,
/// optional sign, then digits. Trailing text is ignored.
fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn in_open_circle(degree: i64) -> Option<u16> {
    if degree > 0 && degree < 360 {
        u16::try_from(degree).ok()
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
