//! The color dictionary — eight named hue families and their envelopes.
//!
//! Each family owns a hue interval and a *lower-bounds* table: a list of
//! `(saturation, brightness)` points, saturation increasing and brightness
//! decreasing, that traces the darkest brightness still considered
//! pleasant at a given saturation. Sampling brightness above that curve
//! keeps colors away from mud and sludge.
//!
//! The tables are the published randomColor bounds and must stay
//! bit-for-bit identical: every seeded palette depends on them.

use std::fmt;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// ColorFamily
// ---------------------------------------------------------------------------

/// A named hue family.
///
/// The declaration order is the dictionary's scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Greys. Has no hue interval of its own; forces saturation to 0.
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl ColorFamily {
    /// The option name of this family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Parse a family from its name. Names are exact and lowercase.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|f| f.name() == name).copied()
    }

    /// All families in scan order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochrome, Self::Red, Self::Orange, Self::Yellow,
            Self::Green, Self::Blue, Self::Purple, Self::Pink,
        ]
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ColorDefinition
// ---------------------------------------------------------------------------

/// One dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDefinition {
    pub family: ColorFamily,
    /// Inclusive hue interval in degrees. Red dips below zero to cover
    /// the wrap at 360.
    pub hue_range: Option<(i16, i16)>,
    /// `(saturation, min brightness)` points of the envelope.
    pub lower_bounds: &'static [(u8, u8)],
    /// First and last saturation of `lower_bounds`.
    pub saturation_range: (u8, u8),
    /// Last and first brightness of `lower_bounds`.
    pub brightness_range: (u8, u8),
}

impl ColorDefinition {
    /// Build an entry, deriving the saturation and brightness ranges from
    /// the first and last envelope points.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDictionary`] when `lower_bounds` is empty or its
    /// saturations do not strictly increase, or when the hue interval is
    /// reversed.
    pub fn try_new(
        family: ColorFamily,
        hue_range: Option<(i16, i16)>,
        lower_bounds: &'static [(u8, u8)],
    ) -> Result<Self> {
        if lower_bounds.is_empty() {
            return Err(Error::InvalidDictionary(format!("{family}: empty lower bounds")));
        }
        if lower_bounds.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(Error::InvalidDictionary(format!(
                "{family}: lower-bound saturations must increase"
            )));
        }
        if let Some((lo, hi)) = hue_range {
            if lo > hi {
                return Err(Error::InvalidDictionary(format!(
                    "{family}: hue range {lo}..{hi} is reversed"
                )));
            }
        }
        Ok(Self::new(family, hue_range, lower_bounds))
    }

    const fn new(
        family: ColorFamily,
        hue_range: Option<(i16, i16)>,
        lower_bounds: &'static [(u8, u8)],
    ) -> Self {
        let first = lower_bounds[0];
        let last = lower_bounds[lower_bounds.len() - 1];
        Self {
            family,
            hue_range,
            lower_bounds,
            saturation_range: (first.0, last.0),
            brightness_range: (last.1, first.1),
        }
    }

    /// Whether `hue` falls inside this family's interval, both ends
    /// included. Hues must already be folded (see
    /// [`Dictionary::lookup_by_hue`]).
    #[must_use]
    pub fn contains_hue(&self, hue: f64) -> bool {
        self.hue_range
            .is_some_and(|(lo, hi)| hue >= f64::from(lo) && hue <= f64::from(hi))
    }

    /// Evaluate the lower-bounds envelope at `saturation`.
    ///
    /// Linear interpolation between the two bracketing points; 0 when no
    /// pair of points brackets the saturation.
    #[must_use]
    pub fn minimum_brightness(&self, saturation: f64) -> f64 {
        for pair in self.lower_bounds.windows(2) {
            let (s1, v1) = (f64::from(pair[0].0), f64::from(pair[0].1));
            let (s2, v2) = (f64::from(pair[1].0), f64::from(pair[1].1));

            if saturation >= s1 && saturation <= s2 {
                let m = (v2 - v1) / (s2 - s1);
                let b = v1 - m * s1;
                return m * saturation + b;
            }
        }
        0.0
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// The immutable table of color families.
#[derive(Debug)]
pub struct Dictionary {
    definitions: [ColorDefinition; 8],
}

/// The standard dictionary, shared read-only by every sampler.
pub static DICTIONARY: Dictionary = Dictionary {
    definitions: [
        ColorDefinition::new(ColorFamily::Monochrome, None, &[(0, 0), (100, 0)]),
        ColorDefinition::new(
            ColorFamily::Red,
            Some((-26, 18)),
            &[(20, 100), (30, 92), (40, 89), (50, 85), (60, 78), (70, 70), (80, 60), (90, 55), (100, 50)],
        ),
        ColorDefinition::new(
            ColorFamily::Orange,
            Some((19, 46)),
            &[(20, 100), (30, 93), (40, 88), (50, 86), (60, 85), (70, 70), (100, 70)],
        ),
        ColorDefinition::new(
            ColorFamily::Yellow,
            Some((47, 62)),
            &[(25, 100), (40, 94), (50, 89), (60, 86), (70, 84), (80, 82), (90, 80), (100, 75)],
        ),
        ColorDefinition::new(
            ColorFamily::Green,
            Some((63, 178)),
            &[(30, 100), (40, 90), (50, 85), (60, 81), (70, 74), (80, 64), (90, 50), (100, 40)],
        ),
        ColorDefinition::new(
            ColorFamily::Blue,
            Some((179, 257)),
            &[(20, 100), (30, 86), (40, 80), (50, 74), (60, 60), (70, 52), (80, 44), (90, 39), (100, 35)],
        ),
        ColorDefinition::new(
            ColorFamily::Purple,
            Some((258, 282)),
            &[(20, 100), (30, 87), (40, 79), (50, 70), (60, 65), (70, 59), (80, 52), (90, 45), (100, 42)],
        ),
        ColorDefinition::new(
            ColorFamily::Pink,
            Some((283, 334)),
            &[(20, 100), (30, 90), (40, 86), (60, 84), (80, 80), (90, 75), (100, 73)],
        ),
    ],
};

/// Hues at or above this fold down by 360 so red can be matched as one
/// interval.
const RED_FOLD: f64 = 334.0;

impl Dictionary {
    /// Build a dictionary from one entry per family, in
    /// [`ColorFamily::all`] order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDictionary`] when an entry sits in the wrong slot.
    pub fn new(definitions: [ColorDefinition; 8]) -> Result<Self> {
        for (def, expected) in definitions.iter().zip(ColorFamily::all()) {
            if def.family != *expected {
                return Err(Error::InvalidDictionary(format!(
                    "expected {expected} entry, found {}",
                    def.family
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// The standard dictionary.
    #[must_use]
    pub fn standard() -> &'static Self {
        &DICTIONARY
    }

    /// All entries in scan order.
    #[must_use]
    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.definitions
    }

    /// The entry for `family`.
    #[must_use]
    pub const fn get(&self, family: ColorFamily) -> &ColorDefinition {
        // Entries are stored in `ColorFamily` declaration order.
        &self.definitions[family as usize]
    }

    /// Look up an entry by family name.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&ColorDefinition> {
        ColorFamily::from_name(name).map(|family| self.get(family))
    }

    /// Find the first family whose hue interval contains `hue`.
    ///
    /// Hues in `[334, 360]` are folded to `[-26, 0]` first, so 334 itself
    /// resolves to red rather than pink.
    ///
    /// # Errors
    ///
    /// [`Error::ColorFamilyNotFound`] when no interval contains the hue,
    /// e.g. fractional hues in the one-degree gaps between families.
    pub fn lookup_by_hue(&self, hue: f64) -> Result<&ColorDefinition> {
        let folded = if (RED_FOLD..=360.0).contains(&hue) { hue - 360.0 } else { hue };

        self.definitions
            .iter()
            .find(|def| def.contains_hue(folded))
            .ok_or(Error::ColorFamilyNotFound(hue))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_follow_declaration_order() {
        for family in ColorFamily::all() {
            assert_eq!(Dictionary::standard().get(*family).family, *family);
        }
    }

    #[test]
    fn names_roundtrip() {
        for family in ColorFamily::all() {
            let def = DICTIONARY.lookup_by_name(family.name()).unwrap();
            assert_eq!(def.family, *family);
        }
        assert!(DICTIONARY.lookup_by_name("teal").is_none());
        assert!(DICTIONARY.lookup_by_name("Red").is_none());
    }

    #[test]
    fn every_degree_in_a_range_resolves_back() {
        for def in DICTIONARY.definitions() {
            let Some((lo, hi)) = def.hue_range else { continue };
            for degree in lo..=hi {
                // 334 is shared with red.
                if def.family == ColorFamily::Pink && degree == 334 {
                    continue;
                }
                let hue = f64::from(degree);
                let found = DICTIONARY.lookup_by_hue(hue).unwrap();
                assert_eq!(found.family, def.family, "hue {hue}");
            }
        }
    }

    #[test]
    fn whole_degrees_cover_the_circle() {
        for degree in 0..=360 {
            assert!(DICTIONARY.lookup_by_hue(f64::from(degree)).is_ok(), "hue {degree} uncovered");
        }
    }

    #[test]
    fn pink_red_edge_goes_to_red() {
        assert_eq!(DICTIONARY.lookup_by_hue(334.0).unwrap().family, ColorFamily::Red);
        assert_eq!(DICTIONARY.lookup_by_hue(333.0).unwrap().family, ColorFamily::Pink);
        assert_eq!(DICTIONARY.lookup_by_hue(360.0).unwrap().family, ColorFamily::Red);
    }

    #[test]
    fn monochrome_is_never_found_by_hue() {
        for degree in 0..360 {
            let def = DICTIONARY.lookup_by_hue(f64::from(degree)).unwrap();
            assert_ne!(def.family, ColorFamily::Monochrome);
        }
    }

    #[test]
    fn gaps_report_not_found() {
        assert_eq!(DICTIONARY.lookup_by_hue(18.5), Err(Error::ColorFamilyNotFound(18.5)));
        assert_eq!(DICTIONARY.lookup_by_hue(400.0), Err(Error::ColorFamilyNotFound(400.0)));
        assert!(DICTIONARY.lookup_by_hue(-30.0).is_err());
    }

    #[test]
    fn derived_ranges() {
        let red = DICTIONARY.get(ColorFamily::Red);
        assert_eq!(red.saturation_range, (20, 100));
        assert_eq!(red.brightness_range, (50, 100));

        let yellow = DICTIONARY.get(ColorFamily::Yellow);
        assert_eq!(yellow.saturation_range, (25, 100));
        assert_eq!(yellow.brightness_range, (75, 100));

        let mono = DICTIONARY.get(ColorFamily::Monochrome);
        assert_eq!(mono.saturation_range, (0, 100));
        assert_eq!(mono.brightness_range, (0, 0));
    }

    #[test]
    fn envelopes_are_monotonic() {
        for def in DICTIONARY.definitions() {
            for pair in def.lower_bounds.windows(2) {
                assert!(pair[0].0 < pair[1].0, "{}: saturation not increasing", def.family);
                assert!(pair[0].1 >= pair[1].1, "{}: brightness not decreasing", def.family);
            }
        }
    }

    #[test]
    fn custom_dictionary_from_standard_entries() {
        let mut defs: [ColorDefinition; 8] = DICTIONARY.definitions().try_into().unwrap();
        defs[ColorFamily::Red as usize] =
            ColorDefinition::try_new(ColorFamily::Red, Some((0, 18)), &[(20, 100), (100, 50)]).unwrap();
        let dict = Dictionary::new(defs).unwrap();

        assert_eq!(dict.get(ColorFamily::Red).hue_range, Some((0, 18)));
        assert_eq!(dict.get(ColorFamily::Red).brightness_range, (50, 100));
        // Folded 340 lands at -20, which the narrowed red no longer covers.
        assert_eq!(dict.lookup_by_hue(340.0), Err(Error::ColorFamilyNotFound(340.0)));
    }

    #[test]
    fn custom_dictionary_rejects_misplaced_entries() {
        let mut defs: [ColorDefinition; 8] = DICTIONARY.definitions().try_into().unwrap();
        defs.swap(1, 2);
        assert!(matches!(Dictionary::new(defs), Err(Error::InvalidDictionary(_))));
    }

    #[test]
    fn definition_rejects_bad_tables() {
        for result in [
            ColorDefinition::try_new(ColorFamily::Blue, Some((179, 257)), &[]),
            ColorDefinition::try_new(ColorFamily::Blue, Some((179, 257)), &[(50, 80), (50, 70)]),
            ColorDefinition::try_new(ColorFamily::Blue, Some((257, 179)), &[(20, 100), (100, 35)]),
        ] {
            assert!(matches!(result, Err(Error::InvalidDictionary(_))), "{result:?}");
        }
    }

    // ── Envelope ─────────────────────────────────────────────────────────

    #[test]
    fn envelope_hits_table_points() {
        let blue = DICTIONARY.get(ColorFamily::Blue);
        for (s, expected) in [(20.0, 100.0), (60.0, 60.0), (100.0, 35.0)] {
            let b = blue.minimum_brightness(s);
            assert!((b - expected).abs() < 1e-9, "at {s}: got {b}, expected {expected}");
        }
    }

    #[test]
    fn envelope_interpolates() {
        let blue = DICTIONARY.get(ColorFamily::Blue);
        // Between (30, 86) and (40, 80).
        let b = blue.minimum_brightness(35.0);
        assert!((b - 83.0).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn envelope_outside_is_zero() {
        let green = DICTIONARY.get(ColorFamily::Green);
        assert_eq!(green.minimum_brightness(10.0), 0.0);
        assert_eq!(green.minimum_brightness(0.0), 0.0);
        assert_eq!(DICTIONARY.get(ColorFamily::Monochrome).minimum_brightness(50.0), 0.0);
    }
}
