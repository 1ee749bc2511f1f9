//! The three-step HSB draw: hue, then saturation under the hue's family,
//! then brightness under the family's envelope.

use huebound_color::hsb::normalize_hue;
use huebound_color::Hsb;
use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::hue::HueSelector;
use crate::random::RandomSource;
use crate::request::Luminosity;

/// `bright` raises the saturation floor to this; `light` caps it here.
const SATURATION_PIVOT: f64 = 55.0;

/// How far `dark` lets brightness climb above the envelope.
const DARK_HEADROOM: f64 = 20.0;

/// Draws colors against a dictionary.
///
/// Owns its random state: one sampler per seeded color keeps every draw
/// independent of whatever else runs in the process.
#[derive(Debug, Clone)]
pub struct Sampler<'d> {
    dictionary: &'d Dictionary,
    source: RandomSource,
}

impl<'d> Sampler<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary, seed: Option<i64>) -> Self {
        Self { dictionary, source: RandomSource::new(seed) }
    }

    /// Draw one color.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ColorFamilyNotFound`] if the drawn hue falls outside
    /// every family.
    pub fn sample(&mut self, hue: HueSelector, luminosity: Luminosity) -> Result<Hsb> {
        let h = self.pick_hue(hue);
        let s = self.pick_saturation(h, hue, luminosity)?;
        let b = self.pick_brightness(h, s, luminosity)?;

        debug!(h, s, b, "sampled color");
        Ok(Hsb::new(h, s, b))
    }

    /// Draw a hue from the selector's interval, wrapped into [0, 360).
    pub fn pick_hue(&mut self, selector: HueSelector) -> f64 {
        let (lo, hi) = selector.range(self.dictionary);
        let drawn = self.source.within(lo, hi);
        let hue = normalize_hue(drawn);
        trace!(lo, hi, drawn, hue, "picked hue");
        hue
    }

    /// Draw a saturation for `hue`.
    ///
    /// Monochrome requests return 0 without consuming a draw.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ColorFamilyNotFound`] when `hue` matches no family.
    pub fn pick_saturation(
        &mut self,
        hue: f64,
        selector: HueSelector,
        luminosity: Luminosity,
    ) -> Result<f64> {
        if selector.is_monochrome() {
            return Ok(0.0);
        }
        if luminosity == Luminosity::Random {
            return Ok(self.source.within(0.0, 100.0));
        }

        let (s_min, s_max) = self.dictionary.lookup_by_hue(hue)?.saturation_range;
        let (s_min, s_max) = (f64::from(s_min), f64::from(s_max));

        let (s_min, s_max) = match luminosity {
            Luminosity::Bright => (SATURATION_PIVOT, s_max),
            Luminosity::Dark => (s_max - 10.0, s_max),
            Luminosity::Light => (s_min, SATURATION_PIVOT),
            Luminosity::Natural | Luminosity::Random => (s_min, s_max),
        };

        let saturation = self.source.within(s_min, s_max);
        trace!(s_min, s_max, saturation, "picked saturation");
        Ok(saturation)
    }

    /// Draw a brightness for `hue` at `saturation`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ColorFamilyNotFound`] when `hue` matches no family.
    pub fn pick_brightness(
        &mut self,
        hue: f64,
        saturation: f64,
        luminosity: Luminosity,
    ) -> Result<f64> {
        let floor = self.dictionary.lookup_by_hue(hue)?.minimum_brightness(saturation);

        let (b_min, b_max) = match luminosity {
            Luminosity::Dark => (floor, floor + DARK_HEADROOM),
            Luminosity::Light => ((100.0 + floor) / 2.0, 100.0),
            Luminosity::Random => (0.0, 100.0),
            Luminosity::Natural | Luminosity::Bright => (floor, 100.0),
        };

        let brightness = self.source.within(b_min, b_max);
        trace!(b_min, b_max, brightness, "picked brightness");
        Ok(brightness)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ColorFamily, DICTIONARY};
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn seeded(seed: i64) -> Sampler<'static> {
        Sampler::new(&DICTIONARY, Some(seed))
    }

    fn unseeded() -> Sampler<'static> {
        Sampler::new(&DICTIONARY, None)
    }

    #[test]
    fn seeded_samples_match_reference() {
        let red = seeded(42).sample(ColorFamily::Red.into(), Luminosity::Natural).unwrap();
        assert_eq!(red, Hsb::new(12.0, 85.0, 98.0));

        let blue_dark = seeded(7).sample(ColorFamily::Blue.into(), Luminosity::Dark).unwrap();
        assert_eq!(blue_dark, Hsb::new(217.0, 95.0, 39.0));

        let blue_light = seeded(7).sample(ColorFamily::Blue.into(), Luminosity::Light).unwrap();
        assert_eq!(blue_light, Hsb::new(217.0, 39.0, 91.0));

        let green_bright = seeded(7).sample(ColorFamily::Green.into(), Luminosity::Bright).unwrap();
        assert_eq!(green_bright, Hsb::new(119.0, 80.0, 68.0));

        let random = seeded(7).sample(HueSelector::Any, Luminosity::Random).unwrap();
        assert_eq!(random, Hsb::new(176.0, 56.0, 11.0));
    }

    #[test]
    fn monochrome_skips_the_saturation_draw() {
        let grey = seeded(7)
            .sample(ColorFamily::Monochrome.into(), Luminosity::Natural)
            .unwrap();
        assert_eq!(grey, Hsb::new(176.0, 0.0, 56.0));
    }

    #[test]
    fn family_hues_stay_in_family() {
        for family in ColorFamily::all().iter().filter(|f| **f != ColorFamily::Monochrome) {
            for seed in 0..200 {
                let mut sampler = seeded(seed);
                let hue = sampler.pick_hue((*family).into());
                let found = DICTIONARY.lookup_by_hue(hue).unwrap().family;
                // Pink's top degree folds into red.
                if *family == ColorFamily::Pink && hue == 334.0 {
                    continue;
                }
                assert_eq!(found, *family, "seed {seed} drew {hue}");
            }
        }
    }

    #[test]
    fn red_hues_wrap_to_positive() {
        for seed in 0..500 {
            let hue = seeded(seed).pick_hue(ColorFamily::Red.into());
            assert!((0.0..360.0).contains(&hue), "seed {seed} drew {hue}");
            assert!(hue <= 18.0 || hue >= 334.0, "seed {seed} drew {hue}");
        }
    }

    #[test]
    fn unseeded_full_spectrum_stays_below_360() {
        let mut sampler = unseeded();
        for _ in 0..2000 {
            let hue = sampler.pick_hue(HueSelector::Any);
            assert!((0.0..360.0).contains(&hue), "drew {hue}");
        }
    }

    #[test]
    fn bright_raises_saturation_floor() {
        let mut sampler = unseeded();
        for _ in 0..500 {
            let s = sampler.pick_saturation(200.0, HueSelector::Any, Luminosity::Bright).unwrap();
            assert!((55.0..=100.0).contains(&s), "got {s}");
        }
    }

    #[test]
    fn dark_saturation_is_top_ten_points() {
        let mut sampler = unseeded();
        for _ in 0..500 {
            let s = sampler.pick_saturation(100.0, HueSelector::Any, Luminosity::Dark).unwrap();
            assert!((90.0..=100.0).contains(&s), "got {s}");
        }
    }

    #[test]
    fn light_caps_saturation() {
        let mut sampler = unseeded();
        for _ in 0..500 {
            let s = sampler.pick_saturation(50.0, HueSelector::Any, Luminosity::Light).unwrap();
            assert!((25.0..=55.0).contains(&s), "got {s}");
        }
    }

    #[test]
    fn dark_brightness_has_headroom_of_twenty() {
        let blue = DICTIONARY.get(ColorFamily::Blue);
        let mut sampler = unseeded();
        for _ in 0..500 {
            let b = sampler.pick_brightness(220.0, 95.0, Luminosity::Dark).unwrap();
            let floor = blue.minimum_brightness(95.0);
            assert!(b >= floor.floor() && b <= floor + 20.0, "got {b}, floor {floor}");
        }
    }

    #[test]
    fn light_brightness_in_upper_half() {
        let green = DICTIONARY.get(ColorFamily::Green);
        let mut sampler = unseeded();
        for _ in 0..500 {
            let b = sampler.pick_brightness(120.0, 45.0, Luminosity::Light).unwrap();
            let midpoint = (100.0 + green.minimum_brightness(45.0)) / 2.0;
            assert!(b >= midpoint && b <= 100.0, "got {b}, midpoint {midpoint}");
        }
    }

    #[test]
    fn random_luminosity_ignores_envelope() {
        let mut sampler = unseeded();
        let mut lowest = f64::MAX;
        for _ in 0..2000 {
            let b = sampler.pick_brightness(60.0, 30.0, Luminosity::Random).unwrap();
            assert!((0.0..=100.0).contains(&b));
            lowest = lowest.min(b);
        }
        // The yellow envelope alone would keep brightness near 96.
        assert!(lowest < 50.0, "lowest draw {lowest}");
    }

    #[test]
    fn unknown_hue_is_an_error() {
        let mut sampler = seeded(1);
        assert_eq!(
            sampler.pick_saturation(18.5, HueSelector::Any, Luminosity::Natural),
            Err(Error::ColorFamilyNotFound(18.5))
        );
        assert_eq!(
            sampler.pick_brightness(46.5, 50.0, Luminosity::Natural),
            Err(Error::ColorFamilyNotFound(46.5))
        );
    }
}
