//! Tone adjustment that keeps hue and chroma in the HCT color space.
//!
//! HCT takes hue and chroma from CAM16 and tone from L*, so moving a color
//! along the tone axis keeps the perceived hue stable.

use material_color_utilities::hct::Hct;

use crate::color::Argb;

/// Tones below this have no usable hue or chroma.
const MIN_CHROMATIC_TONE: f64 = 0.0001;
/// Tones above this have no usable hue or chroma.
const MAX_CHROMATIC_TONE: f64 = 99.9999;

/// Hue, chroma and tone of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Hue angle in degrees, `0.0..360.0`.
    pub hue: f64,
    /// Colorfulness; its maximum depends on hue and tone.
    pub chroma: f64,
    /// Perceptual lightness (L*), `0.0..=100.0`.
    pub tone: f64,
}

impl Appearance {
    /// Measures a color.
    pub fn of(color: Argb) -> Self {
        let hct = Hct::from_int(color.to_u32());
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            tone: hct.tone(),
        }
    }
}

/// Hue drift tolerated for any color with enough chroma.
pub const MAX_HUE_DRIFT: f64 = 1.0;

/// Results with less chroma than this carry no usable hue.
const MIN_HUE_CHROMA: f64 = 1.0;

/// Bound on how far 8-bit rounding moves a color in the CAM16 a/b plane.
const QUANTIZATION_CHROMA: f64 = 1.0;

/// Angular distance between two hues, in degrees.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Hue drift tolerated for a packed color of the given chroma.
///
/// Rounding to 8-bit channels moves a color by up to a fixed distance in the
/// a/b plane, which turns into a wider angle as chroma shrinks toward the
/// gamut's white and black ends.
pub fn hue_tolerance(chroma: f64) -> f64 {
    if chroma <= 0.0 {
        return 180.0;
    }
    QUANTIZATION_CHROMA
        .atan2(chroma)
        .to_degrees()
        .max(MAX_HUE_DRIFT)
}

/// Returns `color` moved to `tone`, keeping its hue.
///
/// Chroma is kept when the target tone can represent it and is reduced to
/// the largest displayable chroma otherwise. When the packed result cannot
/// carry the source hue within [`hue_tolerance`], the achromatic color of
/// that tone is returned instead of a tint of some other hue. Tones outside
/// `0.0..=100.0` are clamped. The alpha channel is carried over unchanged.
pub fn set_luminance(color: Argb, tone: f64) -> Argb {
    let tone = if tone.is_nan() {
        0.0
    } else {
        tone.clamp(0.0, 100.0)
    };
    let alpha = color.alpha();
    if !(MIN_CHROMATIC_TONE..=MAX_CHROMATIC_TONE).contains(&tone) {
        return argb_from_lstar(tone).with_alpha(alpha);
    }
    let base = Hct::from_int(color.to_u32());
    let adjusted = Argb::new(Hct::from(base.hue(), base.chroma(), tone).to_int());
    let measured = Appearance::of(adjusted);
    if measured.chroma < MIN_HUE_CHROMA
        || hue_distance(measured.hue, base.hue()) > hue_tolerance(measured.chroma)
    {
        return argb_from_lstar(tone).with_alpha(alpha);
    }
    adjusted.with_alpha(alpha)
}

/// Achromatic color with the given L*.
fn argb_from_lstar(tone: f64) -> Argb {
    Argb::new(Hct::from(0.0, 0.0, tone).to_int())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: [Argb; 3] = [
        Argb::from_rgb(0x67, 0x50, 0xA4),
        Argb::from_rgb(0xB3, 0x26, 0x1E),
        Argb::from_rgb(0x00, 0x61, 0xA4),
    ];

    /// Neutral and neutral-variant bases as the platform ships them.
    const NEUTRAL_SOURCES: [Argb; 2] = [
        Argb::from_rgb(0x60, 0x5D, 0x66),
        Argb::from_rgb(0x60, 0x5D, 0x71),
    ];

    fn is_neutral(color: Argb) -> bool {
        color.red() == color.green() && color.green() == color.blue()
    }

    #[test]
    fn test_boundary_tones_are_black_and_white() {
        for source in SOURCES {
            assert_eq!(set_luminance(source, 0.0), Argb::BLACK);
            assert_eq!(set_luminance(source, 100.0), Argb::WHITE);
            assert_eq!(set_luminance(source, 0.00001), Argb::BLACK);
            assert_eq!(set_luminance(source, 99.99999), Argb::WHITE);
        }
    }

    #[test]
    fn test_out_of_range_tones_are_clamped() {
        let source = SOURCES[0];
        assert_eq!(set_luminance(source, -20.0), Argb::BLACK);
        assert_eq!(set_luminance(source, 180.0), Argb::WHITE);
        assert_eq!(set_luminance(source, f64::NAN), Argb::BLACK);
    }

    #[test]
    fn test_hue_is_preserved() {
        for source in SOURCES {
            let hue = Appearance::of(source).hue;
            for tone in (30..=80).step_by(5) {
                let adjusted = set_luminance(source, tone as f64);
                assert!(!is_neutral(adjusted), "{source} at tone {tone} lost its hue");
                let measured = Appearance::of(adjusted);
                assert!(
                    hue_distance(measured.hue, hue) <= hue_tolerance(measured.chroma),
                    "{source} at tone {tone}: hue {} drifted from {hue}",
                    measured.hue
                );
            }
        }
    }

    #[test]
    fn test_every_tone_keeps_hue_or_turns_neutral() {
        // Near white and black the displayable chroma collapses, so a rounded
        // result may only hold the hue within the widened tolerance; anything
        // further off must come back achromatic.
        for source in SOURCES.into_iter().chain(NEUTRAL_SOURCES) {
            let hue = Appearance::of(source).hue;
            for tone in 1..=99 {
                let adjusted = set_luminance(source, tone as f64);
                if is_neutral(adjusted) {
                    continue;
                }
                let measured = Appearance::of(adjusted);
                let drift = hue_distance(measured.hue, hue);
                assert!(
                    drift <= hue_tolerance(measured.chroma),
                    "{source} at tone {tone}: {adjusted} drifted {drift:.2} degrees at chroma {:.2}",
                    measured.chroma
                );
            }
        }
    }

    #[test]
    fn test_off_white_of_a_saturated_color_is_neutral() {
        let red = Argb::from_rgb(0xB3, 0x26, 0x1E);
        let adjusted = set_luminance(red, 99.0);
        let measured = Appearance::of(adjusted);
        assert!(
            is_neutral(adjusted)
                || hue_distance(measured.hue, Appearance::of(red).hue)
                    <= hue_tolerance(measured.chroma)
        );
        assert!((measured.tone - 99.0).abs() < 1.0);
    }

    #[test]
    fn test_hue_tolerance() {
        assert_eq!(hue_tolerance(60.0), MAX_HUE_DRIFT);
        assert_eq!(hue_tolerance(120.0), MAX_HUE_DRIFT);
        assert!(hue_tolerance(4.0) > 10.0);
        assert_eq!(hue_tolerance(0.0), 180.0);
        assert_eq!(hue_distance(355.0, 5.0), 10.0);
        assert_eq!(hue_distance(26.0, 285.0), 101.0);
    }

    #[test]
    fn test_tone_is_hit() {
        for source in SOURCES {
            for tone in (10..=90).step_by(10) {
                let adjusted = Appearance::of(set_luminance(source, tone as f64));
                assert!(
                    (adjusted.tone - tone as f64).abs() < 1.0,
                    "{source}: wanted tone {tone}, got {}",
                    adjusted.tone
                );
            }
        }
    }

    #[test]
    fn test_tone_is_monotonic() {
        for source in SOURCES {
            let mut previous = 0.0;
            for tone in (5..=95).step_by(5) {
                let measured = Appearance::of(set_luminance(source, tone as f64)).tone;
                assert!(
                    measured > previous,
                    "{source}: tone {tone} measured {measured}, previous {previous}"
                );
                previous = measured;
            }
        }
    }

    #[test]
    fn test_chroma_never_grows() {
        let source = SOURCES[1];
        let chroma = Appearance::of(source).chroma;
        for tone in [4.0, 17.0, 87.0, 98.0] {
            let adjusted = Appearance::of(set_luminance(source, tone));
            assert!(adjusted.chroma <= chroma + 1.0);
        }
    }

    #[test]
    fn test_alpha_is_kept() {
        let translucent = SOURCES[0].with_alpha(0x80);
        assert_eq!(set_luminance(translucent, 50.0).alpha(), 0x80);
        assert_eq!(set_luminance(translucent, 0.0).alpha(), 0x80);
    }
}
