//! Tonal palettes loaded from the platform's `system_*` tonal resources.
//!
//! ## Usage
//!
//! [`TonalPalette::load`] reads the tonal steps the platform exposes and
//! derives the remaining neutral tones from each range's base color.

use tracing::trace;

use crate::{
    catalog::ResourceCatalog,
    color::Argb,
    luminance::set_luminance,
    resources::{ColorResources, ResourceKey},
};

/// Tones read directly from resources for every range the platform exposes.
pub const DIRECT_TONES: [u8; 13] = [100, 99, 95, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0];

/// Neutral tones the platform does not expose and that are derived from the
/// range's base color.
pub const SYNTHESIZED_TONES: [u8; 11] = [98, 96, 94, 92, 87, 24, 22, 17, 12, 6, 4];

/// Step of the resource used as the source of synthesized tones.
pub const DEFAULT_BASE_STEP: u16 = 600;

/// A family of colors sharing hue and chroma, varying only in tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TonalRange {
    /// Neutral range, used for plain surfaces.
    Neutral,
    /// Neutral variant range, used for surfaces and outlines.
    NeutralVariant,
    /// Primary accent range.
    Primary,
    /// Secondary accent range.
    Secondary,
    /// Tertiary accent range.
    Tertiary,
    /// Error range. No tonal resources exist for it.
    Error,
}

impl TonalRange {
    /// Every range.
    pub const ALL: [TonalRange; 6] = [
        TonalRange::Neutral,
        TonalRange::NeutralVariant,
        TonalRange::Primary,
        TonalRange::Secondary,
        TonalRange::Tertiary,
        TonalRange::Error,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Tones loaded directly from resources.
    pub const fn direct_tones(self) -> &'static [u8] {
        match self {
            TonalRange::Error => &[],
            _ => &DIRECT_TONES,
        }
    }

    /// Tones derived from the base color.
    pub const fn synthesized_tones(self) -> &'static [u8] {
        match self {
            TonalRange::Neutral | TonalRange::NeutralVariant => &SYNTHESIZED_TONES,
            _ => &[],
        }
    }
}

/// Converts a tone (0 darkest, 100 lightest) to a platform step
/// (0 lightest, 1000 darkest).
pub const fn step_for_tone(tone: u8) -> u16 {
    let tone = if tone > 100 { 100 } else { tone };
    (100 - tone as u16) * 10
}

/// Colors of every tonal range, indexed by tone `0..=100`.
#[derive(Clone, PartialEq, Eq)]
pub struct TonalPalette {
    tones: [[Option<Argb>; 101]; 6],
}

impl TonalPalette {
    /// Palette with no colors.
    pub fn empty() -> Self {
        Self {
            tones: [[None; 101]; 6],
        }
    }

    /// Builds a palette by asking `f` for every range and tone.
    pub fn from_fn(mut f: impl FnMut(TonalRange, u8) -> Option<Argb>) -> Self {
        let mut palette = Self::empty();
        for range in TonalRange::ALL {
            for tone in 0..=100 {
                palette.tones[range.index()][tone as usize] = f(range, tone);
            }
        }
        palette
    }

    /// Loads the palette from platform resources.
    ///
    /// Synthesized tones are derived from the resource at `base_step` of the
    /// same range; when that resource is unavailable they stay absent.
    pub fn load<R, C>(resources: &R, catalog: &C, base_step: u16) -> Self
    where
        R: ColorResources + ?Sized,
        C: ResourceCatalog + ?Sized,
    {
        let mut palette = Self::empty();
        for range in TonalRange::ALL {
            let lookup = |step: u16| {
                catalog
                    .tonal_key(range, step)
                    .and_then(|key| lookup_color(resources, &key))
            };
            for &tone in range.direct_tones() {
                palette.tones[range.index()][tone as usize] = lookup(step_for_tone(tone));
            }

            let synthesized = range.synthesized_tones();
            if synthesized.is_empty() {
                continue;
            }
            let Some(base) = lookup(base_step) else {
                trace!(?range, base_step, "no base color, synthesized tones stay absent");
                continue;
            };
            for &tone in synthesized {
                palette.tones[range.index()][tone as usize] =
                    Some(set_luminance(base, tone as f64));
            }
        }
        palette
    }

    /// Returns the color of `range` at `tone`.
    pub fn get(&self, range: TonalRange, tone: u8) -> Option<Argb> {
        self.tones[range.index()]
            .get(tone as usize)
            .copied()
            .flatten()
    }

    /// Number of populated slots.
    pub fn populated(&self) -> usize {
        self.tones.iter().flatten().filter(|slot| slot.is_some()).count()
    }
}

impl Default for TonalPalette {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for range in TonalRange::ALL {
            for tone in 0..=100u8 {
                if let Some(color) = self.get(range, tone) {
                    map.entry(&format_args!("{range:?}{tone}"), &color);
                }
            }
        }
        map.finish()
    }
}

/// Reads one color, turning an unavailable resource into `None`.
pub(crate) fn lookup_color<R>(resources: &R, key: &ResourceKey) -> Option<Argb>
where
    R: ColorResources + ?Sized,
{
    match resources.color(key) {
        Ok(color) => Some(color),
        Err(err) => {
            trace!("{err}");
            None
        }
    }
}
