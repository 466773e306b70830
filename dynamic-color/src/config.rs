//! Resolver configuration.

use crate::palette::DEFAULT_BASE_STEP;

/// API level of Android 12, the first release with tonal system palettes.
pub const TONAL_PALETTE_MIN_API: u32 = 31;

/// API level of Android 14, the first release with per-role system colors.
pub const FULL_SCHEME_MIN_API: u32 = 34;

/// Tunables for scheme resolution.
///
/// The defaults match the Android releases that introduced each resource
/// generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Lowest API level that exposes tonal palette resources.
    pub tonal_min_api: u32,
    /// Lowest API level that exposes one resource per scheme role.
    pub full_scheme_min_api: u32,
    /// Tonal step whose resource is the source of synthesized tones.
    pub synthesis_base_step: u16,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tonal_min_api: TONAL_PALETTE_MIN_API,
            full_scheme_min_api: FULL_SCHEME_MIN_API,
            synthesis_base_step: DEFAULT_BASE_STEP,
        }
    }
}

impl ResolverConfig {
    /// Whether dynamic color is available at `api_level`.
    pub fn is_dynamic_color_available(&self, api_level: u32) -> bool {
        api_level >= self.tonal_min_api
    }
}
