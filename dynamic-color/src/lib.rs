//! dynamic-color resolves Material dynamic color schemes from the color
//! resources a platform exposes.
//!
//! # Resource generations
//!
//! Android exposes dynamic colors in three generations, selected by API level:
//!
//! - Below Android 12 (API 31) there is no dynamic color and every role
//!   resolves to `None`.
//! - Android 12 and 13 expose tonal palettes only. Roles are projected from a
//!   [`TonalPalette`] through a fixed role table, and the neutral tones the
//!   platform lacks are synthesized with [`set_luminance`].
//! - Android 14 (API 34) and later expose one resource per role, read
//!   directly.
//!
//! The result is always a [`DynamicColorScheme`] with one optional color per
//! [`ColorRole`], whatever generation produced it.
//!
//! # Usage
//!
//! Any [`ColorResources`] implementation can back a resolver. [`MapResources`]
//! is an in-memory table for tests and tooling:
//!
//! ```
//! use dynamic_color::{Argb, MapResources, SchemeResolver};
//!
//! let mut resources = MapResources::new();
//! resources.insert("system_primary_dark", Argb::new(0xFFD0_BCFF));
//!
//! let scheme = SchemeResolver::new(&resources, 34).dark();
//! assert_eq!(scheme.primary, Some(Argb::new(0xFFD0_BCFF)));
//! assert_eq!(scheme.secondary, None);
//! ```
//!
//! On Android the `android` module reads the application context's resources
//! through JNI.
#![deny(missing_docs, clippy::unwrap_used)]

#[cfg(target_os = "android")]
pub mod android;
pub mod catalog;
pub mod color;
pub mod config;
pub mod luminance;
pub mod palette;
pub mod resolver;
pub mod resources;
pub mod roles;
pub mod scheme;

pub use crate::{
    catalog::{KeyColorNaming, ResourceCatalog, SystemCatalog},
    color::{Argb, ParseArgbError},
    config::{FULL_SCHEME_MIN_API, ResolverConfig, TONAL_PALETTE_MIN_API},
    luminance::{Appearance, MAX_HUE_DRIFT, hue_distance, hue_tolerance, set_luminance},
    palette::{TonalPalette, TonalRange},
    resolver::{
        ApiTier, SchemeResolver, dynamic_dark_color_scheme, dynamic_light_color_scheme,
        is_dynamic_color_available, resolve_with,
    },
    resources::{ColorResources, MapResources, ResourceKey, ResourceUnavailable, UnavailableReason},
    roles::scheme_from_palette,
    scheme::{ColorRole, DynamicColorScheme, Variant},
};
