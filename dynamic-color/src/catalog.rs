//! Resource names for tonal steps and scheme roles.
//!
//! ## Usage
//!
//! The default [`SystemCatalog`] names Android's `system_*` color resources.
//! Hosts that mirror those colors under their own names can provide a
//! different [`ResourceCatalog`].

use std::borrow::Cow;

use crate::{
    palette::TonalRange,
    resources::ResourceKey,
    scheme::{ColorRole, Variant},
};

/// Maps palette steps and scheme roles to resource keys.
///
/// Returning `None` means the catalog has no resource for the slot; the
/// resolver treats it like a failed lookup.
pub trait ResourceCatalog {
    /// Key of the tonal step `step` (0 lightest, 1000 darkest) of `range`.
    fn tonal_key(&self, range: TonalRange, step: u16) -> Option<ResourceKey>;

    /// Key of `role` for `variant` on platforms that expose the full scheme.
    fn role_key(&self, role: ColorRole, variant: Variant) -> Option<ResourceKey>;
}

impl<C: ResourceCatalog + ?Sized> ResourceCatalog for &C {
    fn tonal_key(&self, range: TonalRange, step: u16) -> Option<ResourceKey> {
        (**self).tonal_key(range, step)
    }

    fn role_key(&self, role: ColorRole, variant: Variant) -> Option<ResourceKey> {
        (**self).role_key(role, variant)
    }
}

/// How palette key color resources are named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyColorNaming {
    /// `{prefix}palette_key_color_{palette}_{variant}`, as the platform names
    /// them.
    #[default]
    Platform,
    /// `{prefix}{palette}_palette_key_color_{variant}`, the role name followed
    /// by the variant like every other role. Matches hosts that mirror the
    /// scheme under role names.
    Role,
}

/// Catalog of the platform's `system_*` color resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemCatalog {
    /// Prepended to every resource name.
    pub prefix: Cow<'static, str>,
    /// Name pattern of the palette key color roles.
    pub key_colors: KeyColorNaming,
}

impl SystemCatalog {
    /// Catalog using the platform's own `system_` names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog using a custom name prefix.
    pub fn with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Catalog for resources mirrored under plain role names, such as
    /// `primary_light` and `primary_palette_key_color_light`.
    pub fn role_names() -> Self {
        Self::with_prefix("").with_key_colors(KeyColorNaming::Role)
    }

    /// Replaces the key color name pattern.
    pub fn with_key_colors(mut self, naming: KeyColorNaming) -> Self {
        self.key_colors = naming;
        self
    }
}

impl Default for SystemCatalog {
    fn default() -> Self {
        Self {
            prefix: Cow::Borrowed("system_"),
            key_colors: KeyColorNaming::Platform,
        }
    }
}

impl ResourceCatalog for SystemCatalog {
    fn tonal_key(&self, range: TonalRange, step: u16) -> Option<ResourceKey> {
        let family = match range {
            TonalRange::Neutral => "neutral1",
            TonalRange::NeutralVariant => "neutral2",
            TonalRange::Primary => "accent1",
            TonalRange::Secondary => "accent2",
            TonalRange::Tertiary => "accent3",
            TonalRange::Error => return None,
        };
        Some(ResourceKey::new(format!("{}{family}_{step}", self.prefix)))
    }

    fn role_key(&self, role: ColorRole, variant: Variant) -> Option<ResourceKey> {
        let palette = match role {
            ColorRole::PrimaryPaletteKeyColor => Some("primary"),
            ColorRole::SecondaryPaletteKeyColor => Some("secondary"),
            ColorRole::TertiaryPaletteKeyColor => Some("tertiary"),
            ColorRole::NeutralPaletteKeyColor => Some("neutral"),
            ColorRole::NeutralVariantPaletteKeyColor => Some("neutral_variant"),
            ColorRole::ErrorPaletteKeyColor => Some("error"),
            _ => None,
        };
        let name = match palette {
            Some(palette) if self.key_colors == KeyColorNaming::Platform => {
                format!("{}palette_key_color_{palette}_{variant}", self.prefix)
            }
            Some(_) => format!("{}{}_{variant}", self.prefix, role.snake_name()),
            None if role.is_fixed() => format!("{}{}", self.prefix, role.snake_name()),
            None => format!("{}{}_{variant}", self.prefix, role.snake_name()),
        };
        Some(ResourceKey::new(name))
    }
}
