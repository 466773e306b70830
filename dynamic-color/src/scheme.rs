//! The normalized, version-independent dynamic color scheme.

use std::{fmt, str::FromStr};

use crate::color::Argb;

/// Light or dark theme selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Variant {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Variant {
    /// Both variants, light first.
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Dark];

    /// Lowercase name, also used as the suffix of variant-specific resources.
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Variant::Light),
            "dark" => Ok(Variant::Dark),
            other => Err(format!("unknown variant `{other}`, expected `light` or `dark`")),
        }
    }
}

macro_rules! color_roles {
    ($(
        $(#[$doc:meta])*
        $role:ident => $field:ident, $name:literal;
    )+) => {
        /// A semantic color slot of [`DynamicColorScheme`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $(
                $(#[$doc])*
                $role,
            )+
        }

        impl ColorRole {
            /// Every role, in declaration order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$role),+];

            /// camelCase name used by the host serialized form.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorRole::$role => $name,)+
                }
            }

            /// snake_case name, matching the field of [`DynamicColorScheme`].
            pub const fn snake_name(self) -> &'static str {
                match self {
                    $(ColorRole::$role => stringify!($field),)+
                }
            }
        }

        /// Dynamic color scheme with one optional color per role.
        ///
        /// An absent role is unavailable on the running platform release or
        /// was not produced by the strategy that built the scheme.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(rename_all = "camelCase", default)
        )]
        pub struct DynamicColorScheme {
            $(
                $(#[$doc])*
                pub $field: Option<Argb>,
            )+
        }

        impl DynamicColorScheme {
            /// Returns the color assigned to `role`.
            pub fn get(&self, role: ColorRole) -> Option<Argb> {
                match role {
                    $(ColorRole::$role => self.$field,)+
                }
            }

            /// Assigns or clears the color of `role`.
            pub fn set(&mut self, role: ColorRole, color: Option<Argb>) {
                match role {
                    $(ColorRole::$role => self.$field = color,)+
                }
            }
        }
    };
}

color_roles! {
    /// Key color of the primary tonal palette.
    PrimaryPaletteKeyColor => primary_palette_key_color, "primaryPaletteKeyColor";
    /// Key color of the secondary tonal palette.
    SecondaryPaletteKeyColor => secondary_palette_key_color, "secondaryPaletteKeyColor";
    /// Key color of the tertiary tonal palette.
    TertiaryPaletteKeyColor => tertiary_palette_key_color, "tertiaryPaletteKeyColor";
    /// Key color of the neutral tonal palette.
    NeutralPaletteKeyColor => neutral_palette_key_color, "neutralPaletteKeyColor";
    /// Key color of the neutral variant tonal palette.
    NeutralVariantPaletteKeyColor => neutral_variant_palette_key_color, "neutralVariantPaletteKeyColor";
    /// Key color of the error tonal palette.
    ErrorPaletteKeyColor => error_palette_key_color, "errorPaletteKeyColor";
    /// The background color of the scheme.
    Background => background, "background";
    /// Color used for content on top of `background`.
    OnBackground => on_background, "onBackground";
    /// The surface color of the scheme.
    Surface => surface, "surface";
    /// Dimmer surface color.
    SurfaceDim => surface_dim, "surfaceDim";
    /// Brighter surface color.
    SurfaceBright => surface_bright, "surfaceBright";
    /// Lowest-emphasis surface container.
    SurfaceContainerLowest => surface_container_lowest, "surfaceContainerLowest";
    /// Low-emphasis surface container.
    SurfaceContainerLow => surface_container_low, "surfaceContainerLow";
    /// Default surface container.
    SurfaceContainer => surface_container, "surfaceContainer";
    /// High-emphasis surface container.
    SurfaceContainerHigh => surface_container_high, "surfaceContainerHigh";
    /// Highest-emphasis surface container.
    SurfaceContainerHighest => surface_container_highest, "surfaceContainerHighest";
    /// Color used for content on top of `surface`.
    OnSurface => on_surface, "onSurface";
    /// A variant of the surface color.
    SurfaceVariant => surface_variant, "surfaceVariant";
    /// Color used for content on top of `surface_variant`.
    OnSurfaceVariant => on_surface_variant, "onSurfaceVariant";
    /// The outline color.
    Outline => outline, "outline";
    /// A variant of the outline color.
    OutlineVariant => outline_variant, "outlineVariant";
    /// An inverse of the surface color.
    InverseSurface => inverse_surface, "inverseSurface";
    /// Color used for content on top of `inverse_surface`.
    InverseOnSurface => inverse_on_surface, "inverseOnSurface";
    /// The shadow color.
    Shadow => shadow, "shadow";
    /// The scrim color.
    Scrim => scrim, "scrim";
    /// Tint used by tonal elevation overlays.
    SurfaceTint => surface_tint, "surfaceTint";
    /// The primary color of the scheme.
    Primary => primary, "primary";
    /// Dimmer primary color.
    PrimaryDim => primary_dim, "primaryDim";
    /// Color used for content on top of `primary`.
    OnPrimary => on_primary, "onPrimary";
    /// A container color for `primary`.
    PrimaryContainer => primary_container, "primaryContainer";
    /// Color used for content on top of `primary_container`.
    OnPrimaryContainer => on_primary_container, "onPrimaryContainer";
    /// Primary role with the same tone in light and dark themes.
    PrimaryFixed => primary_fixed, "primaryFixed";
    /// Dimmer fixed primary role.
    PrimaryFixedDim => primary_fixed_dim, "primaryFixedDim";
    /// Content color on `primary_fixed` roles.
    OnPrimaryFixed => on_primary_fixed, "onPrimaryFixed";
    /// Lower-emphasis content color on `primary_fixed` roles.
    OnPrimaryFixedVariant => on_primary_fixed_variant, "onPrimaryFixedVariant";
    /// An inverse of the primary color.
    InversePrimary => inverse_primary, "inversePrimary";
    /// The secondary color of the scheme.
    Secondary => secondary, "secondary";
    /// Dimmer secondary color.
    SecondaryDim => secondary_dim, "secondaryDim";
    /// Color used for content on top of `secondary`.
    OnSecondary => on_secondary, "onSecondary";
    /// A container color for `secondary`.
    SecondaryContainer => secondary_container, "secondaryContainer";
    /// Color used for content on top of `secondary_container`.
    OnSecondaryContainer => on_secondary_container, "onSecondaryContainer";
    /// Secondary role with the same tone in light and dark themes.
    SecondaryFixed => secondary_fixed, "secondaryFixed";
    /// Dimmer fixed secondary role.
    SecondaryFixedDim => secondary_fixed_dim, "secondaryFixedDim";
    /// Content color on `secondary_fixed` roles.
    OnSecondaryFixed => on_secondary_fixed, "onSecondaryFixed";
    /// Lower-emphasis content color on `secondary_fixed` roles.
    OnSecondaryFixedVariant => on_secondary_fixed_variant, "onSecondaryFixedVariant";
    /// The tertiary color of the scheme.
    Tertiary => tertiary, "tertiary";
    /// Dimmer tertiary color.
    TertiaryDim => tertiary_dim, "tertiaryDim";
    /// Color used for content on top of `tertiary`.
    OnTertiary => on_tertiary, "onTertiary";
    /// A container color for `tertiary`.
    TertiaryContainer => tertiary_container, "tertiaryContainer";
    /// Color used for content on top of `tertiary_container`.
    OnTertiaryContainer => on_tertiary_container, "onTertiaryContainer";
    /// Tertiary role with the same tone in light and dark themes.
    TertiaryFixed => tertiary_fixed, "tertiaryFixed";
    /// Dimmer fixed tertiary role.
    TertiaryFixedDim => tertiary_fixed_dim, "tertiaryFixedDim";
    /// Content color on `tertiary_fixed` roles.
    OnTertiaryFixed => on_tertiary_fixed, "onTertiaryFixed";
    /// Lower-emphasis content color on `tertiary_fixed` roles.
    OnTertiaryFixedVariant => on_tertiary_fixed_variant, "onTertiaryFixedVariant";
    /// The error color of the scheme.
    Error => error, "error";
    /// Dimmer error color.
    ErrorDim => error_dim, "errorDim";
    /// Color used for content on top of `error`.
    OnError => on_error, "onError";
    /// A container color for `error`.
    ErrorContainer => error_container, "errorContainer";
    /// Color used for content on top of `error_container`.
    OnErrorContainer => on_error_container, "onErrorContainer";
}

impl ColorRole {
    /// Whether the role keeps the same color in light and dark themes.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            ColorRole::PrimaryFixed
                | ColorRole::PrimaryFixedDim
                | ColorRole::OnPrimaryFixed
                | ColorRole::OnPrimaryFixedVariant
                | ColorRole::SecondaryFixed
                | ColorRole::SecondaryFixedDim
                | ColorRole::OnSecondaryFixed
                | ColorRole::OnSecondaryFixedVariant
                | ColorRole::TertiaryFixed
                | ColorRole::TertiaryFixedDim
                | ColorRole::OnTertiaryFixed
                | ColorRole::OnTertiaryFixedVariant
        )
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DynamicColorScheme {
    /// Iterates over every role and its color, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Option<Argb>)> + '_ {
        ColorRole::ALL.iter().map(|&role| (role, self.get(role)))
    }

    /// Number of roles that carry a color.
    pub fn populated(&self) -> usize {
        self.iter().filter(|(_, color)| color.is_some()).count()
    }

    /// Whether no role carries a color.
    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    /// Flat role-name to packed-color form handed to the host UI framework.
    pub fn to_map(&self) -> Vec<(&'static str, Option<u32>)> {
        self.iter()
            .map(|(role, color)| (role.name(), color.map(Argb::to_u32)))
            .collect()
    }
}
