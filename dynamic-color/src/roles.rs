//! Role to tonal-step assignments used when the platform only exposes tonal
//! palettes.

use crate::{
    palette::{TonalPalette, TonalRange},
    scheme::{ColorRole, DynamicColorScheme, Variant},
};

use ColorRole as R;
use TonalRange::{NeutralVariant as NV, Primary as P, Secondary as S, Tertiary as T};

/// Light-theme assignment of roles to `(range, tone)`.
pub static LIGHT_TONAL_ROLES: &[(ColorRole, TonalRange, u8)] = &[
    (R::Primary, P, 40),
    (R::OnPrimary, P, 100),
    (R::PrimaryContainer, P, 90),
    (R::OnPrimaryContainer, P, 10),
    (R::InversePrimary, P, 80),
    (R::Secondary, S, 40),
    (R::OnSecondary, S, 100),
    (R::SecondaryContainer, S, 90),
    (R::OnSecondaryContainer, S, 10),
    (R::Tertiary, T, 40),
    (R::OnTertiary, T, 100),
    (R::TertiaryContainer, T, 90),
    (R::OnTertiaryContainer, T, 10),
    (R::Background, NV, 98),
    (R::OnBackground, NV, 10),
    (R::Surface, NV, 98),
    (R::OnSurface, NV, 10),
    (R::SurfaceVariant, NV, 90),
    (R::OnSurfaceVariant, NV, 30),
    (R::InverseSurface, NV, 20),
    (R::InverseOnSurface, NV, 95),
    (R::Outline, NV, 50),
    (R::OutlineVariant, NV, 80),
    (R::Scrim, NV, 0),
    (R::SurfaceBright, NV, 98),
    (R::SurfaceDim, NV, 87),
    (R::SurfaceContainer, NV, 94),
    (R::SurfaceContainerHigh, NV, 92),
    (R::SurfaceContainerHighest, NV, 90),
    (R::SurfaceContainerLow, NV, 96),
    (R::SurfaceContainerLowest, NV, 100),
    (R::SurfaceTint, P, 40),
    (R::PrimaryFixed, P, 90),
    (R::PrimaryFixedDim, P, 80),
    (R::OnPrimaryFixed, P, 10),
    (R::OnPrimaryFixedVariant, P, 30),
    (R::SecondaryFixed, S, 90),
    (R::SecondaryFixedDim, S, 80),
    (R::OnSecondaryFixed, S, 10),
    (R::OnSecondaryFixedVariant, S, 30),
    (R::TertiaryFixed, T, 90),
    (R::TertiaryFixedDim, T, 80),
    (R::OnTertiaryFixed, T, 10),
    (R::OnTertiaryFixedVariant, T, 30),
];

/// Dark-theme assignment of roles to `(range, tone)`.
pub static DARK_TONAL_ROLES: &[(ColorRole, TonalRange, u8)] = &[
    (R::Primary, P, 80),
    (R::OnPrimary, P, 20),
    (R::PrimaryContainer, P, 30),
    (R::OnPrimaryContainer, P, 90),
    (R::InversePrimary, P, 40),
    (R::Secondary, S, 80),
    (R::OnSecondary, S, 20),
    (R::SecondaryContainer, S, 30),
    (R::OnSecondaryContainer, S, 90),
    (R::Tertiary, T, 80),
    (R::OnTertiary, T, 20),
    (R::TertiaryContainer, T, 30),
    (R::OnTertiaryContainer, T, 90),
    (R::Background, NV, 6),
    (R::OnBackground, NV, 90),
    (R::Surface, NV, 6),
    (R::OnSurface, NV, 90),
    (R::SurfaceVariant, NV, 30),
    (R::OnSurfaceVariant, NV, 80),
    (R::InverseSurface, NV, 90),
    (R::InverseOnSurface, NV, 20),
    (R::Outline, NV, 60),
    (R::OutlineVariant, NV, 30),
    (R::Scrim, NV, 0),
    (R::SurfaceBright, NV, 24),
    (R::SurfaceDim, NV, 6),
    (R::SurfaceContainer, NV, 12),
    (R::SurfaceContainerHigh, NV, 17),
    (R::SurfaceContainerHighest, NV, 22),
    (R::SurfaceContainerLow, NV, 10),
    (R::SurfaceContainerLowest, NV, 4),
    (R::SurfaceTint, P, 80),
    (R::PrimaryFixed, P, 90),
    (R::PrimaryFixedDim, P, 80),
    (R::OnPrimaryFixed, P, 10),
    (R::OnPrimaryFixedVariant, P, 30),
    (R::SecondaryFixed, S, 90),
    (R::SecondaryFixedDim, S, 80),
    (R::OnSecondaryFixed, S, 10),
    (R::OnSecondaryFixedVariant, S, 30),
    (R::TertiaryFixed, T, 90),
    (R::TertiaryFixedDim, T, 80),
    (R::OnTertiaryFixed, T, 10),
    (R::OnTertiaryFixedVariant, T, 30),
];

/// Assignment table for `variant`.
pub fn tonal_roles(variant: Variant) -> &'static [(ColorRole, TonalRange, u8)] {
    match variant {
        Variant::Light => LIGHT_TONAL_ROLES,
        Variant::Dark => DARK_TONAL_ROLES,
    }
}

/// The `(range, tone)` a role takes for `variant`, if the role is derived
/// from the tonal palette at all.
pub fn tonal_role(role: ColorRole, variant: Variant) -> Option<(TonalRange, u8)> {
    tonal_roles(variant)
        .iter()
        .find(|(candidate, _, _)| *candidate == role)
        .map(|&(_, range, tone)| (range, tone))
}

/// Projects a tonal palette onto a scheme. Roles missing from the table stay
/// absent.
pub fn scheme_from_palette(palette: &TonalPalette, variant: Variant) -> DynamicColorScheme {
    let mut scheme = DynamicColorScheme::default();
    for &(role, range, tone) in tonal_roles(variant) {
        scheme.set(role, palette.get(range, tone));
    }
    scheme
}
