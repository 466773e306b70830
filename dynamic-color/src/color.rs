//! Packed ARGB color values as handed out by platform color resources.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A color packed as `0xAARRGGBB`, the layout Android returns from
/// `Resources.getColor`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Creates a color from its packed representation.
    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates an opaque color from 8-bit sRGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Returns the packed representation.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the same color with a different alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }
}

impl From<u32> for Argb {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

// Android hands colors across JNI as a signed `int`.
impl From<i32> for Argb {
    fn from(argb: i32) -> Self {
        Self(argb as u32)
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({self})")
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Error returned when parsing a hex color string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArgbError {
    /// The string did not start with `#`.
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    /// The string had neither 6 nor 8 hex digits.
    #[error("color `{0}` must have 6 or 8 hex digits")]
    InvalidLength(String),
    /// The digits were not valid hexadecimal.
    #[error("color `{0}` is not valid hexadecimal")]
    InvalidDigit(String),
}

impl FromStr for Argb {
    type Err = ParseArgbError;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseArgbError::MissingHash(s.to_owned()))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseArgbError::InvalidDigit(s.to_owned()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseArgbError::InvalidLength(s.to_owned()))?;
        match digits.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(ParseArgbError::InvalidLength(s.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb::new(0x8067_50A4);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x67);
        assert_eq!(color.green(), 0x50);
        assert_eq!(color.blue(), 0xA4);
        assert_eq!(color.with_alpha(0xFF), Argb::from_rgb(0x67, 0x50, 0xA4));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("#6750A4".parse::<Argb>(), Ok(Argb::new(0xFF67_50A4)));
        assert_eq!("#336750a4".parse::<Argb>(), Ok(Argb::new(0x3367_50A4)));
        assert_eq!(Argb::new(0xFF67_50A4).to_string(), "#FF6750A4");
        assert!(matches!(
            "6750A4".parse::<Argb>(),
            Err(ParseArgbError::MissingHash(_))
        ));
        assert!(matches!(
            "#6750A".parse::<Argb>(),
            Err(ParseArgbError::InvalidLength(_))
        ));
        assert!(matches!(
            "#GG50A4".parse::<Argb>(),
            Err(ParseArgbError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_signed_jni_int() {
        assert_eq!(Argb::from(-1_i32), Argb::WHITE);
        assert_eq!(Argb::from(0xFF00_0000_u32 as i32), Argb::BLACK);
    }
}
