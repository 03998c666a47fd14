use core::str::FromStr;

use crate::{HexColorError, ResolvedColor, linear_to_srgb, srgb_to_linear};

/// A gamma-encoded colour as authors write it.
///
/// Components range from 0.0 to 1.0. Theme files spell these as `#RRGGBB`
/// strings; `0x` prefixes and bare digits are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct Srgb {
    /// Red component.
    pub red: f32,
    /// Green component.
    pub green: f32,
    /// Blue component.
    pub blue: f32,
}

impl Srgb {
    /// `#000000`.
    pub const BLACK: Self = Self::from_u32(0x00_00_00);
    /// `#FFFFFF`.
    pub const WHITE: Self = Self::from_u32(0xFF_FF_FF);
    /// `#9E9E9E`, the default separator stroke.
    pub const GREY: Self = Self::from_u32(0x9E_9E_9E);

    /// Creates a colour from gamma-encoded components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a colour from 8-bit channels.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    /// Unpacks a `0xRRGGBB` value; the top byte is ignored.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        let [_, red, green, blue] = rgb.to_be_bytes();
        Self::new_u8(red, green, blue)
    }

    /// Parses six hexadecimal digits, optionally prefixed by `#` or `0x`.
    ///
    /// # Errors
    ///
    /// [`HexColorError::InvalidLength`] unless exactly six digits follow the
    /// prefix, [`HexColorError::InvalidDigit`] with the byte index of the
    /// first non-hex character otherwise.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let digits = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if digits.len() != 6 {
            return Err(HexColorError::InvalidLength);
        }

        let prefix = hex.len() - digits.len();
        digits
            .bytes()
            .enumerate()
            .try_fold(0_u32, |rgb, (index, byte)| {
                char::from(byte)
                    .to_digit(16)
                    .map(|nibble| (rgb << 4) | nibble)
                    .ok_or(HexColorError::InvalidDigit(prefix + index))
            })
            .map(Self::from_u32)
    }

    /// Converts to linear space at full opacity.
    #[must_use]
    pub fn resolve(&self) -> ResolvedColor {
        ResolvedColor::new(
            srgb_to_linear(self.red),
            srgb_to_linear(self.green),
            srgb_to_linear(self.blue),
            1.0,
        )
    }
}

impl From<ResolvedColor> for Srgb {
    fn from(color: ResolvedColor) -> Self {
        Self::new(
            linear_to_srgb(color.red),
            linear_to_srgb(color.green),
            linear_to_srgb(color.blue),
        )
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl TryFrom<String> for Srgb {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value)
    }
}
