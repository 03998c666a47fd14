//! # Colour types
//!
//! Stroke and fill attributes of the tooltip renderer are expressed as
//! [`ResolvedColor`] values in linear RGB. Authors usually write colours as
//! gamma-encoded [`Srgb`] values (or `#RRGGBB` strings in theme files) and
//! resolve them once.

mod srgb;
pub use srgb::Srgb;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    #[error("expected exactly 6 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

/// A colour in linear sRGB space with an opacity channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    /// Red component in linear RGB (0.0-1.0)
    pub red: f32,
    /// Green component in linear RGB (0.0-1.0)
    pub green: f32,
    /// Blue component in linear RGB (0.0-1.0)
    pub blue: f32,
    /// Opacity/alpha channel (0.0 = transparent, 1.0 = opaque)
    pub opacity: f32,
}

impl ResolvedColor {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a resolved colour from linear components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Gamma-encodes this colour, dropping opacity.
    #[must_use]
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from(*self)
    }
}

impl From<Srgb> for ResolvedColor {
    fn from(color: Srgb) -> Self {
        color.resolve()
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055_f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn parses_hex_with_prefixes() {
        let hash = Srgb::try_from_hex("#FF8000").unwrap();
        let zero_x = Srgb::try_from_hex("0xff8000").unwrap();
        let bare = Srgb::try_from_hex("ff8000").unwrap();

        assert_eq!(hash, zero_x);
        assert_eq!(hash, bare);
        assert!(approx_eq(hash.red, 1.0));
        assert!(approx_eq(hash.green, 128.0 / 255.0));
        assert!(approx_eq(hash.blue, 0.0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Srgb::try_from_hex("#FFF"),
            Err(HexColorError::InvalidLength)
        );
        assert!(matches!(
            Srgb::try_from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        ));
        assert!(matches!(
            "12345z".parse::<Srgb>(),
            Err(HexColorError::InvalidDigit(5))
        ));
    }

    #[test]
    fn linear_round_trip_preserves_components() {
        let grey = Srgb::GREY;
        let back = ResolvedColor::from(grey).to_srgb();

        assert!(approx_eq(grey.red, back.red));
        assert!(approx_eq(grey.green, back.green));
        assert!(approx_eq(grey.blue, back.blue));
    }

    #[test]
    fn named_colours_match_their_hex_spelling() {
        assert_eq!("#9E9E9E".parse::<Srgb>(), Ok(Srgb::GREY));
        assert_eq!("#ffffff".parse::<Srgb>(), Ok(Srgb::WHITE));
        assert_eq!(Srgb::from_u32(0xFF00_0000), Srgb::BLACK);
        assert_eq!(ResolvedColor::from(Srgb::BLACK), ResolvedColor::BLACK);
    }

    #[test]
    fn prefix_alone_is_too_short() {
        assert_eq!(Srgb::try_from_hex("#"), Err(HexColorError::InvalidLength));
        assert_eq!(Srgb::try_from_hex("0x12345"), Err(HexColorError::InvalidLength));
        assert_eq!(
            Srgb::try_from_hex("0x12345g"),
            Err(HexColorError::InvalidDigit(7))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_hex_string() {
        let color: Srgb = serde_json::from_str("\"#FFFFFF\"").unwrap();
        assert_eq!(color, Srgb::WHITE);

        let err = serde_json::from_str::<Srgb>("\"#12\"");
        assert!(err.is_err());
    }
}
