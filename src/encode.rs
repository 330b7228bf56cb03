//! Packed integer, hex string and 8-bit array encodings of a [`Color`].
//!
//! All encodings are of the canonical colorspace with 8 bits per channel.
//! Colors in other colorspaces are converted first and every channel is
//! quantized by rounding, so encoding is lossy beyond 8-bit precision.

use std::str::FromStr;

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
};

fn quantize(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Color {
    /// The canonical channels and opacity as 8-bit values, in
    /// `[red, green, blue, opacity]` order.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgb = self.to_space(Space::CANONICAL);
        let [red, green, blue] = [0, 1, 2].map(|i| quantize(rgb.raw_channels()[i]));
        [red, green, blue, quantize(rgb.opacity())]
    }

    /// Build a canonical color from `[red, green, blue, opacity]` 8-bit values.
    pub const fn from_rgba8([red, green, blue, opacity]: [u8; 4]) -> Self {
        Self::rgba8(red, green, blue, opacity)
    }

    /// The canonical channels and opacity as single precision floats, in
    /// `[red, green, blue, opacity]` order.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        let rgb = self.to_space(Space::CANONICAL);
        let c = rgb.raw_channels();
        [c[0] as f32, c[1] as f32, c[2] as f32, rgb.opacity() as f32]
    }

    /// Pack the color into a `0xAARRGGBB` integer.
    /// ```rust
    /// use tincture::Color;
    /// assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_packed_argb(), 0xFFFF0000);
    /// ```
    pub fn to_packed_argb(&self) -> u32 {
        let [red, green, blue, opacity] = self.to_rgba8();
        u32::from_be_bytes([opacity, red, green, blue])
    }

    /// Unpack a `0xAARRGGBB` integer.
    pub const fn from_packed_argb(argb: u32) -> Self {
        let [opacity, red, green, blue] = argb.to_be_bytes();
        Self::rgba8(red, green, blue, opacity)
    }

    /// Unpack a `0xRRGGBB` integer into an opaque color. The top byte is
    /// ignored.
    pub const fn from_packed_rgb(rgb: u32) -> Self {
        let [_, red, green, blue] = rgb.to_be_bytes();
        Self::rgb8(red, green, blue)
    }

    /// Format the color as `#RRGGBBAA` with uppercase digits.
    pub fn to_hex(&self) -> String {
        let [red, green, blue, opacity] = self.to_rgba8();
        format!("#{red:02X}{green:02X}{blue:02X}{opacity:02X}")
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` string. Digits are case-insensitive.
    /// Six digit strings produce opaque colors.
    /// ```rust
    /// use tincture::{Color, Error};
    /// let c = Color::from_hex("#FF000080").unwrap();
    /// assert_eq!(c.to_packed_argb(), 0x80FF0000);
    /// assert_eq!(Color::from_hex("FF0000"), Err(Error::MissingHexPrefix));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').ok_or(Error::MissingHexPrefix)?;

        if let Some((position, found)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(Error::HexDigit {
                found,
                position: position + 1,
            });
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| Error::HexLength {
                actual: digits.len(),
            })
        };

        match digits.len() {
            6 => Ok(Self::rgb8(byte(0)?, byte(1)?, byte(2)?)),
            8 => Ok(Self::rgba8(byte(0)?, byte(1)?, byte(2)?, byte(3)?)),
            actual => Err(Error::HexLength { actual }),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "palette")]
mod palette_interop {
    use palette::Srgba;

    use crate::color::{Color, Space};

    impl From<Color> for Srgba<f64> {
        fn from(value: Color) -> Self {
            let rgb = value.to_space(Space::CANONICAL);
            let c = rgb.raw_channels();
            Srgba::new(c[0], c[1], c[2], rgb.opacity())
        }
    }

    impl From<Srgba<f64>> for Color {
        fn from(value: Srgba<f64>) -> Self {
            let (red, green, blue, opacity) = value.into_components();
            Color::rgba(red, green, blue, opacity)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip_for_quantized_colors() {
        for argb in [0x00000000, 0xFFFFFFFF, 0x80FF0000, 0x12345678, 0xFEDCBA98] {
            assert_eq!(Color::from_packed_argb(argb).to_packed_argb(), argb);
        }

        let c = Color::rgba8(12, 34, 56, 78);
        assert_eq!(Color::from_packed_argb(c.to_packed_argb()), c);
    }

    #[test]
    fn packing_converts_to_canonical_first() {
        let hsl = Color::new(Space::Hsl, &[120.0, 1.0, 0.5], 1.0).unwrap();
        assert_eq!(hsl.to_packed_argb(), 0xFF00FF00);

        let cmyk = Color::new(Space::Cmyk, &[0.0, 0.0, 0.0, 1.0], 0.0).unwrap();
        assert_eq!(cmyk.to_packed_argb(), 0x00000000);
    }

    #[test]
    fn packing_rounds_to_nearest() {
        assert_eq!(Color::rgb(0.5, 0.499, 0.002).to_rgba8(), [128, 127, 1, 255]);
    }

    #[test]
    fn packed_rgb_is_opaque() {
        let c = Color::from_packed_rgb(0x00336699);
        assert_eq!(c.opacity(), 1.0);
        assert_eq!(c.to_packed_argb(), 0xFF336699);
        assert_eq!(Color::from_packed_rgb(0x12336699), c);
    }

    #[test]
    fn hex_round_trip() {
        let c = Color::rgba8(0xD2, 0x69, 0x1E, 0x80);
        assert_eq!(c.to_hex(), "#D2691E80");
        assert_eq!(Color::from_hex(&c.to_hex()), Ok(c));
        assert_eq!("#d2691e80".parse::<Color>(), Ok(c));
        assert_eq!(Color::from_hex("#D2691E"), Ok(c.opaque()));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("D2691E80"), Err(Error::MissingHexPrefix));
        assert_eq!(Color::from_hex(""), Err(Error::MissingHexPrefix));
        assert_eq!(Color::from_hex("#"), Err(Error::HexLength { actual: 0 }));
        assert_eq!(Color::from_hex("#FFF"), Err(Error::HexLength { actual: 3 }));
        assert_eq!(
            Color::from_hex("#FFFFFFFFF"),
            Err(Error::HexLength { actual: 9 })
        );
        assert_eq!(
            Color::from_hex("#FFG000"),
            Err(Error::HexDigit {
                found: 'G',
                position: 3
            })
        );
        // `from_str_radix` alone would accept a sign.
        assert_eq!(
            Color::from_hex("#+F0000"),
            Err(Error::HexDigit {
                found: '+',
                position: 1
            })
        );
    }

    #[test]
    fn float_arrays() {
        let c = Color::rgba(1.0, 0.5, 0.0, 0.25);
        assert_eq!(c.to_rgba_f32(), [1.0, 0.5, 0.0, 0.25]);
        assert_eq!(Color::from_rgba8([255, 0, 0, 255]), Color::rgb(1.0, 0.0, 0.0));
    }
}
