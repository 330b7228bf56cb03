//! Every colorspace converts to and from the canonical colorspace
//! ([`Space::Rgb`]). A conversion between two non-canonical colorspaces
//! pivots through it.
//!
//! Conversions only operate on the chromatic channels; opacity passes through
//! unchanged.
//!
//! ```rust
//! use tincture::{Color, Space};
//! let red = Color::rgb(1.0, 0.0, 0.0);
//! let hsl = red.to_space(Space::Hsl);
//! assert_eq!(hsl.channels(), &[0.0, 1.0, 0.5]);
//! ```

use crate::{
    color::{Channels, Color, Component, Space},
    error::{Error, Result},
    models::{Cmyk, Gray, Hsl, Hsv, Lab, Lch, Model, Rgb, Xyz},
};

impl Color {
    /// Convert this color from its current colorspace to the specified
    /// colorspace.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        let canonical = self.space().pivot_to_canonical(self.raw_channels());
        Color::normalized(space, space.pivot_from_canonical(canonical), self.opacity())
    }

    /// Convert this color to the canonical colorspace.
    pub fn to_canonical(&self) -> Self {
        self.to_space(Space::CANONICAL)
    }
}

impl Space {
    /// Convert channels of this colorspace to canonical ([`Space::Rgb`])
    /// channels. The result is clipped into the canonical gamut.
    pub fn to_canonical(&self, channels: &[Component]) -> Result<Channels> {
        Ok(self.pivot_to_canonical(self.checked(channels)?))
    }

    /// Convert canonical ([`Space::Rgb`]) channels to channels of this
    /// colorspace.
    pub fn from_canonical(&self, channels: &[Component]) -> Result<Channels> {
        Ok(self.pivot_from_canonical(Space::CANONICAL.checked(channels)?))
    }

    pub(crate) fn checked(&self, channels: &[Component]) -> Result<Channels> {
        let count_error = || Error::ChannelCount {
            space: *self,
            expected: self.arity(),
            actual: channels.len(),
        };

        if channels.len() != self.arity() {
            return Err(count_error());
        }
        Channels::from_slice(channels).ok_or_else(count_error)
    }

    pub(crate) fn pivot_to_canonical(&self, channels: Channels) -> Channels {
        let rgb = match self {
            Space::Rgb => Rgb::from(channels),
            Space::Hsv => Hsv::from(channels).to_rgb(),
            Space::Hsl => Hsl::from(channels).to_rgb(),
            Space::Cmyk => Cmyk::from(channels).to_rgb(),
            Space::Xyz => Rgb::from(Xyz::from(channels)),
            Space::Lab => Rgb::from(Lab::from(channels).to_xyz()),
            Space::Lch => Rgb::from(Lch::from(channels).to_rectangular().to_xyz()),
            Space::Grayscale => Gray::from(channels).to_rgb(),
        };

        rgb.to_channels().map(|v| v.clamp(0.0, 1.0))
    }

    pub(crate) fn pivot_from_canonical(&self, channels: Channels) -> Channels {
        let rgb = Rgb::from(channels);

        match self {
            Space::Rgb => rgb.to_channels(),
            Space::Hsv => rgb.to_hsv().to_channels(),
            Space::Hsl => rgb.to_hsl().to_channels(),
            Space::Cmyk => rgb.to_cmyk().to_channels(),
            Space::Xyz => rgb.to_xyz().to_channels(),
            Space::Lab => Lab::from(rgb.to_xyz()).to_channels(),
            Space::Lch => Lab::from(rgb.to_xyz()).to_polar().to_channels(),
            Space::Grayscale => rgb.to_gray().to_channels(),
        }
    }
}

impl Rgb {
    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(self.to_array()).into()
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self.to_array()).into()
    }

    /// Convert to CMYK, pulling as much as possible into the key channel.
    pub fn to_cmyk(&self) -> Cmyk {
        let [cyan, magenta, yellow] = self.to_array().map(|v| 1.0 - v);
        let key = cyan.min(magenta).min(yellow);

        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = |v: Component| (v - key) / (1.0 - key);
        Cmyk::new(ink(cyan), ink(magenta), ink(yellow), key)
    }

    /// Convert to a single luma channel using the Rec. 709 weights.
    pub fn to_gray(&self) -> Gray {
        Gray::new(0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the canonical colorspace.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb([self.hue, self.saturation, self.value]).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the canonical colorspace.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb([self.hue, self.saturation, self.lightness]).into()
    }
}

impl Cmyk {
    /// Convert these inks to the canonical colorspace.
    pub fn to_rgb(&self) -> Rgb {
        let white = 1.0 - self.key;
        Rgb::new(
            (1.0 - self.cyan) * white,
            (1.0 - self.magenta) * white,
            (1.0 - self.yellow) * white,
        )
    }
}

impl Gray {
    /// Spread the luma over the three canonical channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.luma, self.luma, self.luma)
    }
}

impl From<[Component; 3]> for Rgb {
    fn from([red, green, blue]: [Component; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[Component; 3]> for Hsv {
    fn from([hue, saturation, value]: [Component; 3]) -> Self {
        Self::new(hue, saturation, value)
    }
}

impl From<[Component; 3]> for Hsl {
    fn from([hue, saturation, lightness]: [Component; 3]) -> Self {
        Self::new(hue, saturation, lightness)
    }
}

mod util {
    use crate::{
        color::Component,
        math::{almost_zero, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors get a hue of zero.
    fn rgb_to_hue_with_min_max([red, green, blue]: [Component; 3]) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (normalize_hue(hue), min, max)
    }

    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [hue, saturation, max]
    }

    pub fn hsv_to_rgb([hue, saturation, value]: [Component; 3]) -> [Component; 3] {
        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        [f(5.0), f(3.0), f(1.0)]
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        [hue, saturation, lightness]
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb([hue, saturation, lightness]: [Component; 3]) -> [Component; 3] {
        if saturation <= 0.0 {
            return [lightness, lightness, lightness];
        }

        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [f(0.0), f(8.0), f(4.0)]
    }
}
