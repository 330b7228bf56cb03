//! A [`Color`] represents a color that was specified in any of the supported
//! colorspaces.

use std::{fmt, ops::Deref, str::FromStr};

use bitflags::bitflags;

use crate::{
    error::{Error, Result},
    math::{loose_equals, normalize_hue},
    models::D65,
};

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// The largest arity of any [`Space`].
pub const MAX_ARITY: usize = 4;

/// The ordered chromatic channels of a color, stored inline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels {
    values: [Component; MAX_ARITY],
    len: usize,
}

impl Channels {
    /// Create channels from an array of up to [`MAX_ARITY`] values.
    pub(crate) const fn from_array<const N: usize>(array: [Component; N]) -> Self {
        assert!(N <= MAX_ARITY, "too many channels");

        let mut values = [0.0; MAX_ARITY];
        let mut i = 0;
        while i < N {
            values[i] = array[i];
            i += 1;
        }

        Self { values, len: N }
    }

    /// Create channels from a slice, or `None` when the slice holds more than
    /// [`MAX_ARITY`] values.
    pub fn from_slice(slice: &[Component]) -> Option<Self> {
        if slice.len() > MAX_ARITY {
            return None;
        }

        let mut values = [0.0; MAX_ARITY];
        values[..slice.len()].copy_from_slice(slice);
        Some(Self {
            values,
            len: slice.len(),
        })
    }

    /// Return the channels as a slice.
    pub fn as_slice(&self) -> &[Component] {
        &self.values[..self.len]
    }

    /// Return new channels with each channel mapped with the given function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        let mut result = *self;
        result.values[..self.len]
            .iter_mut()
            .for_each(|value| *value = f(*value));
        result
    }

    /// Combine two sets of channels of the same arity pairwise.
    pub(crate) fn zip_map(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        debug_assert_eq!(self.len, other.len);

        let mut result = *self;
        result.values[..self.len]
            .iter_mut()
            .zip(other.as_slice())
            .for_each(|(left, right)| *left = f(*left, *right));
        result
    }
}

impl Deref for Channels {
    type Target = [Component];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl From<[Component; 3]> for Channels {
    fn from(value: [Component; 3]) -> Self {
        Self::from_array(value)
    }
}

bitflags! {
    /// Describes how a single channel of a [`Space`] behaves.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChannelFlags : u8 {
        /// The channel is an angle and wraps around its range instead of
        /// being clamped.
        const HUE = 1 << 0;
    }
}

/// The closed set of colorspaces a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB. The canonical colorspace every conversion pivots
    /// through.
    Rgb = 0,
    /// Hue, saturation and value derived from [`Space::Rgb`].
    Hsv = 1,
    /// Hue, saturation and lightness derived from [`Space::Rgb`].
    Hsl = 2,
    /// Cyan, magenta, yellow and key (black).
    Cmyk = 3,
    /// CIE-XYZ with a D65 white point.
    Xyz = 4,
    /// CIE-Lab with a D65 white point.
    Lab = 5,
    /// The cylindrical polar form of [`Space::Lab`].
    Lch = 6,
    /// A single luma channel.
    Grayscale = 7,
}

/// Implemented by types that are tied to a single [`Space`].
pub trait HasSpace {
    /// The colorspace of the type.
    const SPACE: Space;
}

const UNIT: (Component, Component) = (0.0, 1.0);
const DEGREES: (Component, Component) = (0.0, 360.0);
const LIGHTNESS: (Component, Component) = (0.0, 100.0);
const OPPONENT: (Component, Component) = (-128.0, 128.0);

const RGB_RANGES: [(Component, Component); 3] = [UNIT, UNIT, UNIT];
const HUE_RANGES: [(Component, Component); 3] = [DEGREES, UNIT, UNIT];
const CMYK_RANGES: [(Component, Component); 4] = [UNIT, UNIT, UNIT, UNIT];
const XYZ_RANGES: [(Component, Component); 3] = [
    (0.0, D65::WHITE_POINT[0]),
    (0.0, D65::WHITE_POINT[1]),
    (0.0, D65::WHITE_POINT[2]),
];
const LAB_RANGES: [(Component, Component); 3] = [LIGHTNESS, OPPONENT, OPPONENT];
const LCH_RANGES: [(Component, Component); 3] = [LIGHTNESS, (0.0, 150.0), DEGREES];
const GRAY_RANGES: [(Component, Component); 1] = [UNIT];

const NO_FLAGS: ChannelFlags = ChannelFlags::empty();
const LEADING_HUE_FLAGS: [ChannelFlags; 3] = [ChannelFlags::HUE, NO_FLAGS, NO_FLAGS];
const TRAILING_HUE_FLAGS: [ChannelFlags; 3] = [NO_FLAGS, NO_FLAGS, ChannelFlags::HUE];
const PLAIN_FLAGS_1: [ChannelFlags; 1] = [NO_FLAGS];
const PLAIN_FLAGS_3: [ChannelFlags; 3] = [NO_FLAGS; 3];
const PLAIN_FLAGS_4: [ChannelFlags; 4] = [NO_FLAGS; 4];

impl Space {
    /// The colorspace all conversions pivot through.
    pub const CANONICAL: Space = Space::Rgb;

    /// Every colorspace, in tag order.
    pub const ALL: [Space; 8] = [
        Space::Rgb,
        Space::Hsv,
        Space::Hsl,
        Space::Cmyk,
        Space::Xyz,
        Space::Lab,
        Space::Lch,
        Space::Grayscale,
    ];

    /// The display name of the colorspace.
    pub const fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "RGB",
            Space::Hsv => "HSV",
            Space::Hsl => "HSL",
            Space::Cmyk => "CMYK",
            Space::Xyz => "XYZ",
            Space::Lab => "Lab",
            Space::Lch => "LCH",
            Space::Grayscale => "Grayscale",
        }
    }

    /// Number of chromatic channels, opacity excluded.
    pub const fn arity(&self) -> usize {
        self.channel_ranges().len()
    }

    /// Returns true for the canonical colorspace.
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Space::Rgb)
    }

    /// The valid `(min, max)` bounds of each channel, in channel order.
    pub const fn channel_ranges(&self) -> &'static [(Component, Component)] {
        match self {
            Space::Rgb => &RGB_RANGES,
            Space::Hsv | Space::Hsl => &HUE_RANGES,
            Space::Cmyk => &CMYK_RANGES,
            Space::Xyz => &XYZ_RANGES,
            Space::Lab => &LAB_RANGES,
            Space::Lch => &LCH_RANGES,
            Space::Grayscale => &GRAY_RANGES,
        }
    }

    /// How each channel behaves, in channel order.
    pub const fn channel_flags(&self) -> &'static [ChannelFlags] {
        match self {
            Space::Hsv | Space::Hsl => &LEADING_HUE_FLAGS,
            Space::Lch => &TRAILING_HUE_FLAGS,
            Space::Rgb | Space::Xyz | Space::Lab => &PLAIN_FLAGS_3,
            Space::Cmyk => &PLAIN_FLAGS_4,
            Space::Grayscale => &PLAIN_FLAGS_1,
        }
    }

    /// Bring every channel into the bounds of this colorspace. Hue channels
    /// wrap, the rest are clamped. NaN becomes the lower bound.
    pub(crate) fn normalize(&self, channels: Channels) -> Channels {
        debug_assert_eq!(channels.len, self.arity());

        let mut result = channels;
        for (i, value) in result.values[..channels.len].iter_mut().enumerate() {
            let (min, max) = self.channel_ranges()[i];
            *value = if value.is_nan() {
                min
            } else if self.channel_flags()[i].contains(ChannelFlags::HUE) {
                normalize_hue(*value)
            } else {
                value.clamp(min, max)
            };
        }
        result
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Space::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSpace(s.to_string()))
    }
}

impl TryFrom<u8> for Space {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Space::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownSpace(value.to_string()))
    }
}

/// An immutable color: a colorspace tag, the channels in that colorspace and
/// an opacity that is independent of the colorspace.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::ColorRepr", into = "repr::ColorRepr")
)]
pub struct Color {
    space: Space,
    channels: Channels,
    opacity: Component,
}

#[allow(clippy::eq_op)]
const fn clamp_unit(value: Component) -> Component {
    if value != value || value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

impl Color {
    /// Create a new [`Color`] in `space`. The number of channels must match
    /// the arity of `space`. Channels and opacity outside of their ranges are
    /// clamped, hues wrap around.
    /// ```rust
    /// use tincture::{Color, Space};
    /// let c = Color::new(Space::Hsv, &[120.0, 0.5, 0.5], 1.0).unwrap();
    /// assert!(Color::new(Space::Cmyk, &[0.0, 0.0, 0.0], 1.0).is_err());
    /// ```
    pub fn new(space: Space, channels: &[Component], opacity: Component) -> Result<Self> {
        Ok(Self::normalized(space, space.checked(channels)?, opacity))
    }

    /// Build a color from channels that are known to match the arity of
    /// `space`.
    pub(crate) fn normalized(space: Space, channels: Channels, opacity: Component) -> Self {
        Self {
            space,
            channels: space.normalize(channels),
            opacity: clamp_unit(opacity),
        }
    }

    /// An opaque color in the canonical colorspace.
    pub const fn rgb(red: Component, green: Component, blue: Component) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// A color in the canonical colorspace.
    pub const fn rgba(red: Component, green: Component, blue: Component, opacity: Component) -> Self {
        Self {
            space: Space::Rgb,
            channels: Channels::from_array([clamp_unit(red), clamp_unit(green), clamp_unit(blue)]),
            opacity: clamp_unit(opacity),
        }
    }

    /// An opaque color in the canonical colorspace from 8-bit channels.
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, u8::MAX)
    }

    /// A color in the canonical colorspace from 8-bit channels.
    pub const fn rgba8(red: u8, green: u8, blue: u8, opacity: u8) -> Self {
        Self::rgba(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
            opacity as Component / 255.0,
        )
    }

    /// An opaque grayscale color.
    pub const fn gray(value: Component) -> Self {
        Self {
            space: Space::Grayscale,
            channels: Channels::from_array([clamp_unit(value)]),
            opacity: 1.0,
        }
    }

    /// The colorspace the channels are expressed in.
    pub fn space(&self) -> Space {
        self.space
    }

    /// The chromatic channels.
    pub fn channels(&self) -> &[Component] {
        self.channels.as_slice()
    }

    /// The opacity, in `[0, 1]`.
    pub fn opacity(&self) -> Component {
        self.opacity
    }

    /// Return a single channel.
    pub fn channel(&self, index: usize) -> Result<Component> {
        self.channels
            .get(index)
            .copied()
            .ok_or(Error::ChannelIndex {
                space: self.space,
                index,
                arity: self.space.arity(),
            })
    }

    /// Return a copy of this color with one channel replaced.
    pub fn with_channel(&self, index: usize, value: Component) -> Result<Self> {
        if index >= self.channels.len {
            return Err(Error::ChannelIndex {
                space: self.space,
                index,
                arity: self.space.arity(),
            });
        }

        let mut channels = self.channels;
        channels.values[index] = value;
        Ok(Self::normalized(self.space, channels, self.opacity))
    }

    /// Return a copy of this color with a different opacity.
    pub fn with_opacity(&self, opacity: Component) -> Self {
        Self {
            opacity: clamp_unit(opacity),
            ..*self
        }
    }

    /// Return a fully opaque copy of this color.
    pub fn opaque(&self) -> Self {
        self.with_opacity(1.0)
    }

    /// Return a fully transparent copy of this color.
    pub fn transparent(&self) -> Self {
        self.with_opacity(0.0)
    }

    pub(crate) fn raw_channels(&self) -> Channels {
        self.channels
    }

    /// Returns true if `other`, expressed in this color's colorspace, is
    /// within floating point tolerance of this color. Hues are compared
    /// around the circle.
    pub fn approximates(&self, other: &Color) -> bool {
        let other = other.to_space(self.space);

        let channels_match = self
            .channels
            .iter()
            .zip(other.channels.iter())
            .zip(self.space.channel_flags())
            .all(|((&left, &right), flags)| {
                if flags.contains(ChannelFlags::HUE) {
                    let delta = normalize_hue(left - right);
                    loose_equals(delta, 0.0) || loose_equals(delta, 360.0)
                } else {
                    loose_equals(left, right)
                }
            });

        channels_match && loose_equals(self.opacity, other.opacity)
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::{Color, Component, Space};
    use crate::error::Error;

    /// Serialized form of a [`Color`]. Deserializing goes through
    /// [`Color::new`] so arity is validated.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct ColorRepr {
        space: Space,
        channels: Vec<Component>,
        opacity: Component,
    }

    impl TryFrom<ColorRepr> for Color {
        type Error = Error;

        fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
            Color::new(value.space, &value.channels, value.opacity)
        }
    }

    impl From<Color> for ColorRepr {
        fn from(value: Color) -> Self {
            Self {
                space: value.space(),
                channels: value.channels().to_vec(),
                opacity: value.opacity(),
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_channels() {
        let c = Color::new(Space::Rgb, &[0.1, 0.2, 0.3], 0.4).unwrap();
        assert_eq!(c.channels(), &[0.1, 0.2, 0.3]);
        assert_eq!(c.opacity(), 0.4);
        assert_eq!(c.space(), Space::Rgb);

        let c = Color::new(Space::Cmyk, &[0.1, 0.2, 0.3, 0.4], 1.0).unwrap();
        assert_eq!(c.channels(), &[0.1, 0.2, 0.3, 0.4]);

        let c = Color::new(Space::Grayscale, &[0.5], 1.0).unwrap();
        assert_eq!(c.channels(), &[0.5]);
    }

    #[test]
    fn channel_count_must_match_arity_for_every_space() {
        let too_many = [0.0; MAX_ARITY + 1];
        for space in Space::ALL {
            for len in 0..=MAX_ARITY + 1 {
                let result = Color::new(space, &too_many[..len], 1.0);
                if len == space.arity() {
                    assert!(result.is_ok(), "{space} with {len} channels");
                } else {
                    assert_eq!(
                        result,
                        Err(Error::ChannelCount {
                            space,
                            expected: space.arity(),
                            actual: len,
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let c = Color::new(Space::Rgb, &[-0.5, 1.5, 0.5], 2.0).unwrap();
        assert_eq!(c.channels(), &[0.0, 1.0, 0.5]);
        assert_eq!(c.opacity(), 1.0);

        let c = Color::new(Space::Lab, &[120.0, -200.0, 20.0], -1.0).unwrap();
        assert_eq!(c.channels(), &[100.0, -128.0, 20.0]);
        assert_eq!(c.opacity(), 0.0);

        let c = Color::rgba(2.0, -1.0, Component::NAN, 0.5);
        assert_eq!(c.channels(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn hue_channels_wrap() {
        let c = Color::new(Space::Hsv, &[370.0, 0.5, 0.5], 1.0).unwrap();
        assert_eq!(c.channels()[0], 10.0);

        let c = Color::new(Space::Lch, &[50.0, 20.0, -30.0], 1.0).unwrap();
        assert_eq!(c.channels()[2], 330.0);
    }

    #[test]
    fn nan_channels_become_the_lower_bound() {
        let c = Color::new(Space::Lab, &[Component::NAN, 0.0, 0.0], Component::NAN).unwrap();
        assert_eq!(c.channels()[0], 0.0);
        assert_eq!(c.opacity(), 0.0);
    }

    #[test]
    fn channel_index_is_checked() {
        let c = Color::gray(0.5);
        assert_eq!(c.channel(0), Ok(0.5));
        assert_eq!(
            c.channel(1),
            Err(Error::ChannelIndex {
                space: Space::Grayscale,
                index: 1,
                arity: 1,
            })
        );
        assert!(c.with_channel(3, 0.1).is_err());
    }

    #[test]
    fn functional_updates_leave_the_original_untouched() {
        let c = Color::rgb(0.1, 0.2, 0.3);
        let d = c.with_channel(1, 0.9).unwrap();
        assert_eq!(c.channels(), &[0.1, 0.2, 0.3]);
        assert_eq!(d.channels(), &[0.1, 0.9, 0.3]);

        assert_eq!(c.transparent().opacity(), 0.0);
        assert_eq!(c.transparent().opaque().opacity(), 1.0);
        assert_eq!(c.with_opacity(3.0).opacity(), 1.0);
    }

    #[test]
    fn eight_bit_constructors() {
        let c = Color::rgba8(255, 0, 51, 0);
        assert_eq!(c.channels(), &[1.0, 0.0, 0.2]);
        assert_eq!(c.opacity(), 0.0);
        assert_eq!(Color::rgb8(0, 0, 0).opacity(), 1.0);
    }

    #[test]
    fn space_metadata() {
        assert_eq!(Space::Rgb.arity(), 3);
        assert_eq!(Space::Cmyk.arity(), 4);
        assert_eq!(Space::Grayscale.arity(), 1);
        for space in Space::ALL {
            assert_eq!(space.channel_flags().len(), space.arity());
            assert_eq!(space.is_canonical(), space == Space::CANONICAL);
        }
    }

    #[test]
    fn space_from_tags() {
        assert_eq!("lab".parse::<Space>(), Ok(Space::Lab));
        assert_eq!("CMYK".parse::<Space>(), Ok(Space::Cmyk));
        assert_eq!(
            "oklab".parse::<Space>(),
            Err(Error::UnknownSpace("oklab".to_string()))
        );
        for space in Space::ALL {
            assert_eq!(Space::try_from(space as u8), Ok(space));
        }
        assert!(Space::try_from(8).is_err());
    }

    #[test]
    fn approximates_across_hue_seam() {
        let a = Color::new(Space::Hsv, &[359.9999999, 0.5, 0.5], 1.0).unwrap();
        let b = Color::new(Space::Hsv, &[0.0, 0.5, 0.5], 1.0).unwrap();
        assert!(a.approximates(&b));
        assert!(!a.approximates(&b.with_opacity(0.5)));
    }

    #[test]
    fn channels_helpers() {
        let c = Channels::from_array([0.1, 0.2]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.map(|v| v * 2.0).as_slice(), &[0.2, 0.4]);
        assert_eq!(
            c.zip_map(&Channels::from_array([1.0, 1.0]), |a, b| a + b)
                .as_slice(),
            &[1.1, 1.2]
        );
        assert!(Channels::from_slice(&[0.0; 5]).is_none());
    }
}
