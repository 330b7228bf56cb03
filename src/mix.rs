//! Combine two colors under one of the [`MixMode`]s.

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    math::lerp,
};

/// Selects how [`Color::mix`] combines two colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum MixMode {
    /// Interpolate every channel and the opacity linearly in the target
    /// colorspace.
    #[default]
    Blend = 0,
    /// Mix like paint: yellow and blue make green, and complementary colors
    /// mix towards dark rather than bright midpoints.
    Pigment = 1,
    /// Keep the channels of the first color and only interpolate the opacity.
    OpacityOnly = 2,
}

impl MixMode {
    /// Every mode, in tag order.
    pub const ALL: [MixMode; 3] = [MixMode::Blend, MixMode::Pigment, MixMode::OpacityOnly];

    /// The name of the mode as accepted by [`MixMode::from_str`].
    pub const fn name(&self) -> &'static str {
        match self {
            MixMode::Blend => "blend",
            MixMode::Pigment => "pigment",
            MixMode::OpacityOnly => "opacity_only",
        }
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MixMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnexpectedMode(s.to_string()))
    }
}

impl TryFrom<u8> for MixMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        MixMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnexpectedMode(value.to_string()))
    }
}

/// Clamp a mixing ratio into `[0, 1]`. NaN is treated as 0.
pub(crate) fn clamp_ratio(ratio: Component) -> Component {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

impl Color {
    /// Mix this color with `other`. Both colors are converted to `space` first
    /// and the result is expressed in `space`. A `ratio` of 0 yields this
    /// color, 1 yields `other`; values outside of `[0, 1]` are clamped.
    ///
    /// [`MixMode::OpacityOnly`] never takes channels from `other`, so at a
    /// ratio of 1 only the opacity is that of `other`.
    /// ```rust
    /// use tincture::{Color, MixMode, Space};
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// let green = Color::rgb(0.0, 1.0, 0.0);
    /// let mixed = red.mix(&green, 0.5, Space::Rgb, MixMode::Blend);
    /// assert_eq!(mixed.channels(), &[0.5, 0.5, 0.0]);
    /// ```
    pub fn mix(&self, other: &Color, ratio: Component, space: Space, mode: MixMode) -> Color {
        let ratio = clamp_ratio(ratio);
        let left = self.to_space(space);
        let right = other.to_space(space);

        match mode {
            MixMode::Blend => Color::normalized(
                space,
                left.raw_channels()
                    .zip_map(&right.raw_channels(), |a, b| lerp(a, b, ratio)),
                lerp(left.opacity(), right.opacity(), ratio),
            ),
            MixMode::Pigment => {
                if ratio == 0.0 {
                    left
                } else if ratio == 1.0 {
                    right
                } else {
                    pigment::mix(&left, &right, ratio).to_space(space)
                }
            }
            MixMode::OpacityOnly => {
                left.with_opacity(lerp(left.opacity(), right.opacity(), ratio))
            }
        }
    }
}

/// Pigment mixing through the Mixbox latent space. Colors are decomposed
/// into a few real pigments, mixed by concentration and rendered back with
/// Kubelka-Munk. Mixbox works in single precision.
mod pigment {
    use crate::{
        color::{Color, Component, Space},
        math::lerp,
    };

    pub fn mix(left: &Color, right: &Color, ratio: Component) -> Color {
        let to_rgb = |color: &Color| {
            let c = color.to_space(Space::CANONICAL).raw_channels();
            [c[0] as f32, c[1] as f32, c[2] as f32]
        };

        let mixed = mixbox::lerp_float(&to_rgb(left), &to_rgb(right), ratio as f32);

        Color::normalized(
            Space::CANONICAL,
            mixed.map(Component::from).into(),
            lerp(left.opacity(), right.opacity(), ratio),
        )
    }
}
