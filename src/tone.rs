//! Single color transforms: inversion, lightening and darkening.

use crate::{
    color::{Color, Component, Space},
    mix::{clamp_ratio, MixMode},
};

impl Color {
    /// Invert every canonical channel within its range. Colors in other
    /// colorspaces are inverted in the canonical colorspace and converted
    /// back. Opacity is not changed.
    /// ```rust
    /// use tincture::Color;
    /// let c = Color::rgb(1.0, 0.25, 0.0).invert();
    /// assert_eq!(c.channels(), &[0.0, 0.75, 1.0]);
    /// ```
    pub fn invert(&self) -> Color {
        let canonical = self.to_space(Space::CANONICAL).raw_channels();
        let ranges = Space::CANONICAL.channel_ranges();

        let inverted = [0, 1, 2].map(|i| {
            let (min, max) = ranges[i];
            max - (canonical[i] - min)
        });

        Color::normalized(Space::CANONICAL, inverted.into(), self.opacity()).to_space(self.space())
    }

    /// Move the color towards white by `ratio`. The ratio is clamped to
    /// `[0, 1]`.
    pub fn lighten(&self, ratio: Component) -> Color {
        self.tone_towards(Color::rgb(1.0, 1.0, 1.0), ratio)
    }

    /// Move the color towards black by `ratio`. The ratio is clamped to
    /// `[0, 1]`.
    pub fn darken(&self, ratio: Component) -> Color {
        self.tone_towards(Color::rgb(0.0, 0.0, 0.0), ratio)
    }

    fn tone_towards(&self, point: Color, ratio: Component) -> Color {
        let point = point.with_opacity(self.opacity());
        self.mix(&point, clamp_ratio(ratio), Space::CANONICAL, MixMode::Blend)
            .to_space(self.space())
    }
}
