//! Interpolation between two colors, and transitions that step a color
//! towards a target.

use crate::{
    color::{Color, Component, Space},
    mix::{clamp_ratio, MixMode},
};

/// A pair of colors that can be sampled anywhere between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    from: Color,
    to: Color,
    space: Space,
    mode: MixMode,
}

impl Color {
    /// Prepare an interpolation from this color to `other`, in `space`. The
    /// interpolation blends by default, see [`Interpolation::with_mode`].
    /// ```rust
    /// use tincture::{Color, Space};
    /// let ramp = Color::rgb(0.0, 0.0, 0.0).interpolate(&Color::rgb(1.0, 1.0, 1.0), Space::Rgb);
    /// assert_eq!(ramp.at(0.25).channels(), &[0.25, 0.25, 0.25]);
    /// ```
    pub fn interpolate(&self, other: &Self, space: Space) -> Interpolation {
        Interpolation {
            from: *self,
            to: *other,
            space,
            mode: MixMode::Blend,
        }
    }
}

impl Interpolation {
    /// Use a different [`MixMode`] to sample the interpolation.
    pub fn with_mode(self, mode: MixMode) -> Self {
        Self { mode, ..self }
    }

    /// The color at `t`, where 0 is the start and 1 is the end of the
    /// interpolation.
    pub fn at(&self, t: Component) -> Color {
        self.from.mix(&self.to, t, self.space, self.mode)
    }
}

/// A color that moves a fixed fraction of the remaining distance towards a
/// target every time it is stepped. Stepping at a fixed rate gives an ease-out
/// animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    value: Color,
    target: Color,
    ratio: Component,
    mode: MixMode,
}

impl Transition {
    /// Start a transition at `value` towards `target`, covering `ratio` of the
    /// remaining distance each step.
    pub fn new(value: Color, target: Color, ratio: Component, mode: MixMode) -> Self {
        Self {
            value,
            target,
            ratio: clamp_ratio(ratio),
            mode,
        }
    }

    /// The current color.
    pub fn value(&self) -> Color {
        self.value
    }

    /// The color the transition is moving towards.
    pub fn target(&self) -> Color {
        self.target
    }

    /// Returns true once the current color approximates the target.
    pub fn is_completed(&self) -> bool {
        self.value.approximates(&self.target)
    }

    /// Advance the transition by one step. The value snaps to the target once
    /// it approximates it.
    pub fn step(self) -> Self {
        if self.is_completed() {
            return Self {
                value: self.target,
                ..self
            };
        }

        let value = self
            .value
            .mix(&self.target, self.ratio, self.target.space(), self.mode);
        let value = if value.approximates(&self.target) {
            self.target
        } else {
            value
        };

        Self { value, ..self }
    }

    /// Continue from the current value towards a new target.
    pub fn retarget(self, target: Color) -> Self {
        Self { target, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let left = Color::rgb(0.1, 0.2, 0.3);
        let right = Color::rgb(0.5, 0.6, 0.7);
        let mixed = left.interpolate(&right, Space::Rgb).at(0.5);
        crate::assert_component_eq!(mixed.channels()[0], 0.3);
        crate::assert_component_eq!(mixed.channels()[1], 0.4);
        crate::assert_component_eq!(mixed.channels()[2], 0.5);
        assert_eq!(mixed.opacity(), 1.0);
        assert_eq!(mixed.space(), Space::Rgb);
    }

    #[test]
    fn endpoints() {
        let left = Color::new(Space::Lch, &[40.0, 20.0, 300.0], 0.5).unwrap();
        let right = Color::rgb(1.0, 0.5, 0.0);
        let ramp = left.interpolate(&right, Space::Lab).with_mode(MixMode::Pigment);
        assert_eq!(ramp.at(0.0), left.to_space(Space::Lab));
        assert_eq!(ramp.at(1.0), right.to_space(Space::Lab));
        assert_eq!(ramp.at(0.5).space(), Space::Lab);
    }

    #[test]
    fn transition_reaches_its_target() {
        let target = Color::rgb(0.0, 1.0, 0.0);
        let mut transition = Transition::new(Color::rgb(1.0, 0.0, 0.0), target, 0.5, MixMode::Blend);

        let half = transition.step();
        assert_eq!(half.value().channels(), &[0.5, 0.5, 0.0]);

        for _ in 0..100 {
            transition = transition.step();
        }
        assert!(transition.is_completed());
        assert_eq!(transition.value(), target);
    }

    #[test]
    fn stepping_is_pure() {
        let transition = Transition::new(Color::gray(0.0), Color::gray(1.0), 0.25, MixMode::Blend);
        assert_eq!(transition.step(), transition.step());
        assert_eq!(transition.value(), Color::gray(0.0));
    }

    #[test]
    fn zero_ratio_never_moves() {
        let transition = Transition::new(Color::gray(0.0), Color::gray(1.0), -1.0, MixMode::Blend);
        assert_eq!(transition.step().value(), Color::gray(0.0));
        assert!(!transition.step().is_completed());
    }

    #[test]
    fn retarget_keeps_the_current_value() {
        let transition = Transition::new(Color::gray(0.0), Color::gray(1.0), 0.5, MixMode::Blend)
            .step()
            .retarget(Color::gray(0.0));
        assert_eq!(transition.value(), Color::gray(0.5));

        let back = transition.step();
        assert_eq!(back.value(), Color::gray(0.25));
        assert_eq!(back.target(), Color::gray(0.0));
    }
}
