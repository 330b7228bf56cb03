//! Models are structs that represent a color in a single colorspace. They are
//! a type safe way to read and build the channels of a [`Color`].
//!
//! ```rust
//! use tincture::{models::{Hsv, Model}, Color};
//! let hsv: Hsv = Color::rgb(1.0, 0.0, 0.0).to_model();
//! assert_eq!(hsv.hue, 0.0);
//! let back = Hsv::new(hsv.hue, hsv.saturation, 0.5).to_color(1.0);
//! ```

use crate::color::{Channels, Color, Component, HasSpace};

mod cmyk;
mod gray;
mod hsl;
mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use gray::Gray;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use rgb::Rgb;
pub use xyz::{Xyz, D65};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: HasSpace + From<Channels> {
    /// The channels of the model, in the order of its colorspace.
    fn to_channels(&self) -> Channels;

    /// Convert the model to a generic [`Color`] with the given opacity.
    fn to_color(&self, opacity: Component) -> Color {
        Color::normalized(Self::SPACE, self.to_channels(), opacity)
    }
}

impl Color {
    /// Convert this color to the colorspace of `M` and return it as a typed
    /// model. Opacity is dropped.
    pub fn to_model<M: Model>(&self) -> M {
        M::from(self.to_space(M::SPACE).raw_channels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Space;

    #[test]
    fn models_carry_their_space() {
        assert_eq!(Rgb::new(0.1, 0.2, 0.3).to_color(1.0).space(), Space::Rgb);
        assert_eq!(Hsv::new(10.0, 0.2, 0.3).to_color(1.0).space(), Space::Hsv);
        assert_eq!(Hsl::new(10.0, 0.2, 0.3).to_color(1.0).space(), Space::Hsl);
        assert_eq!(Cmyk::new(0.1, 0.2, 0.0, 0.3).to_color(1.0).space(), Space::Cmyk);
        assert_eq!(Xyz::new(0.1, 0.2, 0.3).to_color(1.0).space(), Space::Xyz);
        assert_eq!(Lab::new(50.0, 1.0, 2.0).to_color(1.0).space(), Space::Lab);
        assert_eq!(Lch::new(50.0, 1.0, 2.0).to_color(1.0).space(), Space::Lch);
        assert_eq!(Gray::new(0.5).to_color(1.0).space(), Space::Grayscale);
    }

    #[test]
    fn to_model_converts_first() {
        let color = Color::new(Space::Cmyk, &[0.0, 1.0, 1.0, 0.0], 0.5).unwrap();
        let rgb: Rgb = color.to_model();
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.0));

        let back = rgb.to_color(color.opacity());
        assert_eq!(back.opacity(), 0.5);
        assert_eq!(back.channels(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn model_to_color_is_normalized() {
        let c = Hsl::new(-120.0, 2.0, 0.5).to_color(1.0);
        assert_eq!(c.channels(), &[240.0, 1.0, 0.5]);
    }
}
