//! Model a color in the canonical sRGB colorspace.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

tincture_macros::gen_model! {
    /// A color in the gamma encoded sRGB colorspace, the canonical colorspace
    /// every conversion pivots through.
    pub struct Rgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    pub(crate) fn to_array(&self) -> [Component; 3] {
        [self.red, self.green, self.blue]
    }

    /// Remove the sRGB gamma encoding.
    pub fn to_linear_light(&self) -> [Component; 3] {
        self.to_array().map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    /// Apply the sRGB gamma encoding to linear light components.
    pub fn from_linear_light(linear: [Component; 3]) -> Self {
        let [red, green, blue] = linear.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        });
        Self::new(red, green, blue)
    }

    /// Convert to CIE-XYZ with a D65 white point.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_linear_light()).into()
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Rgb::from_linear_light(transform(&FROM_XYZ, value.to_array()))
    }
}
