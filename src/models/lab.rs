//! Models for the rectangular and polar forms of CIE-Lab.

use crate::{
    color::{Component, HasSpace, Space},
    math::{almost_zero, normalize_hue},
    models::xyz::{Xyz, D65},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tincture_macros::gen_model! {
    /// A color in the CIE-Lab colorspace with a D65 white point.
    pub struct Lab {
        /// The lightness component, `[0, 100]`.
        pub lightness: Component,
        /// The green-red opponent axis.
        pub a: Component,
        /// The blue-yellow opponent axis.
        pub b: Component,
    }
}

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

impl Lab {
    /// Convert this rectangular model into its cylindrical polar form.
    /// Achromatic colors get a hue of zero.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D65::WHITE_POINT[0],
            y * D65::WHITE_POINT[1],
            z * D65::WHITE_POINT[2],
        )
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let [f0, f1, f2] = [
            value.x / D65::WHITE_POINT[0],
            value.y / D65::WHITE_POINT[1],
            value.z / D65::WHITE_POINT[2],
        ]
        .map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

tincture_macros::gen_model! {
    /// The cylindrical polar form of [`Lab`].
    pub struct Lch {
        /// The lightness component, `[0, 100]`.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue in degrees, `[0, 360)`.
        pub hue: Component,
    }
}

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}
