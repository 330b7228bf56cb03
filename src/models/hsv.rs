//! Model a color with the HSV notation derived from the canonical colorspace.

use crate::color::{Component, HasSpace, Space};

tincture_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue in degrees, `[0, 360)`.
        pub hue: Component,
        /// The saturation, `[0, 1]`.
        pub saturation: Component,
        /// The value, `[0, 1]`.
        pub value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}
