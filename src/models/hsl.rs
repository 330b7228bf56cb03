//! Model a color with the HSL notation derived from the canonical colorspace.

use crate::color::{Component, HasSpace, Space};

tincture_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue in degrees, `[0, 360)`.
        pub hue: Component,
        /// The saturation, `[0, 1]`.
        pub saturation: Component,
        /// The lightness, `[0, 1]`.
        pub lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}
