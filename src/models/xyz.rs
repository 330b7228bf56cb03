//! Model a color in the CIE-XYZ colorspace.

use crate::color::{Component, HasSpace, Space};

/// The D65 standard illuminant, the white point used by [`Xyz`] and
/// [`super::Lab`].
#[derive(Clone, Debug)]
pub struct D65;

impl D65 {
    /// The white point in XYZ, with `Y` normalized to 1.
    #[allow(clippy::excessive_precision)]
    pub const WHITE_POINT: [Component; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];
}

tincture_macros::gen_model! {
    /// A color in the CIE-XYZ colorspace with a D65 white point.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component (luminance) of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}

impl Xyz {
    pub(crate) fn to_array(&self) -> [Component; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[Component; 3]> for Xyz {
    fn from([x, y, z]: [Component; 3]) -> Self {
        Self::new(x, y, z)
    }
}
