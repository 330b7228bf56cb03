//! Model a color in the subtractive CMYK notation.

use crate::color::{Component, HasSpace, Space};

tincture_macros::gen_model! {
    /// A color specified by its cyan, magenta, yellow and key (black) inks.
    pub struct Cmyk {
        /// The cyan ink.
        pub cyan: Component,
        /// The magenta ink.
        pub magenta: Component,
        /// The yellow ink.
        pub yellow: Component,
        /// The key (black) ink.
        pub key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}
