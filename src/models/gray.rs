use crate::color::{Component, HasSpace, Space};

tincture_macros::gen_model! {
    /// A color with a single luma channel.
    pub struct Gray {
        /// The luma, `[0, 1]`.
        pub luma: Component,
    }
}

impl HasSpace for Gray {
    const SPACE: Space = Space::Grayscale;
}
