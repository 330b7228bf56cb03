//! Named colors, all in the canonical colorspace.

use crate::color::Color;

/// Opaque black.
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
/// Opaque white.
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
/// Opaque medium gray.
pub const GRAY: Color = Color::rgb8(128, 128, 128);
/// Opaque light gray.
pub const LIGHT_GRAY: Color = Color::rgb8(192, 192, 192);
/// Opaque dark gray.
pub const DARK_GRAY: Color = Color::rgb8(64, 64, 64);
/// Opaque red.
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
/// Opaque green.
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
/// Opaque blue.
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
/// Opaque cyan.
pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
/// Opaque magenta.
pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
/// Opaque yellow.
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
/// Opaque orange.
pub const ORANGE: Color = Color::rgb8(255, 200, 0);
/// Opaque pink.
pub const PINK: Color = Color::rgb8(255, 175, 175);
/// Fully transparent black. An absent color is `Option<Color>`, not this
/// constant.
pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

/// Basic colors at half opacity.
pub mod translucent {
    use crate::color::Color;

    /// Black at half opacity.
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
    /// White at half opacity.
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 0.5);
    /// Gray at half opacity.
    pub const GRAY: Color = Color::rgba(0.5, 0.5, 0.5, 0.5);
    /// Light gray at half opacity.
    pub const LIGHT_GRAY: Color = Color::rgba(0.75, 0.75, 0.75, 0.5);
    /// Dark gray at half opacity.
    pub const DARK_GRAY: Color = Color::rgba(0.25, 0.25, 0.25, 0.5);
    /// Red at half opacity.
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 0.5);
    /// Green at half opacity.
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 0.5);
    /// Blue at half opacity.
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 0.5);
    /// Cyan at half opacity.
    pub const CYAN: Color = Color::rgba(0.0, 1.0, 1.0, 0.5);
    /// Yellow at half opacity.
    pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 0.5);
    /// Magenta at half opacity.
    pub const MAGENTA: Color = Color::rgba(1.0, 0.0, 1.0, 0.5);
    /// Orange at half opacity.
    pub const ORANGE: Color = Color::rgba(1.0, 0.5, 0.0, 0.5);
    /// Pink at half opacity.
    pub const PINK: Color = Color::rgba(1.0, 0.75, 0.75, 0.5);
}

/// The Pantone colors of the year, 2000 to 2023.
#[allow(missing_docs)]
pub mod pantone {
    use crate::color::Color;

    pub const VIVA_MAGENTA_2023: Color = Color::rgb8(187, 38, 73);
    pub const VERY_PERI_2022_COTTON: Color = Color::rgb8(102, 103, 171);
    pub const VERY_PERI_2022_PAPER: Color = Color::rgb8(105, 106, 173);
    pub const ILLUMINATING_2021: Color = Color::rgb8(245, 223, 76);
    pub const ULTIMATE_GRAY_2021: Color = Color::rgb8(153, 154, 157);
    pub const CLASSIC_BLUE_2020: Color = Color::rgb8(15, 76, 129);
    pub const LIVING_CORAL_2019: Color = Color::rgb8(253, 111, 97);
    pub const ULTRA_VIOLET_2018: Color = Color::rgb8(97, 74, 139);
    pub const GREENERY_2017: Color = Color::rgb8(135, 177, 75);
    pub const ROSE_QUARTZ_2016: Color = Color::rgb8(248, 202, 202);
    pub const SERENITY_2016: Color = Color::rgb8(146, 168, 206);
    pub const MARSALA_2015: Color = Color::rgb8(150, 80, 76);
    pub const RADIANT_ORCHID_2014: Color = Color::rgb8(171, 94, 154);
    pub const EMERALD_2013: Color = Color::rgb8(4, 149, 115);
    pub const TANGERINE_TANGO_2012: Color = Color::rgb8(221, 64, 36);
    pub const HONEYSUCKLE_2011: Color = Color::rgb8(216, 79, 112);
    pub const TURQUOISE_2010: Color = Color::rgb8(69, 180, 170);
    pub const MIMOSA_2009: Color = Color::rgb8(239, 189, 84);
    pub const BLUE_IRIS_2008: Color = Color::rgb8(85, 78, 155);
    pub const CHILI_PEPPER_2007: Color = Color::rgb8(146, 14, 40);
    pub const SAND_DOLLAR_2006: Color = Color::rgb8(222, 204, 190);
    pub const BLUE_TURQUOISE_2005: Color = Color::rgb8(84, 175, 174);
    pub const TIGERLILY_2004: Color = Color::rgb8(225, 88, 63);
    pub const AQUA_SKY_2003: Color = Color::rgb8(122, 196, 195);
    pub const TRUE_RED_2002: Color = Color::rgb8(190, 25, 49);
    pub const FUCHSIA_ROSE_2001: Color = Color::rgb8(199, 66, 118);
    pub const CERULEAN_BLUE_2000: Color = Color::rgb8(152, 179, 209);
}
