//! tincture provides an accurate, multi-colorspace color value together with
//! conversions between colorspaces, integer and hex encodings, and blending,
//! pigment and opacity mixing.
//!
//! ```rust
//! use tincture::{Color, MixMode, Space};
//!
//! let yellow = Color::rgb(1.0, 1.0, 0.0);
//! let blue: Color = "#0000FF".parse().unwrap();
//!
//! let gray = yellow.mix(&blue, 0.5, Space::Rgb, MixMode::Blend);
//! assert_eq!(gray.channels(), &[0.5, 0.5, 0.5]);
//!
//! let green = yellow.mix(&blue, 0.5, Space::Rgb, MixMode::Pigment);
//! let [r, g, b] = [0, 1, 2].map(|i| green.channels()[i]);
//! assert!(g > r && g > b);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod encode;
mod error;
mod interpolate;
mod math;
mod mix;
pub mod models;
pub mod palette;
mod tone;

pub use color::{ChannelFlags, Channels, Color, Component, HasSpace, Space, MAX_ARITY};
pub use error::{Error, Result};
pub use interpolate::{Interpolation, Transition};
pub use mix::MixMode;
