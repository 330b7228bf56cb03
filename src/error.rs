//! Structural failures raised by the color engine.
//!
//! Continuous parameters (ratios, opacities, channel values) never produce an
//! [`Error`]; they are clamped into range instead.

use thiserror::Error;

use crate::color::Space;

/// Main error type for color operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A channel array did not match the arity of the colorspace it claims.
    #[error("{space} colors have {expected} channels, got {actual}")]
    ChannelCount {
        /// The colorspace the channels were given for.
        space: Space,
        /// The arity declared by the colorspace.
        expected: usize,
        /// The number of channels that were passed.
        actual: usize,
    },

    /// A channel was referenced past the arity of its colorspace.
    #[error("channel index {index} is out of bounds for {space} colors with {arity} channels")]
    ChannelIndex {
        /// The colorspace of the color that was indexed.
        space: Space,
        /// The offending index.
        index: usize,
        /// The arity of the colorspace.
        arity: usize,
    },

    /// A hex string did not start with `#`.
    #[error("hex colors must start with '#'")]
    MissingHexPrefix,

    /// A hex string had neither 6 nor 8 digits.
    #[error("hex colors must have 6 or 8 digits, got {actual}")]
    HexLength {
        /// The number of digits after the `#`.
        actual: usize,
    },

    /// A hex string contained something other than a hex digit.
    #[error("invalid hex digit {found:?} at position {position}")]
    HexDigit {
        /// The character that is not a hex digit.
        found: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A mix mode tag did not name any [`crate::MixMode`].
    #[error("unexpected mix mode: {0}")]
    UnexpectedMode(String),

    /// A colorspace tag did not name any [`Space`].
    #[error("unknown colorspace: {0}")]
    UnknownSpace(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_colorspace() {
        let err = Error::ChannelCount {
            space: Space::Cmyk,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "CMYK colors have 4 channels, got 3");

        let err = Error::ChannelIndex {
            space: Space::Grayscale,
            index: 1,
            arity: 1,
        };
        assert_eq!(
            err.to_string(),
            "channel index 1 is out of bounds for Grayscale colors with 1 channels"
        );
    }

    #[test]
    fn hex_digit_message() {
        let err = Error::HexDigit {
            found: 'g',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid hex digit 'g' at position 3");
    }
}
