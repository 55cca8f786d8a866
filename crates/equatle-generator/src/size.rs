//! Supported board sizes.

use std::fmt::{self, Display};

/// A supported equation length.
///
/// Only these three lengths admit the token layouts the generator uses;
/// any other length is an [`UnsupportedLength`] generation error.
///
/// [`UnsupportedLength`]: crate::GenerateError::UnsupportedLength
///
/// # Examples
///
/// ```
/// use equatle_generator::GameSize;
///
/// assert_eq!(GameSize::Classic.length(), 8);
/// assert_eq!(GameSize::try_from_length(6), Some(GameSize::Mini));
/// assert_eq!(GameSize::try_from_length(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSize {
    /// Five-tile equations (`1+2=3`).
    Micro,
    /// Six-tile equations (`10-2=8`).
    Mini,
    /// Eight-tile equations (`2*7-5=9`).
    Classic,
}

impl GameSize {
    /// Array containing all supported sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Micro, Self::Mini, Self::Classic];

    /// Returns the equation length in tiles.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Micro => 5,
            Self::Mini => 6,
            Self::Classic => 8,
        }
    }

    /// Returns the size with the given tile length, if one is supported.
    #[must_use]
    pub const fn try_from_length(length: usize) -> Option<Self> {
        match length {
            5 => Some(Self::Micro),
            6 => Some(Self::Mini),
            8 => Some(Self::Classic),
            _ => None,
        }
    }
}

impl Display for GameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Micro => "micro",
            Self::Mini => "mini",
            Self::Classic => "classic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_round_trip() {
        for size in GameSize::ALL {
            assert_eq!(GameSize::try_from_length(size.length()), Some(size));
        }
    }

    #[test]
    fn unsupported_lengths_have_no_size() {
        for length in [0, 1, 2, 3, 4, 7, 9, 100] {
            assert_eq!(GameSize::try_from_length(length), None);
        }
    }
}
