//! The closed symbol alphabet.

use std::fmt::{self, Display};

/// Error returned when a character is outside the equation alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid symbol: {ch:?}")]
pub struct InvalidSymbol {
    /// The offending character.
    pub ch: char,
}

/// One admissible equation character.
///
/// The alphabet is closed: ten digits, the four arithmetic operators, and
/// the equals sign. There is no unary minus; `-` is always the binary
/// subtraction operator.
///
/// # Examples
///
/// ```
/// use equatle_core::Symbol;
///
/// let symbol = Symbol::from_char('7').unwrap();
/// assert_eq!(symbol, Symbol::Seven);
/// assert!(symbol.is_number());
///
/// assert!(Symbol::from_char('x').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The digit `1`.
    One,
    /// The digit `2`.
    Two,
    /// The digit `3`.
    Three,
    /// The digit `4`.
    Four,
    /// The digit `5`.
    Five,
    /// The digit `6`.
    Six,
    /// The digit `7`.
    Seven,
    /// The digit `8`.
    Eight,
    /// The digit `9`.
    Nine,
    /// The digit `0`.
    Zero,
    /// The addition operator `+`.
    Plus,
    /// The subtraction operator `-`.
    Minus,
    /// The multiplication operator `*`.
    Multiply,
    /// The division operator `/`.
    Divide,
    /// The equals sign `=`.
    Equal,
}

impl Symbol {
    /// Array containing the whole alphabet, numbers before operators.
    ///
    /// The order is stable and drives grading and keyboard layout.
    pub const ALL: [Self; 15] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Zero,
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
    ];

    /// The digit subset, in keyboard order (`1`-`9`, then `0`).
    pub const NUMBERS: [Self; 10] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Zero,
    ];

    /// The operator subset (arithmetic operators plus `=`), in keyboard order.
    pub const OPERATORS: [Self; 5] = [
        Self::Plus,
        Self::Minus,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
    ];

    /// Creates a symbol from its character representation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSymbol`] if `ch` is not one of the 15 admissible
    /// characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use equatle_core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('+'), Ok(Symbol::Plus));
    /// assert_eq!(Symbol::from_char('0'), Ok(Symbol::Zero));
    /// assert!(Symbol::from_char(' ').is_err());
    /// ```
    pub const fn from_char(ch: char) -> Result<Self, InvalidSymbol> {
        let symbol = match ch {
            '1' => Self::One,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            '0' => Self::Zero,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '=' => Self::Equal,
            _ => return Err(InvalidSymbol { ch }),
        };
        Ok(symbol)
    }

    /// Returns the character representation of this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Zero => '0',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Equal => '=',
        }
    }

    /// Returns `true` if this symbol is a digit.
    #[must_use]
    pub const fn is_number(self) -> bool {
        self.as_char().is_ascii_digit()
    }

    /// Returns `true` if this symbol is an operator (including `=`).
    #[must_use]
    pub const fn is_operator(self) -> bool {
        !self.is_number()
    }
}

impl TryFrom<char> for Symbol {
    type Error = InvalidSymbol;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_covers_every_character_exactly_once() {
        assert_eq!(Symbol::ALL.len(), 15);
        assert_eq!(Symbol::NUMBERS.len(), 10);
        assert_eq!(Symbol::OPERATORS.len(), 5);
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_char(symbol.as_char()), Ok(symbol));
            assert_ne!(symbol.is_number(), symbol.is_operator());
        }
    }

    #[test]
    fn numbers_and_operators_partition_the_alphabet() {
        for symbol in Symbol::NUMBERS {
            assert!(symbol.is_number());
        }
        for symbol in Symbol::OPERATORS {
            assert!(symbol.is_operator());
        }
    }

    #[test]
    fn from_char_rejects_foreign_characters() {
        for ch in [' ', 'a', '(', ')', '^', '%', '.'] {
            assert_eq!(Symbol::from_char(ch), Err(InvalidSymbol { ch }));
        }
    }

    #[test]
    fn display_matches_character() {
        assert_eq!(Symbol::Multiply.to_string(), "*");
        assert_eq!(Symbol::Zero.to_string(), "0");
    }
}
