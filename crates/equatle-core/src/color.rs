//! Feedback colors and their precedence.

/// Feedback color for a tile or a keyboard key.
///
/// Variants are declared in increasing informativeness, so the derived
/// [`Ord`] is the precedence used for monotonic keyboard upgrades:
/// `Unknown < Unused < Absent < WrongPosition < RightPosition`.
/// `Unknown` and `Unused` both carry no information; the former is the
/// default for attempt tiles, the latter for keyboard tiles.
///
/// # Examples
///
/// ```
/// use equatle_core::Color;
///
/// let mut color = Color::Unused;
/// color.upgrade(Color::WrongPosition);
/// assert_eq!(color, Color::WrongPosition);
///
/// // Upgrades never lose information
/// color.upgrade(Color::Absent);
/// assert_eq!(color, Color::WrongPosition);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Default state of an unentered or ungraded tile.
    #[default]
    Unknown,
    /// Initial state of a keyboard tile whose symbol was never guessed.
    Unused,
    /// The symbol is not present in the hidden equation (beyond the
    /// already matched count).
    Absent,
    /// The symbol is present in the hidden equation but at another position.
    WrongPosition,
    /// The symbol is at exactly this position in the hidden equation.
    RightPosition,
}

impl Color {
    /// Numeric informativeness rank, usable where an explicit total order
    /// is clearer than comparison operators.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Raises `self` to `new` if `new` is strictly more informative.
    ///
    /// This is the only mutation keyboard tiles undergo, which keeps the
    /// never-downgrade invariant local to one place.
    pub fn upgrade(&mut self, new: Self) {
        if new > *self {
            *self = new;
        }
    }
}
