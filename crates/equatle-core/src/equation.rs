//! Equations: fixed-length tile sequences with validity checking.

use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{Color, InvalidSymbol, Symbol, Tile, TileId, eval};

static NEXT_EQUATION_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of an equation (one attempt row, or the hidden secret).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquationId(u64);

impl EquationId {
    fn fresh() -> Self {
        Self(NEXT_EQUATION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered, fixed-length sequence of [`Tile`]s.
///
/// The number of tiles always equals the declared length. An equation may
/// be *incomplete* (some tiles blank) while the player is typing; validity
/// is only meaningful once complete, and [`Equation::is_valid`] safely
/// returns `false` for incomplete equations.
///
/// Equations round-trip through their string form for any string composed
/// solely of alphabet characters:
///
/// ```
/// use equatle_core::Equation;
///
/// let equation: Equation = "9/3-3=0".parse().unwrap();
/// assert_eq!(equation.to_string(), "9/3-3=0");
/// assert_eq!(equation.length(), 7);
/// assert!(equation.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    id: EquationId,
    length: usize,
    tiles: Vec<Tile>,
}

impl Equation {
    /// Creates an equation of `length` all-blank tiles.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    #[must_use]
    pub fn empty(length: usize) -> Self {
        assert_ne!(length, 0, "equation length must be positive");
        Self {
            id: EquationId::fresh(),
            length,
            tiles: (0..length).map(|_| Tile::new()).collect(),
        }
    }

    /// Creates a complete equation from a symbol sequence.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` is empty.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let tiles: Vec<_> = symbols.into_iter().map(Tile::with_symbol).collect();
        assert!(!tiles.is_empty(), "equation length must be positive");
        Self {
            id: EquationId::fresh(),
            length: tiles.len(),
            tiles,
        }
    }

    /// Returns the identity of this equation.
    #[must_use]
    pub const fn id(&self) -> EquationId {
        self.id
    }

    /// Returns the declared length (always equal to the tile count).
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the tiles in order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at `index`, if in bounds.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Returns the position of the tile with the given id, if it belongs
    /// to this equation.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    /// Sets or clears the symbol of the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_symbol(&mut self, index: usize, symbol: Option<Symbol>) {
        self.tiles[index].set_symbol(symbol);
    }

    /// Overwrites the feedback color of the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_color(&mut self, index: usize, color: Color) {
        self.tiles[index].set_color(color);
    }

    /// Replaces every tile with a fresh blank one.
    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            *tile = Tile::new();
        }
    }

    /// Returns `true` if every tile has a symbol.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|tile| tile.symbol().is_some())
    }

    /// Returns the concatenated symbol string, or `None` while incomplete.
    #[must_use]
    pub fn symbol_string(&self) -> Option<String> {
        self.tiles
            .iter()
            .map(|tile| tile.symbol().map(Symbol::as_char))
            .collect()
    }

    /// Checks whether this is a complete, true arithmetic equation.
    ///
    /// The check requires, in order: every tile filled; exactly one `=`
    /// that is neither first nor last; both sides well-formed expressions
    /// evaluating to finite whole numbers; and both integer values equal.
    /// Every failure mode collapses to `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use equatle_core::Equation;
    ///
    /// assert!("2*2+2=6".parse::<Equation>().unwrap().is_valid());
    /// // sides are unequal: 3 vs 10
    /// assert!(!"1+2=3+7".parse::<Equation>().unwrap().is_valid());
    /// // `=` must not be the first character
    /// assert!(!"=1+2".parse::<Equation>().unwrap().is_valid());
    /// // division must come out whole on each side
    /// assert!(!"1/2=0".parse::<Equation>().unwrap().is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Some(string) = self.symbol_string() else {
            return false;
        };
        if string.chars().filter(|&ch| ch == '=').count() != 1 {
            return false;
        }
        let Some((left, right)) = string.split_once('=') else {
            return false;
        };
        if left.is_empty() || right.is_empty() {
            return false;
        }
        match (eval::evaluate_integral(left), eval::evaluate_integral(right)) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    }
}

impl FromStr for Equation {
    type Err = InvalidSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(Symbol::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_symbols(symbols))
    }
}

impl Display for Equation {
    /// Renders entered symbols in tile order; blank tiles are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            if let Some(symbol) = tile.symbol() {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_equation_has_blank_tiles() {
        let equation = Equation::empty(8);
        assert_eq!(equation.length(), 8);
        assert_eq!(equation.tiles().len(), 8);
        assert!(!equation.is_complete());
        assert_eq!(equation.symbol_string(), None);
        assert!(!equation.is_valid());
    }

    #[test]
    #[should_panic(expected = "equation length must be positive")]
    fn zero_length_equation_is_rejected() {
        let _ = Equation::empty(0);
    }

    #[test]
    fn validity_examples() {
        for valid in ["1+2=3", "9/3-3=0", "2*2+2=6", "8/4=2", "0-0-0=0", "10=10"] {
            let equation: Equation = valid.parse().unwrap();
            assert!(equation.is_valid(), "{valid} should be valid");
        }
        for invalid in [
            "1+2=3+7", // sides unequal
            "=1+2",    // leading =
            "1+2=",    // trailing =
            "1=2=3",   // two =
            "1+2+3",   // no =
            "1/2=0",   // non-integral left side
            "3/0=1",   // division by zero
            "1+=23",   // malformed left side
        ] {
            let equation: Equation = invalid.parse().unwrap();
            assert!(!equation.is_valid(), "{invalid} should be invalid");
        }
    }

    #[test]
    fn incomplete_equation_is_never_valid() {
        let mut equation = Equation::empty(5);
        for (index, ch) in "1+2=3".chars().enumerate().take(4) {
            equation.set_symbol(index, Some(Symbol::from_char(ch).unwrap()));
        }
        assert!(!equation.is_complete());
        assert!(!equation.is_valid());

        equation.set_symbol(4, Some(Symbol::Three));
        assert!(equation.is_valid());
    }

    #[test]
    fn is_valid_is_pure_and_repeatable() {
        let equation: Equation = "1+2=3".parse().unwrap();
        assert_eq!(equation.is_valid(), equation.is_valid());
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        assert_eq!("1+2=x".parse::<Equation>(), Err(InvalidSymbol { ch: 'x' }));
        assert_eq!("1 2=3".parse::<Equation>(), Err(InvalidSymbol { ch: ' ' }));
    }

    #[test]
    fn clear_resets_tiles_to_fresh_blanks() {
        let mut equation: Equation = "1+2=3".parse().unwrap();
        let old_ids: Vec<_> = equation.tiles().iter().map(Tile::id).collect();
        equation.set_color(0, Color::RightPosition);

        equation.clear();
        assert!(!equation.is_complete());
        assert_eq!(equation.length(), 5);
        for (tile, old_id) in equation.tiles().iter().zip(old_ids) {
            assert_eq!(tile.symbol(), None);
            assert_eq!(tile.color(), Color::Unknown);
            assert_ne!(tile.id(), old_id);
        }
    }

    #[test]
    fn position_of_finds_own_tiles_only() {
        let a: Equation = "1+2=3".parse().unwrap();
        let b: Equation = "1+2=3".parse().unwrap();
        let id = a.tiles()[2].id();
        assert_eq!(a.position_of(id), Some(2));
        assert_eq!(b.position_of(id), None);
    }

    proptest! {
        #[test]
        fn string_round_trip(s in "[0-9+*/=-]{1,12}") {
            let equation: Equation = s.parse().unwrap();
            prop_assert_eq!(equation.to_string(), s);
        }

        #[test]
        fn parse_succeeds_iff_all_characters_are_symbols(s in "\\PC{1,12}") {
            let all_symbols = s.chars().all(|ch| Symbol::from_char(ch).is_ok());
            prop_assert_eq!(s.parse::<Equation>().is_ok(), all_symbols);
        }
    }
}
