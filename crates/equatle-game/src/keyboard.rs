//! Cumulative per-symbol keyboard feedback.

use equatle_core::{Color, Symbol, Tile};

/// Aggregated feedback state for every symbol on the input keyboard.
///
/// The keyboard holds one [`Tile`] per alphabet symbol, split into a
/// number row and an operator row in the fixed [`Symbol::NUMBERS`] /
/// [`Symbol::OPERATORS`] order. Keys start out [`Color::Unused`] and are
/// upgraded monotonically as attempts are graded: once a key shows
/// [`Color::RightPosition`] no later grading can dim it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    number_tiles: Vec<Tile>,
    operator_tiles: Vec<Tile>,
}

impl Keyboard {
    pub(crate) fn new() -> Self {
        let row = |symbols: &[Symbol]| {
            symbols
                .iter()
                .map(|&symbol| {
                    let mut tile = Tile::with_symbol(symbol);
                    tile.set_color(Color::Unused);
                    tile
                })
                .collect()
        };
        Self {
            number_tiles: row(&Symbol::NUMBERS),
            operator_tiles: row(&Symbol::OPERATORS),
        }
    }

    /// Returns the number row, one tile per digit in keyboard order.
    #[must_use]
    pub fn number_tiles(&self) -> &[Tile] {
        &self.number_tiles
    }

    /// Returns the operator row (`+ - * / =`) in keyboard order.
    #[must_use]
    pub fn operator_tiles(&self) -> &[Tile] {
        &self.operator_tiles
    }

    /// Returns the aggregated color for a symbol.
    #[must_use]
    pub fn color_of(&self, symbol: Symbol) -> Color {
        self.number_tiles
            .iter()
            .chain(&self.operator_tiles)
            .find(|tile| tile.symbol() == Some(symbol))
            .map_or(Color::Unused, Tile::color)
    }

    /// Raises the key color for `symbol` if `color` is more informative.
    pub(crate) fn upgrade(&mut self, symbol: Symbol, color: Color) {
        let row = if symbol.is_number() {
            &mut self.number_tiles
        } else {
            &mut self.operator_tiles
        };
        if let Some(tile) = row.iter_mut().find(|tile| tile.symbol() == Some(symbol)) {
            let mut current = tile.color();
            current.upgrade(color);
            tile.set_color(current);
        }
    }
}
