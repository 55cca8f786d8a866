//! Tiles: one character slot with feedback state.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Color, Symbol};

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque, stable identity of a tile slot.
///
/// Identities are unique for the lifetime of the process. Tile selection
/// (cursor placement) compares tiles by id only, never by contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(u64);

impl TileId {
    fn fresh() -> Self {
        Self(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One character slot in an equation attempt.
///
/// A tile holds an optional [`Symbol`] (player input) and a feedback
/// [`Color`], both mutable, plus a stable [`TileId`] assigned at creation.
///
/// # Examples
///
/// ```
/// use equatle_core::{Color, Symbol, Tile};
///
/// let mut tile = Tile::new();
/// assert_eq!(tile.symbol(), None);
/// assert_eq!(tile.color(), Color::Unknown);
///
/// tile.set_symbol(Some(Symbol::Five));
/// assert_eq!(tile.symbol(), Some(Symbol::Five));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    symbol: Option<Symbol>,
    color: Color,
}

impl Tile {
    /// Creates a blank tile with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: TileId::fresh(),
            symbol: None,
            color: Color::Unknown,
        }
    }

    /// Creates a tile pre-filled with a symbol.
    #[must_use]
    pub fn with_symbol(symbol: Symbol) -> Self {
        Self {
            id: TileId::fresh(),
            symbol: Some(symbol),
            color: Color::Unknown,
        }
    }

    /// Returns the stable identity of this tile slot.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the symbol currently entered in this tile, if any.
    #[must_use]
    pub const fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Returns the current feedback color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Sets or clears the entered symbol.
    pub const fn set_symbol(&mut self, symbol: Option<Symbol>) {
        self.symbol = symbol;
    }

    /// Overwrites the feedback color.
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}
