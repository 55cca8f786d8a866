//! One game: a hidden equation against a bounded attempt sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use equatle_core::{Color, Equation, Symbol, Tile, TileId};

use crate::{GameError, Keyboard};

/// Maximum number of guesses per game.
pub const MAX_ATTEMPTS: usize = 6;

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a game, used as the persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(u64);

impl GameId {
    fn fresh() -> Self {
        Self(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Result of grading one submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GuessOutcome {
    /// Every tile came back [`Color::RightPosition`]; the game is won.
    Won,
    /// The last allowed attempt missed; the game is lost.
    Lost,
    /// The guess missed and play continues on the next attempt row.
    Continue,
}

/// An equation-guessing game session.
///
/// Holds the hidden equation, [`MAX_ATTEMPTS`] attempt rows of matching
/// length, the cursor for input, and the cumulative keyboard feedback.
/// All operations are synchronous; a submitted guess is either rejected
/// whole (invalid equation) or graded whole, so callers never observe a
/// partially graded row.
///
/// # Example
///
/// ```
/// use equatle_game::{Game, GuessOutcome, MAX_ATTEMPTS};
///
/// let mut game = Game::new("2*2+2=6".parse().unwrap()).unwrap();
/// assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
/// assert_eq!(game.current_attempt(), 0);
///
/// for ch in "2+2+2=6".chars() {
///     game.select_symbol(ch.try_into().unwrap()).unwrap();
/// }
/// assert_eq!(game.submit_guess(), Ok(GuessOutcome::Continue));
/// assert_eq!(game.current_attempt(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    hidden: Equation,
    attempts: Vec<Equation>,
    current_attempt: usize,
    cursor: usize,
    is_over: bool,
    is_won: bool,
    keyboard: Keyboard,
}

impl Game {
    /// Creates a game for a hidden equation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidHiddenEquation`] unless the hidden
    /// equation is complete and true.
    pub fn new(hidden: Equation) -> Result<Self, GameError> {
        if !hidden.is_valid() {
            return Err(GameError::InvalidHiddenEquation);
        }
        Ok(Self::with_hidden(hidden))
    }

    /// Builds game state around an already validated hidden equation.
    fn with_hidden(hidden: Equation) -> Self {
        let attempts = (0..MAX_ATTEMPTS)
            .map(|_| Equation::empty(hidden.length()))
            .collect();
        Self {
            id: GameId::fresh(),
            hidden,
            attempts,
            current_attempt: 0,
            cursor: 0,
            is_over: false,
            is_won: false,
            keyboard: Keyboard::new(),
        }
    }

    /// Returns the identity of this game.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Returns the hidden equation.
    #[must_use]
    pub const fn hidden(&self) -> &Equation {
        &self.hidden
    }

    /// Returns all attempt rows, graded and ungraded.
    #[must_use]
    pub fn attempts(&self) -> &[Equation] {
        &self.attempts
    }

    /// Returns the index of the active attempt row.
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    /// Returns the active attempt row.
    #[must_use]
    pub fn current_equation(&self) -> &Equation {
        &self.attempts[self.current_attempt]
    }

    /// Returns `true` once the game ended in a win or a loss.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns `true` if the hidden equation was matched.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.is_won
    }

    /// Returns the cumulative keyboard feedback.
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Returns the tile the cursor currently targets.
    #[must_use]
    pub fn selected_tile(&self) -> Option<&Tile> {
        if self.is_over {
            return None;
        }
        self.current_equation().tile(self.cursor)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over {
            return Err(GameError::AlreadyOver);
        }
        Ok(())
    }

    /// Writes a symbol into the selected tile and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOver`] once the game ended.
    pub fn select_symbol(&mut self, symbol: Symbol) -> Result<(), GameError> {
        self.ensure_running()?;
        self.attempts[self.current_attempt].set_symbol(self.cursor, Some(symbol));
        self.select_next();
        Ok(())
    }

    /// Clears the selected tile and moves the cursor back.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOver`] once the game ended.
    pub fn delete(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;
        self.attempts[self.current_attempt].set_symbol(self.cursor, None);
        self.select_previous();
        Ok(())
    }

    /// Moves the cursor to the tile with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOver`] once the game ended, or
    /// [`GameError::UnknownTile`] if the id is not in the active row.
    pub fn select_tile(&mut self, id: TileId) -> Result<(), GameError> {
        self.ensure_running()?;
        let index = self
            .current_equation()
            .position_of(id)
            .ok_or(GameError::UnknownTile)?;
        self.cursor = index;
        Ok(())
    }

    /// Moves the cursor one tile left; a no-op at the first tile or once
    /// the game ended.
    pub fn select_previous(&mut self) {
        if !self.is_over && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor one tile right; a no-op at the last tile or once
    /// the game ended.
    pub fn select_next(&mut self) {
        if !self.is_over && self.cursor + 1 < self.hidden.length() {
            self.cursor += 1;
        }
    }

    /// Grades the active attempt against the hidden equation.
    ///
    /// On success the attempt's tile colors are final, the keyboard has
    /// been upgraded, and either the game ended or play advanced to the
    /// next row with the cursor on its first tile.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOver`] once the game ended, or
    /// [`GameError::NotAnEquation`] if the active row is not a valid
    /// equation — in that case nothing changes and the attempt index
    /// stays put.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, GameError> {
        self.ensure_running()?;
        if !self.current_equation().is_valid() {
            return Err(GameError::NotAnEquation);
        }

        self.grade_current();

        let right_positions = self
            .current_equation()
            .tiles()
            .iter()
            .filter(|tile| tile.color() == Color::RightPosition)
            .count();
        if right_positions == self.hidden.length() {
            self.is_over = true;
            self.is_won = true;
            Ok(GuessOutcome::Won)
        } else if self.current_attempt == MAX_ATTEMPTS - 1 {
            self.is_over = true;
            Ok(GuessOutcome::Lost)
        } else {
            self.current_attempt += 1;
            self.cursor = 0;
            Ok(GuessOutcome::Continue)
        }
    }

    /// Two-pass multiset grading, run per symbol in alphabet order so a
    /// shared availability counter handles repeated symbols.
    fn grade_current(&mut self) {
        let hidden = &self.hidden;
        let attempt = &mut self.attempts[self.current_attempt];
        let keyboard = &mut self.keyboard;
        debug_assert_eq!(hidden.length(), attempt.length());

        for symbol in Symbol::ALL {
            let mut available = hidden
                .tiles()
                .iter()
                .filter(|tile| tile.symbol() == Some(symbol))
                .count();

            // pass 1: exact positions claim availability first
            for i in 0..hidden.length() {
                let guessed = attempt.tiles()[i].symbol() == Some(symbol);
                if guessed && hidden.tiles()[i].symbol() == Some(symbol) {
                    attempt.set_color(i, Color::RightPosition);
                    available -= 1;
                    keyboard.upgrade(symbol, Color::RightPosition);
                }
            }

            // pass 2: leftover availability marks wrong positions
            for i in 0..hidden.length() {
                let guessed = attempt.tiles()[i].symbol() == Some(symbol);
                if guessed && hidden.tiles()[i].symbol() != Some(symbol) {
                    let color = if available > 0 {
                        Color::WrongPosition
                    } else {
                        Color::Absent
                    };
                    attempt.set_color(i, color);
                    available = available.saturating_sub(1);
                    keyboard.upgrade(symbol, color);
                }
            }
        }
    }

    /// Returns a brand-new game with the same hidden equation and fresh
    /// attempts.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::with_hidden(self.hidden.clone())
    }

    /// Reopens a lost game by blanking the final attempt row for one more
    /// try.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotLost`] unless the game is over and was not
    /// won.
    pub fn retry_last_guess(&mut self) -> Result<(), GameError> {
        if !self.is_over || self.is_won {
            return Err(GameError::NotLost);
        }
        self.is_over = false;
        let last = self.attempts.len() - 1;
        self.attempts[last].clear();
        self.cursor = 0;
        Ok(())
    }
}
