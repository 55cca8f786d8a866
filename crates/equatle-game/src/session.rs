//! The currently active game, if any.

use crate::Game;

/// Holder for the game a player is currently in.
///
/// "No active game" is an explicit state rather than a placeholder game
/// instance, so callers can't accidentally mutate shared default state
/// before a session starts.
///
/// # Examples
///
/// ```
/// use equatle_game::{Game, Session};
///
/// let mut session = Session::new();
/// assert!(!session.is_active());
///
/// session.start(Game::new("1+2=3".parse().unwrap()).unwrap());
/// assert!(session.is_active());
///
/// let finished = session.end().unwrap();
/// assert_eq!(finished.hidden().to_string(), "1+2=3");
/// assert!(session.game().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    /// Creates a session with no active game.
    #[must_use]
    pub const fn new() -> Self {
        Self { game: None }
    }

    /// Returns `true` while a game is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Makes `game` the active game, returning the one it replaced.
    pub fn start(&mut self, game: Game) -> Option<Game> {
        self.game.replace(game)
    }

    /// Returns the active game.
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the active game for mutation.
    pub const fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Ends the session, handing back the final game state.
    pub fn end(&mut self) -> Option<Game> {
        self.game.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_replaces_the_previous_game() {
        let mut session = Session::new();
        assert!(session.start(Game::new("1+2=3".parse().unwrap()).unwrap()).is_none());
        let replaced = session.start(Game::new("2*3=6".parse().unwrap()).unwrap());
        assert_eq!(replaced.unwrap().hidden().to_string(), "1+2=3");
        assert_eq!(session.game().unwrap().hidden().to_string(), "2*3=6");
    }

    #[test]
    fn end_clears_the_session() {
        let mut session = Session::new();
        session.start(Game::new("1+2=3".parse().unwrap()).unwrap());
        assert!(session.end().is_some());
        assert!(!session.is_active());
        assert!(session.end().is_none());
    }
}
