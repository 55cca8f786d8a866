//! Game-level errors.

/// Errors produced by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The hidden equation handed to [`Game::new`] is not a complete,
    /// true equation.
    ///
    /// [`Game::new`]: crate::Game::new
    #[display("hidden equation must be complete and valid")]
    InvalidHiddenEquation,
    /// The submitted attempt is not a valid equation. The attempt index
    /// does not advance; callers surface this as a transient message.
    #[display("that guess does not compute")]
    NotAnEquation,
    /// The game already ended; no further input or guesses are accepted.
    #[display("the game is already over")]
    AlreadyOver,
    /// Retrying the last guess is only available after a loss.
    #[display("only a lost game can retry its last guess")]
    NotLost,
    /// The tile id does not belong to the active attempt row.
    #[display("tile is not part of the active attempt")]
    UnknownTile,
}
