//! Game sessions for equation-guessing puzzles.
//!
//! A [`Game`] plays one hidden equation against a bounded sequence of
//! attempt rows. The player edits the active row through cursor-based
//! input actions, submits it for grading, and receives per-tile feedback
//! colors plus a cumulative [`Keyboard`] whose key colors only ever gain
//! information.
//!
//! # Examples
//!
//! ```
//! use equatle_core::Color;
//! use equatle_game::{Game, GuessOutcome};
//!
//! let mut game = Game::new("1+2=3".parse().unwrap()).unwrap();
//! for ch in "1+2=3".chars() {
//!     game.select_symbol(ch.try_into().unwrap()).unwrap();
//! }
//! assert_eq!(game.submit_guess(), Ok(GuessOutcome::Won));
//! assert!(game.is_over() && game.is_won());
//! assert!(
//!     game.current_equation()
//!         .tiles()
//!         .iter()
//!         .all(|tile| tile.color() == Color::RightPosition)
//! );
//! ```

mod error;
mod game;
mod keyboard;
mod session;
mod share;

pub use self::{
    error::GameError,
    game::{Game, GameId, GuessOutcome, MAX_ATTEMPTS},
    keyboard::Keyboard,
    session::Session,
    share::share_text,
};
