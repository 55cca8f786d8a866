//! Share-text export of a game's grading history.

use equatle_core::Color;

use crate::{Game, MAX_ATTEMPTS};

/// Renders a game's graded attempts as a shareable text block.
///
/// The header carries the attempt count; each following line maps one
/// valid attempt's tiles to glyphs: `🟩` right position, `🟪` wrong
/// position, `⬛` absent. Ungraded tiles produce no glyph, so only graded
/// rows contribute lines.
///
/// # Examples
///
/// ```
/// use equatle_game::{Game, share_text};
///
/// let mut game = Game::new("1+2=3".parse().unwrap()).unwrap();
/// for ch in "1+2=3".chars() {
///     game.select_symbol(ch.try_into().unwrap()).unwrap();
/// }
/// game.submit_guess().unwrap();
/// assert_eq!(share_text(&game), "game (0/6)\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(game: &Game) -> String {
    let mut message = format!("game ({}/{MAX_ATTEMPTS})", game.current_attempt());
    for equation in game.attempts().iter().filter(|e| e.is_valid()) {
        message.push('\n');
        for tile in equation.tiles() {
            match tile.color() {
                Color::RightPosition => message.push('🟩'),
                Color::WrongPosition => message.push('🟪'),
                Color::Absent => message.push('⬛'),
                Color::Unknown | Color::Unused => {}
            }
        }
    }
    message
}
