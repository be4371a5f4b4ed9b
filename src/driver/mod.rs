use thiserror::Error;

use crate::game::{Forfeit, ForfeitReason, GameState};

pub mod console;

/// Defines a way of playing a round: where guesses come from and where messages go.
pub trait Driver {
    /// Play until the round is over, returning how it ended.
    fn play(&mut self) -> Result<Forfeit, DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub const INVALID_SYNTAX_MESSAGE: &str = "input must be a single letter from a-z";
pub const INVALID_GUESS_MESSAGE: &str =
    "character entered is not associated with a continuation of the current word";

/// The per-turn prompt naming the acting player and the word so far.
pub fn prompt(state: &GameState) -> String {
    format!(
        "Turn for {} (building word '{}'):",
        state.current_player().name,
        state.current_word()
    )
}

/// Follow-up after a rejected guess the player survived.
pub fn retry_message(hit_points: i32) -> String {
    format!("try again ({} guesses remaining)", hit_points)
}

/// Final message naming the loser and the cause.
pub fn forfeit_message(forfeit: &Forfeit, state: &GameState) -> String {
    let name = &state.player(forfeit.seat).name;
    match forfeit.reason {
        ForfeitReason::ThreeStrikes => format!(
            "Player {} lost -- {} incorrect guesses",
            name,
            state.rules().starting_hit_points
        ),
        ForfeitReason::CompletedWord => format!(
            "Player {} lost by completing a word: {}",
            name,
            state.current_word()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{forfeit_message, prompt, retry_message};
    use crate::{
        dictionary::PrefixIndex,
        game::{Forfeit, ForfeitReason, Game, Rules, Seat},
    };

    #[test]
    fn messages() {
        let mut game = Game::with_first_seat(PrefixIndex::build(["cats"]), Rules::default(), Seat::B);
        assert_eq!(prompt(&game.state), "Turn for B (building word ''):");
        game.submit_guess("c");
        assert_eq!(prompt(&game.state), "Turn for A (building word 'c'):");

        assert_eq!(retry_message(2), "try again (2 guesses remaining)");

        let forfeit = Forfeit {
            seat: Seat::A,
            reason: ForfeitReason::ThreeStrikes,
        };
        assert_eq!(
            forfeit_message(&forfeit, &game.state),
            "Player A lost -- 3 incorrect guesses"
        );
        let forfeit = Forfeit {
            seat: Seat::B,
            reason: ForfeitReason::CompletedWord,
        };
        assert_eq!(
            forfeit_message(&forfeit, &game.state),
            "Player B lost by completing a word: c"
        );
    }
}
