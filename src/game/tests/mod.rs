use super::{Game, Rules, Seat};
use crate::dictionary::PrefixIndex;


/// A round over `words` with `first` to play and default rules.
fn game(words: &[&str], first: Seat) -> Game {
    Game::with_first_seat(PrefixIndex::build(words), Rules::default(), first)
}
