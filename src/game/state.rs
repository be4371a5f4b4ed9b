use lazy_regex::regex;
use log::debug;

use super::{Forfeit, ForfeitReason, Outcome, Player, Rules, Seat, Status};
use crate::dictionary::{NodeId, PrefixIndex};

/// Game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Both players, indexed by `Seat::index`.
    players: [Player; 2],
    /// Node reached by the letters accepted so far.
    cursor: NodeId,
    /// The letters accepted so far.
    current_word: String,
    /// Always `current_word.len()`.
    word_length: usize,
    /// The seat due to play next.
    turn: Seat,
    /// Whether the round has ended.
    status: Status,
    /// Rule parameters for this round.
    rules: Rules,
}

impl GameState {
    /// A fresh round positioned at the root of `index`, with `first` to play.
    pub fn new(index: &PrefixIndex, rules: Rules, first: Seat) -> Self {
        let players = [Seat::A, Seat::B]
            .map(|seat| Player::new(seat.to_string(), rules.starting_hit_points));

        GameState {
            players,
            cursor: index.root(),
            current_word: String::new(),
            word_length: 0,
            turn: first,
            status: Status::InProgress,
            rules,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    #[allow(dead_code)]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    #[allow(dead_code)]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Process one raw guess from the player whose turn it is, returning the next state
    /// and what happened. `self` is left untouched.
    pub fn advance(&self, index: &PrefixIndex, raw: &str) -> (GameState, Outcome) {
        if self.is_over() {
            return (self.clone(), Outcome::GameOver);
        }
        if !is_valid_syntax(raw) {
            return (self.clone(), Outcome::InvalidSyntax);
        }
        // Syntax check guarantees exactly one letter
        let Some(letter) = raw.chars().next() else {
            return (self.clone(), Outcome::InvalidSyntax);
        };

        let mut next = self.clone();
        let seat = next.turn;

        let outcome = match index.child_for(next.cursor, letter) {
            Some(child) => {
                next.cursor = child;
                next.current_word.push(letter);
                next.word_length += 1;
                debug!("{} played {:?}, word is now {:?}", seat, letter, next.current_word);
                Outcome::Accepted { letter }
            }
            None => {
                let player = next.player_mut(seat);
                player.hit();
                let hit_points = player.hit_points;
                debug!(
                    "{} played {:?}, which doesn't continue {:?} ({} hit points left)",
                    seat, letter, next.current_word, hit_points
                );
                if next.player(seat).dead() {
                    return next.finish(seat, ForfeitReason::ThreeStrikes, index);
                }
                // Not dead: fall through to the completion check and pass the turn
                Outcome::InvalidGuess { seat, hit_points }
            }
        };

        if index.is_terminal(next.cursor) && next.word_length > next.rules.short_word_limit {
            return next.finish(seat, ForfeitReason::CompletedWord, index);
        }

        next.turn = seat.other();
        next.check_invariants(index);
        (next, outcome)
    }

    fn finish(
        mut self,
        seat: Seat,
        reason: ForfeitReason,
        index: &PrefixIndex,
    ) -> (GameState, Outcome) {
        let forfeit = Forfeit { seat, reason };
        self.status = Status::Forfeited(forfeit);
        self.check_invariants(index);
        (self, Outcome::Forfeited(forfeit))
    }

    fn check_invariants(&self, index: &PrefixIndex) {
        debug_assert_eq!(self.word_length, self.current_word.len());
        debug_assert_eq!(index.walk(&self.current_word), Some(self.cursor));
    }
}

/// A guess must be exactly one lowercase ASCII letter.
pub fn is_valid_syntax(raw: &str) -> bool {
    regex!(r"^[a-z]$").is_match(raw)
}
