use log::info;
use rand::thread_rng;
use std::fmt;
use strum::Display;

pub use player::{Player, Seat, STARTING_HIT_POINTS};
pub use state::GameState;

use crate::{config::GameConfig, dictionary::PrefixIndex};

pub mod player;
mod state;
#[cfg(test)]
mod tests;

/// Words longer than this lose the round for whoever completes them.
pub const SHORT_WORD_LIMIT: usize = 3;

/// Parameters of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Hit points each player starts with.
    pub starting_hit_points: i32,
    /// Completing a word of at most this many letters is harmless.
    pub short_word_limit: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            starting_hit_points: STARTING_HIT_POINTS,
            short_word_limit: SHORT_WORD_LIMIT,
        }
    }
}

impl From<&GameConfig> for Rules {
    fn from(config: &GameConfig) -> Self {
        Rules {
            starting_hit_points: config.starting_hit_points,
            short_word_limit: config.short_word_limit,
        }
    }
}

/// Why a player lost the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ForfeitReason {
    /// Ran out of hit points.
    ThreeStrikes,
    /// Completed a dictionary word longer than the short word limit.
    CompletedWord,
}

/// The losing seat and the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forfeit {
    pub seat: Seat,
    pub reason: ForfeitReason,
}

impl fmt::Display for Forfeit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} forfeited ({})", self.seat, self.reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Forfeited(Forfeit),
}

/// Result of submitting a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a single lowercase letter. Nothing changed, the same player should go again.
    InvalidSyntax,
    /// The letter continues the word. The turn has passed.
    Accepted { letter: char },
    /// No word continues with that letter. The guesser took a hit, survived, and the
    /// turn has passed anyway.
    InvalidGuess { seat: Seat, hit_points: i32 },
    /// The round is over.
    Forfeited(Forfeit),
    /// A guess arrived after the round ended. Nothing changed.
    GameOver,
}

/// A round of the game: the dictionary plus the state of play.
#[derive(Debug)]
pub struct Game {
    /// The dictionary, shared by both players.
    index: PrefixIndex,
    /// Game state.
    pub state: GameState,
}

impl Game {
    /// Start a new round. The first player is chosen at random.
    pub fn new(index: PrefixIndex, rules: Rules) -> Self {
        let first = Seat::random(&mut thread_rng());
        Game::with_first_seat(index, rules, first)
    }

    /// Start a new round with a known first player.
    pub fn with_first_seat(index: PrefixIndex, rules: Rules, first: Seat) -> Self {
        info!(
            "Starting round with {} nodes and {} opening letters, {} plays first",
            index.len(),
            index.node(index.root()).degree(),
            first
        );
        let state = GameState::new(&index, rules, first);
        Game { index, state }
    }

    #[allow(dead_code)]
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Submit a raw guess for the current player and move to the resulting state.
    pub fn submit_guess(&mut self, raw: &str) -> Outcome {
        let (next, outcome) = self.state.advance(&self.index, raw);
        self.state = next;
        if let Outcome::Forfeited(forfeit) = outcome {
            info!("Round over: {} with word {:?}", forfeit, self.state.current_word());
        }
        outcome
    }

    /// The forfeit that ended the round, if it's over.
    pub fn forfeit(&self) -> Option<Forfeit> {
        match self.state.status() {
            Status::InProgress => None,
            Status::Forfeited(forfeit) => Some(forfeit),
        }
    }
}
