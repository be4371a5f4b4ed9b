use rand::Rng;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Default number of rejected guesses a player can survive.
pub const STARTING_HIT_POINTS: i32 = 3;

/// One of the two places at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// The opposing seat.
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// Pick a seat uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Seat {
        let index = rng.gen_range(0..Seat::COUNT);
        Seat::iter().nth(index).unwrap_or(Seat::A)
    }

    /// Position of this seat in a per-seat array.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A participant with a limited number of hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hit_points: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, hit_points: i32) -> Self {
        Player {
            name: name.into(),
            hit_points,
        }
    }

    /// Take a hit. There's no lower bound.
    pub fn hit(&mut self) {
        self.hit_points -= 1;
    }

    pub fn dead(&self) -> bool {
        self.hit_points <= 0
    }
}

impl From<Seat> for Player {
    fn from(seat: Seat) -> Self {
        Player::new(seat.to_string(), STARTING_HIT_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, Seat, STARTING_HIT_POINTS};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn other_seat() {
        assert_eq!(Seat::A.other(), Seat::B);
        assert_eq!(Seat::B.other(), Seat::A);
        assert_eq!(Seat::A.other().other(), Seat::A);
    }

    #[test]
    fn seat_names() {
        assert_eq!(Seat::A.to_string(), "A");
        assert_eq!(Seat::B.to_string(), "B");
        assert_eq!(Player::from(Seat::B).name, "B");
    }

    #[test]
    fn random_seat_covers_both() {
        let mut rng = StdRng::seed_from_u64(7);
        let seats = (0..100)
            .map(|_| Seat::random(&mut rng))
            .collect::<HashSet<_>>();
        assert_eq!(seats.len(), 2);
    }

    #[test]
    fn random_seat_is_reproducible() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10).map(|_| Seat::random(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn hits() {
        let mut player = Player::from(Seat::A);
        assert_eq!(player.hit_points, STARTING_HIT_POINTS);
        assert!(!player.dead());

        player.hit();
        assert_eq!(player.hit_points, 2);
        assert!(!player.dead());
        player.hit();
        assert_eq!(player.hit_points, 1);
        assert!(!player.dead());
        player.hit();
        assert_eq!(player.hit_points, 0);
        assert!(player.dead());

        // Can go negative, still dead
        player.hit();
        assert_eq!(player.hit_points, -1);
        assert!(player.dead());
    }

    #[test]
    fn dead_iff_no_hit_points() {
        for hit_points in -3..=3 {
            let player = Player::new("X", hit_points);
            assert_eq!(player.dead(), hit_points <= 0);
        }
    }
}
