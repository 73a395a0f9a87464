//! Dice and the consecutive-doubles streak.

use alloc::collections::VecDeque;

use rand::Rng;

/// Consecutive doubles that send a player to jail.
pub const DOUBLES_LIMIT: u8 = 3;

/// The faces shown by one throw of both dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    /// Face of the first die.
    pub first: u8,
    /// Face of the second die.
    pub second: u8,
}

impl Roll {
    /// Creates a roll from two faces.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Returns the sum of both faces.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.first + self.second
    }

    /// Returns whether both dice show the same face.
    #[must_use]
    pub const fn is_doubles(&self) -> bool {
        self.first == self.second
    }
}

/// A pair of dice that remembers the current doubles streak.
///
/// Faces queued with [`Dice::load`] are used before any random draw, which
/// lets tests and replays script exact rolls.
#[derive(Debug, Clone)]
pub struct Dice {
    sides: u8,
    doubles: u8,
    last: Option<Roll>,
    loaded: VecDeque<Roll>,
}

impl Dice {
    /// Creates a pair of dice with the given number of sides.
    ///
    /// # Panics
    ///
    /// Panics if `sides` is zero.
    #[must_use]
    pub fn new(sides: u8) -> Self {
        assert!(sides > 0, "dice must have at least one side");
        Self {
            sides,
            doubles: 0,
            last: None,
            loaded: VecDeque::new(),
        }
    }

    /// Throws both dice and updates the doubles streak.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> Roll {
        let roll = match self.loaded.pop_front() {
            Some(roll) => roll,
            None => Roll::new(
                rng.random_range(1..=self.sides),
                rng.random_range(1..=self.sides),
            ),
        };

        if roll.is_doubles() {
            self.doubles += 1;
        } else {
            self.doubles = 0;
        }
        self.last = Some(roll);
        roll
    }

    /// Queues fixed rolls to be returned before random ones.
    pub fn load(&mut self, rolls: &[(u8, u8)]) {
        self.loaded
            .extend(rolls.iter().map(|&(first, second)| Roll::new(first, second)));
    }

    /// Returns the number of queued rolls not yet used.
    #[must_use]
    pub fn loaded_len(&self) -> usize {
        self.loaded.len()
    }

    /// Returns whether the streak has reached three doubles.
    #[must_use]
    pub const fn should_go_to_jail(&self) -> bool {
        self.doubles >= DOUBLES_LIMIT
    }

    /// Returns the current doubles streak.
    #[must_use]
    pub const fn doubles(&self) -> u8 {
        self.doubles
    }

    /// Returns the most recent roll.
    #[must_use]
    pub const fn last(&self) -> Option<Roll> {
        self.last
    }

    /// Returns the number of sides on each die.
    #[must_use]
    pub const fn sides(&self) -> u8 {
        self.sides
    }

    /// Clears the doubles streak.
    pub const fn reset(&mut self) {
        self.doubles = 0;
    }
}
