//! Core tile type and the double-six tile universe.

use serde::{Deserialize, Serialize};

/// Number of distinct pip values; pips run `0..PIP_VALUES`.
pub const PIP_VALUES: u8 = 7;

/// Number of tiles in the double-six universe.
pub const UNIVERSE_SIZE: usize = 28;

/// A domino tile bearing two pip values in `0..=6`.
///
/// Within a hand the pip order is incidental; within a chain the field
/// order carries the orientation: `first` faces the start of the chain
/// and `second` faces the finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    first: u8,
    second: u8,
}

impl Tile {
    /// Creates a tile from two pip values.
    ///
    /// # Panics
    ///
    /// Panics if either pip exceeds 6.
    pub fn new(first: u8, second: u8) -> Self {
        assert!(
            first < PIP_VALUES && second < PIP_VALUES,
            "pip out of range: [{first}|{second}]"
        );
        Self { first, second }
    }

    /// Pip facing the start of the chain.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Pip facing the finish of the chain.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// The same tile with its pips swapped.
    pub fn flipped(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Checks whether both pips are equal.
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Sum of both pips.
    pub fn pip_sum(&self) -> u8 {
        self.first + self.second
    }

    /// Checks whether either pip equals `pip`.
    pub fn has(&self, pip: u8) -> bool {
        self.first == pip || self.second == pip
    }

    /// Number of pip positions equal to `pip`: 0, 1, or 2 on a double.
    pub fn pip_count(&self, pip: u8) -> u8 {
        u8::from(self.first == pip) + u8::from(self.second == pip)
    }

    /// Every tile of the double-six set: each pair `(i, j)` with `i <= j`
    /// appears exactly once, doubles included.
    pub fn universe() -> Vec<Tile> {
        (0..PIP_VALUES)
            .flat_map(|i| (i..PIP_VALUES).map(move |j| Tile::new(i, j)))
            .collect()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.first, self.second)
    }
}
