//! Shuffling the tile universe and dealing the opening groups.

use crate::game::Side;
use crate::hand::{Hand, Stock};
use crate::tile::{Tile, UNIVERSE_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Invalid deal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Requested group sizes sum past the tile universe.
    #[display("deal sizes sum to {requested}, exceeding the 28-tile universe")]
    OversizedDeal {
        /// Sum of the requested group sizes.
        requested: usize,
    },
    /// A side would start with no tiles, leaving nothing to open with.
    #[display("{side} hand must receive at least one tile")]
    EmptyHand {
        /// The side whose hand size is zero.
        side: Side,
    },
}

/// Group sizes for the opening deal.
///
/// The default reproduces the full deal: 14 tiles set aside as stock and
/// 7 to each side. Tiles beyond the three requested sizes join the human
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DealConfig {
    /// Tiles set aside as the boneyard.
    #[serde(default = "default_stock_size")]
    stock: usize,
    /// Tiles dealt to the computer.
    #[serde(default = "default_hand_size")]
    computer: usize,
    /// Tiles dealt to the human.
    #[serde(default = "default_hand_size")]
    human: usize,
}

fn default_stock_size() -> usize {
    14
}

fn default_hand_size() -> usize {
    7
}

impl DealConfig {
    /// Creates a validated deal configuration.
    #[instrument]
    pub fn new(stock: usize, computer: usize, human: usize) -> Result<Self, ConfigError> {
        let config = Self {
            stock,
            computer,
            human,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the group sizes: they must fit in the universe and leave
    /// both sides at least one tile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let requested = self.stock + self.computer + self.human;
        if requested > UNIVERSE_SIZE {
            return Err(ConfigError::OversizedDeal { requested });
        }
        if self.computer == 0 {
            return Err(ConfigError::EmptyHand {
                side: Side::Computer,
            });
        }
        if self.human == 0 {
            return Err(ConfigError::EmptyHand { side: Side::Human });
        }
        Ok(())
    }
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            stock: default_stock_size(),
            computer: default_hand_size(),
            human: default_hand_size(),
        }
    }
}

/// Shuffles the universe with the injected random source and slices it
/// into consecutive disjoint groups in the fixed order stock, computer,
/// human. Leftover tiles join the human group.
///
/// # Panics
///
/// Panics if `config` was not validated and its sizes exceed the
/// universe.
#[instrument(skip(rng))]
pub fn deal(rng: &mut impl Rng, config: &DealConfig) -> (Stock, Hand, Hand) {
    let mut tiles = Tile::universe();
    tiles.shuffle(rng);

    let human = tiles.split_off(config.stock + config.computer);
    let computer = tiles.split_off(config.stock);
    debug!(
        stock = tiles.len(),
        computer = computer.len(),
        human = human.len(),
        "dealt tiles"
    );
    (Stock::from(tiles), Hand::from(computer), Hand::from(human))
}
