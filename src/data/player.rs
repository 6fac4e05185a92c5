//! Three-field player record backed by a [`BoundedCounter`] rank.

use super::counter::{BoundedCounter, RankUpdate};
use crate::error::Result;
use std::fmt;

/// A named player with a non-negative rank and a tier label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    name: String,
    rank: BoundedCounter,
    tier: String,
}

impl Player {
    /// Create a player, refusing a negative rank.
    pub fn new(name: impl Into<String>, rank: i64, tier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            rank: BoundedCounter::try_from_signed(rank)?,
            tier: tier.into(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tier(&self) -> &str {
        &self.tier
    }

    #[inline]
    pub fn rank(&self) -> u64 {
        self.rank.value()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_tier(&mut self, tier: impl Into<String>) {
        self.tier = tier.into();
    }

    /// Overwrite the rank; negative values are refused and leave it unchanged.
    pub fn set_rank(&mut self, rank: i64) -> Result<()> {
        self.rank = BoundedCounter::try_from_signed(rank)?;
        Ok(())
    }

    pub fn increase_rank(&mut self, amount: i64) -> RankUpdate {
        self.rank.increase(amount)
    }

    /// Lower the rank by `amount`; a result below zero is refused.
    pub fn decrease_rank(&mut self, amount: i64) -> RankUpdate {
        self.rank.decrease(amount)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Rank: {}, Tier: {}",
            self.name, self.rank, self.tier
        )
    }
}
