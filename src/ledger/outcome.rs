//! Transaction results and collection views.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::cards::OwnedCard;
use crate::core::rarity::Rarity;

/// Result of one card against the player's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The card right after this draw: new at level 1, or leveled up.
    pub card: OwnedCard,

    /// The name was already owned.
    pub is_duplicate: bool,

    /// Coins credited back. 0 for new cards.
    pub refund: i64,
}

impl DrawOutcome {
    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.card.rarity
    }
}

/// Result of [`Ledger::single_draw`](super::Ledger::single_draw).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleDraw {
    pub outcome: DrawOutcome,

    /// Coins were topped up before charging.
    pub bankruptcy_triggered: bool,

    /// This draw added the last missing name of the pool.
    pub completed_collection: bool,
}

/// Result of [`Ledger::ten_draw`](super::Ledger::ten_draw).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenDraw {
    /// Exactly ten outcomes, in draw order.
    pub outcomes: SmallVec<[DrawOutcome; 10]>,

    /// Coins were topped up before charging.
    pub bankruptcy_triggered: bool,

    /// This batch added the last missing name of the pool.
    pub completed_collection: bool,
}

impl TenDraw {
    /// Sum of duplicate refunds in the batch.
    #[must_use]
    pub fn total_refund(&self) -> i64 {
        self.outcomes.iter().map(|o| o.refund).sum()
    }

    /// Outcomes that added a new card.
    pub fn new_cards(&self) -> impl Iterator<Item = &DrawOutcome> {
        self.outcomes.iter().filter(|o| !o.is_duplicate)
    }

    /// Outcomes that leveled up an owned card.
    pub fn duplicates(&self) -> impl Iterator<Item = &DrawOutcome> {
        self.outcomes.iter().filter(|o| o.is_duplicate)
    }

    /// Highest rarity in the batch.
    #[must_use]
    pub fn best_rarity(&self) -> Option<Rarity> {
        self.outcomes.iter().map(DrawOutcome::rarity).max()
    }
}

/// Collection sort order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Legendary first, then by name.
    #[default]
    Rarity,
    /// Alphabetical.
    Name,
    /// Highest level first, then by name.
    Level,
}

impl SortKey {
    /// Sort cards in place.
    pub fn sort(self, cards: &mut [&OwnedCard]) {
        match self {
            SortKey::Rarity => {
                cards.sort_by(|a, b| (a.rarity.rank(), &a.name).cmp(&(b.rarity.rank(), &b.name)))
            }
            SortKey::Name => cards.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Level => {
                cards.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.name.cmp(&b.name)))
            }
        }
    }
}

/// Error returned when a string names no sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl std::fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort key {:?} (expected rarity, name or level)", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rarity" => Ok(SortKey::Rarity),
            "name" => Ok(SortKey::Name),
            "level" => Ok(SortKey::Level),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
