//! Owned cards - a player's copy of an idol.
//!
//! An `OwnedCard` is created the first time a name is drawn. Drawing the
//! same name again levels it up instead of creating a second copy.

use serde::{Deserialize, Serialize};

use super::identity::IdolIdentity;
use crate::core::config::TierParams;
use crate::core::rarity::Rarity;

/// A collected idol with progression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedCard {
    /// Collection key.
    pub name: String,

    /// Fixed at creation.
    pub rarity: Rarity,

    /// Starts at 1, only increases.
    pub level: u32,

    /// Starts at the tier's base fans.
    pub fans: u64,
}

impl OwnedCard {
    /// Create a level 1 card with the tier's base fans.
    #[must_use]
    pub fn new(identity: IdolIdentity, tier: &TierParams) -> Self {
        Self {
            name: identity.name,
            rarity: identity.rarity,
            level: 1,
            fans: tier.base_fans,
        }
    }

    /// Restore a card with explicit progression (used when loading).
    #[must_use]
    pub fn restore(name: impl Into<String>, rarity: Rarity, level: u32, fans: u64) -> Self {
        Self {
            name: name.into(),
            rarity,
            level,
            fans,
        }
    }

    /// Add one level and the tier's per-level fans. Both saturate.
    pub fn level_up(&mut self, tier: &TierParams) {
        self.level = self.level.saturating_add(1);
        self.fans = self.fans.saturating_add(tier.fans_per_level);
    }

    /// The card's identity.
    #[must_use]
    pub fn identity(&self) -> IdolIdentity {
        IdolIdentity::new(self.name.clone(), self.rarity)
    }

    /// Short form used in collection lists: `Luna (Lv.3)`.
    #[must_use]
    pub fn short_display(&self) -> String {
        format!("{} (Lv.{})", self.name, self.level)
    }
}

impl std::fmt::Display for OwnedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} | Lv.{} | Fans: {}",
            self.rarity.symbol(),
            self.rarity,
            self.name,
            self.level,
            self.fans
        )
    }
}
