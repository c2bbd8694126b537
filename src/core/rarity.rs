//! Rarity tiers.
//!
//! Tiers are totally ordered by scarcity: `Common < Rare < Epic < Legendary`.
//! [`Rarity::index`] gives a tier's position in [`Rarity::ALL`] and in
//! weight arrays such as `TierTable::weights`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four scarcity classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending scarcity.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Position in [`Rarity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display rank: Legendary sorts first (0), Common last (3).
    #[must_use]
    pub const fn rank(self) -> u8 {
        3 - self as u8
    }

    /// True for Rare, Epic and Legendary.
    #[must_use]
    pub const fn is_rare_or_better(self) -> bool {
        !matches!(self, Rarity::Common)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Star string shown next to a card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rarity::Common => "⭐",
            Rarity::Rare => "⭐⭐",
            Rarity::Epic => "⭐⭐⭐",
            Rarity::Legendary => "⭐⭐⭐⭐",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRarity(pub String);

impl std::fmt::Display for UnknownRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown rarity {:?}", self.0)
    }
}

impl std::error::Error for UnknownRarity {}

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Rarity::Legendary > Rarity::Epic);
        assert!(Rarity::Epic > Rarity::Rare);
        assert!(Rarity::Rare > Rarity::Common);
    }

    #[test]
    fn test_rank() {
        assert_eq!(Rarity::Legendary.rank(), 0);
        assert_eq!(Rarity::Epic.rank(), 1);
        assert_eq!(Rarity::Rare.rank(), 2);
        assert_eq!(Rarity::Common.rank(), 3);
    }

    #[test]
    fn test_rare_or_better() {
        assert!(!Rarity::Common.is_rare_or_better());
        assert!(Rarity::Rare.is_rare_or_better());
        assert!(Rarity::Epic.is_rare_or_better());
        assert!(Rarity::Legendary.is_rare_or_better());
    }

    #[test]
    fn test_parse_and_display() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.to_string().parse::<Rarity>(), Ok(rarity));
        }
        assert!("Mythic".parse::<Rarity>().is_err());
        assert!("common".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }
}
