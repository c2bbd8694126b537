//! Persisted player state.
//!
//! `PlayerState` is everything a save file holds: the coin balance, the draw
//! counter and the collection. The collection is an `im` map, so snapshots
//! handed to the presentation layer are O(1) clones.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::OwnedCard;
use crate::core::config::Economy;

/// Coins, draw counter and collection of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Never negative after a transaction as long as each bankruptcy bonus
    /// is at least its draw cost.
    pub coins: i64,

    /// Cards drawn over the player's lifetime.
    pub total_draws: u64,

    /// Owned cards keyed by name. Iteration order is not meaningful.
    pub collection: ImHashMap<String, OwnedCard>,
}

impl PlayerState {
    /// A brand new player: starting coins, no cards, no draws.
    #[must_use]
    pub fn fresh(economy: &Economy) -> Self {
        Self::new(economy.starting_coins, 0)
    }

    /// Empty collection with the given counters.
    #[must_use]
    pub fn new(coins: i64, total_draws: u64) -> Self {
        Self {
            coins,
            total_draws,
            collection: ImHashMap::new(),
        }
    }

    /// Add a card with its builder (for tests and restores).
    #[must_use]
    pub fn with_card(mut self, card: OwnedCard) -> Self {
        self.insert(card);
        self
    }

    /// Insert a card keyed by its name, replacing any previous card.
    pub fn insert(&mut self, card: OwnedCard) -> Option<OwnedCard> {
        self.collection.insert(card.name.clone(), card)
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&OwnedCard> {
        self.collection.get(name)
    }

    #[must_use]
    pub fn owns(&self, name: &str) -> bool {
        self.collection.contains_key(name)
    }

    /// Sum of fans over all owned cards.
    #[must_use]
    pub fn total_fans(&self) -> u64 {
        self.collection.values().map(|c| c.fans).sum()
    }

    /// Iterate over owned cards in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &OwnedCard> {
        self.collection.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rarity;

    #[test]
    fn test_fresh() {
        let state = PlayerState::fresh(&Economy::default());
        assert_eq!(state.coins, 1000);
        assert_eq!(state.total_draws, 0);
        assert!(state.collection.is_empty());
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut state = PlayerState::new(0, 0);
        assert!(state.insert(OwnedCard::restore("Amy", Rarity::Common, 1, 100)).is_none());

        let previous = state.insert(OwnedCard::restore("Amy", Rarity::Common, 4, 400));
        assert_eq!(previous.map(|c| c.level), Some(1));
        assert_eq!(state.collection.len(), 1);
        assert_eq!(state.card("Amy").unwrap().level, 4);
    }

    #[test]
    fn test_total_fans() {
        let state = PlayerState::new(0, 0)
            .with_card(OwnedCard::restore("Amy", Rarity::Common, 1, 100))
            .with_card(OwnedCard::restore("Anna", Rarity::Legendary, 2, 15000));
        assert_eq!(state.total_fans(), 15100);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = PlayerState::new(10, 1).with_card(OwnedCard::restore("Amy", Rarity::Common, 1, 100));
        let snapshot = state.clone();

        state.insert(OwnedCard::restore("Luna", Rarity::Rare, 1, 500));
        state.coins = 0;

        assert_eq!(snapshot.collection.len(), 1);
        assert_eq!(snapshot.coins, 10);
    }

    #[test]
    fn test_state_serde() {
        let state = PlayerState::new(42, 7).with_card(OwnedCard::restore("Nova", Rarity::Epic, 3, 4000));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PlayerState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
