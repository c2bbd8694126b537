//! The player ledger: draw transactions over an owned player state.
//!
//! ## Transaction order
//!
//! Both draw operations run the same steps:
//!
//! 1. Bankruptcy protection: if coins are below the cost, add the bonus.
//! 2. Deduct the cost, unconditionally.
//! 3. Advance `total_draws` by the number of cards (once per transaction).
//! 4. Generate cards. A new name is inserted at level 1 and marked used. An
//!    owned name levels up and refunds `floor(single_cost * refund_rate)`.
//!
//! A ten-draw generates nine standard cards. The tenth is drawn with
//! [`DrawMode::GuaranteedRareOrBetter`] when none of the nine was Rare or
//! better.
//!
//! No draw can fail. There is no "insufficient funds" path.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::outcome::{DrawOutcome, SingleDraw, SortKey, TenDraw};
use super::state::PlayerState;
use crate::cards::OwnedCard;
use crate::core::config::GachaConfig;
use crate::core::error::Result;
use crate::core::rarity::Rarity;
use crate::gacha::{CardGenerator, DrawMode, NameAllocator, RandomGenerator};

/// Cards in a ten-draw batch.
pub const TEN_DRAW_SIZE: usize = 10;

/// A player's ledger.
///
/// Owns the balance configuration, the player state, the issued-name set and
/// the card generator. All state mutation goes through the draw operations,
/// [`Ledger::restore`] and [`Ledger::reset`].
///
/// ## Example
///
/// ```
/// use shine_on::core::GachaConfig;
/// use shine_on::gacha::RandomGenerator;
/// use shine_on::ledger::Ledger;
///
/// let mut ledger = Ledger::new(GachaConfig::default(), RandomGenerator::seeded(42)).unwrap();
///
/// let draw = ledger.single_draw();
/// assert!(!draw.outcome.is_duplicate);
/// assert_eq!(ledger.coins(), 990);
/// assert_eq!(ledger.total_draws(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Ledger<G = RandomGenerator> {
    config: GachaConfig,
    state: PlayerState,
    names: NameAllocator,
    generator: G,
}

impl<G: CardGenerator> Ledger<G> {
    /// Ledger for a brand new player.
    pub fn new(config: GachaConfig, generator: G) -> Result<Self> {
        let state = PlayerState::fresh(&config.economy);
        Self::from_state(config, generator, state)
    }

    /// Ledger resuming a loaded state.
    ///
    /// Every owned name is registered as used.
    pub fn from_state(config: GachaConfig, generator: G, state: PlayerState) -> Result<Self> {
        config.validate()?;
        let names = NameAllocator::from_names(state.collection.keys().cloned());
        Ok(Self {
            config,
            state,
            names,
            generator,
        })
    }

    // === Draws ===

    /// Draw one card.
    pub fn single_draw(&mut self) -> SingleDraw {
        let was_complete = self.is_complete();
        let cost = self.config.economy.single_draw_cost;
        let bonus = self.config.economy.bankruptcy_bonus_single;
        let bankruptcy_triggered = self.charge(cost, bonus);
        self.state.total_draws = self.state.total_draws.saturating_add(1);

        let (_, outcome) = self.draw_one(DrawMode::Standard);
        let completed_collection = !was_complete && self.is_complete();
        if completed_collection {
            info!(total_draws = self.state.total_draws, "collection completed");
        }

        SingleDraw {
            outcome,
            bankruptcy_triggered,
            completed_collection,
        }
    }

    /// Draw a batch of ten cards with a Rare-or-better guarantee on the tenth.
    pub fn ten_draw(&mut self) -> TenDraw {
        let was_complete = self.is_complete();
        let cost = self.config.economy.ten_draw_cost;
        let bonus = self.config.economy.bankruptcy_bonus_ten;
        let bankruptcy_triggered = self.charge(cost, bonus);
        self.state.total_draws = self.state.total_draws.saturating_add(TEN_DRAW_SIZE as u64);

        let mut outcomes = SmallVec::new();
        let mut has_rare_or_better = false;

        for _ in 0..TEN_DRAW_SIZE - 1 {
            let (drawn, outcome) = self.draw_one(DrawMode::Standard);
            has_rare_or_better |= drawn.is_rare_or_better();
            outcomes.push(outcome);
        }

        let last_mode = if has_rare_or_better {
            DrawMode::Standard
        } else {
            debug!("no Rare or better in first nine cards, guaranteeing the tenth");
            DrawMode::GuaranteedRareOrBetter
        };
        outcomes.push(self.draw_one(last_mode).1);

        let completed_collection = !was_complete && self.is_complete();
        if completed_collection {
            info!(total_draws = self.state.total_draws, "collection completed");
        }

        TenDraw {
            outcomes,
            bankruptcy_triggered,
            completed_collection,
        }
    }

    /// Apply bankruptcy protection, then deduct `cost`.
    ///
    /// Returns whether the bonus was granted.
    fn charge(&mut self, cost: i64, bonus: i64) -> bool {
        let triggered = self.state.coins < cost;
        if triggered {
            info!(coins = self.state.coins, cost, bonus, "bankruptcy protection triggered");
            self.state.coins = self.state.coins.saturating_add(bonus);
        }
        self.state.coins = self.state.coins.saturating_sub(cost);
        triggered
    }

    /// Generate one card and apply it to the collection.
    ///
    /// Returns the generated rarity alongside the outcome. The two differ
    /// when a loaded save files a name under another tier.
    fn draw_one(&mut self, mode: DrawMode) -> (Rarity, DrawOutcome) {
        let identity = self.generator.generate(&self.config, &self.names, mode);
        debug_assert!(mode.allows(identity.rarity), "{:?} produced {}", mode, identity);
        let drawn = identity.rarity;

        let tier = self.config.tier(identity.rarity);

        let outcome = if let Some(card) = self.state.collection.get_mut(&identity.name) {
            // The owned card keeps its stored rarity; the refund follows it.
            let tier = self.config.tier(card.rarity);
            card.level_up(tier);
            let refund = self.config.economy.refund(tier);
            DrawOutcome {
                card: card.clone(),
                is_duplicate: true,
                refund,
            }
        } else {
            let card = OwnedCard::new(identity, tier);
            self.names.mark_used(card.name.clone());
            self.state.insert(card.clone());
            DrawOutcome {
                card,
                is_duplicate: false,
                refund: 0,
            }
        };

        self.state.coins = self.state.coins.saturating_add(outcome.refund);
        debug!(
            name = %outcome.card.name,
            rarity = %outcome.card.rarity,
            level = outcome.card.level,
            duplicate = outcome.is_duplicate,
            refund = outcome.refund,
            "card drawn"
        );
        (drawn, outcome)
    }
}

impl<G> Ledger<G> {
    // === Views ===

    /// Owned cards in the requested order.
    #[must_use]
    pub fn list_sorted(&self, key: SortKey) -> Vec<&OwnedCard> {
        let mut cards: Vec<_> = self.state.cards().collect();
        key.sort(&mut cards);
        cards
    }

    /// Sum of fans over the collection.
    #[must_use]
    pub fn total_fans(&self) -> u64 {
        self.state.total_fans()
    }

    #[must_use]
    pub fn coins(&self) -> i64 {
        self.state.coins
    }

    #[must_use]
    pub fn total_draws(&self) -> u64 {
        self.state.total_draws
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&OwnedCard> {
        self.state.card(name)
    }

    /// Number of distinct idols owned.
    #[must_use]
    pub fn collection_size(&self) -> usize {
        self.state.collection.len()
    }

    /// Number of idols the pool can produce.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.config.pool.total()
    }

    /// Number of pool names the player owns.
    #[must_use]
    pub fn owned_pool_names(&self) -> usize {
        self.config
            .pool
            .iter()
            .flat_map(|(_, names)| names.iter())
            .filter(|name| self.state.owns(name))
            .count()
    }

    /// Fraction of the pool collected, in `0.0..=1.0`.
    #[must_use]
    pub fn collection_rate(&self) -> f64 {
        match self.pool_size() {
            0 => 0.0,
            total => self.owned_pool_names() as f64 / total as f64,
        }
    }

    /// Every pool name is owned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.owned_pool_names() == self.pool_size()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    /// Names issued so far.
    #[must_use]
    pub fn names(&self) -> &NameAllocator {
        &self.names
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    // === Lifecycle ===

    /// Replace the state with a loaded one and re-register its names.
    pub fn restore(&mut self, state: PlayerState) {
        self.names = NameAllocator::from_names(state.collection.keys().cloned());
        self.state = state;
    }

    /// Start over: starting coins, empty collection, no issued names.
    pub fn reset(&mut self) {
        info!("ledger reset to a fresh state");
        self.state = PlayerState::fresh(&self.config.economy);
        self.names.reset();
    }
}
