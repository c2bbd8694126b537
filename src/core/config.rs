//! Game balance configuration.
//!
//! The core never hardcodes balance numbers. A host provides a
//! [`GachaConfig`]:
//! - [`TierTable`]: draw weight, base fans, fans per level and duplicate
//!   refund rate for each tier
//! - [`NamePool`]: the idol names each tier can produce
//! - [`Economy`]: starting coins, draw costs and bankruptcy bonuses
//!
//! `GachaConfig::default()` is the reference balance. All types are serde
//! types, so a host can load them from any serde format.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{Error, Result};
use super::rarity::Rarity;

/// One value per rarity tier, indexable by [`Rarity`].
///
/// ```
/// use shine_on::core::{PerTier, Rarity};
///
/// let mut fans = PerTier::new(100u64, 500, 2000, 10000);
/// assert_eq!(fans[Rarity::Epic], 2000);
///
/// fans[Rarity::Common] = 150;
/// assert_eq!(fans[Rarity::Common], 150);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerTier<T> {
    pub common: T,
    pub rare: T,
    pub epic: T,
    pub legendary: T,
}

impl<T> PerTier<T> {
    /// Create from values in ascending scarcity.
    pub const fn new(common: T, rare: T, epic: T, legendary: T) -> Self {
        Self {
            common,
            rare,
            epic,
            legendary,
        }
    }

    /// Iterate over (Rarity, &T) pairs in ascending scarcity.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, &T)> {
        Rarity::ALL.into_iter().map(move |r| (r, &self[r]))
    }
}

impl<T> Index<Rarity> for PerTier<T> {
    type Output = T;

    fn index(&self, rarity: Rarity) -> &Self::Output {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
            Rarity::Epic => &self.epic,
            Rarity::Legendary => &self.legendary,
        }
    }
}

impl<T> IndexMut<Rarity> for PerTier<T> {
    fn index_mut(&mut self, rarity: Rarity) -> &mut Self::Output {
        match rarity {
            Rarity::Common => &mut self.common,
            Rarity::Rare => &mut self.rare,
            Rarity::Epic => &mut self.epic,
            Rarity::Legendary => &mut self.legendary,
        }
    }
}

/// Numeric parameters of one tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    /// Relative draw weight. Need not be normalized.
    pub weight: f64,

    /// Fans of a freshly drawn card.
    pub base_fans: u64,

    /// Fans gained on every level-up.
    pub fans_per_level: u64,

    /// Fraction of the single-draw cost refunded on a duplicate.
    pub refund_rate: f64,
}

impl TierParams {
    #[must_use]
    pub const fn new(weight: f64, base_fans: u64, fans_per_level: u64, refund_rate: f64) -> Self {
        Self {
            weight,
            base_fans,
            fans_per_level,
            refund_rate,
        }
    }
}

/// Per-tier parameters.
pub type TierTable = PerTier<TierParams>;

impl TierTable {
    /// Draw weights in [`Rarity::ALL`] order.
    #[must_use]
    pub fn weights(&self) -> [f64; 4] {
        Rarity::ALL.map(|r| self[r].weight)
    }
}

/// Idol names available in each tier.
pub type NamePool = PerTier<Vec<String>>;

impl NamePool {
    /// Build a pool from string slices.
    #[must_use]
    pub fn from_slices(common: &[&str], rare: &[&str], epic: &[&str], legendary: &[&str]) -> Self {
        let own = |names: &[&str]| -> Vec<String> { names.iter().map(|n| (*n).to_string()).collect() };
        Self::new(own(common), own(rare), own(epic), own(legendary))
    }

    /// Total number of names across all tiers.
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(|(_, names)| names.len()).sum()
    }

    /// Tier a name belongs to, if any.
    #[must_use]
    pub fn tier_of(&self, name: &str) -> Option<Rarity> {
        self.iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(rarity, _)| rarity)
    }
}

/// Coin economy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    /// Coins of a brand new player.
    pub starting_coins: i64,

    /// Cost of one card. Also the base for duplicate refunds.
    pub single_draw_cost: i64,

    /// Cost of a ten-card batch.
    pub ten_draw_cost: i64,

    /// Top-up when coins are below the single-draw cost.
    pub bankruptcy_bonus_single: i64,

    /// Top-up when coins are below the ten-draw cost.
    pub bankruptcy_bonus_ten: i64,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            starting_coins: 1000,
            single_draw_cost: 10,
            ten_draw_cost: 100,
            bankruptcy_bonus_single: 50,
            bankruptcy_bonus_ten: 100,
        }
    }
}

impl Economy {
    /// Duplicate refund for a tier: `floor(single_draw_cost * refund_rate)`.
    ///
    /// Always based on the single-draw cost, even inside a ten-draw.
    #[must_use]
    pub fn refund(&self, tier: &TierParams) -> i64 {
        (self.single_draw_cost as f64 * tier.refund_rate).floor() as i64
    }
}

/// Complete balance configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GachaConfig {
    pub tiers: TierTable,
    pub pool: NamePool,
    pub economy: Economy,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            tiers: PerTier::new(
                TierParams::new(0.50, 100, 100, 0.20),
                TierParams::new(0.35, 500, 300, 0.40),
                TierParams::new(0.13, 2000, 1000, 0.60),
                TierParams::new(0.02, 10000, 5000, 0.80),
            ),
            pool: NamePool::from_slices(
                &["Amy", "Ella", "Emma", "Mira", "Coco", "Nana", "Suki", "Kira", "Bella", "Mila"],
                &["Luna", "Mina", "Lena", "Rosa", "Ruby", "Nora", "Sara", "Hana"],
                &["Stella", "Nova", "Aria", "Iris", "Elsa"],
                &["Anna", "Belle", "Jasmine"],
            ),
            economy: Economy::default(),
        }
    }
}

impl GachaConfig {
    /// Replace one tier's parameters.
    #[must_use]
    pub fn with_tier(mut self, rarity: Rarity, params: TierParams) -> Self {
        self.tiers[rarity] = params;
        self
    }

    /// Replace the name pool.
    #[must_use]
    pub fn with_pool(mut self, pool: NamePool) -> Self {
        self.pool = pool;
        self
    }

    /// Replace the economy.
    #[must_use]
    pub fn with_economy(mut self, economy: Economy) -> Self {
        self.economy = economy;
        self
    }

    /// Parameters of one tier.
    #[must_use]
    pub fn tier(&self, rarity: Rarity) -> &TierParams {
        &self.tiers[rarity]
    }

    /// Check that every draw mode can always produce a card.
    ///
    /// Also enforces that names are unique across all tiers, since the
    /// collection is keyed by name alone.
    pub fn validate(&self) -> Result<()> {
        for (rarity, params) in self.tiers.iter() {
            if !params.weight.is_finite() || params.weight < 0.0 {
                return Err(Error::Config(format!(
                    "{} weight must be finite and non-negative, got {}",
                    rarity, params.weight
                )));
            }
            if !params.refund_rate.is_finite() || params.refund_rate < 0.0 {
                return Err(Error::Config(format!(
                    "{} refund rate must be finite and non-negative, got {}",
                    rarity, params.refund_rate
                )));
            }
            if self.pool[rarity].is_empty() {
                return Err(Error::Config(format!("{} name pool is empty", rarity)));
            }
        }

        let weights = self.tiers.weights();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(Error::Config(format!("tier weights sum to {}", total)));
        }
        if total <= 0.0 {
            return Err(Error::Config("all tier weights are zero".into()));
        }
        if weights[1..].iter().sum::<f64>() <= 0.0 {
            return Err(Error::Config(
                "Rare, Epic and Legendary weights are all zero; the ten-draw guarantee cannot be met"
                    .into(),
            ));
        }

        let mut seen = rustc_hash::FxHashMap::default();
        for (rarity, names) in self.pool.iter() {
            for name in names {
                if name.is_empty() || name.trim() != name || name.contains([',', '\n', '\r']) {
                    return Err(Error::Config(format!(
                        "idol name {:?} cannot be stored in a save file",
                        name
                    )));
                }
                if let Some(first) = seen.insert(name.as_str(), rarity) {
                    return Err(Error::Config(format!(
                        "idol name {:?} appears in both {} and {}",
                        name, first, rarity
                    )));
                }
            }
        }

        let economy = &self.economy;
        let amounts = [
            ("single draw cost", economy.single_draw_cost),
            ("ten draw cost", economy.ten_draw_cost),
            ("single bankruptcy bonus", economy.bankruptcy_bonus_single),
            ("ten bankruptcy bonus", economy.bankruptcy_bonus_ten),
        ];
        for (what, amount) in amounts {
            if amount < 0 {
                return Err(Error::Config(format!("{} must be non-negative, got {}", what, amount)));
            }
        }
        if economy.bankruptcy_bonus_single < economy.single_draw_cost
            || economy.bankruptcy_bonus_ten < economy.ten_draw_cost
        {
            tracing::warn!(
                ?economy,
                "bankruptcy bonus is smaller than its draw cost; balances can go negative"
            );
        }

        Ok(())
    }
}
