//! Rarity-weighted card generation.
//!
//! A draw is two independent choices:
//!
//! 1. **Tier**: one weighted pick over the tier table. In
//!    [`DrawMode::GuaranteedRareOrBetter`] Common gets weight 0, which yields
//!    exactly the conditional distribution P(tier | tier != Common).
//! 2. **Name**: uniform over the tier's names that are not already used.
//!    If every name in the tier is used, uniform over the whole tier.
//!
//! Generation has no side effects. The ledger decides whether a name gets
//! marked as used.

use crate::cards::IdolIdentity;
use crate::core::config::{GachaConfig, NamePool, TierTable};
use crate::core::rarity::Rarity;
use crate::core::rng::{GameRng, RandomSource};

use super::allocator::NameAllocator;

/// Which tiers a draw may produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Every tier with its configured weight.
    #[default]
    Standard,
    /// Common is excluded; Rare, Epic and Legendary keep their relative weights.
    GuaranteedRareOrBetter,
}

impl DrawMode {
    /// Whether this mode can produce the given tier.
    #[must_use]
    pub fn allows(self, rarity: Rarity) -> bool {
        match self {
            DrawMode::Standard => true,
            DrawMode::GuaranteedRareOrBetter => rarity.is_rare_or_better(),
        }
    }
}

/// Effective tier weights for a mode.
///
/// Tiers the mode excludes, and tiers without any names, get weight 0.
/// The sampler normalizes, so the rest keep their configured ratios.
#[must_use]
pub fn effective_weights(tiers: &TierTable, pool: &NamePool, mode: DrawMode) -> [f64; 4] {
    Rarity::ALL.map(|rarity| {
        if mode.allows(rarity) && !pool[rarity].is_empty() {
            tiers[rarity].weight
        } else {
            0.0
        }
    })
}

/// Generate one card identity.
///
/// Returns `None` only if no tier is drawable in `mode`, which a validated
/// [`GachaConfig`] rules out.
pub fn generate<R: RandomSource + ?Sized>(
    tiers: &TierTable,
    pool: &NamePool,
    excluded: &NameAllocator,
    mode: DrawMode,
    rng: &mut R,
) -> Option<IdolIdentity> {
    let weights = effective_weights(tiers, pool, mode);
    let rarity = Rarity::ALL[rng.choose_weighted(&weights)?];

    let names = &pool[rarity];
    let unseen: Vec<&String> = names.iter().filter(|n| !excluded.is_used(n)).collect();

    let name = if unseen.is_empty() {
        &names[rng.gen_index(names.len())]
    } else {
        unseen[rng.gen_index(unseen.len())]
    };

    Some(IdolIdentity::new(name.clone(), rarity))
}

/// Source of card identities for the ledger.
///
/// The production implementation is [`RandomGenerator`]. Tests substitute
/// scripted generators to force exact sequences and to observe the mode the
/// ledger asks for.
pub trait CardGenerator {
    /// Produce one identity. `excluded` holds the names already issued.
    fn generate(
        &mut self,
        config: &GachaConfig,
        excluded: &NameAllocator,
        mode: DrawMode,
    ) -> IdolIdentity;
}

/// Weighted generator backed by a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RandomGenerator<R = GameRng> {
    rng: R,
}

impl<R: RandomSource> RandomGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl RandomGenerator<GameRng> {
    /// Deterministic generator for a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Generator seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl<R: RandomSource> CardGenerator for RandomGenerator<R> {
    fn generate(
        &mut self,
        config: &GachaConfig,
        excluded: &NameAllocator,
        mode: DrawMode,
    ) -> IdolIdentity {
        generate(&config.tiers, &config.pool, excluded, mode, &mut self.rng)
            .expect("validated config always has a drawable tier")
    }
}
