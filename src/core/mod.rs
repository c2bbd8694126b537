//! Core types: rarity tiers, randomness, balance configuration, errors.
//!
//! Nothing here knows about players or save files. The ledger and
//! persistence layers build on these.

pub mod config;
pub mod error;
pub mod rarity;
pub mod rng;

pub use config::{Economy, GachaConfig, NamePool, PerTier, TierParams, TierTable};
pub use error::{Error, Result};
pub use rarity::{Rarity, UnknownRarity};
pub use rng::{GameRng, RandomSource};
