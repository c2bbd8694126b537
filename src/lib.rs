//! # shine-on
//!
//! Progression core for an idol-card gacha game.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Balance**: Tier weights, fan curves, refund rates, prices
//!    and the name pool all live in `GachaConfig`. Nothing is hardcoded in
//!    the draw logic.
//!
//! 2. **Injectable Randomness**: The ledger takes any `CardGenerator`, so
//!    tests script exact card sequences and runs replay from a seed.
//!
//! 3. **Presentation-Free**: Operations return structured records
//!    (`SingleDraw`, `TenDraw`, `OwnedCard`). Rendering is the caller's job.
//!
//! ## Architecture
//!
//! - **Ledger**: Owns coins, draw count and the collection. Every coin
//!   movement happens in `single_draw`/`ten_draw`, so the accounting
//!   identity holds per transaction.
//!
//! - **Persistent Collection**: `im::HashMap` makes state snapshots O(1).
//!
//! - **Save Codec**: A line-oriented text format that round-trips exactly
//!   and degrades line-by-line on corruption.
//!
//! ## Modules
//!
//! - `core`: Rarity tiers, RNG, configuration, errors
//! - `cards`: Card identities, owned cards, idol profiles
//! - `gacha`: Name allocator and rarity-weighted generator
//! - `ledger`: Player state, draw transactions, collection views
//! - `persistence`: Save-file codec and on-disk store
//! - `session`: Ledger bound to a save file with autosave

pub mod core;
pub mod cards;
pub mod gacha;
pub mod ledger;
pub mod persistence;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Rarity, UnknownRarity,
    GameRng, RandomSource,
    TierParams, TierTable, NamePool, PerTier, Economy, GachaConfig,
    Error, Result,
};

pub use crate::cards::{IdolIdentity, OwnedCard, IdolProfile};

pub use crate::gacha::{NameAllocator, CardGenerator, DrawMode, RandomGenerator};

pub use crate::ledger::{
    Ledger, PlayerState,
    DrawOutcome, SingleDraw, TenDraw,
    SortKey, UnknownSortKey, TEN_DRAW_SIZE,
};

pub use crate::persistence::{SaveStore, DEFAULT_SAVE_FILE};

pub use crate::session::{Session, OpenStatus};
