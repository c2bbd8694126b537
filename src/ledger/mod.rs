//! Player ledger: coins, collection and draw transactions.
//!
//! ## Key Types
//!
//! - `PlayerState`: Coins, draw counter and collection (what gets saved)
//! - `Ledger`: Owns a state and runs single and ten-card draws against it
//! - `DrawOutcome`, `SingleDraw`, `TenDraw`: Structured draw results
//! - `SortKey`: Collection ordering for display

pub mod engine;
pub mod outcome;
pub mod state;

pub use engine::{Ledger, TEN_DRAW_SIZE};
pub use outcome::{DrawOutcome, SingleDraw, SortKey, TenDraw, UnknownSortKey};
pub use state::PlayerState;
