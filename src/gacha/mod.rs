//! Card generation: weighted tier selection and name allocation.
//!
//! ## Key Types
//!
//! - `DrawMode`: `Standard` or `GuaranteedRareOrBetter`
//! - `NameAllocator`: Names already issued, avoided by new draws
//! - `CardGenerator`: Seam the ledger draws through
//! - `RandomGenerator`: Weighted generator over an injectable `RandomSource`

pub mod allocator;
pub mod generator;

pub use allocator::NameAllocator;
pub use generator::{effective_weights, generate, CardGenerator, DrawMode, RandomGenerator};
