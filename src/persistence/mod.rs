//! Save and load of player state.
//!
//! - `codec`: Text format, pure `encode` / `decode`
//! - `store`: `SaveStore`, the file on disk
//!
//! The issued-name set is not saved. A ledger rebuilds it from the loaded
//! collection.

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::{SaveStore, DEFAULT_SAVE_FILE};
