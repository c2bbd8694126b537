//! Card system: identities, owned cards, and idol profiles.
//!
//! ## Key Types
//!
//! - `IdolIdentity`: Immutable `(name, rarity)` produced by a draw
//! - `OwnedCard`: A player's copy of an idol, with level and fans
//! - `IdolProfile`: Static personality data for display
//!
//! A player owns at most one `OwnedCard` per name. Drawing a name again
//! levels the existing card up.

pub mod identity;
pub mod owned;
pub mod profiles;

pub use identity::IdolIdentity;
pub use owned::OwnedCard;
pub use profiles::IdolProfile;
