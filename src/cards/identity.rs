//! Card identities - what the generator produces.

use serde::{Deserialize, Serialize};

use crate::core::rarity::Rarity;

/// An immutable `(name, rarity)` pair.
///
/// Identities carry no progression. The ledger turns them into
/// [`OwnedCard`](super::OwnedCard)s.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdolIdentity {
    pub name: String,
    pub rarity: Rarity,
}

impl IdolIdentity {
    #[must_use]
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
        }
    }
}

impl std::fmt::Display for IdolIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}
