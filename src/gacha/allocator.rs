//! Tracking of already-issued idol names.
//!
//! The generator consults the allocator so draws prefer names the player has
//! not seen. The set is never persisted: after a load it is rebuilt from the
//! collection keys, since every owned name is a used name.

use rustc_hash::FxHashSet;

/// Set of names already issued to a player.
///
/// ```
/// use shine_on::gacha::NameAllocator;
///
/// let mut used = NameAllocator::new();
/// used.mark_used("Luna");
/// assert!(used.is_used("Luna"));
/// assert!(!used.is_used("Mina"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NameAllocator {
    used: FxHashSet<String>,
}

impl NameAllocator {
    /// Create an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a set of owned names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            used: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Record a name as issued.
    pub fn mark_used(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Check whether a name has been issued.
    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Forget every name. Only used when bootstrapping a fresh game.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Iterate over issued names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }
}
