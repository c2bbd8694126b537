//! A play session: one ledger bound to one save file.
//!
//! The session handles the save-file bookkeeping the presentation layer would
//! otherwise have to repeat:
//! - open: resume the save, or start fresh if it is missing or corrupted
//! - autosave after every draw (on by default)
//! - reset: delete the save and start over
//!
//! Save failures never interrupt play. Autosave errors are logged and kept
//! in [`Session::last_save_error`]; the game continues in memory.

use tracing::{info, warn};

use crate::cards::OwnedCard;
use crate::core::config::GachaConfig;
use crate::core::error::{Error, Result};
use crate::gacha::{CardGenerator, RandomGenerator};
use crate::ledger::{Ledger, PlayerState, SingleDraw, SortKey, TenDraw};
use crate::persistence::SaveStore;

/// How [`Session::open`] obtained its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenStatus {
    /// Loaded from the save file.
    Resumed,
    /// No save file; started fresh.
    NewGame,
    /// The save file was corrupted; started fresh.
    RecoveredFromCorruption { reason: String },
}

/// Ledger plus save file.
#[derive(Debug)]
pub struct Session<G = RandomGenerator> {
    ledger: Ledger<G>,
    store: SaveStore,
    autosave: bool,
    last_save_error: Option<Error>,
}

impl<G: CardGenerator> Session<G> {
    /// Open a session, loading the save file if there is a usable one.
    ///
    /// Fails only on an invalid config or when the file exists but cannot be
    /// read.
    pub fn open(config: GachaConfig, store: SaveStore, generator: G) -> Result<(Self, OpenStatus)> {
        let (state, status) = match store.load() {
            Ok(Some(state)) => (state, OpenStatus::Resumed),
            Ok(None) => {
                info!(path = %store.path().display(), "no save file found, starting a new game");
                (PlayerState::fresh(&config.economy), OpenStatus::NewGame)
            }
            Err(Error::Corrupted { reason }) => {
                warn!(path = %store.path().display(), %reason, "save file corrupted, starting a new game");
                (
                    PlayerState::fresh(&config.economy),
                    OpenStatus::RecoveredFromCorruption { reason },
                )
            }
            Err(e) => return Err(e),
        };

        let ledger = Ledger::from_state(config, generator, state)?;
        let session = Self {
            ledger,
            store,
            autosave: true,
            last_save_error: None,
        };
        Ok((session, status))
    }

    /// Draw one card, then autosave.
    pub fn single_draw(&mut self) -> SingleDraw {
        let draw = self.ledger.single_draw();
        self.autosave();
        draw
    }

    /// Draw ten cards, then autosave.
    pub fn ten_draw(&mut self) -> TenDraw {
        let draw = self.ledger.ten_draw();
        self.autosave();
        draw
    }
}

impl<G> Session<G> {
    /// Enable or disable saving after every draw.
    #[must_use]
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Write the current state to the save file.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(self.ledger.state())?;
        self.last_save_error = None;
        Ok(())
    }

    /// Delete the save file and start over with a fresh state.
    ///
    /// The in-memory state is reset even if deleting the file fails.
    pub fn reset(&mut self) -> Result<()> {
        self.ledger.reset();
        self.last_save_error = None;
        self.store.discard().map(|_| ())
    }

    #[must_use]
    pub fn list_sorted(&self, key: SortKey) -> Vec<&OwnedCard> {
        self.ledger.list_sorted(key)
    }

    #[must_use]
    pub fn total_fans(&self) -> u64 {
        self.ledger.total_fans()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger<G> {
        &self.ledger
    }

    #[must_use]
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Error from the most recent failed autosave, cleared by the next
    /// successful one.
    #[must_use]
    pub fn last_save_error(&self) -> Option<&Error> {
        self.last_save_error.as_ref()
    }

    fn autosave(&mut self) {
        if !self.autosave {
            return;
        }
        match self.store.save(self.ledger.state()) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(path = %self.store.path().display(), error = %e, "autosave failed");
                self.last_save_error = Some(e);
            }
        }
    }
}

impl Session<RandomGenerator> {
    /// Open with the reference balance and an entropy-seeded generator.
    pub fn open_default(store: SaveStore) -> Result<(Self, OpenStatus)> {
        Self::open(GachaConfig::default(), store, RandomGenerator::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store(dir: &tempfile::TempDir) -> SaveStore {
        SaveStore::new(dir.path().join("player_data.txt"))
    }

    #[test]
    fn test_open_new_game() {
        let dir = tempfile::tempdir().unwrap();
        let (session, status) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(1)).unwrap();

        assert_eq!(status, OpenStatus::NewGame);
        assert_eq!(session.ledger().coins(), 1000);
    }

    #[test]
    fn test_autosave_and_resume() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(1)).unwrap();
        session.ten_draw();
        let expected = session.ledger().snapshot();
        drop(session);

        let (resumed, status) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(2)).unwrap();
        assert_eq!(status, OpenStatus::Resumed);
        assert_eq!(resumed.ledger().state(), &expected);
        for name in expected.collection.keys() {
            assert!(resumed.ledger().names().is_used(name));
        }
    }

    #[test]
    fn test_corrupted_save_recovers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("player_data.txt"), "garbage\n").unwrap();

        let (session, status) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(1)).unwrap();
        assert!(matches!(status, OpenStatus::RecoveredFromCorruption { .. }));
        assert_eq!(session.ledger().total_draws(), 0);
    }

    #[test]
    fn test_autosave_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(1)).unwrap();
        let mut session = session.with_autosave(false);

        session.single_draw();
        assert!(!session.store().exists());

        session.save().unwrap();
        assert!(session.store().exists());
    }

    #[test]
    fn test_autosave_failure_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let bad = SaveStore::new(dir.path().join("missing").join("player_data.txt"));
        let (mut session, _) =
            Session::open(GachaConfig::default(), bad, RandomGenerator::seeded(1)).unwrap();

        let draw = session.single_draw();
        assert!(!draw.outcome.is_duplicate);
        assert!(session.last_save_error().is_some());
        assert_eq!(session.ledger().total_draws(), 1);
    }

    #[test]
    fn test_reset_discards_save() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) =
            Session::open(GachaConfig::default(), store(&dir), RandomGenerator::seeded(1)).unwrap();
        session.single_draw();
        assert!(session.store().exists());

        session.reset().unwrap();
        assert!(!session.store().exists());
        assert_eq!(session.ledger().collection_size(), 0);
        assert_eq!(session.ledger().coins(), 1000);
    }
}
