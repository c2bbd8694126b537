//! Save file on disk.
//!
//! Saves go through a sibling temp file that is synced and renamed over the
//! target, so a crash mid-write leaves the previous save intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::codec;
use crate::core::error::{Error, Result};
use crate::ledger::PlayerState;

/// Save file name used when none is configured.
pub const DEFAULT_SAVE_FILE: &str = "player_data.txt";

/// Location of one player's save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl SaveStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the saved state.
    ///
    /// - `Ok(None)`: no save file; start a new game
    /// - `Err(Error::Corrupted)`: the file exists but is not UTF-8 text or its
    ///   header is malformed
    /// - `Err(Error::Io)`: the file could not be read
    pub fn load(&self) -> Result<Option<PlayerState>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no save file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let text = String::from_utf8(bytes)
            .map_err(|e| Error::corrupted(format!("save file is not valid UTF-8: {}", e)))?;
        let state = codec::decode(&text)?;
        info!(
            path = %self.path.display(),
            coins = state.coins,
            cards = state.collection.len(),
            "save loaded"
        );
        Ok(Some(state))
    }

    /// Write the state, replacing any previous save.
    pub fn save(&self, state: &PlayerState) -> Result<()> {
        let tmp = self.temp_path();
        let result = write_synced(&tmp, codec::encode(state).as_bytes())
            .and_then(|()| fs::rename(&tmp, &self.path));

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), cards = state.collection.len(), "game saved");
        Ok(())
    }

    /// Delete the save file. Returns whether one existed.
    pub fn discard(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "save file discarded");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_SAVE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::OwnedCard;
    use crate::core::Rarity;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("nope.txt"));

        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("save.txt"));
        let state = PlayerState::new(77, 12).with_card(OwnedCard::restore("Iris", Rarity::Epic, 2, 3000));

        store.save(&state).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), Some(state));
        assert!(!dir.path().join("save.txt.tmp").exists());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("save.txt"));

        store
            .save(&PlayerState::new(1, 1).with_card(OwnedCard::restore("Amy", Rarity::Common, 1, 100)))
            .unwrap();
        store.save(&PlayerState::new(2, 2)).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.coins, 2);
        assert!(loaded.collection.is_empty());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        let err = SaveStore::new(path).load().unwrap_err();
        assert!(err.is_corrupted());
    }

    #[test]
    fn test_invalid_utf8_is_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        fs::write(&path, b"COINS:10\nDRAWS:1\n\xff\xfe,Common,1,100\n").unwrap();

        let err = SaveStore::new(path).load().unwrap_err();
        assert!(err.is_corrupted());
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("missing").join("save.txt"));

        let err = store.save(&PlayerState::new(0, 0)).unwrap_err();
        assert!(matches!(err, crate::core::Error::Io(_)));
    }

    #[test]
    fn test_discard() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("save.txt"));

        assert!(!store.discard().unwrap());
        store.save(&PlayerState::new(0, 0)).unwrap();
        assert!(store.discard().unwrap());
        assert!(!store.exists());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(SaveStore::default().path(), Path::new(DEFAULT_SAVE_FILE));
    }
}
