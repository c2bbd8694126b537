//! Session bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::config::GachaConfig;
use crate::core::error::Error;
use crate::gacha::RandomGenerator;
use crate::ledger::SortKey;
use crate::persistence::{SaveStore, DEFAULT_SAVE_FILE};
use crate::session::{OpenStatus, Session};

use super::py_cards::{PyDrawResult, PyOwnedCard};

fn to_py_err(e: Error) -> PyErr {
    match e {
        Error::Io(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for Session.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
    status: OpenStatus,
}

#[pymethods]
impl PySession {
    /// Open a session on a save file with the reference balance.
    ///
    /// # Arguments
    /// - path: Save file location (default: "player_data.txt")
    /// - seed: Fixed RNG seed for reproducible draws (default: from entropy)
    #[new]
    #[pyo3(signature = (path = DEFAULT_SAVE_FILE.to_string(), seed = None))]
    fn new(path: String, seed: Option<u64>) -> PyResult<Self> {
        let generator = match seed {
            Some(seed) => RandomGenerator::seeded(seed),
            None => RandomGenerator::from_entropy(),
        };
        let (inner, status) =
            Session::open(GachaConfig::default(), SaveStore::new(path), generator).map_err(to_py_err)?;
        Ok(Self { inner, status })
    }

    /// How the session started: "resumed", "new_game" or "recovered".
    #[getter]
    fn open_status(&self) -> &'static str {
        match self.status {
            OpenStatus::Resumed => "resumed",
            OpenStatus::NewGame => "new_game",
            OpenStatus::RecoveredFromCorruption { .. } => "recovered",
        }
    }

    fn single_draw(&mut self) -> PyDrawResult {
        self.inner.single_draw().into()
    }

    fn ten_draw(&mut self) -> PyDrawResult {
        self.inner.ten_draw().into()
    }

    /// Owned cards sorted by "rarity", "name" or "level".
    #[pyo3(signature = (sort_by = "rarity"))]
    fn collection(&self, sort_by: &str) -> PyResult<Vec<PyOwnedCard>> {
        let key: SortKey = sort_by
            .parse()
            .map_err(|e: crate::ledger::UnknownSortKey| PyValueError::new_err(e.to_string()))?;
        Ok(self
            .inner
            .list_sorted(key)
            .into_iter()
            .cloned()
            .map(PyOwnedCard)
            .collect())
    }

    fn total_fans(&self) -> u64 {
        self.inner.total_fans()
    }

    #[getter]
    fn coins(&self) -> i64 {
        self.inner.ledger().coins()
    }

    #[getter]
    fn total_draws(&self) -> u64 {
        self.inner.ledger().total_draws()
    }

    /// Fraction of the name pool owned, 0.0 to 1.0.
    #[getter]
    fn collection_rate(&self) -> f64 {
        self.inner.ledger().collection_rate()
    }

    /// Message from the last failed autosave, if any.
    #[getter]
    fn last_save_error(&self) -> Option<String> {
        self.inner.last_save_error().map(ToString::to_string)
    }

    fn save(&mut self) -> PyResult<()> {
        self.inner.save().map_err(to_py_err)
    }

    /// Delete the save file and start over.
    fn reset(&mut self) -> PyResult<()> {
        self.inner.reset().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let ledger = self.inner.ledger();
        format!(
            "Session(coins={}, draws={}, cards={}/{})",
            ledger.coins(),
            ledger.total_draws(),
            ledger.owned_pool_names(),
            ledger.pool_size()
        )
    }
}
