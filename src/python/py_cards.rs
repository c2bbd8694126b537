//! Card and draw-result bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::cards::{profiles, OwnedCard};
use crate::ledger::{DrawOutcome, SingleDraw, TenDraw};

/// Python wrapper for OwnedCard.
#[pyclass(name = "OwnedCard")]
#[derive(Clone, Debug)]
pub struct PyOwnedCard(pub OwnedCard);

#[pymethods]
impl PyOwnedCard {
    #[getter]
    fn name(&self) -> &str {
        &self.0.name
    }

    /// Tier name: "Common", "Rare", "Epic" or "Legendary".
    #[getter]
    fn rarity(&self) -> &'static str {
        self.0.rarity.as_str()
    }

    /// One to four stars.
    #[getter]
    fn symbol(&self) -> &'static str {
        self.0.rarity.symbol()
    }

    #[getter]
    fn level(&self) -> u32 {
        self.0.level
    }

    #[getter]
    fn fans(&self) -> u64 {
        self.0.fans
    }

    /// Personality blurb, or a generic one for names without a profile.
    #[getter]
    fn description(&self) -> &'static str {
        profiles::description(&self.0.name)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "OwnedCard(name={:?}, rarity={}, level={}, fans={})",
            self.0.name, self.0.rarity, self.0.level, self.0.fans
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for DrawOutcome.
#[pyclass(name = "DrawOutcome")]
#[derive(Clone, Debug)]
pub struct PyDrawOutcome(pub DrawOutcome);

#[pymethods]
impl PyDrawOutcome {
    /// The card right after this draw.
    #[getter]
    fn card(&self) -> PyOwnedCard {
        PyOwnedCard(self.0.card.clone())
    }

    #[getter]
    fn is_duplicate(&self) -> bool {
        self.0.is_duplicate
    }

    /// Coins credited back for a duplicate, 0 otherwise.
    #[getter]
    fn refund(&self) -> i64 {
        self.0.refund
    }

    fn __repr__(&self) -> String {
        format!(
            "DrawOutcome(card={:?}, is_duplicate={}, refund={})",
            self.0.card.name,
            if self.0.is_duplicate { "True" } else { "False" },
            self.0.refund
        )
    }
}

/// Result of a single or ten draw.
#[pyclass(name = "DrawResult")]
#[derive(Clone, Debug)]
pub struct PyDrawResult {
    outcomes: Vec<DrawOutcome>,
    bankruptcy_triggered: bool,
    completed_collection: bool,
}

impl From<SingleDraw> for PyDrawResult {
    fn from(draw: SingleDraw) -> Self {
        Self {
            outcomes: vec![draw.outcome],
            bankruptcy_triggered: draw.bankruptcy_triggered,
            completed_collection: draw.completed_collection,
        }
    }
}

impl From<TenDraw> for PyDrawResult {
    fn from(draw: TenDraw) -> Self {
        Self {
            outcomes: draw.outcomes.into_vec(),
            bankruptcy_triggered: draw.bankruptcy_triggered,
            completed_collection: draw.completed_collection,
        }
    }
}

#[pymethods]
impl PyDrawResult {
    /// Outcomes in draw order: one for a single draw, ten for a ten draw.
    #[getter]
    fn outcomes(&self) -> Vec<PyDrawOutcome> {
        self.outcomes.iter().cloned().map(PyDrawOutcome).collect()
    }

    /// Coins were topped up before charging.
    #[getter]
    fn bankruptcy_triggered(&self) -> bool {
        self.bankruptcy_triggered
    }

    /// This draw finished the collection.
    #[getter]
    fn completed_collection(&self) -> bool {
        self.completed_collection
    }

    /// Sum of duplicate refunds.
    #[getter]
    fn total_refund(&self) -> i64 {
        self.outcomes.iter().map(|o| o.refund).sum()
    }

    fn __len__(&self) -> usize {
        self.outcomes.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "DrawResult(cards={}, refund={}, bankruptcy={})",
            self.outcomes.len(),
            self.total_refund(),
            self.bankruptcy_triggered
        )
    }
}

/// Look up an idol's personality profile.
///
/// Returns a dict with name, rarity, mood, color, hobby and description, or
/// None for names without a profile.
#[pyfunction]
pub fn profile<'py>(py: Python<'py>, name: &str) -> PyResult<Option<Bound<'py, PyDict>>> {
    let Some(p) = profiles::profile(name) else {
        return Ok(None);
    };
    let dict = PyDict::new_bound(py);
    dict.set_item("name", p.name)?;
    dict.set_item("rarity", p.rarity.as_str())?;
    dict.set_item("mood", p.mood)?;
    dict.set_item("color", p.color)?;
    dict.set_item("hobby", p.hobby)?;
    dict.set_item("description", p.description)?;
    Ok(Some(dict))
}
