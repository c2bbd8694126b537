//! Python bindings for the shine-on gacha core.
//!
//! The presentation layer drives a [`Session`](crate::session::Session)
//! through these wrappers and renders the returned records.
//!
//! # Quick Start
//!
//! ```python
//! import shine_on
//!
//! session = shine_on.Session("player_data.txt")
//! result = session.ten_draw()
//! for outcome in result.outcomes:
//!     print(outcome.card, "(dup)" if outcome.is_duplicate else "(new)")
//!
//! for card in session.collection(sort_by="level"):
//!     print(card.name, card.level, card.fans)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_session;

pub use py_cards::*;
pub use py_session::*;

/// shine_on: idol gacha progression core.
///
/// This module provides:
/// - Session: draws, collection views, save/reset
/// - OwnedCard / DrawOutcome / DrawResult records
/// - profile(): personality metadata lookup
#[pymodule]
fn shine_on(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyOwnedCard>()?;
    m.add_class::<PyDrawOutcome>()?;
    m.add_class::<PyDrawResult>()?;

    m.add_function(wrap_pyfunction!(profile, m)?)?;

    Ok(())
}
