//! Line-oriented save format.
//!
//! ```text
//! COINS:<int>
//! DRAWS:<int>
//! <name>,<rarity>,<level>,<fans>
//! ...
//! ```
//!
//! The two header lines are mandatory; a missing prefix or a non-integer
//! value makes the whole file [`Error::Corrupted`]. Out-of-range integers are
//! clamped: a negative draw count loads as 0.
//!
//! Card lines are tolerant: a line that is empty, does not have exactly four
//! fields, names an unknown rarity or carries a non-numeric level or fan
//! count is skipped. If a name repeats, the last line wins.

use std::fmt::Write as _;

use tracing::debug;

use crate::cards::OwnedCard;
use crate::core::error::{Error, Result};
use crate::core::rarity::Rarity;
use crate::ledger::PlayerState;

const COINS_PREFIX: &str = "COINS:";
const DRAWS_PREFIX: &str = "DRAWS:";

/// Render a state as save-file text.
///
/// Card lines follow the collection's iteration order, which is not stable
/// across saves.
#[must_use]
pub fn encode(state: &PlayerState) -> String {
    let mut out = String::with_capacity(32 + state.collection.len() * 24);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}{}", COINS_PREFIX, state.coins);
    let _ = writeln!(out, "{}{}", DRAWS_PREFIX, state.total_draws);
    for card in state.cards() {
        let _ = writeln!(out, "{},{},{},{}", card.name, card.rarity, card.level, card.fans);
    }
    out
}

/// Parse save-file text.
pub fn decode(text: &str) -> Result<PlayerState> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.len() < 2 {
        return Err(Error::corrupted("insufficient data"));
    }

    let coins = header(lines[0], COINS_PREFIX)?.clamp(i64::MIN.into(), i64::MAX.into()) as i64;
    let total_draws = header(lines[1], DRAWS_PREFIX)?.clamp(0, u64::MAX.into()) as u64;

    let mut state = PlayerState::new(coins, total_draws);
    for (i, line) in lines.iter().enumerate().skip(2) {
        if line.is_empty() {
            continue;
        }
        match card_line(line) {
            Some(card) => {
                state.insert(card);
            }
            None => debug!(line = i + 1, content = *line, "skipping malformed card line"),
        }
    }
    Ok(state)
}

/// Parse an integer header. Any integer is accepted; callers clamp it into
/// their field's range.
fn header(line: &str, prefix: &str) -> Result<i128> {
    let value = line
        .strip_prefix(prefix)
        .ok_or_else(|| Error::corrupted(format!("expected {:?} header, found {:?}", prefix, line)))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::corrupted(format!("{} value {:?} is not an integer", prefix, value)))
}

fn card_line(line: &str) -> Option<OwnedCard> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, rarity, level, fans] = fields.as_slice() else {
        return None;
    };
    if name.is_empty() {
        return None;
    }
    Some(OwnedCard::restore(
        *name,
        rarity.parse::<Rarity>().ok()?,
        level.parse().ok()?,
        fans.parse().ok()?,
    ))
}
