//! # Display Indexes and Selectors
//!
//! Note ids are opaque (often UUIDs), which is awkward to type. Shells show
//! each note with its 1-based position in the list and let users refer to
//! notes by that position.
//!
//! Positions are not stable: creating a note shifts every other note down by
//! one. They are resolved against the list at the moment a command runs.
//!
//! ## Selector Grammar
//!
//! - **Position**: `N` (e.g. `1`, `12`)
//! - **Range**: `Start-End` (e.g. `1-3`), start must be <= end. Ranges are
//!   kept whole here and only expanded once checked against the list
//! - **Id**: anything else is taken as a literal note id

use crate::model::{Note, NoteId};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// A note paired with its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub index: usize,
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoteSelector {
    Index(usize),
    Range(usize, usize),
    Id(NoteId),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(i) => write!(f, "{}", i),
            NoteSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            NoteSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: i + 1,
            note: note.clone(),
        })
        .collect()
}

/// Parses one user token into a selector.
///
/// Numeric tokens and ranges become positions. Position `0` and reversed
/// ranges are errors. Anything that does not look like a position is an id.
pub fn parse_selector(s: &str) -> Result<NoteSelector, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty selector".to_string());
    }

    if let Some(dash_pos) = s.find('-') {
        let start = &s[..dash_pos];
        let end = &s[dash_pos + 1..];
        if is_position(start) && is_position(end) {
            return range(parse_position(start)?, parse_position(end)?);
        }
    }

    if is_position(s) {
        return Ok(NoteSelector::Index(parse_position(s)?));
    }

    Ok(NoteSelector::Id(NoteId::new(s)))
}

/// Parses all tokens, deduplicating while preserving order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>, String> {
    let mut seen = HashSet::new();
    let mut selectors = Vec::new();
    for input in inputs {
        let selector = parse_selector(input.as_ref())?;
        if seen.insert(selector.clone()) {
            selectors.push(selector);
        }
    }
    Ok(selectors)
}

fn is_position(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Invalid index: positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid index: {}", s)),
    }
}

fn range(start: usize, end: usize) -> Result<NoteSelector, String> {
    match start.cmp(&end) {
        Ordering::Greater => Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        )),
        Ordering::Equal => Ok(NoteSelector::Index(start)),
        Ordering::Less => Ok(NoteSelector::Range(start, end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn numbers_are_positions() {
        assert_eq!(parse_selector("3").unwrap(), NoteSelector::Index(3));
        assert_eq!(parse_selector(" 12 ").unwrap(), NoteSelector::Index(12));
    }

    #[test]
    fn ranges_stay_unexpanded() {
        assert_eq!(parse_selector("2-4").unwrap(), NoteSelector::Range(2, 4));
        assert_eq!(parse_selector("3-3").unwrap(), NoteSelector::Index(3));
    }

    #[test]
    fn huge_range_parses_without_allocating() {
        let max = usize::MAX.to_string();
        assert_eq!(
            parse_selector(&format!("1-{}", max)).unwrap(),
            NoteSelector::Range(1, usize::MAX)
        );
        assert!(parse_selector("1-99999999999999999999999999").is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = parse_selector("5-3").unwrap_err();
        assert!(err.contains("Invalid range"));
    }

    #[test]
    fn zero_is_rejected() {
        assert!(parse_selector("0").is_err());
        assert!(parse_selector("0-2").is_err());
    }

    #[test]
    fn other_tokens_are_ids() {
        assert_eq!(
            parse_selector("note-7").unwrap(),
            NoteSelector::Id(NoteId::new("note-7"))
        );
        let uuid = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(
            parse_selector(uuid).unwrap(),
            NoteSelector::Id(NoteId::new(uuid))
        );
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(parse_selector("  ").is_err());
    }

    #[test]
    fn selectors_are_deduplicated_in_order() {
        let selectors = parse_selectors(&["2", "1-3", "2", "note-1", "1-3"]).unwrap();
        assert_eq!(
            selectors,
            vec![
                NoteSelector::Index(2),
                NoteSelector::Range(1, 3),
                NoteSelector::Id(NoteId::new("note-1")),
            ]
        );
    }

    #[test]
    fn index_notes_numbers_from_one() {
        let notes = vec![
            Note::new(NoteId::new("b"), "B".into(), "".into(), Utc::now()),
            Note::new(NoteId::new("a"), "A".into(), "".into(), Utc::now()),
        ];
        let indexed = index_notes(&notes);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].note.id.as_str(), "b");
        assert_eq!(indexed[1].index, 2);
    }
}
