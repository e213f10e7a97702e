//! Ordered entry list with the navigation queries the controller needs.
//!
//! `EntryList` is the widget-side mirror of a control's options: same items,
//! same order, but exposing typed accessors (wrapping next/previous,
//! value lookup, type-ahead search) instead of presentation queries.

use crate::option::SelectOption;

/// The ordered options of one widget, in the backing control's order.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<SelectOption>,
}

impl EntryList {
    pub fn new(entries: Vec<SelectOption>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.entries.iter()
    }

    /// Index of the initially selected entry: the first one explicitly
    /// marked selected, else the first entry. `None` only for empty lists.
    pub fn initial_selection(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .position(SelectOption::is_initially_selected)
                .unwrap_or(0),
        )
    }

    /// Find the entry carrying the given underlying value.
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.value() == value)
    }

    /// The entry after `index`, wrapping from the last back to the first.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(if index + 1 >= self.entries.len() {
            0
        } else {
            index + 1
        })
    }

    /// The entry before `index`, wrapping from the first to the last.
    pub fn prev_index(&self, index: usize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(if index == 0 {
            self.entries.len() - 1
        } else {
            index - 1
        })
    }

    /// Type-ahead: the first entry whose label starts with `ch`
    /// (case-insensitive), searching the entries strictly after `anchor`
    /// first and then wrapping around from the start. The anchor itself is
    /// only matched on full wraparound, so repeatedly typing the same
    /// character cycles through all entries sharing that initial.
    pub fn type_ahead(&self, anchor: usize, ch: char) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len();
        (anchor + 1..len)
            .chain(0..=anchor.min(len - 1))
            .find(|&i| self.entries[i].label_starts_with(ch))
    }

    /// The widest label in the list, in display columns.
    pub fn max_label_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| unicode_width::UnicodeWidthStr::width(e.label()))
            .max()
            .unwrap_or(0)
    }
}
