//! The selectable item type shared by backing controls and widgets.

/// One selectable item of a control: a display label and an underlying value.
///
/// The `selected` flag only matters at construction time, when the builder
/// determines the initial selection; at most one option per control should
/// carry it. After that, selection state lives on the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    label: String,
    value: String,
    selected: bool,
}

impl SelectOption {
    /// Create an option with the given display label and underlying value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Mark this option as the initially selected one.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying value written to the backing control on commit.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this option was marked as initially selected.
    pub fn is_initially_selected(&self) -> bool {
        self.selected
    }

    /// Whether the label starts with `ch`, compared case-insensitively.
    /// Used by type-ahead.
    pub fn label_starts_with(&self, ch: char) -> bool {
        match self.label.chars().next() {
            Some(first) => first.to_lowercase().eq(ch.to_lowercase()),
            None => false,
        }
    }
}

/// Presentation state of one list entry, derived from the widget's focused
/// and hovered indices at render time.
///
/// The two markers are tracked independently on the widget and may land on
/// the same entry; when they coincide, `Hovered` wins for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Neither focused nor hovered.
    #[default]
    Normal,
    /// The committed current selection.
    Focused,
    /// Highlighted during navigation, not yet committed.
    Hovered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_flags() {
        let opt = SelectOption::new("Apple", "apple");
        assert!(!opt.is_initially_selected());
        let opt = opt.selected();
        assert!(opt.is_initially_selected());
        assert_eq!(opt.label(), "Apple");
        assert_eq!(opt.value(), "apple");
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let opt = SelectOption::new("Apple", "apple");
        assert!(opt.label_starts_with('a'));
        assert!(opt.label_starts_with('A'));
        assert!(!opt.label_starts_with('b'));
    }

    #[test]
    fn empty_label_matches_nothing() {
        let opt = SelectOption::new("", "x");
        assert!(!opt.label_starts_with('a'));
    }
}
