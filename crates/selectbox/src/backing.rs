//! The host-owned control a widget stands in for.

use crate::option::SelectOption;
use tracing::debug;

/// The original selection control being replaced visually.
///
/// Owned by the host page: the widget system only reads it and, when a
/// selection is committed, writes its value. A control is never destroyed by
/// the widget system; building only hides it and marks it processed.
#[derive(Debug, Clone)]
pub struct BackingControl {
    name: String,
    options: Vec<SelectOption>,
    value: String,
    processed: bool,
    hidden: bool,
}

impl BackingControl {
    /// Create a control with the given host-facing name and options.
    ///
    /// The current value starts as the value of the initially selected
    /// option (the one carrying the selected flag, else the first), or empty
    /// for a control with no options.
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let initial = options
            .iter()
            .position(SelectOption::is_initially_selected)
            .unwrap_or(0);
        let value = options
            .get(initial)
            .map(|o| o.value().to_string())
            .unwrap_or_default();
        Self {
            name: name.into(),
            options,
            value,
            processed: false,
            hidden: false,
        }
    }

    /// The host-facing name of this control.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The control's options, in order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Write a new value. Returns `true` only if the value actually changed,
    /// so callers can raise a change notification exactly once per real
    /// change and stay silent on re-selection of the current value.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.value == value {
            return false;
        }
        debug!(control = %self.name, old = %self.value, new = %value, "value changed");
        self.value = value;
        true
    }

    /// Whether a widget has already been built for this control.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Set the processed marker. Returns `false` if it was already set,
    /// which is how repeated builds skip this control.
    pub fn mark_processed(&mut self) -> bool {
        if self.processed {
            return false;
        }
        self.processed = true;
        true
    }

    /// Whether the control is hidden behind its widget.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide the control (the widget is shown in its place).
    pub fn hide(&mut self) {
        self.hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_is_first_option() {
        let c = BackingControl::new(
            "fruit",
            vec![
                SelectOption::new("Apple", "apple"),
                SelectOption::new("Banana", "banana"),
            ],
        );
        assert_eq!(c.value(), "apple");
    }

    #[test]
    fn initial_value_honors_selected_flag() {
        let c = BackingControl::new(
            "fruit",
            vec![
                SelectOption::new("Apple", "apple"),
                SelectOption::new("Banana", "banana").selected(),
            ],
        );
        assert_eq!(c.value(), "banana");
    }

    #[test]
    fn empty_control_has_empty_value() {
        let c = BackingControl::new("empty", vec![]);
        assert_eq!(c.value(), "");
        assert!(c.options().is_empty());
    }

    #[test]
    fn set_value_reports_real_changes_only() {
        let mut c = BackingControl::new("fruit", vec![SelectOption::new("Apple", "apple")]);
        assert!(!c.set_value("apple")); // same value, no notification
        assert!(c.set_value("banana"));
        assert_eq!(c.value(), "banana");
        assert!(!c.set_value("banana"));
    }

    #[test]
    fn mark_processed_is_one_shot() {
        let mut c = BackingControl::new("fruit", vec![]);
        assert!(!c.is_processed());
        assert!(c.mark_processed());
        assert!(!c.mark_processed());
        assert!(c.is_processed());
    }
}
