//! Builds widgets for the unprocessed controls of a page.
//!
//! [`build`] is the system's entry point: it scans a [`Page`] in document
//! order and replaces every selection control that has not been processed
//! yet with a [`SelectBox`] — reading the control's options, determining the
//! initial selection, hiding the control, installing the widget in its
//! place, and committing the initial entry so the widget's trigger label and
//! cached value start out consistent with the control.

use crate::entries::EntryList;
use crate::page::{self, Page};
use crate::select_box::{Orientation, SelectBox};
use selectbox_core::Command;
use tracing::debug;

/// Configuration for [`build`].
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Which edge of the trigger the option list aligns to.
    pub orientation: Orientation,
    /// Maximum entries shown before the list scrolls.
    pub max_visible: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            max_visible: SelectBox::DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Build a widget for every control on `page` that does not have one yet.
///
/// Safe to call repeatedly: controls already carrying the processed marker
/// are skipped, so a second pass over the same page is a no-op. Controls
/// with no options produce an empty, inert widget with an empty trigger
/// label.
///
/// The returned command carries each new widget's initial "select" signal;
/// execute it (route its messages back through the page) so hosts observe
/// the initial selection the same way they observe later ones.
pub fn build(page: &mut Page, config: &BuildConfig) -> Command<page::Message> {
    let mut cmds = Vec::new();
    for slot in 0..page.slot_count() {
        let Some(control) = page.control_mut(slot) else {
            continue;
        };
        if !control.mark_processed() {
            continue; // already built
        }
        let entries = EntryList::new(control.options().to_vec());
        let initial = entries.initial_selection();
        let value = control.value().to_string();
        let name = control.name().to_string();
        control.hide();

        let widget = SelectBox::new(entries, initial.unwrap_or(0), value)
            .with_orientation(config.orientation)
            .with_max_visible(config.max_visible);
        let widget = page.install_widget(slot, widget);
        debug!(control = %name, slot, entries = widget.entries().len(), "widget built");

        if let Some(initial) = initial {
            // Initial select signal: commits the pre-marked entry without
            // closing (the list starts closed anyway), which fills in the
            // trigger label.
            cmds.push(
                widget
                    .select_entry(initial, false)
                    .map(move |msg| page::Message::Widget { slot, msg }),
            );
        }
    }
    Command::batch(cmds)
}
