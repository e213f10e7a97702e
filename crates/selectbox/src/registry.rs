//! Page-wide widget registry backing the "close all others" behavior.

use tracing::debug;

/// Coordinator for the one piece of page-global dismissal state.
///
/// The page registers every built widget here by slot index. Registration is
/// idempotent: registering a slot that is already present replaces the old
/// entry instead of stacking a duplicate, so running the builder twice never
/// makes dismissal fire twice for the same widget.
#[derive(Debug, Default)]
pub struct Registry {
    slots: Vec<usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget's slot. Returns `true` if the slot was new,
    /// `false` if an existing registration was replaced.
    pub fn register(&mut self, slot: usize) -> bool {
        if let Some(pos) = self.slots.iter().position(|&s| s == slot) {
            self.slots[pos] = slot;
            debug!(slot, "widget re-registered");
            return false;
        }
        self.slots.push(slot);
        debug!(slot, "widget registered");
        true
    }

    /// All registered slots, in registration order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Registered slots other than `keep` — the set the dismissal pass
    /// closes. Pass `None` to get every slot.
    pub fn slots_except(&self, keep: Option<usize>) -> Vec<usize> {
        self.slots
            .iter()
            .copied()
            .filter(|&s| Some(s) != keep)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
