//! The host container: backing controls, their widgets, and input routing.
//!
//! A `Page` plays the document's role: it owns the [`BackingControl`]s, the
//! widgets the builder installs for them, and the one piece of page-global
//! state — the dismissal [`Registry`]. It routes keyboard input to the
//! focused widget and resolves mouse positions against the rendered layout.
//!
//! Click dispatch order matters: the widget-local handler for the hit
//! trigger or list entry always runs before the page-wide dismissal pass, so
//! a click can never dismiss the very widget it was aimed at.

use crate::backing::BackingControl;
use crate::registry::Registry;
use crate::select_box::{self, SelectBox};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use selectbox_core::{Command, Component, InputEvent};
use std::cell::Cell;
use tracing::{debug, trace};

/// Messages for the page.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw terminal input from the host event loop.
    Input(InputEvent),
    /// A message routed to the widget installed at `slot`.
    Widget { slot: usize, msg: select_box::Message },
    /// Notification for the host: an entry was committed on the control at
    /// `slot` (the "select" signal, emitted on every commit).
    Select {
        slot: usize,
        index: usize,
        value: String,
    },
    /// Notification for the host: the backing control's value changed.
    Changed { slot: usize, value: String },
}

struct Slot {
    control: BackingControl,
    widget: Option<SelectBox>,
}

/// A form-like container of backing controls and their built widgets.
///
/// Each slot renders as one line, with a blank line between slots; a built
/// widget replaces its hidden control in place, and an open widget's option
/// list overlays whatever lies below it.
pub struct Page {
    slots: Vec<Slot>,
    registry: Registry,
    /// Slot of the widget holding keyboard focus.
    focus: Option<usize>,
    /// Area of the last render, for mouse hit-testing.
    area: Cell<Rect>,
}

impl Page {
    /// Create a page over the given controls, in document order.
    pub fn new(controls: Vec<BackingControl>) -> Self {
        Self {
            slots: controls
                .into_iter()
                .map(|control| Slot {
                    control,
                    widget: None,
                })
                .collect(),
            registry: Registry::new(),
            focus: None,
            area: Cell::new(Rect::default()),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The control at `slot`.
    pub fn control(&self, slot: usize) -> Option<&BackingControl> {
        self.slots.get(slot).map(|s| &s.control)
    }

    pub(crate) fn control_mut(&mut self, slot: usize) -> Option<&mut BackingControl> {
        self.slots.get_mut(slot).map(|s| &mut s.control)
    }

    /// The widget at `slot`, if one has been built.
    pub fn widget(&self, slot: usize) -> Option<&SelectBox> {
        self.slots.get(slot).and_then(|s| s.widget.as_ref())
    }

    pub(crate) fn widget_mut(&mut self, slot: usize) -> Option<&mut SelectBox> {
        self.slots.get_mut(slot).and_then(|s| s.widget.as_mut())
    }

    /// Find a control's slot by its host-facing name.
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.control.name() == name)
    }

    /// The current value of the named control.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.slot_of(name).map(|i| self.slots[i].control.value())
    }

    /// Slot of the widget currently holding keyboard focus.
    pub fn focused_slot(&self) -> Option<usize> {
        self.focus
    }

    /// Install a built widget into `slot` and register it for dismissal.
    /// The first installed widget receives keyboard focus.
    pub(crate) fn install_widget(&mut self, slot: usize, widget: SelectBox) -> &mut SelectBox {
        self.registry.register(slot);
        if self.focus.is_none() {
            self.focus = Some(slot);
        }
        let w = self.slots[slot].widget.insert(widget);
        if self.focus == Some(slot) {
            w.focus();
        }
        w
    }

    // --- Layout ---

    fn slot_row(&self, area: Rect, slot: usize) -> Option<Rect> {
        let offset = u16::try_from(slot).ok()?.checked_mul(2)?;
        let y = area.y.checked_add(offset)?;
        (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
    }

    fn list_area_of(&self, area: Rect, slot: usize) -> Option<Rect> {
        let row = self.slot_row(area, slot)?;
        let widget = self.slots[slot].widget.as_ref()?;
        Some(widget.list_area(row)?.intersection(area))
    }

    // --- Input handling ---

    /// What a click at (x, y) lands on: the widget slot plus the local
    /// message for it, or the slot alone for non-interactive parts of the
    /// widget's own structure (its list border), or nothing at all.
    /// Open overlays win over the trigger rows they cover.
    fn hit(&self, x: u16, y: u16) -> Option<(usize, Option<select_box::Message>)> {
        let area = self.area.get();
        for slot in 0..self.slots.len() {
            let Some(widget) = self.slots[slot].widget.as_ref() else {
                continue;
            };
            let Some(list) = self.list_area_of(area, slot) else {
                continue;
            };
            if let Some(entry) = widget.entry_at(list, x, y) {
                return Some((slot, Some(select_box::Message::EntryPressed(entry))));
            }
            if list.contains(Position::new(x, y)) {
                // Inside this widget's own list structure but not on an
                // entry; the dismissal pass must still spare the widget.
                return Some((slot, None));
            }
        }
        for slot in 0..self.slots.len() {
            if self.slots[slot].widget.is_none() {
                continue;
            }
            let Some(row) = self.slot_row(area, slot) else {
                continue;
            };
            if row.contains(Position::new(x, y)) {
                return Some((slot, Some(select_box::Message::TriggerPressed)));
            }
        }
        None
    }

    fn handle_click(&mut self, x: u16, y: u16) -> Command<Message> {
        let hit = self.hit(x, y);
        let keep = hit.as_ref().map(|(slot, _)| *slot);
        let cmd = match hit {
            Some((slot, msg)) => {
                self.focus_widget(slot);
                match msg {
                    Some(msg) => self.route(slot, msg),
                    None => Command::none(),
                }
            }
            None => {
                trace!(x, y, "click outside any dropdown");
                Command::none()
            }
        };
        // Page-wide dismissal: every other widget's list closes and its
        // hover marker clears. Runs after the local handler above.
        self.close_all_except(keep);
        cmd
    }

    fn handle_move(&mut self, x: u16, y: u16) -> Command<Message> {
        let area = self.area.get();
        for slot in 0..self.slots.len() {
            let Some(list) = self.list_area_of(area, slot) else {
                continue;
            };
            let Some(widget) = self.slots[slot].widget.as_ref() else {
                continue;
            };
            if let Some(entry) = widget.entry_at(list, x, y) {
                return self.route(slot, select_box::Message::EntryHovered(entry));
            }
        }
        Command::none()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Tab => {
                self.focus_step(1);
                Command::none()
            }
            KeyCode::BackTab => {
                self.focus_step(-1);
                Command::none()
            }
            _ => match self.focus {
                Some(slot) => self.route(slot, select_box::Message::KeyPress(key)),
                None => Command::none(),
            },
        }
    }

    /// Close every registered widget's list except `keep`'s.
    fn close_all_except(&mut self, keep: Option<usize>) {
        for slot in self.registry.slots_except(keep) {
            if let Some(widget) = self.widget_mut(slot) {
                if widget.is_open() {
                    debug!(slot, "dismissed");
                }
                let _ = widget.update(select_box::Message::Dismiss);
            }
        }
    }

    fn widget_slots(&self) -> Vec<usize> {
        (0..self.slots.len())
            .filter(|&i| self.slots[i].widget.is_some())
            .collect()
    }

    fn focus_widget(&mut self, slot: usize) {
        if self.focus == Some(slot) {
            return;
        }
        if let Some(old) = self.focus {
            if let Some(w) = self.widget_mut(old) {
                w.blur();
            }
        }
        self.focus = Some(slot);
        if let Some(w) = self.widget_mut(slot) {
            w.focus();
        }
    }

    fn focus_step(&mut self, dir: isize) {
        let slots = self.widget_slots();
        if slots.is_empty() {
            return;
        }
        let pos = self
            .focus
            .and_then(|f| slots.iter().position(|&s| s == f))
            .unwrap_or(0);
        let next = (pos as isize + dir).rem_euclid(slots.len() as isize) as usize;
        self.focus_widget(slots[next]);
    }

    /// Deliver a widget message, translating the widget's notifications into
    /// page notifications and applying value changes to the backing control.
    fn route(&mut self, slot: usize, msg: select_box::Message) -> Command<Message> {
        use select_box::Message as W;
        match msg {
            W::Selected { index, value } => {
                Command::message(Message::Select { slot, index, value })
            }
            W::Changed(value) => {
                let Some(control) = self.control_mut(slot) else {
                    return Command::none();
                };
                if control.set_value(value.clone()) {
                    Command::message(Message::Changed { slot, value })
                } else {
                    Command::none()
                }
            }
            msg => match self.widget_mut(slot) {
                Some(widget) => widget
                    .update(msg)
                    .map(move |m| Message::Widget { slot, msg: m }),
                None => Command::none(),
            },
        }
    }

    fn handle_input(&mut self, ev: InputEvent) -> Command<Message> {
        match ev {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row),
            InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                ..
            }) => self.handle_move(column, row),
            _ => Command::none(),
        }
    }
}

impl Component for Page {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Input(ev) => self.handle_input(ev),
            Message::Widget { slot, msg } => self.route(slot, msg),
            // Host-facing notifications; nothing left to do here.
            Message::Select { .. } | Message::Changed { .. } => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        let mut open_slots = Vec::new();
        for (slot, s) in self.slots.iter().enumerate() {
            let Some(row) = self.slot_row(area, slot) else {
                continue;
            };
            match &s.widget {
                Some(w) if w.is_open() => open_slots.push(slot),
                Some(w) => w.view(frame, row),
                None if !s.control.is_hidden() => {
                    // An unbuilt control renders as a plain native line.
                    let label = s
                        .control
                        .options()
                        .iter()
                        .find(|o| o.value() == s.control.value())
                        .map(|o| o.label())
                        .unwrap_or_else(|| s.control.name());
                    frame.render_widget(
                        Paragraph::new(Span::styled(
                            format!("{label} ▾"),
                            Style::default().fg(Color::DarkGray),
                        )),
                        row,
                    );
                }
                None => {}
            }
        }
        // Open widgets render last so their overlays sit on top of the rows
        // below them.
        for slot in open_slots {
            if let (Some(row), Some(w)) =
                (self.slot_row(area, slot), self.slots[slot].widget.as_ref())
            {
                w.view(frame, row);
            }
        }
    }
}
