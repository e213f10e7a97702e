//! The widget controller: one `SelectBox` per backing control.
//!
//! A `SelectBox` owns all interactive behavior for one built widget: the
//! open/close state, the committed (focused) entry, the hover marker used
//! during navigation, keyboard handling including type-ahead, and the scroll
//! window over the option list. It renders as a one-line trigger showing the
//! current selection plus a caret, with the option list as an overlay
//! anchored below the trigger while open.
//!
//! Construction normally happens through [`build`](crate::builder::build),
//! which wires a widget to a [`BackingControl`](crate::backing::BackingControl)
//! on a [`Page`](crate::page::Page).

use crate::entries::EntryList;
use crate::option::EntryState;
use crate::text;
use crate::window::ListWindow;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use selectbox_core::{Command, Component};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which edge of the trigger the overlay list aligns to.
///
/// Purely a layout choice; behavior is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Align the list with the trigger's left edge (default).
    #[default]
    Left,
    /// Align the list with the trigger's right edge.
    Right,
}

/// Error returned when parsing an [`Orientation`] from host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized orientation `{0}`, expected `left` or `right`")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Orientation::Left),
            "right" => Ok(Orientation::Right),
            other => Err(ParseOrientationError(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Left => f.write_str("left"),
            Orientation::Right => f.write_str("right"),
        }
    }
}

/// Style configuration for the widget.
#[derive(Debug, Clone)]
pub struct SelectBoxStyle {
    /// Style for the trigger label.
    pub trigger: Style,
    /// Style for the caret marker next to the trigger label.
    pub caret: Style,
    /// Style for plain list entries.
    pub entry: Style,
    /// Style for the focused (committed) entry.
    pub focused_entry: Style,
    /// Style for the hovered entry.
    pub hovered_entry: Style,
}

impl Default for SelectBoxStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            caret: Style::default().fg(Color::DarkGray),
            entry: Style::default(),
            focused_entry: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            hovered_entry: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Messages for the select box controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// The trigger was activated (click, or Enter/Space while closed).
    TriggerPressed,
    /// A list entry was activated (clicked).
    EntryPressed(usize),
    /// The pointer moved over a list entry.
    EntryHovered(usize),
    /// A key press routed to this widget.
    KeyPress(KeyEvent),
    /// Close the list without committing (page-wide dismissal).
    Dismiss,
    /// Emitted on every commit: the "select" signal, carrying the committed
    /// entry's index and value.
    Selected { index: usize, value: String },
    /// Emitted after a commit whose value differs from the current one; the
    /// host applies it to the backing control.
    Changed(String),
}

/// A stylable dropdown standing in for one backing control.
pub struct SelectBox {
    entries: EntryList,
    open: bool,
    /// Committed entry. Always a valid index while `entries` is non-empty.
    focused: usize,
    /// Navigation highlight, independent of `focused` until committed.
    hovered: Option<usize>,
    /// Mirror of the backing control's value, kept in sync by commits.
    value: String,
    trigger_label: String,
    orientation: Orientation,
    window: ListWindow,
    max_visible: usize,
    style: SelectBoxStyle,
    keyboard_focus: bool,
}

impl SelectBox {
    /// Default number of entries shown before the list scrolls.
    pub const DEFAULT_MAX_VISIBLE: usize = 8;

    /// Create a widget over the given entries.
    ///
    /// `focused` is the initially selected entry and `value` the backing
    /// control's current value. The trigger label starts empty; the builder
    /// fills it by committing the initial entry, so a directly-constructed
    /// widget should do the same (see [`select_entry`](Self::select_entry)).
    pub fn new(entries: EntryList, focused: usize, value: impl Into<String>) -> Self {
        let mut window = ListWindow::new(Self::DEFAULT_MAX_VISIBLE);
        window.set_visible(entries.len().clamp(1, Self::DEFAULT_MAX_VISIBLE));
        Self {
            focused: focused.min(entries.len().saturating_sub(1)),
            entries,
            open: false,
            hovered: None,
            value: value.into(),
            trigger_label: String::new(),
            orientation: Orientation::default(),
            window,
            max_visible: Self::DEFAULT_MAX_VISIBLE,
            style: SelectBoxStyle::default(),
            keyboard_focus: false,
        }
    }

    /// Set the orientation of the overlay list.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the maximum number of visible entries before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.window
            .set_visible(self.entries.len().clamp(1, self.max_visible));
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: SelectBoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether the option list is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The widget's entries, in the backing control's order.
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// Index of the committed entry, or `None` for an empty widget.
    pub fn focused_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.focused)
    }

    /// Index of the hovered entry, if any.
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// The mirrored backing value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label currently shown in the trigger.
    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    /// The configured orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First visible entry of the scroll window.
    pub fn scroll_offset(&self) -> usize {
        self.window.offset()
    }

    /// Presentation state of the entry at `index`. Hovered wins when the
    /// hover and focus markers coincide.
    pub fn entry_state(&self, index: usize) -> EntryState {
        if self.hovered == Some(index) {
            EntryState::Hovered
        } else if !self.entries.is_empty() && self.focused == index {
            EntryState::Focused
        } else {
            EntryState::Normal
        }
    }

    /// Give this widget keyboard focus.
    pub fn focus(&mut self) {
        self.keyboard_focus = true;
    }

    /// Remove keyboard focus, closing the list if open.
    pub fn blur(&mut self) {
        self.keyboard_focus = false;
        self.close();
    }

    fn open_list(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        debug!(entries = self.entries.len(), "list opened");
        self.open = true;
    }

    fn close(&mut self) {
        if self.open {
            debug!("list closed");
        }
        self.open = false;
        self.hovered = None;
    }

    /// The entry keyboard navigation starts from: hovered, else focused
    /// (which is the first entry until something else is committed).
    fn anchor(&self) -> usize {
        self.hovered.unwrap_or(self.focused)
    }

    fn move_hover(&mut self, target: Option<usize>) {
        if let Some(i) = target {
            trace!(entry = i, "hover moved");
            self.hovered = Some(i);
            self.window.scroll_to(i, self.entries.len());
        }
    }

    /// Commit the entry at `index`: clear the hover marker, move focus,
    /// refresh the trigger label, and emit the select signal. The value
    /// change is emitted only when it differs from the mirrored value.
    /// With `close` false the list stays open and scrolls the entry into
    /// view instead (used for the initial selection at build time).
    pub(crate) fn select_entry(&mut self, index: usize, close: bool) -> Command<Message> {
        let Some(entry) = self.entries.get(index) else {
            return Command::none();
        };
        let label = entry.label().to_string();
        let value = entry.value().to_string();
        self.hovered = None;
        self.focused = index;
        self.trigger_label = label;
        if close {
            self.close();
        } else {
            self.window.scroll_to(index, self.entries.len());
        }
        debug!(entry = index, value = %value, "entry committed");
        let mut cmds = vec![Command::message(Message::Selected {
            index,
            value: value.clone(),
        })];
        if value != self.value {
            self.value = value.clone();
            cmds.push(Command::message(Message::Changed(value)));
        }
        Command::batch(cmds)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        // A control with no options yields an inert widget.
        if self.entries.is_empty() {
            return Command::none();
        }
        match key.code {
            // The first arrow press only reveals the list.
            KeyCode::Up | KeyCode::Down if !self.open => {
                self.open_list();
                Command::none()
            }
            KeyCode::Up => {
                self.move_hover(self.entries.prev_index(self.anchor()));
                Command::none()
            }
            KeyCode::Down => {
                self.move_hover(self.entries.next_index(self.anchor()));
                Command::none()
            }
            KeyCode::Esc => {
                self.close();
                Command::none()
            }
            KeyCode::Enter if self.open => self.select_entry(self.anchor(), true),
            KeyCode::Enter => {
                self.open_list();
                Command::none()
            }
            KeyCode::Char(' ') if !self.open => {
                self.open_list();
                Command::none()
            }
            // Printable characters feed type-ahead whether the list is open
            // or closed; the open state itself never changes.
            KeyCode::Char(c) => {
                self.move_hover(self.entries.type_ahead(self.anchor(), c));
                Command::none()
            }
            _ => Command::none(),
        }
    }

    // --- Geometry shared by rendering and the page's hit-testing ---

    fn list_rows(&self) -> usize {
        self.entries.len().min(self.max_visible)
    }

    /// Area of the overlay list anchored below `trigger_area`, or `None`
    /// while closed. The rect is not clamped to any screen bounds; callers
    /// intersect it with their own area.
    pub fn list_area(&self, trigger_area: Rect) -> Option<Rect> {
        if !self.open || self.entries.is_empty() {
            return None;
        }
        let height = self.list_rows() as u16 + 2; // borders
        let width =
            (self.entries.max_label_width() as u16 + 4).clamp(8, trigger_area.width.max(8));
        let x = match self.orientation {
            Orientation::Left => trigger_area.x,
            Orientation::Right => trigger_area.right().saturating_sub(width),
        };
        Some(Rect::new(
            x,
            trigger_area.y + trigger_area.height,
            width,
            height,
        ))
    }

    /// Map a position inside the (clamped) overlay list back to an entry
    /// index, accounting for the border and the scroll window.
    pub fn entry_at(&self, list_area: Rect, x: u16, y: u16) -> Option<usize> {
        if !self.open || !list_area.contains((x, y).into()) {
            return None;
        }
        let inner = Rect {
            x: list_area.x + 1,
            y: list_area.y + 1,
            width: list_area.width.saturating_sub(2),
            height: list_area.height.saturating_sub(2),
        };
        if !inner.contains((x, y).into()) {
            return None;
        }
        let row = (y - inner.y) as usize;
        let index = self.window.offset() + row;
        (row < self.list_rows() && index < self.entries.len()).then_some(index)
    }
}

impl Component for SelectBox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::TriggerPressed => {
                if self.open {
                    self.close();
                } else {
                    self.open_list();
                }
                Command::none()
            }
            Message::EntryPressed(index) => {
                if !self.open {
                    return Command::none();
                }
                self.select_entry(index, true)
            }
            Message::EntryHovered(index) => {
                if self.open && index < self.entries.len() {
                    trace!(entry = index, "pointer hover");
                    self.hovered = Some(index);
                }
                Command::none()
            }
            Message::KeyPress(key) => self.handle_key(key),
            Message::Dismiss => {
                self.close();
                Command::none()
            }
            Message::Selected { .. } | Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        // Trigger line: label plus caret; the caret reflects the open state.
        let caret = if self.open { " ▾" } else { " ▸" };
        let label_width = area.width.saturating_sub(2) as usize;
        let label = text::truncate_to_width(&self.trigger_label, label_width);
        let trigger_style = if self.keyboard_focus {
            self.style.trigger.add_modifier(Modifier::UNDERLINED)
        } else {
            self.style.trigger
        };
        let line = Line::from(vec![
            Span::styled(label, trigger_style),
            Span::styled(caret, self.style.caret),
        ]);
        frame.render_widget(
            Paragraph::new(line),
            Rect {
                height: 1,
                ..area
            },
        );

        // Overlay list while open.
        let Some(list_area) = self.list_area(Rect { height: 1, ..area }) else {
            return;
        };
        let list_area = list_area.intersection(frame.area());
        if list_area.height < 3 || list_area.width < 4 {
            return;
        }
        frame.render_widget(Clear, list_area);
        let block = Block::bordered();
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        let offset = self.window.offset();
        for (row, index) in (offset..self.entries.len().min(offset + self.list_rows()))
            .enumerate()
            .map(|(row, index)| (row as u16, index))
        {
            if row >= inner.height {
                break;
            }
            let Some(entry) = self.entries.get(index) else {
                break;
            };
            let row_area = Rect {
                y: inner.y + row,
                height: 1,
                ..inner
            };
            let (style, prefix) = match self.entry_state(index) {
                EntryState::Hovered => (self.style.hovered_entry, "▸ "),
                EntryState::Focused => (self.style.focused_entry, "  "),
                EntryState::Normal => (self.style.entry, "  "),
            };
            let max_text = row_area.width.saturating_sub(2) as usize;
            let display = format!("{prefix}{}", text::truncate_to_width(entry.label(), max_text));
            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.keyboard_focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn fruits() -> SelectBox {
        let entries = EntryList::new(vec![
            SelectOption::new("Apple", "apple"),
            SelectOption::new("Banana", "banana"),
            SelectOption::new("Avocado", "avocado"),
        ]);
        let mut sb = SelectBox::new(entries, 0, "apple");
        // Mirror the builder's initial select to fill the trigger label.
        let _ = sb.select_entry(0, false);
        sb
    }

    #[test]
    fn starts_closed_with_initial_focus() {
        let sb = fruits();
        assert!(!sb.is_open());
        assert_eq!(sb.focused_index(), Some(0));
        assert_eq!(sb.hovered_index(), None);
        assert_eq!(sb.trigger_label(), "Apple");
        assert_eq!(sb.value(), "apple");
    }

    #[test]
    fn trigger_toggles_open_state() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        assert!(sb.is_open());
        sb.update(Message::TriggerPressed);
        assert!(!sb.is_open());
    }

    #[test]
    fn first_arrow_only_reveals() {
        let mut sb = fruits();
        sb.update(key(KeyCode::Down));
        assert!(sb.is_open());
        // No hover yet: the press that opened the list moved nothing.
        assert_eq!(sb.hovered_index(), None);
        assert_eq!(sb.focused_index(), Some(0));
    }

    #[test]
    fn arrows_move_hover_and_wrap() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(key(KeyCode::Down));
        assert_eq!(sb.hovered_index(), Some(1));
        sb.update(key(KeyCode::Down));
        assert_eq!(sb.hovered_index(), Some(2));
        sb.update(key(KeyCode::Down)); // wraps last -> first
        assert_eq!(sb.hovered_index(), Some(0));
        sb.update(key(KeyCode::Up)); // wraps first -> last
        assert_eq!(sb.hovered_index(), Some(2));
        // Focus never moved.
        assert_eq!(sb.focused_index(), Some(0));
    }

    #[test]
    fn escape_closes_without_changing_selection() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(key(KeyCode::Down));
        sb.update(key(KeyCode::Esc));
        assert!(!sb.is_open());
        assert_eq!(sb.hovered_index(), None);
        assert_eq!(sb.focused_index(), Some(0));
        assert_eq!(sb.value(), "apple");
    }

    #[test]
    fn enter_commits_hovered_entry() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(key(KeyCode::Down));
        let msgs = sb.update(key(KeyCode::Enter)).into_messages();
        assert!(!sb.is_open());
        assert_eq!(sb.focused_index(), Some(1));
        assert_eq!(sb.trigger_label(), "Banana");
        assert_eq!(sb.value(), "banana");
        assert!(matches!(
            msgs[0],
            Message::Selected { index: 1, ref value } if value == "banana"
        ));
        assert!(matches!(msgs[1], Message::Changed(ref v) if v == "banana"));
    }

    #[test]
    fn enter_falls_back_to_focused_without_hover() {
        let mut sb = fruits();
        let _ = sb.select_entry(2, true);
        sb.update(Message::TriggerPressed);
        let msgs = sb.update(key(KeyCode::Enter)).into_messages();
        // No hover: the focused entry is re-committed.
        assert!(matches!(
            msgs[0],
            Message::Selected { index: 2, ref value } if value == "avocado"
        ));
        // Same value, so no change notification.
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn enter_while_closed_opens() {
        let mut sb = fruits();
        sb.update(key(KeyCode::Enter));
        assert!(sb.is_open());
        // Nothing was committed by opening.
        assert_eq!(sb.value(), "apple");
    }

    #[test]
    fn space_opens_when_closed_and_searches_when_open() {
        let mut sb = fruits();
        sb.update(key(KeyCode::Char(' ')));
        assert!(sb.is_open());
        sb.update(key(KeyCode::Char(' ')));
        // No label starts with a space: hover unchanged, still open.
        assert!(sb.is_open());
        assert_eq!(sb.hovered_index(), None);
    }

    #[test]
    fn entry_press_commits_and_closes() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        let msgs = sb.update(Message::EntryPressed(2)).into_messages();
        assert!(!sb.is_open());
        assert_eq!(sb.trigger_label(), "Avocado");
        assert!(matches!(
            msgs[0],
            Message::Selected { index: 2, ref value } if value == "avocado"
        ));
        assert!(matches!(msgs[1], Message::Changed(ref v) if v == "avocado"));
    }

    #[test]
    fn entry_press_while_closed_is_ignored() {
        let mut sb = fruits();
        let cmd = sb.update(Message::EntryPressed(2));
        assert!(cmd.is_none());
        assert_eq!(sb.focused_index(), Some(0));
    }

    #[test]
    fn reselecting_same_value_emits_no_change() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        let msgs = sb.update(Message::EntryPressed(0)).into_messages();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Message::Selected { index: 0, .. }));
    }

    #[test]
    fn pointer_hover_moves_marker_only() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(Message::EntryHovered(2));
        assert_eq!(sb.hovered_index(), Some(2));
        assert_eq!(sb.focused_index(), Some(0));
        assert_eq!(sb.value(), "apple");
        // Out-of-range hover is ignored.
        sb.update(Message::EntryHovered(9));
        assert_eq!(sb.hovered_index(), Some(2));
    }

    #[test]
    fn hover_and_focus_may_coincide() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(Message::EntryHovered(0));
        assert_eq!(sb.entry_state(0), EntryState::Hovered);
        sb.update(Message::EntryHovered(1));
        assert_eq!(sb.entry_state(0), EntryState::Focused);
        assert_eq!(sb.entry_state(1), EntryState::Hovered);
        assert_eq!(sb.entry_state(2), EntryState::Normal);
    }

    #[test]
    fn type_ahead_moves_hover() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(Message::EntryHovered(0)); // anchor on "Apple"
        sb.update(key(KeyCode::Char('a')));
        assert_eq!(sb.hovered_index(), Some(2)); // "Avocado", wrapping search
        sb.update(Message::EntryHovered(0));
        sb.update(key(KeyCode::Char('b')));
        assert_eq!(sb.hovered_index(), Some(1)); // "Banana"
    }

    #[test]
    fn type_ahead_without_match_changes_nothing() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(key(KeyCode::Char('z')));
        assert_eq!(sb.hovered_index(), None);
        assert!(sb.is_open());
    }

    #[test]
    fn type_ahead_works_while_closed() {
        let mut sb = fruits();
        sb.update(key(KeyCode::Char('b')));
        assert!(!sb.is_open());
        assert_eq!(sb.hovered_index(), Some(1));
    }

    #[test]
    fn dismiss_closes_and_clears_hover() {
        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        sb.update(key(KeyCode::Down));
        sb.update(Message::Dismiss);
        assert!(!sb.is_open());
        assert_eq!(sb.hovered_index(), None);
        assert_eq!(sb.focused_index(), Some(0));
    }

    #[test]
    fn empty_widget_is_inert() {
        let mut sb = SelectBox::new(EntryList::default(), 0, "");
        sb.update(Message::TriggerPressed);
        assert!(!sb.is_open());
        sb.update(key(KeyCode::Down));
        assert!(!sb.is_open());
        assert!(sb.update(key(KeyCode::Enter)).is_none());
        assert_eq!(sb.focused_index(), None);
        assert_eq!(sb.trigger_label(), "");
    }

    #[test]
    fn navigation_scrolls_window() {
        let entries = EntryList::new(
            (0..10)
                .map(|i| SelectOption::new(format!("Item {i}"), format!("{i}")))
                .collect(),
        );
        let mut sb = SelectBox::new(entries, 0, "0").with_max_visible(3);
        let _ = sb.select_entry(0, false);
        sb.update(Message::TriggerPressed);
        for _ in 0..4 {
            sb.update(key(KeyCode::Down));
        }
        assert_eq!(sb.hovered_index(), Some(4));
        // Hover sits on the bottom edge of the 3-row band.
        assert_eq!(sb.scroll_offset(), 2);
        // Wrapping back to the top pulls the window up with it.
        for _ in 0..6 {
            sb.update(key(KeyCode::Down));
        }
        assert_eq!(sb.hovered_index(), Some(0));
        assert_eq!(sb.scroll_offset(), 0);
    }

    #[test]
    fn blur_closes_list() {
        let mut sb = fruits();
        sb.focus();
        assert!(Component::focused(&sb));
        sb.update(Message::TriggerPressed);
        sb.blur();
        assert!(!sb.is_open());
        assert!(!Component::focused(&sb));
    }

    #[test]
    fn list_area_honors_orientation() {
        let mut sb = fruits().with_orientation(Orientation::Right);
        sb.update(Message::TriggerPressed);
        let trigger = Rect::new(10, 0, 20, 1);
        let area = sb.list_area(trigger).unwrap();
        assert_eq!(area.right(), trigger.right());
        assert_eq!(area.y, 1);

        let mut sb = fruits();
        sb.update(Message::TriggerPressed);
        let area = sb.list_area(trigger).unwrap();
        assert_eq!(area.x, trigger.x);
    }

    #[test]
    fn entry_at_maps_rows_through_scroll_offset() {
        let entries = EntryList::new(
            (0..10)
                .map(|i| SelectOption::new(format!("Item {i}"), format!("{i}")))
                .collect(),
        );
        let mut sb = SelectBox::new(entries, 0, "0").with_max_visible(3);
        sb.update(Message::TriggerPressed);
        for _ in 0..4 {
            sb.update(key(KeyCode::Down));
        }
        let trigger = Rect::new(0, 0, 20, 1);
        let area = sb.list_area(trigger).unwrap();
        // First content row is below the border and maps through the offset.
        assert_eq!(sb.entry_at(area, 2, area.y + 1), Some(2));
        assert_eq!(sb.entry_at(area, 2, area.y + 3), Some(4));
        // Border rows map to nothing.
        assert_eq!(sb.entry_at(area, 2, area.y), None);
    }

    #[test]
    fn render_shows_trigger_caret_and_hover() {
        use selectbox_core::testing::TestComponent;

        let mut t = TestComponent::new(fruits());
        let out = t.render_string(20, 6);
        assert!(out.contains("Apple ▸"));

        t.send(Message::TriggerPressed);
        t.send(key(KeyCode::Down));
        let out = t.render_string(20, 6);
        assert!(out.contains("Apple ▾"));
        assert!(out.contains("▸ Banana"));
        assert!(out.contains("Avocado"));
    }

    #[test]
    fn orientation_parses_from_config_strings() {
        assert_eq!("left".parse::<Orientation>(), Ok(Orientation::Left));
        assert_eq!("right".parse::<Orientation>(), Ok(Orientation::Right));
        assert!("top".parse::<Orientation>().is_err());
        assert_eq!(Orientation::default().to_string(), "left");
    }
}
