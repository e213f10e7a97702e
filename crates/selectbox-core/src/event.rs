use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal input delivered to a page or widget by its host event loop.
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so handlers can pattern-match on key codes, modifiers, mouse buttons, and
/// positions using the full crossterm API.
///
/// # Example
///
/// ```rust,ignore
/// use selectbox_core::InputEvent;
///
/// let ev = crossterm::event::read()?;
/// let cmd = page.update(page::Message::Input(InputEvent::from(ev)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (click, movement, wheel).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => InputEvent::Key(k),
            crossterm::event::Event::Mouse(m) => InputEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => InputEvent::FocusGained,
            crossterm::event::Event::FocusLost => InputEvent::FocusLost,
            crossterm::event::Event::Paste(s) => InputEvent::Paste(s),
        }
    }
}
