use crate::command::{Command, CommandInner};
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a real terminal.
///
/// `TestComponent` lets you exercise the whole update/view cycle in a plain
/// `#[test]` function — no TTY required. Messages produced by commands are
/// collected; either feed them back through the component with
/// [`drain_messages`](TestComponent::drain_messages), or pull them out for
/// assertions with [`take_messages`](TestComponent::take_messages) when they
/// are notifications meant for a host.
///
/// # Example
///
/// ```rust,ignore
/// use selectbox_core::testing::TestComponent;
///
/// let mut t = TestComponent::new(SelectBox::new(entries, 0));
/// t.send(Message::TriggerPressed);
/// assert!(t.component().is_open());
///
/// let output = t.render_string(30, 6);
/// assert!(output.contains("Banana"));
/// ```
pub struct TestComponent<C: Component> {
    component: C,
    pending_messages: Vec<C::Message>,
}

impl<C: Component> TestComponent<C> {
    /// Wrap an already-constructed component in a harness.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending_messages: Vec::new(),
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// The message is passed to [`Component::update`] immediately. Any
    /// messages produced by the returned command are enqueued; call
    /// [`drain_messages`](TestComponent::drain_messages) or
    /// [`take_messages`](TestComponent::take_messages) to consume them.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect_messages(cmd);
    }

    /// Feed all pending messages back through [`Component::update`].
    ///
    /// Repeatedly drains the pending queue until no new messages are
    /// generated. Useful for command-chaining scenarios where one update
    /// produces a message that triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.collect_messages(cmd);
            }
        }
    }

    /// Remove and return all pending messages without updating the component.
    ///
    /// This is the right tool for notification-style messages (selections,
    /// value changes) that a real host would consume rather than route back.
    pub fn take_messages(&mut self) -> Vec<C::Message> {
        self.pending_messages.drain(..).collect()
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    ///
    /// This bypasses the normal message-driven update cycle, which can be
    /// useful for arranging test state before sending messages.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// The component is given the whole frame as its area. Returns the raw
    /// buffer, which you can inspect cell-by-cell. For a simpler string-based
    /// assertion, see [`render_string`](TestComponent::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.component.view(frame, frame.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a plain string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are separated
    /// by newlines. Trailing whitespace within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_messages(&mut self, cmd: Command<C::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Batch(cmds) | CommandInner::Sequence(cmds) => {
                for cmd in cmds {
                    self.collect_messages(cmd);
                }
            }
        }
    }
}
