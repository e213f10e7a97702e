use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A self-contained widget that renders into a given [`Rect`] area.
///
/// Widgets follow a synchronous **update -> view** cycle: the host feeds
/// messages to [`update`](Component::update), which mutates state and may
/// return a [`Command`] carrying notification messages; each frame the host
/// calls [`view`](Component::view) with the area the widget should occupy.
///
/// # Composition pattern
///
/// To embed a `Component` inside another, wrap the child's message type in a
/// variant of the parent message and use [`Command::map`] to translate
/// commands:
///
/// ```rust,ignore
/// use selectbox_core::{Command, Component};
/// use ratatui::layout::Rect;
/// use ratatui::Frame;
///
/// struct Form { picker: Picker }
///
/// enum FormMsg { Picker(picker::Message) }
///
/// impl Component for Form {
///     type Message = FormMsg;
///
///     fn update(&mut self, msg: FormMsg) -> Command<FormMsg> {
///         match msg {
///             FormMsg::Picker(m) => self.picker.update(m).map(FormMsg::Picker),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         self.picker.view(frame, area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent components typically wrap this in one of their own message
    /// variants so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying
    /// any notification messages for the host.
    ///
    /// Updates run to completion before the next message is delivered; a
    /// component never observes a half-applied transition.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle
    /// (overlays anchored to it are allowed to spill below or beside it).
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has keyboard focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
