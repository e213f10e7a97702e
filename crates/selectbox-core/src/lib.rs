//! Component model for the **selectbox** widget system.
//!
//! `selectbox-core` provides the small set of traits and types the widgets
//! are built on. The design follows the [Elm Architecture], reduced to its
//! synchronous core: a widget is an **update -> view** cycle, with
//! notifications pushed to the host through [`Command`]s. There is no
//! runtime and no async machinery — every update runs to completion inside
//! the host's input-event handler, which is exactly the ordering model the
//! widgets rely on.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | A widget that updates on messages and renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Messages a widget hands back to its host (selection, change, ...) |
//! | [`InputEvent`] | Crossterm key/mouse/resize input as routed by a host |
//! | [`TestComponent`](testing::TestComponent) | Headless harness for unit-testing a [`Component`] |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::InputEvent;
