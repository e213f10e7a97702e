//! Stylable select/dropdown widgets for terminal UIs.
//!
//! **selectbox** replaces plain selection controls with fully stylable
//! dropdown widgets while preserving the control's semantics: its current
//! value, its change notification, and keyboard operability. A
//! [`Page`](page::Page) holds the host-owned [`BackingControl`](backing::BackingControl)s;
//! [`build`](builder::build) scans it and installs a
//! [`SelectBox`](select_box::SelectBox) widget per control; each widget owns
//! its own open/close, hover, keyboard-navigation, and scroll state, and the
//! page coordinates keyboard focus and click-outside dismissal across all of
//! them.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`backing`] | The host-owned control a widget stands in for |
//! | [`builder`] | Scans a page and builds widgets for unprocessed controls |
//! | [`entries`] | Ordered entry list with wrapping navigation and type-ahead |
//! | [`option`] | The selectable item type and per-entry presentation state |
//! | [`page`] | Host container: layout, input routing, dismissal |
//! | [`registry`] | Page-wide widget registry behind "close all others" |
//! | [`select_box`] | The widget controller and its rendering |
//! | [`text`] | Width-aware label truncation |
//! | [`window`] | Scroll window with scroll-into-view |
//!
//! # Quick start
//!
//! ```ignore
//! use selectbox::backing::BackingControl;
//! use selectbox::builder::{build, BuildConfig};
//! use selectbox::option::SelectOption;
//! use selectbox::page::Page;
//!
//! let mut page = Page::new(vec![BackingControl::new(
//!     "fruit",
//!     vec![
//!         SelectOption::new("Apple", "apple"),
//!         SelectOption::new("Banana", "banana").selected(),
//!     ],
//! )]);
//! let init = build(&mut page, &BuildConfig::default());
//! // Route `init` and terminal input through `page.update(...)`, render
//! // with `page.view(...)`, and watch for `page::Message::Changed`.
//! ```

pub mod backing;
pub mod builder;
pub mod entries;
pub mod option;
pub mod page;
pub mod registry;
pub mod select_box;
pub mod text;
pub mod window;

pub use selectbox_core::{Command, Component, InputEvent};
pub use selectbox_core as core;

// Re-export dependencies for use in demos and downstream crates.
pub use crossterm;
pub use ratatui;
