//! # Settings Form Example
//!
//! A small settings form whose native selection controls are replaced by
//! stylable dropdowns:
//! - Building widgets for a [`Page`] of [`BackingControl`]s
//! - Routing terminal input through `page.update(...)`
//! - Observing `Select`/`Changed` notifications the way a host would
//!
//! Click the triggers and entries, or use Tab, arrows, Enter, Escape, and
//! type-ahead (first letter). Press `q` to quit.
//!
//! Run with: `cargo run --example settings_form`

use std::collections::VecDeque;
use std::io;

use selectbox::backing::BackingControl;
use selectbox::builder::{build, BuildConfig};
use selectbox::crossterm::event::{self, KeyCode, KeyModifiers};
use selectbox::crossterm::execute;
use selectbox::option::SelectOption;
use selectbox::page::{self, Page};
use selectbox::ratatui::layout::{Constraint, Layout};
use selectbox::ratatui::style::{Color, Style};
use selectbox::ratatui::widgets::{Block, Borders, Paragraph};
use selectbox::ratatui::Frame;
use selectbox::{Command, Component, InputEvent};

fn settings_page() -> Page {
    Page::new(vec![
        BackingControl::new(
            "theme",
            vec![
                SelectOption::new("Light", "light"),
                SelectOption::new("Dark", "dark").selected(),
                SelectOption::new("High contrast", "high-contrast"),
            ],
        ),
        BackingControl::new(
            "language",
            vec![
                SelectOption::new("English", "en"),
                SelectOption::new("Español", "es"),
                SelectOption::new("Deutsch", "de"),
                SelectOption::new("Français", "fr"),
                SelectOption::new("日本語", "ja"),
            ],
        ),
        BackingControl::new(
            "autosave",
            vec![
                SelectOption::new("Every minute", "60"),
                SelectOption::new("Every five minutes", "300"),
                SelectOption::new("Never", "0"),
            ],
        ),
    ])
}

/// Deliver a command's messages back through the page until it settles,
/// recording change notifications in the status line.
fn pump(page: &mut Page, cmd: Command<page::Message>, status: &mut String) {
    let mut queue: VecDeque<_> = cmd.into_messages().into();
    while let Some(msg) = queue.pop_front() {
        if let page::Message::Changed { slot, value } = &msg {
            let name = page.control(*slot).map(BackingControl::name).unwrap_or("?");
            *status = format!("changed: {name} = {value}");
        }
        queue.extend(page.update(msg).into_messages());
    }
}

fn view(page: &Page, status: &str, frame: &mut Frame) {
    let [form, status_line] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Settings ");
    let inner = block.inner(form);
    frame.render_widget(block, form);
    page.view(frame, inner);

    frame.render_widget(
        Paragraph::new(format!(" {status} — q quits")).style(Style::default().fg(Color::DarkGray)),
        status_line,
    );
}

fn main() -> io::Result<()> {
    let mut page = settings_page();
    let mut status = String::from("ready");
    let init = build(&mut page, &BuildConfig::default());
    pump(&mut page, init, &mut status);

    let mut terminal = selectbox::ratatui::init();
    execute!(io::stdout(), event::EnableMouseCapture)?;

    let result = loop {
        if let Err(e) = terminal.draw(|frame| view(&page, &status, frame)) {
            break Err(e);
        }
        match event::read() {
            Ok(event::Event::Key(key))
                if key.code == KeyCode::Char('q')
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)) =>
            {
                break Ok(());
            }
            Ok(ev) => {
                let cmd = page.update(page::Message::Input(InputEvent::from(ev)));
                pump(&mut page, cmd, &mut status);
            }
            Err(e) => break Err(e),
        }
    };

    execute!(io::stdout(), event::DisableMouseCapture)?;
    selectbox::ratatui::restore();
    result
}
