//! Keyboard-driven table browser.
//!
//! Keys are read on a helper thread and forwarded over a channel. The main
//! thread owns the [`Session`] and waits for either the next key or the
//! search debounce deadline, whichever comes first.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::{bail, Context};
use console::{style, Key, Term};
use staffdesk_seeker::{SortSpec, ValidatedConfig};

use crate::records::Record;
use crate::session::{Action, Session};
use crate::table;

const HELP: &str = "type to search · Tab/Shift-Tab filters · ↑/↓ + Enter sort · ←/→ page · Del reset · Esc quit";

/// What a key means to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Act(Action),
    /// Only the sort picker moved.
    Redraw,
    Quit,
    Ignore,
}

/// Browser-only state: which column the sort picker points at.
#[derive(Debug, Default)]
pub struct Picker {
    cursor: usize,
}

impl Picker {
    pub fn column<R: Record>(&self) -> Option<&'static str> {
        R::schema().fields().get(self.cursor).map(|f| f.name)
    }

    /// Translates a key into an [`Input`], moving the picker if needed.
    pub fn interpret<R: Record>(&mut self, key: Key) -> Input {
        let schema = R::schema();
        let columns = schema.fields().len();
        let mut filters = schema.filterable().map(|f| f.name);

        match key {
            Key::Escape => Input::Quit,
            Key::Char(c) if !c.is_control() => Input::Act(Action::Type(c)),
            Key::Backspace => Input::Act(Action::Backspace),
            Key::Tab => filters.next().map_or(Input::Ignore, |f| Input::Act(Action::CycleFilter(f))),
            Key::BackTab => filters.nth(1).map_or(Input::Ignore, |f| Input::Act(Action::CycleFilter(f))),
            Key::ArrowUp if columns > 0 => {
                self.cursor = (self.cursor + columns - 1) % columns;
                Input::Redraw
            }
            Key::ArrowDown if columns > 0 => {
                self.cursor = (self.cursor + 1) % columns;
                Input::Redraw
            }
            Key::Enter => self
                .column::<R>()
                .map_or(Input::Ignore, |f| Input::Act(Action::SortBy(f))),
            Key::ArrowLeft => Input::Act(Action::PreviousPage),
            Key::ArrowRight => Input::Act(Action::NextPage),
            Key::Home => Input::Act(Action::GoToPage(1)),
            Key::End => Input::Act(Action::GoToPage(usize::MAX)),
            Key::Del => Input::Act(Action::Reset),
            _ => Input::Ignore,
        }
    }
}

/// Runs the browser until Esc.
pub fn run<R: Record>(records: &[R], config: &ValidatedConfig) -> anyhow::Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("browse needs an interactive terminal; use `{} list` instead", R::KIND);
    }

    let keys = spawn_key_reader();
    let mut session = Session::new(records, config);
    let mut picker = Picker::default();

    term.hide_cursor().context("terminal setup failed")?;
    let result = event_loop(&term, &keys, &mut session, &mut picker);
    session.quit();
    term.show_cursor().context("terminal restore failed")?;
    result
}

fn event_loop<R: Record>(
    term: &Term,
    keys: &Receiver<Key>,
    session: &mut Session<'_, R>,
    picker: &mut Picker,
) -> anyhow::Result<()> {
    draw(term, session, picker)?;

    loop {
        let event = match session.time_until_due(Instant::now()) {
            Some(wait) => keys.recv_timeout(wait),
            None => keys.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let redraw = match event {
            Ok(key) => match picker.interpret::<R>(key) {
                Input::Act(action) => {
                    let now = Instant::now();
                    session.handle(action, now);
                    session.tick(now);
                    true
                }
                Input::Redraw => true,
                Input::Quit => return Ok(()),
                Input::Ignore => false,
            },
            Err(RecvTimeoutError::Timeout) => session.tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("key reader stopped");
                return Ok(());
            }
        };

        if redraw {
            draw(term, session, picker)?;
        }
    }
}

/// Reads keys until the receiver goes away. The thread is left blocked in
/// `read_key` on exit; the process ends right after.
fn spawn_key_reader() -> Receiver<Key> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let term = Term::stdout();
        loop {
            match term.read_key() {
                Ok(key) => {
                    if tx.send(key).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::warn!("cannot read key: {}", err);
                    break;
                }
            }
        }
    });
    rx
}

/// The whole screen as text.
pub fn render_screen<R: Record>(session: &mut Session<'_, R>, picker: &Picker) -> String {
    let snap = session.snapshot();
    let state = session.state();
    let schema = R::schema();

    let mut lines = vec![style(format!("staffdesk · {}", R::KIND)).bold().to_string()];

    let pending = if session.is_search_pending() { "  …" } else { "" };
    lines.push(format!("Search: {}▏{}", session.typed_text(), pending));

    let filters = schema
        .filterable()
        .map(|f| format!("{}: {}", f.label, state.filter(f.name)))
        .collect::<Vec<_>>()
        .join("   ");
    lines.push(filters);

    let picked = picker
        .column::<R>()
        .and_then(|name| schema.field(name))
        .map_or("", |f| f.label);
    lines.push(format!("Sort column: {} (Enter)", picked));
    lines.push(String::new());

    let sort: Option<&SortSpec> = state.sort();
    lines.push(table::render_table(&snap.rows, sort, true));
    lines.push(String::new());
    lines.push(table::render_footer(&snap.page, true));
    lines.push(style(HELP).dim().to_string());
    lines.join("\n")
}

fn draw<R: Record>(term: &Term, session: &mut Session<'_, R>, picker: &Picker) -> anyhow::Result<()> {
    let screen = render_screen(session, picker);
    term.clear_screen().context("cannot clear screen")?;
    term.write_line(&screen).context("cannot draw screen")?;
    Ok(())
}
