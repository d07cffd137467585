//! Fire-and-forget user notices ("toasts").

use std::cell::RefCell;
use std::io::Write;

use console::{style, Term};
use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Notice {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Level::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Level::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Level::Error, text)
    }
}

/// Somewhere to send notices. Delivery never fails from the caller's point
/// of view.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}

/// Writes notices to stderr, coloured by level when stderr is a terminal.
#[derive(Debug, Default)]
pub struct StderrSink;

impl NotificationSink for StderrSink {
    fn notify(&self, notice: Notice) {
        let marker = match notice.level {
            Level::Info => style("•").cyan(),
            Level::Success => style("✓").green(),
            Level::Warning => style("!").yellow(),
            Level::Error => style("✗").red(),
        }
        .for_stderr();
        let line = format!("{} {}", marker, notice.text);
        if Term::stderr().write_line(&line).is_err() {
            // Nothing else to report to; keep it in the log.
            log::warn!("could not deliver notice: {}", notice.text);
        }
    }
}

/// Collects notices in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    notices: RefCell<Vec<Notice>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Writes every recorded notice as `level: text` lines.
    pub fn dump(&self, mut out: impl Write) -> std::io::Result<()> {
        for notice in self.notices.borrow().iter() {
            writeln!(out, "{}: {}", notice.level, notice.text)?;
        }
        Ok(())
    }
}

impl NotificationSink for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_set_level() {
        assert_eq!(Notice::info("x").level, Level::Info);
        assert_eq!(Notice::success("x").level, Level::Success);
        assert_eq!(Notice::warning("x").level, Level::Warning);
        assert_eq!(Notice::error("x").level, Level::Error);
    }

    #[test]
    fn recorder_keeps_order() {
        let rec = Recorder::new();
        rec.notify(Notice::info("first"));
        rec.notify(Notice::success("second"));

        let texts: Vec<String> = rec.notices().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["first", "second"]);

        let mut out = Vec::new();
        rec.dump(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "info: first\nsuccess: second\n");
    }

    #[test]
    fn notice_serializes_level_lowercase() {
        let json = serde_json::to_string(&Notice::warning("careful")).unwrap();
        assert!(json.contains("\"level\":\"warning\""));
    }
}
