//! The `--output` flag and writing results to stdout.

use std::io::{self, Write};

use clap::ValueEnum;

/// How command output is rendered.
///
/// - `auto`: styled table on a terminal, plain table when piped
/// - `term`: styled table
/// - `text`: plain table
/// - `json`, `yaml`, `csv`: the data itself, for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputMode {
    /// Modes that print data rather than a table.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml | OutputMode::Csv)
    }

    /// Picks `Term` or `Text` for `Auto` by checking whether stdout is a
    /// terminal. Other modes are returned as they are.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto if atty::is(atty::Stream::Stdout) => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => *other,
        }
    }

    pub fn is_styled(&self) -> bool {
        self.resolve_auto() == OutputMode::Term
    }
}

/// Writes `text` and a newline.
///
/// A reader that hangs up early (`staffdesk inventory list | head -3`) is not
/// an error.
pub fn emit(mut out: impl Write, text: &str) -> io::Result<()> {
    match writeln!(out, "{}", text).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early");
            Ok(())
        }
        other => other,
    }
}
