//! Logger setup.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use simplelog::{ColorChoice, Config, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Maps `-v` repetitions to a level. Warnings always show.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger.
///
/// With a `log_file`, everything goes there. Without one, records go to
/// stderr, except in interactive mode where stderr belongs to the screen and
/// logging is switched off.
pub fn init(verbosity: u8, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let level = level_for(verbosity);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
                .context("logger already initialised")?;
        }
        None if interactive => {
            log::set_max_level(LevelFilter::Off);
        }
        None => {
            let config = ConfigBuilder::new()
                .set_time_level(LevelFilter::Off)
                .set_target_level(LevelFilter::Off)
                .build();
            TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
                .context("logger already initialised")?;
        }
    }

    log::debug!("logging at {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
