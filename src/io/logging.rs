//! Log output that cooperates with the progress bar
//!
//! Library code logs through the `log` facade only. The binary installs
//! [`ProgressLogger`], which hides the active progress bar while a line is
//! written so the two never interleave.

use indicatif::ProgressBar;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{LazyLock, Mutex};

static LOGGER: LazyLock<ProgressLogger> = LazyLock::new(ProgressLogger::default);

/// Stderr logger that suspends an attached progress bar around each line
#[derive(Default)]
pub struct ProgressLogger {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressLogger {
    /// Route subsequent log lines around `bar`
    pub fn attach(&self, bar: ProgressBar) {
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    /// Stop suspending any bar
    pub fn detach(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            *slot = None;
        }
    }

    /// Whether a bar is currently attached
    pub fn is_attached(&self) -> bool {
        self.bar.lock().is_ok_and(|slot| slot.is_some())
    }
}

impl Log for ProgressLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    // Allow print for log output on stderr
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{:<5}] {}", record.level(), record.args());
        let bar = self.bar.lock().ok().and_then(|slot| slot.clone());
        match bar {
            Some(bar) => bar.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }

    fn flush(&self) {}
}

/// Level implied by the `--quiet` and `--verbose` flags
pub const fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the shared logger and set the maximum level
///
/// Installing twice only updates the level. Returns the logger so a
/// progress bar can be attached.
pub fn init(level: LevelFilter) -> &'static ProgressLogger {
    let logger: &'static ProgressLogger = &LOGGER;
    // A second install fails harmlessly; the first logger stays active
    let _ = log::set_logger(logger);
    log::set_max_level(level);
    logger
}
