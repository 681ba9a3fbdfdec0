//! Process-wide logger set up from a [`RunConfiguration`].
//!
//! Records are formatted as `[LEVEL] message` and sent to the standard error, to a log file, or
//! both. The logger can be installed only once per process; any later call to
//! [`LoggerBuilder::init`] is a no-op.
//!
//! # Examples
//!
//! ```no_run
//! # use facsim::{logger::LoggerBuilder, RunConfiguration};
//! # fn main() -> facsim::Result<()> {
//! let config = RunConfiguration::default().with_log_file("run.log");
//! LoggerBuilder::from_config(&config).init()?;
//! log::info!("Simulation started");
//! # Ok(())
//! # }
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use log::LevelFilter;

use crate::{Error, Result, RunConfiguration};

lazy_static::lazy_static! {
    static ref LOGGER_INITIALIZED: Arc<RwLock<bool>> = Arc::new(RwLock::new(false));
}

/// Formats a log record the way all outputs display it.
pub fn format_record(level: log::Level, message: &std::fmt::Arguments<'_>) -> String {
    format!("[{}] {}", level, message)
}

/// Builds the process logger.
#[derive(Debug)]
pub struct LoggerBuilder {
    level: LevelFilter,
    target: Option<String>,
    log_file: Option<PathBuf>,
    stderr: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            target: None,
            log_file: None,
            stderr: true,
        }
    }
}

impl LoggerBuilder {
    /// Builder using the severity and log file of `config`.
    pub fn from_config(config: &RunConfiguration) -> Self {
        let builder = Self::default().level(config.log_level().level_filter());
        match config.log_file() {
            Some(path) => builder.log_file(path),
            None => builder,
        }
    }

    /// Only records at `level` or more severe are written.
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Only records whose target starts with `target` are written, e.g. a crate name.
    pub fn target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Appends records to this file.
    pub fn log_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Enables or disables echoing records to the standard error.
    pub fn stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    /// Assembles the dispatch without installing it.
    fn dispatch(self) -> Result<fern::Dispatch> {
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_record(record.level(), message)))
            })
            .level(self.level);
        if let Some(target) = self.target {
            dispatch = dispatch.filter(move |metadata| metadata.target().starts_with(&target));
        }
        if let Some(path) = &self.log_file {
            dispatch = dispatch.chain(OpenOptions::new().create(true).append(true).open(path)?);
        }
        if self.stderr {
            dispatch = dispatch.chain(io::stderr());
        }
        Ok(dispatch)
    }

    /// Installs the logger, unless one was already installed by an earlier call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the log file cannot be opened, and [`Error::Logger`] if another
    /// logger implementation has been installed.
    pub fn init(self) -> Result<()> {
        let mut initialized = LOGGER_INITIALIZED
            .write()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
        if !*initialized {
            self.dispatch()?
                .apply()
                .map_err(|err| Error::Logger(err.into()))?;
            *initialized = true;
        }
        Ok(())
    }
}
