use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Severity;

/// Run configuration of a single launcher invocation.
///
/// The configuration is immutable: every `with_*` method consumes the configuration and returns
/// an updated copy.
///
/// # Example
///
/// ```
/// # use facsim::{RunConfiguration, Severity};
/// let config = RunConfiguration::default()
///     .with_log_level(Severity::Debug)
///     .with_gui(false);
/// assert_eq!(config.log_level(), Severity::Debug);
/// assert!(!config.use_gui());
/// assert!(config.config_file().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfiguration {
    config_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    report_file: Option<PathBuf>,
    log_level: Severity,
    use_gui: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            config_file: None,
            log_file: None,
            report_file: None,
            log_level: Severity::default(),
            use_gui: true,
        }
    }
}

impl RunConfiguration {
    /// Simulation model configuration file.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// File receiving log records, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// File receiving the run report, if any.
    pub fn report_file(&self) -> Option<&Path> {
        self.report_file.as_deref()
    }

    /// Logging severity.
    pub fn log_level(&self) -> Severity {
        self.log_level
    }

    /// Whether the graphical front end is enabled. Headless runs return `false`.
    pub fn use_gui(&self) -> bool {
        self.use_gui
    }

    /// Sets the configuration file.
    pub fn with_config_file<P: Into<PathBuf>>(self, path: P) -> Self {
        Self {
            config_file: Some(path.into()),
            ..self
        }
    }

    /// Sets the log file.
    pub fn with_log_file<P: Into<PathBuf>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.into()),
            ..self
        }
    }

    /// Sets the report file.
    pub fn with_report_file<P: Into<PathBuf>>(self, path: P) -> Self {
        Self {
            report_file: Some(path.into()),
            ..self
        }
    }

    /// Sets the logging severity.
    pub fn with_log_level(self, log_level: Severity) -> Self {
        Self { log_level, ..self }
    }

    /// Enables or disables the graphical front end.
    pub fn with_gui(self, use_gui: bool) -> Self {
        Self { use_gui, ..self }
    }
}
