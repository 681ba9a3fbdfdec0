//! Command line parsing.
//!
//! [`parse_args`] turns the process arguments into a [`RunConfiguration`] derived from a base
//! configuration. Option syntax is handled by `clap`; the values of recognized options are then
//! validated and applied in the order in which they appear on the command line. Parsing either
//! returns a complete configuration or an error: a partially applied configuration is never
//! returned.
//!
//! File checks touch the file system at parse time only. A file that passed the check may still
//! fail to open later if the file system changes in between.

use std::ffi::OsString;
use std::fs::{self, File, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::{guard, Error, Result, RunConfiguration, Severity};

/// Long name of the configuration file option.
pub const CONFIG_FILE: &str = "--config-file";
/// Long name of the headless flag.
pub const HEADLESS: &str = "--headless";
/// Long name of the log file option.
pub const LOG_FILE: &str = "--log-file";
/// Long name of the report file option.
pub const REPORT_FILE: &str = "--report-file";
/// Long name of the log level option.
pub const LOG_LEVEL: &str = "--log-level";

const CONFIG_FILE_ID: &str = "config-file";
const HEADLESS_ID: &str = "headless";
const LOG_FILE_ID: &str = "log-file";
const REPORT_FILE_ID: &str = "report-file";
const LOG_LEVEL_ID: &str = "log-level";

/// Runs a Facsimile simulation.
#[derive(Parser, Debug)]
#[clap(name = "facsim", version, author, about)]
struct Opt {
    /// Simulation model configuration file. Must exist and be readable.
    #[clap(
        name = "config-file",
        short = 'c',
        long,
        parse(from_os_str),
        value_name = "PATH"
    )]
    config_file: Option<PathBuf>,

    /// Run without the graphical front end.
    #[clap(name = "headless", short = 'H', long)]
    headless: bool,

    /// Append log records to this file.
    #[clap(
        name = "log-file",
        short = 'l',
        long,
        parse(from_os_str),
        value_name = "PATH"
    )]
    log_file: Option<PathBuf>,

    /// Write the run report to this file.
    #[clap(
        name = "report-file",
        short = 'r',
        long,
        parse(from_os_str),
        value_name = "PATH"
    )]
    report_file: Option<PathBuf>,

    /// Logging severity: off, error, warn, info, debug, trace, or all.
    #[clap(name = "log-level", short = 'L', long, value_name = "NAME")]
    log_level: Option<String>,
}

/// Effect of a single recognized option.
#[derive(Debug)]
enum Setting {
    ConfigFile(PathBuf),
    Headless,
    LogFile(PathBuf),
    ReportFile(PathBuf),
    LogLevel(String),
}

impl Setting {
    /// Validates the option value and applies it to `config`.
    fn apply(self, config: RunConfiguration) -> Result<RunConfiguration> {
        log::debug!("Applying {:?}", self);
        match self {
            Self::ConfigFile(path) => {
                check_readable(CONFIG_FILE, &path)?;
                Ok(config.with_config_file(path))
            }
            Self::Headless => Ok(config.with_gui(false)),
            Self::LogFile(path) => {
                check_writable(LOG_FILE, &path)?;
                Ok(config.with_log_file(path))
            }
            Self::ReportFile(path) => {
                check_writable(REPORT_FILE, &path)?;
                Ok(config.with_report_file(path))
            }
            Self::LogLevel(name) => Ok(config.with_log_level(severity(&name)?)),
        }
    }
}

/// Parses `args` (including the program name) into a configuration derived from `base`.
///
/// # Errors
///
/// - [`Error::ParseFailure`] when an option is unknown, malformed, missing its value, or given
///   more than once; also when help or version output was requested.
/// - [`Error::InvalidArgument`] naming the first option, in command line order, whose value
///   failed validation.
///
/// # Example
///
/// ```
/// # use facsim::{parse_args, RunConfiguration, Severity};
/// # fn main() -> facsim::Result<()> {
/// let config = parse_args(
///     vec!["facsim", "--headless", "--log-level", "debug"],
///     RunConfiguration::default(),
/// )?;
/// assert!(!config.use_gui());
/// assert_eq!(config.log_level(), Severity::Debug);
/// assert!(parse_args(vec!["facsim", "--log-level", "DEBUG"], RunConfiguration::default()).is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse_args<I, T>(args: I, base: RunConfiguration) -> Result<RunConfiguration>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Opt::command().try_get_matches_from(args)?;
    let opt = Opt::from_arg_matches(&matches)?;
    let position = |id: &str| guard::require_some(id, matches.index_of(id));

    let mut settings = Vec::new();
    if let Some(path) = opt.config_file {
        settings.push((position(CONFIG_FILE_ID)?, Setting::ConfigFile(path)));
    }
    if opt.headless {
        settings.push((position(HEADLESS_ID)?, Setting::Headless));
    }
    if let Some(path) = opt.log_file {
        settings.push((position(LOG_FILE_ID)?, Setting::LogFile(path)));
    }
    if let Some(path) = opt.report_file {
        settings.push((position(REPORT_FILE_ID)?, Setting::ReportFile(path)));
    }
    if let Some(name) = opt.log_level {
        settings.push((position(LOG_LEVEL_ID)?, Setting::LogLevel(name)));
    }
    settings.sort_by_key(|(position, _)| *position);

    settings
        .into_iter()
        .try_fold(base, |config, (_, setting)| setting.apply(config))
}

/// Renders the usage line, to be printed along with argument errors.
pub fn usage() -> String {
    Opt::command().render_usage()
}

fn severity(name: &str) -> Result<Severity> {
    name.parse::<Severity>().map_err(|_| {
        Error::invalid_argument(
            LOG_LEVEL,
            format!(
                "unknown severity '{}'; expected one of: {}",
                name,
                Severity::names().join(", ")
            ),
        )
    })
}

fn inaccessible(option: &str, path: &Path, err: &io::Error) -> Error {
    Error::invalid_argument(
        option,
        format!("cannot access '{}': {}", path.display(), err),
    )
}

/// The file must exist, be a regular file, and open for reading.
fn check_readable(option: &str, path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|err| inaccessible(option, path, &err))?;
    guard::require_valid(option, metadata, Metadata::is_file, |_| {
        format!("'{}' is not a regular file", path.display())
    })?;
    File::open(path).map_err(|err| {
        Error::invalid_argument(
            option,
            format!("cannot read '{}': {}", path.display(), err),
        )
    })?;
    Ok(())
}

/// A missing file passes; an existing one must not be a directory and must open for writing.
/// Existing content is left untouched.
fn check_writable(option: &str, path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::trace!("'{}' does not exist yet", path.display());
            return Ok(());
        }
        Err(err) => return Err(inaccessible(option, path, &err)),
    };
    guard::require_valid(
        option,
        metadata,
        |metadata| !metadata.is_dir(),
        |_| format!("'{}' is a directory", path.display()),
    )?;
    OpenOptions::new().append(true).open(path).map_err(|err| {
        Error::invalid_argument(
            option,
            format!("cannot write '{}': {}", path.display(), err),
        )
    })?;
    Ok(())
}
