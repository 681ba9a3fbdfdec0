use log::LevelFilter;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Named logging severity accepted by `--log-level`.
///
/// Names are lowercase and matched case-sensitively.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Logging disabled.
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages and above.
    Info,
    /// Debugging messages and above.
    Debug,
    /// Trace messages and above.
    Trace,
    /// Everything.
    All,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl Severity {
    /// Returns the list of accepted names, in increasing verbosity.
    pub fn names() -> Vec<String> {
        Self::iter().map(|s| s.to_string()).collect()
    }

    /// Level filter to install in the logger.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace | Self::All => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest(
        name,
        expected,
        case("off", Severity::Off),
        case("error", Severity::Error),
        case("warn", Severity::Warn),
        case("info", Severity::Info),
        case("debug", Severity::Debug),
        case("trace", Severity::Trace),
        case("all", Severity::All)
    )]
    fn test_known_names(name: &str, expected: Severity) {
        assert_eq!(name.parse::<Severity>().unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }

    #[rstest(name, case("INFO"), case("Info"), case("warning"), case(""), case(" info"))]
    fn test_unknown_names(name: &str) {
        assert!(name.parse::<Severity>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(
            Severity::names(),
            vec!["off", "error", "warn", "info", "debug", "trace", "all"]
        );
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().level_filter(), LevelFilter::Info);
        assert_eq!(Severity::Off.level_filter(), LevelFilter::Off);
        assert_eq!(Severity::All.level_filter(), LevelFilter::Trace);
    }
}
