//! Launcher core of the Facsimile discrete-event simulation library.
//!
//! This crate turns the process command line into an immutable [`RunConfiguration`], sets up
//! logging from it, and provides the small closed enumerations shared with the rest of the
//! library, such as [`LineStyle`].

#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]
#![deny(unsafe_code)]

mod build_info;
pub use build_info::BuildInfo;

pub mod cli;
pub use cli::{parse_args, usage};

mod config;
pub use config::RunConfiguration;

pub mod guard;

mod line_style;
pub use line_style::LineStyle;

pub mod logger;

mod severity;
pub use severity::Severity;

pub mod text;

/// Error type encompassing all launcher errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A code outside of the closed range of an enumeration was looked up.
    #[error("Invalid code {code}: expected a value between {min} and {max}.")]
    InvalidCode {
        /// Offending code.
        code: i32,
        /// Smallest valid code.
        min: i32,
        /// Largest valid code.
        max: i32,
    },
    /// A recognized option (or a guarded value) failed validation.
    #[error("Invalid value for '{option}': {reason}")]
    InvalidArgument {
        /// Name of the offending option or value.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// The command line could not be parsed: unknown, repeated, or malformed options.
    #[error("{0}")]
    ParseFailure(#[from] clap::Error),
    /// The logger could not be installed.
    #[error("Unable to set up logging: {0}")]
    Logger(#[from] fern::InitError),
    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Constructs [`Error::InvalidArgument`], compressing the reason into a single line.
    pub fn invalid_argument<O, R>(option: O, reason: R) -> Self
    where
        O: Into<String>,
        R: AsRef<str>,
    {
        Self::InvalidArgument {
            option: option.into(),
            reason: text::compress_message(reason.as_ref()),
        }
    }
}

/// Result alias using [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;
