//! Test suite support.
//!
//! Test output that must be compared against known-good output is written to `.testlog` files,
//! which are kept under version control next to the tests producing them.

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

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension of all test log files.
pub const EXTENSION: &str = "testlog";

/// UTF-8 encoded byte order mark written at the start of new test logs.
pub const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// How an existing test log is treated when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestLogMode {
    /// Discard existing content and start with a byte order mark.
    New,
    /// Keep existing content and append to it.
    Append,
}

/// Builds a [`TestLog`].
///
/// The file name is `<name>[.<locale>][.<suffix>].testlog`, placed in the given directory.
#[derive(Debug, Clone)]
pub struct TestLogBuilder {
    dir: PathBuf,
    name: String,
    locale: Option<String>,
    suffix: Option<String>,
    mode: TestLogMode,
}

impl TestLogBuilder {
    /// Starts building a new test log called `name` in `dir`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(dir: P, name: S) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            locale: None,
            suffix: None,
            mode: TestLogMode::New,
        }
    }
    /// Marks the log as holding locale-specific output for `locale`.
    pub fn locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = Some(locale.into());
        self
    }
    /// Distinguishes logs of the same test, e.g. per platform or build.
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
    /// Sets the open mode.
    pub fn mode(mut self, mode: TestLogMode) -> Self {
        self.mode = mode;
        self
    }

    /// Path of the log file to be opened.
    pub fn path(&self) -> PathBuf {
        let mut file_name = self.name.clone();
        for part in self.locale.iter().chain(&self.suffix) {
            file_name.push('.');
            file_name.push_str(part);
        }
        file_name.push('.');
        file_name.push_str(EXTENSION);
        self.dir.join(file_name)
    }

    /// Opens the log file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised when opening the file or writing the byte order mark.
    pub fn open(self) -> io::Result<TestLog> {
        let path = self.path();
        let mut file = match self.mode {
            TestLogMode::New => File::create(&path)?,
            TestLogMode::Append => OpenOptions::new().create(true).append(true).open(&path)?,
        };
        if self.mode == TestLogMode::New {
            file.write_all(BYTE_ORDER_MARK)?;
        }
        Ok(TestLog { path, file })
    }
}

/// Test log file. The file is closed when the log is dropped.
#[derive(Debug)]
pub struct TestLog {
    path: PathBuf,
    file: File,
}

impl TestLog {
    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for TestLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path() {
        let builder = TestLogBuilder::new("logs", "parser");
        assert_eq!(builder.path(), Path::new("logs/parser.testlog"));
        let builder = builder.locale("en_GB");
        assert_eq!(builder.path(), Path::new("logs/parser.en_GB.testlog"));
        let builder = builder.suffix("linux");
        assert_eq!(builder.path(), Path::new("logs/parser.en_GB.linux.testlog"));
        let builder = TestLogBuilder::new("logs", "parser").suffix("linux");
        assert_eq!(builder.path(), Path::new("logs/parser.linux.testlog"));
    }

    #[test]
    fn test_new_writes_bom() -> io::Result<()> {
        let dir = TempDir::new()?;
        let mut log = TestLogBuilder::new(dir.path(), "bom").open()?;
        write!(log, "line")?;
        let path = log.path().to_path_buf();
        drop(log);
        assert_eq!(fs::read(&path)?, b"\xEF\xBB\xBFline");
        Ok(())
    }

    #[test]
    fn test_new_truncates() -> io::Result<()> {
        let dir = TempDir::new()?;
        let builder = TestLogBuilder::new(dir.path(), "truncate");
        fs::write(builder.path(), "stale output")?;
        let mut log = builder.clone().open()?;
        writeln!(log, "fresh")?;
        drop(log);
        assert_eq!(fs::read(builder.path())?, b"\xEF\xBB\xBFfresh\n");
        Ok(())
    }

    #[test]
    fn test_append() -> io::Result<()> {
        let dir = TempDir::new()?;
        let builder = TestLogBuilder::new(dir.path(), "append");
        writeln!(builder.clone().open()?, "first")?;
        writeln!(builder.clone().mode(TestLogMode::Append).open()?, "second")?;
        assert_eq!(fs::read(builder.path())?, b"\xEF\xBB\xBFfirst\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_append_creates_without_bom() -> io::Result<()> {
        let dir = TempDir::new()?;
        let builder = TestLogBuilder::new(dir.path(), "created").mode(TestLogMode::Append);
        write!(builder.clone().open()?, "text")?;
        assert_eq!(fs::read(builder.path())?, b"text");
        Ok(())
    }
}
