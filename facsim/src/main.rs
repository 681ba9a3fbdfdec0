//! Facsimile launcher: resolves the run configuration and sets up logging.
#![warn(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use eyre::WrapErr;
use serde::Serialize;

use facsim::{logger::LoggerBuilder, parse_args, usage, BuildInfo, Error, RunConfiguration};

/// Exit code reported for invalid option values.
const INVALID_ARGUMENT_EXIT_CODE: i32 = 2;

/// Contents of the report file.
#[derive(Serialize)]
struct Report<'a> {
    build: BuildInfo,
    configuration: &'a RunConfiguration,
}

/// Writes the resolved configuration as pretty-printed JSON.
fn write_report(path: &Path, report: &Report<'_>) -> eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("unable to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).wrap_err("unable to write report")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let config = match parse_args(std::env::args_os(), RunConfiguration::default()) {
        Ok(config) => config,
        Err(Error::ParseFailure(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, usage());
            std::process::exit(INVALID_ARGUMENT_EXIT_CODE);
        }
    };
    LoggerBuilder::from_config(&config).init()?;

    let build = BuildInfo::current();
    log::info!("{}", build);
    log::debug!("{:?}", config);
    if !config.use_gui() {
        log::info!("Running headless");
    }

    if let Some(path) = config.report_file() {
        write_report(
            path,
            &Report {
                build,
                configuration: &config,
            },
        )?;
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
