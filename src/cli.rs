use crate::tool::{Tool, run_tool};
use anyhow::Result;
use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Input file, one entry per line.
    file: PathBuf,
}

/// Entry point shared by every binary: parse the arguments, run the tool
/// and exit with status 1 on any fatal error.
pub fn main<T: Tool>() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match CLI::try_parse() {
        Ok(args) => args,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(error) => {
            log::debug!("{error}");
            println!("Usage: {} <filename>", bin_name());
            std::process::exit(1);
        }
    };
    log::info!("{args:#?}");

    if let Err(error) = run_cli::<T>(args) {
        println!("{error}");
        log::debug!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli<T: Tool>(args: CLI) -> Result<()> {
    run_tool::<T, _>(&args.file)?;
    Ok(())
}

fn bin_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
