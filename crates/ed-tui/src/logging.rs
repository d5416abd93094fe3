//! Logger installation
//!
//! The UI owns the terminal, so while it runs logs can only go to a file.
//! `--dump` mode has no UI and logs to stderr instead.

use std::fs::File;
use std::path::Path;

use anyhow::Context as _;
use simplelog::{LevelFilter, SharedLogger};

/// `Debug` when verbose, `Info` otherwise
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

/// Colored logger on stderr
pub fn stderr_logger(verbose: bool) -> Box<simplelog::TermLogger> {
    simplelog::TermLogger::new(
        level_filter(verbose),
        config(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

/// Plain logger writing to a freshly created file at `path`
pub fn file_logger(path: &Path, verbose: bool) -> anyhow::Result<Box<simplelog::WriteLogger<File>>> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    Ok(simplelog::WriteLogger::new(level_filter(verbose), config(), file))
}

/// Install `logger` as the global [`log`] logger
pub fn install<L: SharedLogger + 'static>(logger: Box<L>) -> anyhow::Result<()> {
    log::set_max_level(logger.level());
    log::set_boxed_logger(logger).context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(level_filter(false), LevelFilter::Info);
        assert_eq!(level_filter(true), LevelFilter::Debug);
    }

    #[test]
    fn test_stderr_logger_level() {
        assert_eq!(stderr_logger(false).level(), LevelFilter::Info);
        assert_eq!(stderr_logger(true).level(), LevelFilter::Debug);
    }

    #[test]
    fn test_file_logger_creates_file() {
        let path = std::env::temp_dir().join(format!("ed-tui-log-{}.log", std::process::id()));
        let logger = file_logger(&path, true).unwrap();
        assert_eq!(logger.level(), LevelFilter::Debug);
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_logger_bad_path() {
        let err = file_logger(Path::new("/nonexistent/dir/ed.log"), false)
            .err()
            .expect("expected file_logger to fail");
        assert!(err.to_string().contains("could not create log file"));
    }
}
