use log::{LevelFilter, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use crate::error::HashError;

pub struct HashLogger {
    log_file: Mutex<File>,
    level: LevelFilter,
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    }
}

impl HashLogger {
    pub fn new(verbose: bool, log_path: &Path) -> Result<Self, HashError> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        Ok(HashLogger {
            log_file: Mutex::new(file),
            level: level_for(verbose),
        })
    }

    /// Installs a file logger as the global `log` backend.
    pub fn init(verbose: bool, log_path: &Path) -> Result<(), HashError> {
        let logger = HashLogger::new(verbose, log_path)?;
        let level = logger.level;
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }
}

/// Logs to stderr via `env_logger` when no log file is configured; `RUST_LOG` still wins.
pub fn init_stderr(verbose: bool) -> Result<(), HashError> {
    let default = if verbose { LevelFilter::Trace } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

fn format_line(record: &Record) -> String {
    format!(
        "[{}] {} {}: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl log::Log for HashLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record);
            if let Ok(mut file) = self.log_file.lock() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.log_file.lock() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    #[test]
    fn quiet_logger_drops_debug_records() {
        let path = std::env::temp_dir()
            .join(format!("r_sha256_logger_{}", std::process::id()))
            .join("quiet.log");
        let _ = std::fs::remove_file(&path);
        let logger = HashLogger::new(false, &path).unwrap();

        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));

        logger.log(&Record::builder()
            .level(Level::Info)
            .target("r_sha256")
            .args(format_args!("kept"))
            .build());
        logger.log(&Record::builder()
            .level(Level::Trace)
            .target("r_sha256")
            .args(format_args!("dropped"))
            .build());
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO r_sha256: kept"));
        assert!(!contents.contains("dropped"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn verbose_logger_enables_trace() {
        let path = std::env::temp_dir()
            .join(format!("r_sha256_logger_{}", std::process::id()))
            .join("verbose.log");
        let logger = HashLogger::new(true, &path).unwrap();
        assert!(logger.enabled(&Metadata::builder().level(Level::Trace).build()));
        let _ = std::fs::remove_file(&path);
    }

    // The only test in this crate that installs a global logger.
    #[test]
    fn stderr_logger_installs_once() {
        assert!(init_stderr(false).is_ok());
        assert!(matches!(init_stderr(true), Err(HashError::Logger(_))));
    }
}
