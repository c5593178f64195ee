//! Rolling file logs for name directory callers.
//!
//! # Responsibility
//! - Turn caller-supplied level/directory strings into a typed `LogConfig`.
//! - Start the `flexi_logger` backend behind the `log` facade once.
//!
//! # Invariants
//! - A second `init_logging` with an equal config is a no-op.
//! - A second `init_logging` with a different config is rejected and the
//!   active logger keeps running unchanged.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "namebook";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Verbosity accepted by `init_logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `Debug` for debug builds, `Info` for release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LoggingError::UnsupportedLevel(value.trim().to_string())),
        }
    }
}

/// Where and how verbosely name directory events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Absolute directory holding `namebook*.log` files.
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Builds a config from raw caller input.
    ///
    /// `level` falls back to `LogLevel::for_build()` when `None`.
    ///
    /// # Errors
    /// - `UnsupportedLevel` for anything but `trace|debug|info|warn|error`.
    /// - `EmptyLogDir` / `RelativeLogDir` for unusable directories.
    pub fn from_raw(level: Option<&str>, log_dir: &str) -> Result<Self, LoggingError> {
        let level = match level {
            Some(raw) => raw.parse()?,
            None => LogLevel::for_build(),
        };

        let log_dir = log_dir.trim();
        if log_dir.is_empty() {
            return Err(LoggingError::EmptyLogDir);
        }
        let log_dir = PathBuf::from(log_dir);
        if !log_dir.is_absolute() {
            return Err(LoggingError::RelativeLogDir(log_dir));
        }

        Ok(Self { level, log_dir })
    }
}

impl Display for LogConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "level={} log_dir={}",
            self.level.as_str(),
            self.log_dir.display()
        )
    }
}

/// Logging setup failures.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(PathBuf),
    CreateLogDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(FlexiLoggerError),
    /// Logging is already running with another config.
    Conflict {
        active: LogConfig,
        requested: LogConfig,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log directory cannot be empty"),
            Self::RelativeLogDir(path) => {
                write!(f, "log directory must be absolute, got `{}`", path.display())
            }
            Self::CreateLogDir { path, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                path.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already active with {active}; refusing to switch to {requested}"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateLogDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FlexiLoggerError> for LoggingError {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Backend(value)
    }
}

/// Starts rolling file logging for this process.
///
/// # Errors
/// - `CreateLogDir` / `Backend` when the logger cannot start.
/// - `Conflict` when an earlier call used a different config.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(config))?;
    if active.config != *config {
        return Err(LoggingError::Conflict {
            active: active.config.clone(),
            requested: config.clone(),
        });
    }
    Ok(())
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|source| LoggingError::CreateLogDir {
        path: config.log_dir.clone(),
        source,
    })?;

    let handle = Logger::try_with_str(config.level.as_str())?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        // Why: the CLI exits right after one command; buffered lines must
        // reach disk when the handle drops.
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=logging_init module=logging status=ok {config} version={}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

#[cfg(test)]
mod tests {
    use super::{init_logging, LogConfig, LogLevel, LoggingError};

    #[test]
    fn level_parsing_is_lenient_about_case_and_alias() {
        assert_eq!(
            "DEBUG".parse::<LogLevel>().expect("upper-case level parses"),
            LogLevel::Debug
        );
        assert_eq!(
            " warning ".parse::<LogLevel>().expect("warning is an alias"),
            LogLevel::Warn
        );
        let err = "verbose"
            .parse::<LogLevel>()
            .expect_err("unknown level is rejected");
        assert!(err.to_string().contains("`verbose`"));
    }

    #[test]
    fn from_raw_defaults_level_to_build_mode() {
        let config = LogConfig::from_raw(None, "/var/log/namebook").expect("absolute dir");
        assert_eq!(config.level, LogLevel::for_build());
        assert_eq!(config.to_string().split(' ').count(), 2);
    }

    #[test]
    fn from_raw_rejects_unusable_directories() {
        assert!(matches!(
            LogConfig::from_raw(Some("info"), "  "),
            Err(LoggingError::EmptyLogDir)
        ));
        assert!(matches!(
            LogConfig::from_raw(Some("info"), "logs/dev"),
            Err(LoggingError::RelativeLogDir(_))
        ));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let first_dir = tempfile::tempdir().expect("temp dir should be created");
        let second_dir = tempfile::tempdir().expect("temp dir should be created");
        let first_raw = first_dir.path().to_str().expect("temp path is UTF-8");
        let second_raw = second_dir.path().to_str().expect("temp path is UTF-8");

        let config = LogConfig::from_raw(Some("info"), first_raw).expect("valid config");
        init_logging(&config).expect("first init should start the logger");
        let same = LogConfig::from_raw(Some("INFO"), first_raw).expect("valid config");
        init_logging(&same).expect("equal config is a no-op");

        let louder = LogConfig::from_raw(Some("debug"), first_raw).expect("valid config");
        let err = init_logging(&louder).expect_err("level switch is rejected");
        assert!(err.to_string().contains("refusing to switch"));

        let moved = LogConfig::from_raw(Some("info"), second_raw).expect("valid config");
        assert!(matches!(
            init_logging(&moved),
            Err(LoggingError::Conflict { ref active, .. }) if *active == config
        ));
    }
}
