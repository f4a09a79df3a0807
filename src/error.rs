// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("No rulesets defined. Use with_rulesets to define some, see `pmdgate rulesets` for predefined ones")]
    NoRulesets,

    #[error("No source paths configured")]
    NoSources,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid PMD report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid location pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid rule priority: {0}")]
    InvalidPriority(String),

    #[error("PMD exited with code {code}: {stderr}")]
    Engine { code: i32, stderr: String },
}

pub type Result<T> = std::result::Result<T, GateError>;

impl GateError {
    /// Attaches a path to an I/O error.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        GateError::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by the user's setup rather than the run itself.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GateError::NoRulesets
                | GateError::NoSources
                | GateError::Config(_)
                | GateError::Toml(_)
                | GateError::Pattern(_)
                | GateError::InvalidPriority(_)
        )
    }
}

// Allow `?` on std::io::Error by converting to GateError::Io with unknown path.
impl From<std::io::Error> for GateError {
    fn from(source: std::io::Error) -> Self {
        GateError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
