// src/exit.rs
//! Standardized process exit codes for `pmdgate`.
//!
//! Provides a stable contract for scripts and CI jobs.

use std::process::Termination;

use crate::error::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum GateExit {
    /// Analysis ran and no violation was accepted.
    Success = 0,
    /// Generic error (I/O, PMD failure, unreadable report).
    Error = 1,
    /// Configuration is unusable (no rule sets, no sources, bad TOML).
    InvalidConfig = 2,
    /// Analysis ran and accepted violations remain.
    GateFailed = 6,
}

impl GateExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for an error surfaced by the CLI.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GateError>() {
            Some(e) if e.is_config_error() => Self::InvalidConfig,
            _ => Self::Error,
        }
    }
}

impl Termination for GateExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_invalid_config() {
        let err = anyhow::Error::new(GateError::NoRulesets);
        assert_eq!(GateExit::for_error(&err), GateExit::InvalidConfig);
    }

    #[test]
    fn wrapped_config_errors_still_map() {
        let err = anyhow::Error::new(GateError::NoSources).context("loading pmdgate.toml");
        assert_eq!(GateExit::for_error(&err), GateExit::InvalidConfig);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::Error::new(GateError::Engine {
            code: 1,
            stderr: String::new(),
        });
        assert_eq!(GateExit::for_error(&err), GateExit::Error);
        assert_eq!(GateExit::GateFailed.code(), 6);
    }
}
