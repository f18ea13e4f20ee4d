//! Exit status codes for the CLI
//!
//! - 0: Success (also the default after reported failures, see `--check-status`)
//! - 1: Usage errors, or any reported failure when `--check-status` is given
//! - 130: User interrupted (Ctrl+C, standard SIGINT exit code)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
    /// Standard SIGINT code
    Interrupted = 130,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Map a reported failure to an exit status.
    ///
    /// Failures are printed and the run still ends with 0 unless the user
    /// asked for `--check-status`.
    pub fn from_failure(failed: bool, check_status: bool) -> Self {
        if failed && check_status {
            ExitStatus::Error
        } else {
            ExitStatus::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_quiet_without_check_status() {
        assert_eq!(ExitStatus::from_failure(true, false), ExitStatus::Success);
        assert_eq!(ExitStatus::from_failure(false, false), ExitStatus::Success);
    }

    #[test]
    fn test_check_status_reports_failures() {
        assert_eq!(ExitStatus::from_failure(true, true), ExitStatus::Error);
        assert_eq!(ExitStatus::from_failure(false, true), ExitStatus::Success);
    }
}
