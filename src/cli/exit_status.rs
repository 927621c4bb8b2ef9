use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): reports written; unused keys do not count as failure
/// - `Failure` (1): `--strict` was given and unused keys were found
/// - `Error` (2): the run aborted (bad arguments, unreadable tree, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
