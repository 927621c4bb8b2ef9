use super::{exit_status::ExitStatus, run::RunResult};

pub fn exit_status_from_result(result: &RunResult) -> ExitStatus {
    if result.exit_on_unused && result.report.unused_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
