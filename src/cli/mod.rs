use anyhow::Result;

use crate::cli::exit_code::exit_status_from_result;
use crate::logging::init_logging;

pub mod args;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, ScanArgs};
pub use exit_status::ExitStatus;
pub use run::{RunResult, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.scan.verbose);

    let result = run::run(&args.scan)?;
    if args.scan.verbose {
        report::print_details(&result);
    }
    report::print_write_failures(&result);
    report::print_summary(&result);

    Ok(exit_status_from_result(&result))
}
