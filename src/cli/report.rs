//! Summary printing.
//!
//! Kept apart from the report files so the library can be used without
//! touching stdout.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;

/// Print the one-line summary to stdout.
pub fn print_summary(result: &RunResult) {
    print_summary_to(result, &mut io::stdout().lock());
}

/// Print the summary to a custom writer.
///
/// ```text
/// Total keys: 120, unused keys: 7
/// ```
pub fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    let total = result.report.total_count();
    let unused = result.report.unused_count();
    let unused_str = if unused == 0 {
        unused.to_string().green()
    } else {
        unused.to_string().yellow()
    };

    let _ = writeln!(
        writer,
        "Total keys: {}, unused keys: {}",
        total.to_string().bold(),
        unused_str.bold()
    );
}

/// Print scan counters and skipped definition files to stderr (`--verbose`).
pub fn print_details(result: &RunResult) {
    print_details_to(result, &mut io::stderr().lock());
}

/// ```text
/// warning: app/translator/master/translation.en.json: Failed to parse JSON
/// Definition files: 3, source files scanned: 120, unreadable: 0
/// ```
pub fn print_details_to<W: Write>(result: &RunResult, writer: &mut W) {
    for warning in &result.definition_warnings {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }

    let _ = writeln!(
        writer,
        "Definition files: {}, source files scanned: {}, unreadable: {}",
        result.definition_files, result.scan.files_scanned, result.scan.files_skipped
    );
}

/// Print a note about report files that could not be written.
pub fn print_write_failures(result: &RunResult) {
    print_write_failures_to(result, &mut io::stderr().lock());
}

pub fn print_write_failures_to<W: Write>(result: &RunResult, writer: &mut W) {
    for path in &result.outcome.failed {
        let _ = writeln!(
            writer,
            "{} report file {} was not written",
            "warning:".bold().yellow(),
            path.display()
        );
    }
}
