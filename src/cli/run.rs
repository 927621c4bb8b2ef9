use anyhow::Result;

use super::args::ScanArgs;
use crate::{
    core::{collect::DefinitionWarning, context::AnalysisContext, key_usage::ScanStats},
    report::{KeyReport, WriteOutcome, write_reports},
};

/// Result of one `dead-keys` run.
pub struct RunResult {
    pub report: KeyReport,
    pub outcome: WriteOutcome,
    pub scan: ScanStats,
    /// Definition files that were parsed.
    pub definition_files: usize,
    /// Definition files skipped because they could not be read or parsed.
    pub definition_warnings: Vec<DefinitionWarning>,
    /// If true, unused keys make the run exit with status 1.
    pub exit_on_unused: bool,
}

/// Collect, scan, and write both report files.
///
/// # Returns
/// - `Ok(RunResult)` once the reports were attempted (individual write
///   failures are recorded in `outcome`)
/// - `Err` when the tree could not be walked or the configuration is invalid;
///   no report file is written in that case
pub fn run(args: &ScanArgs) -> Result<RunResult> {
    let ctx = AnalysisContext::new(args)?;
    let analysis = ctx.analyze()?;

    let report = KeyReport::new(analysis.keys, &analysis.usage);
    let outcome = write_reports(&args.output_dir, &report);

    Ok(RunResult {
        report,
        outcome,
        scan: analysis.scan,
        definition_files: analysis.definition_files,
        definition_warnings: analysis.definition_warnings,
        exit_on_unused: args.strict,
    })
}
