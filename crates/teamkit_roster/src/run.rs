//! One full read, partition and write pass.

use crate::observer::RunObserver;
use crate::partition::split_into_teams;
use crate::reader::read_roster_from_xlsx;
use crate::report::ReportRun;
use crate::spec::{EnumRunOutcome, SpecRunOptions, TeamGenError};
use crate::stats::summarize_teams;
use crate::writer::write_teams_to_xlsx;

/// Read the roster, split it into teams and write the `Teams` workbook.
///
/// An empty roster stops before the writer is created and returns
/// [`EnumRunOutcome::NoStudents`]; no output file is produced in that case.
///
/// # Errors
/// - [`TeamGenError::SheetNotFound`] when the requested sheet is missing.
/// - [`TeamGenError::ReadIo`] when the source workbook cannot be loaded.
/// - [`TeamGenError::Write`] when the destination cannot be saved.
pub fn generate_teams(
    options: &SpecRunOptions,
    observer: &dyn RunObserver,
) -> Result<EnumRunOutcome, TeamGenError> {
    let roster = read_roster_from_xlsx(
        &options.path_file_in,
        options.sheet_name.as_deref(),
        &options.columns,
    )?;
    observer.on_roster_read(&roster);

    if roster.is_empty() {
        return Ok(EnumRunOutcome::NoStudents);
    }

    let teams = split_into_teams(&roster.students, &options.partition);
    observer.on_teams_created(&teams, options.partition.resolve_team_size());
    let statistics = summarize_teams(&teams);

    let report_xlsx = write_teams_to_xlsx(&teams, &options.path_file_out)?;
    observer.on_teams_written(&options.path_file_out, teams.len(), &report_xlsx);

    let mut l_warnings = roster.warnings;
    l_warnings.extend(report_xlsx.warnings);

    Ok(EnumRunOutcome::Completed(ReportRun {
        cnt_students: roster.students.len(),
        cnt_teams: teams.len(),
        path_file_out: options.path_file_out.clone(),
        statistics,
        warnings: l_warnings,
    }))
}
