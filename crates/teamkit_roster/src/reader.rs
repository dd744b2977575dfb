//! Roster sheet ingestion.

use std::collections::HashSet;
use std::path::Path;

use teamkit_io_xlsx::{SheetSource, open_sheet};

use crate::coerce::convert_cell_to_string;
use crate::conf::N_ROWS_HEADER;
use crate::report::ReportRoster;
use crate::spec::{SpecRosterColumns, SpecStudent, TeamGenError};

/// Read students from `sheet`, skipping the header row unconditionally.
///
/// A row is accepted only when its trimmed id and name are both non-empty;
/// other rows are counted as skipped, never reported as errors. Missing
/// optional columns (two-column rosters) read as empty strings.
pub fn read_roster<S: SheetSource + ?Sized>(
    sheet: &S,
    columns: &SpecRosterColumns,
) -> ReportRoster {
    let n_width = columns.width();
    let mut report = ReportRoster::default();
    let mut set_ids_seen: HashSet<String> = HashSet::new();

    for n_row in N_ROWS_HEADER..sheet.row_count() {
        report.cnt_rows_scanned += 1;

        if sheet.is_row_absent(n_row, n_width) {
            report.cnt_rows_skipped += 1;
            continue;
        }

        let read_text = |n_col: Option<usize>| -> String {
            n_col
                .map(|n_col| convert_cell_to_string(sheet.cell(n_row, n_col).as_ref()))
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let c_id = read_text(Some(columns.col_id));
        let c_name = read_text(Some(columns.col_name));
        if c_id.is_empty() || c_name.is_empty() {
            report.cnt_rows_skipped += 1;
            continue;
        }

        if !set_ids_seen.insert(c_id.clone()) {
            report.warnings.push(format!(
                "Duplicate student id {c_id:?} at row {}.",
                n_row + 1
            ));
        }

        report.students.push(
            SpecStudent::new(c_id, c_name).with_details(
                read_text(columns.col_registration_number),
                read_text(columns.col_department),
            ),
        );
    }

    report
}

/// Open `path`, select `sheet_name` (first sheet when `None`) and read it.
///
/// The workbook is fully loaded and closed before rows are processed.
pub fn read_roster_from_xlsx(
    path: &Path,
    sheet_name: Option<&str>,
    columns: &SpecRosterColumns,
) -> Result<ReportRoster, TeamGenError> {
    let sheet = open_sheet(path, sheet_name)?;
    log::info!("Reading students from sheet: {}", sheet.sheet_name());

    let report = read_roster(&sheet, columns);
    log::info!("Read {} students from Excel file", report.student_count());
    Ok(report)
}
