//! Team assignment sheet rendering.

use std::path::Path;

use polars::prelude::{Column, DataFrame};
use teamkit_io_xlsx::{
    EnumFmtKey, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxWriter, derive_default_xlsx_format,
};

use crate::conf::{C_SHEET_NAME_TEAMS, TUP_TEAM_SHEET_HEADER};
use crate::partition::flatten_team_assignments;
use crate::spec::{SpecTeam, TeamGenError};

/// Flatten `teams` into the five-column assignment frame.
///
/// Rows follow team order, then member order within each team.
pub fn derive_team_dataframe(teams: &[SpecTeam]) -> Result<DataFrame, String> {
    let l_assignments = flatten_team_assignments(teams);
    let n_rows = l_assignments.len();

    let mut l_ids = Vec::with_capacity(n_rows);
    let mut l_names = Vec::with_capacity(n_rows);
    let mut l_registration_numbers = Vec::with_capacity(n_rows);
    let mut l_departments = Vec::with_capacity(n_rows);
    let mut l_team_names = Vec::with_capacity(n_rows);
    for assignment in l_assignments {
        l_ids.push(assignment.student.id);
        l_names.push(assignment.student.name);
        l_registration_numbers.push(assignment.student.registration_number);
        l_departments.push(assignment.student.department);
        l_team_names.push(assignment.team_name);
    }

    let [c_col_id, c_col_name, c_col_reg, c_col_dept, c_col_team] = TUP_TEAM_SHEET_HEADER;
    DataFrame::new(vec![
        Column::new(c_col_id.into(), l_ids),
        Column::new(c_col_name.into(), l_names),
        Column::new(c_col_reg.into(), l_registration_numbers),
        Column::new(c_col_dept.into(), l_departments),
        Column::new(c_col_team.into(), l_team_names),
    ])
    .map_err(|err| format!("Failed to build team frame: {err}"))
}

/// Write all teams into one `Teams` sheet of a new workbook at `path`.
///
/// Any failure to build or save the workbook surfaces as
/// [`TeamGenError::Write`]; a partially written file may remain.
pub fn write_teams_to_xlsx(
    teams: &[SpecTeam],
    path: &Path,
) -> Result<SpecXlsxReport, TeamGenError> {
    let df_teams = derive_team_dataframe(teams).map_err(|message| TeamGenError::Write {
        path: path.to_path_buf(),
        message,
    })?;

    let mut writer = XlsxWriter::new(
        path.to_path_buf(),
        derive_default_xlsx_format(EnumFmtKey::Text),
        derive_default_xlsx_format(EnumFmtKey::Header),
    );
    writer.write_sheet_from_dataframe(
        &df_teams,
        C_SHEET_NAME_TEAMS,
        &SpecXlsxSheetWriteOptions::default(),
    )?;
    writer.close()?;

    log::info!(
        "Successfully wrote {} teams to Excel file: {}",
        teams.len(),
        writer.file_out()
    );

    Ok(writer.report().into_iter().next().unwrap_or_default())
}
