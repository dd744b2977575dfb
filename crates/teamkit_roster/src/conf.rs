//! Roster and team-generation constants.

/// Team size used when the requested size is zero or negative.
pub const N_TEAM_SIZE_DEFAULT: usize = 10;
/// Prefix of generated team labels (`Team_0`, `Team_1`, ...).
pub const C_TEAM_NAME_PREFIX: &str = "Team_";
/// Sheet name of the generated assignment sheet.
pub const C_SHEET_NAME_TEAMS: &str = "Teams";

/// Output header columns, in write order.
pub const TUP_TEAM_SHEET_HEADER: [&str; 5] =
    ["Student ID", "Student Name", "RegId", "Dept", "Team Name"];

/// Source column of the student id.
pub const N_COL_ID: usize = 0;
/// Source column of the student name.
pub const N_COL_NAME: usize = 1;
/// Source column of the registration number.
pub const N_COL_REGISTRATION_NUMBER: usize = 2;
/// Source column of the department.
pub const N_COL_DEPARTMENT: usize = 3;

/// Header rows skipped before roster data.
pub const N_ROWS_HEADER: usize = 1;

/// Build the label of the zero-based team chunk `idx_team`.
pub fn derive_team_name(idx_team: usize) -> String {
    format!("{C_TEAM_NAME_PREFIX}{idx_team}")
}
