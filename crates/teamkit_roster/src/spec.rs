//! Roster models, options and top-level error types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use teamkit_io_xlsx::XlsxIoError;

use crate::conf::{
    N_COL_DEPARTMENT, N_COL_ID, N_COL_NAME, N_COL_REGISTRATION_NUMBER, N_TEAM_SIZE_DEFAULT,
};
use crate::report::ReportRun;

////////////////////////////////////////////////////////////////////////////////
// #region StudentModels

/// One roster member as read from the source sheet.
///
/// Identity is the `id` alone: two students with the same `id` compare equal
/// and hash identically regardless of the other fields.
#[derive(Debug, Clone, Default)]
pub struct SpecStudent {
    /// Stable identity; non-empty for every student produced by the reader.
    pub id: String,
    /// Display name; non-empty for every student produced by the reader.
    pub name: String,
    /// Registration number, empty when the column is missing.
    pub registration_number: String,
    /// Department, empty when the column is missing.
    pub department: String,
}

impl SpecStudent {
    /// Student with only the mandatory fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Return a copy with registration number and department set.
    pub fn with_details(
        self,
        registration_number: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            department: department.into(),
            ..self
        }
    }
}

impl PartialEq for SpecStudent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpecStudent {}

impl Hash for SpecStudent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A student paired with the label of the team it was placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecStudentAssignment {
    /// Student record, unchanged from the roster.
    pub student: SpecStudent,
    /// Label of the owning team.
    pub team_name: String,
}

/// One non-empty chunk of the partitioned roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTeam {
    /// Zero-based chunk index in output order.
    pub idx_team: usize,
    /// Team label, `Team_<idx_team>`.
    pub name: String,
    /// Members in chunk order.
    pub members: Vec<SpecStudent>,
}

impl SpecTeam {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members; never true for partitioner output.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members labelled with this team's name, in member order.
    pub fn assignments(&self) -> impl Iterator<Item = SpecStudentAssignment> + '_ {
        self.members.iter().map(|student| SpecStudentAssignment {
            student: student.clone(),
            team_name: self.name.clone(),
        })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Source column mapping for roster rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRosterColumns {
    /// Column holding the student id.
    pub col_id: usize,
    /// Column holding the student name.
    pub col_name: usize,
    /// Column holding the registration number; `None` reads it as empty.
    pub col_registration_number: Option<usize>,
    /// Column holding the department; `None` reads it as empty.
    pub col_department: Option<usize>,
}

impl Default for SpecRosterColumns {
    fn default() -> Self {
        Self {
            col_id: N_COL_ID,
            col_name: N_COL_NAME,
            col_registration_number: Some(N_COL_REGISTRATION_NUMBER),
            col_department: Some(N_COL_DEPARTMENT),
        }
    }
}

impl SpecRosterColumns {
    /// One past the highest mapped column.
    pub fn width(&self) -> usize {
        [
            Some(self.col_id),
            Some(self.col_name),
            self.col_registration_number,
            self.col_department,
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |n_col| n_col + 1)
    }
}

/// Input options for `split_into_teams`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPartitionOptions {
    /// Requested team size; values `<= 0` fall back to the default of 10.
    pub team_size: i64,
    /// Randomize roster order before chunking.
    pub if_shuffle: bool,
    /// Seed for a reproducible shuffle; thread RNG when `None`.
    pub seed: Option<u64>,
}

impl Default for SpecPartitionOptions {
    fn default() -> Self {
        Self {
            team_size: N_TEAM_SIZE_DEFAULT as i64,
            if_shuffle: true,
            seed: None,
        }
    }
}

impl SpecPartitionOptions {
    /// Effective chunk size after the `<= 0` fallback.
    pub fn resolve_team_size(&self) -> usize {
        usize::try_from(self.team_size)
            .ok()
            .filter(|n_size| *n_size > 0)
            .unwrap_or(N_TEAM_SIZE_DEFAULT)
    }
}

/// Input options for `generate_teams`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRunOptions {
    /// Source workbook.
    pub path_file_in: PathBuf,
    /// Destination workbook.
    pub path_file_out: PathBuf,
    /// Source sheet; first sheet when `None`.
    pub sheet_name: Option<String>,
    /// Source column mapping.
    pub columns: SpecRosterColumns,
    /// Partitioning behavior.
    pub partition: SpecPartitionOptions,
}

impl SpecRunOptions {
    /// Options with default columns and partitioning.
    pub fn new(path_file_in: impl Into<PathBuf>, path_file_out: impl Into<PathBuf>) -> Self {
        Self {
            path_file_in: path_file_in.into(),
            path_file_out: path_file_out.into(),
            sheet_name: None,
            columns: SpecRosterColumns::default(),
            partition: SpecPartitionOptions::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OutcomesAndErrors

/// Successful end state of one run.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumRunOutcome {
    /// No qualifying roster rows; nothing was written.
    NoStudents,
    /// Teams were generated and written.
    Completed(ReportRun),
}

/// "Run failed" errors; any of these aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamGenError {
    /// Requested sheet name does not exist in the source workbook.
    SheetNotFound {
        /// Requested sheet name.
        sheet_name: String,
        /// Sheets present in the source workbook.
        sheets_available: Vec<String>,
    },
    /// Source workbook could not be opened or parsed.
    ReadIo {
        /// Source workbook path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Destination workbook could not be created or saved.
    Write {
        /// Destination workbook path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
}

impl From<XlsxIoError> for TeamGenError {
    fn from(err: XlsxIoError) -> Self {
        match err {
            XlsxIoError::SheetNotFound {
                sheet_name,
                sheets_available,
            } => Self::SheetNotFound {
                sheet_name,
                sheets_available,
            },
            XlsxIoError::ReadFailed { path, message } => Self::ReadIo { path, message },
            XlsxIoError::WriteFailed { path, message } => Self::Write { path, message },
        }
    }
}

impl fmt::Display for TeamGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SheetNotFound {
                sheet_name,
                sheets_available,
            } => write!(
                f,
                "Sheet not found: {sheet_name} (available: {})",
                sheets_available.join(", ")
            ),
            Self::ReadIo { path, message } => {
                write!(f, "Cannot read roster {}: {message}", path.display())
            }
            Self::Write { path, message } => {
                write!(f, "Cannot write teams to {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for TeamGenError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
