//! Shared XLSX specification models.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDateTime;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; `None` fields leave the workbook default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,

    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValueSpecification

/// Raw typed cell value as stored in a workbook, before any text coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Blank cell.
    Empty,
    /// Shared or inline string.
    String(String),
    /// Floating point number.
    Float(f64),
    /// Integer number.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Date-formatted number resolved against the workbook's date system.
    DateTime(NaiveDateTime),
    /// ISO 8601 date/time text.
    DateTimeIso(String),
    /// ISO 8601 duration text.
    DurationIso(String),
    /// Formula expression without the leading `=`.
    Formula(String),
    /// Cell error such as `#DIV/0!`.
    Error(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Autofit rule for column width inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Disable autofit.
    None,
    /// Infer width from header cells only.
    Header,
    /// Infer width from body cells only.
    Body,
    /// Infer width from both header and body cells (default).
    #[default]
    All,
}

/// Autofit policy for per-sheet write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Autofit width inference rule.
    pub rule_columns: EnumAutofitColumnsRule,
    /// Max body rows inspected when body-based inference is active.
    pub height_body_inferred_max: Option<usize>,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::All,
            height_body_inferred_max: Some(20_000),
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

/// Per-sheet call options for [`crate::writer::XlsxWriter`].
#[derive(Debug, Clone, Default)]
pub struct SpecXlsxSheetWriteOptions {
    /// Number of frozen columns.
    pub col_freeze: usize,
    /// Frozen row index; defaults to the header height when `None`.
    pub row_freeze: Option<usize>,
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Sheet emitted to the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetSlice {
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    /// Number of data rows written below the header.
    pub height_body: usize,
    /// Number of columns written.
    pub width: usize,
}

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheets produced by the write call.
    pub sheets: Vec<SpecSheetSlice>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Workbook access failures surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XlsxIoError {
    /// Requested sheet name does not exist in the workbook.
    SheetNotFound {
        /// Requested sheet name.
        sheet_name: String,
        /// Sheet names present in the workbook, in document order.
        sheets_available: Vec<String>,
    },
    /// Workbook could not be opened or parsed.
    ReadFailed {
        /// Source workbook path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Workbook could not be built or saved.
    WriteFailed {
        /// Destination workbook path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
}

impl fmt::Display for XlsxIoError {
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
            Self::ReadFailed { path, message } => {
                write!(f, "Failed to read {}: {message}", path.display())
            }
            Self::WriteFailed { path, message } => {
                write!(f, "Failed to write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for XlsxIoError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
