//! XLSX reader kernel that loads one worksheet into an owned cell grid.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use crate::spec::{EnumCellValue, XlsxIoError};

/// Read-only view over one worksheet, addressed by zero-based `(row, col)`.
pub trait SheetSource {
    /// Sheet name as stored in the workbook.
    fn sheet_name(&self) -> &str;

    /// Number of rows from row 0 through the last used row.
    fn row_count(&self) -> usize;

    /// Raw cell at `(row, col)`; `None` when the position lies outside the
    /// sheet's used range. Unwritten cells inside the range may read as
    /// [`EnumCellValue::Empty`].
    fn cell(&self, row: usize, col: usize) -> Option<EnumCellValue>;

    /// Whether no cell in the first `width` columns of `row` exists.
    fn is_row_absent(&self, row: usize, width: usize) -> bool {
        (0..width).all(|col| self.cell(row, col).is_none())
    }
}

/// Worksheet loaded from an `.xlsx` file.
///
/// Values and formulas are copied out of the workbook, so the file handle is
/// released as soon as [`open_sheet`] returns.
#[derive(Debug, Clone)]
pub struct XlsxSheet {
    sheet_name: String,
    range_values: Range<Data>,
    range_formulas: Range<String>,
}

/// Open `path` and load the sheet named `sheet_name`, or the first sheet in
/// document order when `sheet_name` is `None`.
pub fn open_sheet(path: &Path, sheet_name: Option<&str>) -> Result<XlsxSheet, XlsxIoError> {
    let mut workbook =
        open_workbook::<Xlsx<_>, _>(path).map_err(|err| XlsxIoError::ReadFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let l_sheet_names = workbook.sheet_names();
    let c_sheet_name = match sheet_name {
        Some(name) => {
            if !l_sheet_names.iter().any(|c_name| c_name == name) {
                return Err(XlsxIoError::SheetNotFound {
                    sheet_name: name.to_string(),
                    sheets_available: l_sheet_names,
                });
            }
            name.to_string()
        }
        None => l_sheet_names
            .first()
            .cloned()
            .ok_or_else(|| XlsxIoError::ReadFailed {
                path: path.to_path_buf(),
                message: "Workbook contains no sheets.".to_string(),
            })?,
    };

    let range_values =
        workbook
            .worksheet_range(&c_sheet_name)
            .map_err(|err| XlsxIoError::ReadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
    let range_formulas = match workbook.worksheet_formula(&c_sheet_name) {
        Ok(range) => range,
        Err(err) => {
            log::debug!("No formulas loaded for sheet {c_sheet_name:?}: {err}");
            Range::empty()
        }
    };

    log::info!(
        "Loaded sheet {c_sheet_name:?} from {} ({} rows)",
        path.display(),
        range_values.end().map_or(0, |(n_row, _)| n_row as usize + 1)
    );

    Ok(XlsxSheet {
        sheet_name: c_sheet_name,
        range_values,
        range_formulas,
    })
}

impl SheetSource for XlsxSheet {
    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    fn row_count(&self) -> usize {
        let n_rows_values = self.range_values.end().map_or(0, |(n_row, _)| n_row as usize + 1);
        let n_rows_formulas = self
            .range_formulas
            .end()
            .map_or(0, |(n_row, _)| n_row as usize + 1);
        usize::max(n_rows_values, n_rows_formulas)
    }

    fn cell(&self, row: usize, col: usize) -> Option<EnumCellValue> {
        let (Ok(n_row), Ok(n_col)) = (u32::try_from(row), u32::try_from(col)) else {
            return None;
        };

        if let Some(c_formula) = self.range_formulas.get_value((n_row, n_col))
            && !c_formula.is_empty()
        {
            let c_formula = c_formula.strip_prefix('=').unwrap_or(c_formula);
            return Some(EnumCellValue::Formula(c_formula.to_string()));
        }

        self.range_values
            .get_value((n_row, n_col))
            .map(derive_cell_value_from_data)
    }
}

fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::Empty,
        Data::String(val) => EnumCellValue::String(val.clone()),
        Data::Float(val) => EnumCellValue::Float(*val),
        Data::Int(val) => EnumCellValue::Int(*val),
        Data::Bool(val) => EnumCellValue::Bool(*val),
        Data::DateTime(val) if val.is_duration() => EnumCellValue::Float(val.as_f64()),
        // Serials chrono cannot represent stay numeric.
        Data::DateTime(val) => val
            .as_datetime()
            .map_or(EnumCellValue::Float(val.as_f64()), EnumCellValue::DateTime),
        Data::DateTimeIso(val) => EnumCellValue::DateTimeIso(val.clone()),
        Data::DurationIso(val) => EnumCellValue::DurationIso(val.clone()),
        Data::Error(err) => EnumCellValue::Error(err.to_string()),
    }
}

/// In-memory sheet, row-major; ragged rows are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecSheetGrid {
    /// Sheet name.
    pub sheet_name: String,
    /// Cells by row then column; `None` marks a never-written cell.
    pub rows: Vec<Vec<Option<EnumCellValue>>>,
}

impl SpecSheetGrid {
    /// Build a grid where every non-empty string becomes a text cell.
    pub fn from_text_rows(sheet_name: &str, rows: &[&[&str]]) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|c_val| {
                            if c_val.is_empty() {
                                None
                            } else {
                                Some(EnumCellValue::String((*c_val).to_string()))
                            }
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl SheetSource for SpecSheetGrid {
    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> Option<EnumCellValue> {
        self.rows.get(row)?.get(col)?.clone()
    }
}
