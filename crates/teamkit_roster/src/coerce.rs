//! Raw cell to roster text normalization.
//!
//! Every anomaly (blank, error or missing cell) becomes an empty string; no
//! function in this module fails.

use chrono::{NaiveDateTime, Timelike};
use teamkit_io_xlsx::EnumCellValue;

/// Coerce an optional raw cell to text. A missing cell behaves like a blank.
pub fn convert_cell_to_string(cell: Option<&EnumCellValue>) -> String {
    match cell {
        Some(value) => convert_cell_value_to_string(value),
        None => String::new(),
    }
}

/// Coerce one raw cell to text.
///
/// - text, ISO date and ISO duration cells are returned verbatim,
/// - whole numbers render without a decimal point (`42`, not `42.0`),
/// - date cells render as `YYYY-MM-DD`, with ` HH:MM:SS` when a time is set,
/// - booleans render as `true`/`false`,
/// - formulas render their expression rather than the cached result.
pub fn convert_cell_value_to_string(value: &EnumCellValue) -> String {
    match value {
        EnumCellValue::String(val) => val.clone(),
        EnumCellValue::Int(val) => val.to_string(),
        EnumCellValue::Float(val) => convert_number_to_string(*val),
        EnumCellValue::Bool(val) => val.to_string(),
        EnumCellValue::DateTime(dt) => convert_datetime_to_string(dt),
        EnumCellValue::DateTimeIso(val) | EnumCellValue::DurationIso(val) => val.clone(),
        EnumCellValue::Formula(val) => val.clone(),
        EnumCellValue::Empty | EnumCellValue::Error(_) => String::new(),
    }
}

/// Render a number, dropping the fraction when it is mathematically whole.
pub fn convert_number_to_string(value: f64) -> String {
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        return (value as i64).to_string();
    }
    value.to_string()
}

fn convert_datetime_to_string(dt: &NaiveDateTime) -> String {
    if dt.num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
