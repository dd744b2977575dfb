//! Stateless helper utilities used by the XLSX reader and writer.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::SpecAutofitCellsPolicy;

////////////////////////////////////////////////////////////////////////////////
// #region DataFrameLikeUtils

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), String> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter_map(|(c_name, l_pos)| {
            if l_pos.len() > 1 {
                Some(format!(
                    "{c_name:?} x{} at indices {:?}",
                    l_pos.len(),
                    l_pos
                ))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(format!("Duplicate column names detected: {c_msg}"))
}

/// Reject autofit bounds that cannot produce a width.
pub fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> Result<(), String> {
    if policy_autofit.width_cell_min == 0 {
        return Err("policy_autofit.width_cell_min must be >= 1.".to_string());
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        );
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WidthEstimation

/// Estimate displayed width units for one text cell.
///
/// Non-ASCII characters count as 1.6 units (CJK glyphs render wide).
pub fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Clamp an inferred width into the autofit policy bounds.
pub fn calculate_column_width(n_width_recorded: usize, policy: &SpecAutofitCellsPolicy) -> usize {
    let n_min = usize::max(1, policy.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy.width_cell_max));
    usize::min(
        n_max,
        usize::max(n_min, n_width_recorded + policy.width_cell_padding),
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasting

/// Convert a zero-based row index to the workbook row type.
pub fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

/// Convert a zero-based column index to the workbook column type.
pub fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Team/A:B", "_"), "Team_A_B");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }

    #[test]
    fn test_validate_unique_columns_reports_duplicates() {
        let cols = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let err = validate_unique_columns(&cols).expect_err("duplicate");
        assert!(err.contains("\"a\" x2 at indices [0, 2]"));
        assert!(validate_unique_columns(&cols[..2]).is_ok());
    }

    #[test]
    fn test_calculate_column_width_clamps() {
        let policy = SpecAutofitCellsPolicy::default();
        assert_eq!(calculate_column_width(0, &policy), 8);
        assert_eq!(calculate_column_width(10, &policy), 12);
        assert_eq!(calculate_column_width(500, &policy), 60);
    }

    #[test]
    fn test_estimate_unicode_string_width() {
        assert_eq!(estimate_unicode_string_width("abc"), 3);
        assert_eq!(estimate_unicode_string_width("张三"), 3);
    }
}
