//! XLSX writer kernel that renders text DataFrames into workbook sheets.

use std::collections::BTreeSet;
use std::path::PathBuf;

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::spec::{
    EnumAutofitColumnsRule, SpecCellFormat, SpecSheetSlice, SpecXlsxReport,
    SpecXlsxSheetWriteOptions, XlsxIoError,
};
use crate::util::{
    calculate_column_width, cast_col_num, cast_row_num, estimate_unicode_string_width,
    sanitize_sheet_name, validate_policy_autofit, validate_unique_columns,
};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_header: SpecCellFormat,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_header,
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(|err| self.derive_write_error(derive_xlsx_error_text(err)))?;
        self.if_closed = true;
        log::info!("Saved workbook {}", self.path_file_out.display());
        Ok(())
    }

    /// Write one sheet from an in-memory dataframe.
    ///
    /// Column names become the header row; every body cell is written as
    /// text, nulls as blanks.
    pub fn write_sheet_from_dataframe(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Err(self.derive_write_error("Cannot write after close().".to_string()));
        }
        self.write_sheet(df_data, sheet_name, options)
            .map_err(|msg| self.derive_write_error(msg))
    }

    fn write_sheet(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), String> {
        validate_policy_autofit(&options.policy_autofit)?;

        let l_colnames_df: Vec<String> = df_data
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        validate_unique_columns(&l_colnames_df)?;

        let n_width_df = l_colnames_df.len();
        let n_height_df = df_data.height();
        if n_width_df > N_NCOLS_EXCEL_MAX {
            return Err(format!(
                "Too many columns: {n_width_df} exceeds Excel limit {N_NCOLS_EXCEL_MAX}."
            ));
        }
        if n_height_df + 1 > N_NROWS_EXCEL_MAX {
            return Err(format!(
                "Too many rows: {n_height_df} + header exceeds Excel limit {N_NROWS_EXCEL_MAX}."
            ));
        }

        let mut report = SpecXlsxReport::default();
        let c_sheet_name_clean = sanitize_sheet_name(sheet_name, "_");
        if c_sheet_name_clean != sheet_name {
            report.warn(format!(
                "Sheet name {sheet_name:?} normalized to {c_sheet_name_clean:?}."
            ));
        }
        let sheet_name_unique = self.derive_unique_sheet_name(&c_sheet_name_clean);

        let fmt_data = derive_rust_xlsx_format(&self.fmt_text);
        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;

        let policy_autofit = &options.policy_autofit;
        let if_autofit_columns =
            !matches!(policy_autofit.rule_columns, EnumAutofitColumnsRule::None);
        let mut l_width_by_col_header = vec![0usize; n_width_df];
        let mut l_width_by_col_body = vec![0usize; n_width_df];

        for (n_idx_col, c_colname) in l_colnames_df.iter().enumerate() {
            write_text_cell(worksheet, 0, n_idx_col, c_colname, &fmt_header)?;
            if if_autofit_columns {
                l_width_by_col_header[n_idx_col] = estimate_unicode_string_width(c_colname);
            }
        }

        worksheet
            .set_freeze_panes(
                cast_row_num(options.row_freeze.unwrap_or(1))?,
                cast_col_num(options.col_freeze)?,
            )
            .map_err(derive_xlsx_error_text)?;

        let l_cols = df_data.get_columns();
        for n_row_local in 0..n_height_df {
            let if_measure_row = if_autofit_columns
                && policy_autofit
                    .height_body_inferred_max
                    .is_none_or(|n_max| n_row_local < n_max);

            for (n_idx_col, col) in l_cols.iter().enumerate() {
                let value = col
                    .get(n_row_local)
                    .map_err(|err| format!("Failed to access cell value: {err}"))?;
                let c_text = derive_text_from_any_value(value);

                if if_measure_row {
                    l_width_by_col_body[n_idx_col] = usize::max(
                        l_width_by_col_body[n_idx_col],
                        estimate_unicode_string_width(&c_text),
                    );
                }
                write_text_cell(worksheet, n_row_local + 1, n_idx_col, &c_text, &fmt_data)?;
            }
        }

        if if_autofit_columns {
            for n_idx_col in 0..n_width_df {
                let n_width_recorded = match policy_autofit.rule_columns {
                    EnumAutofitColumnsRule::Header | EnumAutofitColumnsRule::None => {
                        l_width_by_col_header[n_idx_col]
                    }
                    EnumAutofitColumnsRule::Body => l_width_by_col_body[n_idx_col],
                    EnumAutofitColumnsRule::All => usize::max(
                        l_width_by_col_header[n_idx_col],
                        l_width_by_col_body[n_idx_col],
                    ),
                };
                worksheet
                    .set_column_width(
                        cast_col_num(n_idx_col)?,
                        calculate_column_width(n_width_recorded, policy_autofit) as f64,
                    )
                    .map_err(derive_xlsx_error_text)?;
            }
        }

        log::debug!(
            "Wrote sheet {sheet_name_unique:?}: {n_height_df} rows x {n_width_df} columns"
        );
        report.sheets.push(SpecSheetSlice {
            sheet_name: sheet_name_unique,
            height_body: n_height_df,
            width: n_width_df,
        });
        self.l_reports.push(report);
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }

    fn derive_write_error(&self, message: String) -> XlsxIoError {
        XlsxIoError::WriteFailed {
            path: self.path_file_out.clone(),
            message,
        }
    }
}

fn derive_text_from_any_value(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(val) => val.to_string(),
        AnyValue::StringOwned(val) => val.to_string(),
        _ => value.to_string(),
    }
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &str,
    format: &Format,
) -> Result<(), String> {
    if value.is_empty() {
        worksheet
            .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
            .map_err(derive_xlsx_error_text)?;
    } else {
        worksheet
            .write_string_with_format(cast_row_num(row_idx)?, cast_col_num(col_idx)?, value, format)
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
