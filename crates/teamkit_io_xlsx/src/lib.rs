//! `teamkit_io_xlsx` v1:
//! Rust-side XLSX reader/writer kernel.
//!
//! Modules:
//! - `conf`   : constants and default presets
//! - `spec`   : cell model, options, reports and errors
//! - `util`   : pure helper functions
//! - `reader` : worksheet loading behind the `SheetSource` trait
//! - `writer` : DataFrame-to-workbook writer kernel
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL, derive_default_xlsx_format, derive_default_xlsx_formats,
};
pub use reader::{SheetSource, SpecSheetGrid, XlsxSheet, open_sheet};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat,
    SpecSheetSlice, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxIoError,
};
pub use util::sanitize_sheet_name;
pub use writer::XlsxWriter;
