//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];


/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Generic text cell format.
    Text,
    /// Header cell format.
    Header,
}

impl EnumFmtKey {
    /// Key used in [`derive_default_xlsx_formats`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Header => "header",
        }
    }
}

/// Build default named format presets used by [`crate::writer::XlsxWriter`].
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(11),
        border: Some(1),
        align: Some("left".to_string()),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Text.as_str().to_string(),
        cfg_base_fmt_spec.clone(),
    );
    dict_fmt.insert(
        EnumFmtKey::Header.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            font_size: Some(12),
            bold: Some(true),
            bg_color: Some("#ADD8E6".to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}

/// Look up one preset, falling back to an empty format for unknown keys.
pub fn derive_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    derive_default_xlsx_formats()
        .remove(key.as_str())
        .unwrap_or_default()
}
