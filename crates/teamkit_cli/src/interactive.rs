//! Prompt-driven option entry, used when INPUT/OUTPUT are not given.

use std::io::{BufRead, Write};

use teamkit_roster::{N_TEAM_SIZE_DEFAULT, SpecRunOptions};

fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, String> {
    write!(writer, "{prompt}").map_err(|err| err.to_string())?;
    writer.flush().map_err(|err| err.to_string())?;

    let mut c_line = String::new();
    reader
        .read_line(&mut c_line)
        .map_err(|err| format!("Failed to read input: {err}"))?;
    Ok(c_line.trim().to_string())
}

fn parse_team_size(text: &str) -> Result<i64, String> {
    if text.is_empty() {
        return Ok(N_TEAM_SIZE_DEFAULT as i64);
    }
    text.parse::<i64>()
        .map_err(|_| format!("Invalid team size: {text:?}"))
}

/// Ask for input path, output path, sheet name and team size.
///
/// A blank sheet name selects the first sheet; a blank team size uses the
/// default. Blank paths and non-numeric team sizes are errors.
pub fn prompt_run_options<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<SpecRunOptions, String> {
    writeln!(writer, "=== Student Team Generator ===\n").map_err(|err| err.to_string())?;

    let c_input = prompt_line(reader, writer, "Enter input Excel file path: ")?;
    if c_input.is_empty() {
        return Err("Input file path is required".to_string());
    }
    let c_output = prompt_line(reader, writer, "Enter output Excel file path: ")?;
    if c_output.is_empty() {
        return Err("Output file path is required".to_string());
    }
    let c_sheet = prompt_line(
        reader,
        writer,
        "Enter sheet name to read from (press Enter for first sheet): ",
    )?;
    let c_team_size = prompt_line(reader, writer, "Enter team size (default: 10): ")?;
    writeln!(writer).map_err(|err| err.to_string())?;

    let mut options = SpecRunOptions::new(c_input, c_output);
    options.sheet_name = (!c_sheet.is_empty()).then_some(c_sheet);
    options.partition.team_size = parse_team_size(&c_team_size)?;
    Ok(options)
}
