//! Spreadsheet reader for catalog workbooks

use super::{LoadError, Result, Table, UC_SHEET};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert a cell to trimmed text
///
/// Integral floats print without a fractional part, so a credit-hour cell
/// holding `3.0` reads as `"3"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

type Workbook = Sheets<BufReader<File>>;

fn sheet_table(workbook: &mut Workbook, sheet: &str) -> Result<Table> {
    let range = workbook.worksheet_range(sheet)?;
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|r| r.iter().map(cell_to_string).collect())
        .ok_or_else(|| LoadError::EmptySource(sheet.to_string()))?;

    Ok(Table {
        name: sheet.to_string(),
        headers,
        rows: rows
            .map(|r| r.iter().map(cell_to_string).collect())
            .collect(),
    })
}

/// Read the course sheet and, if present, the `uc_courses` sheet
///
/// The course sheet is the first sheet in the workbook.
///
/// # Errors
/// Returns `Workbook` if the file cannot be opened or read, `EmptySource` if
/// it has no sheets
pub fn read_catalog_sheets(path: &Path) -> Result<(Table, Option<Table>)> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let first = names
        .first()
        .cloned()
        .ok_or_else(|| LoadError::EmptySource(path.display().to_string()))?;
    let courses = sheet_table(&mut workbook, &first)?;

    let uc = match names.iter().find(|n| n.as_str() == UC_SHEET) {
        Some(name) if *name != first => Some(sheet_table(&mut workbook, name)?),
        _ => None,
    };

    Ok((courses, uc))
}

/// Read only the first sheet of a workbook
///
/// # Errors
/// Returns `Workbook` if the file cannot be opened or read, `EmptySource` if
/// it has no sheets
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::EmptySource(path.display().to_string()))?;
    sheet_table(&mut workbook, &first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(4)), "4");
        assert_eq!(cell_to_string(&Data::String("  CS101 ".to_string())), "CS101");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_missing_workbook_is_error() {
        assert!(read_catalog_sheets(Path::new("does/not/exist.xlsx")).is_err());
    }
}
