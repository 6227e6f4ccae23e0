//! Catalog loading from tabular sources
//!
//! The course table needs the columns `Code, Course Name, CH, LCT, LAB,
//! Semester, Type, prerequisites`. University-common courses come from a second
//! table (`uc_courses` sheet, or a separate CSV) with `Course Code, Course Name,
//! CH`. Loading only ever calls [`CatalogStore::add_course`].

pub mod csv_parser;
pub mod workbook;

use crate::core::models::{split_codes, CatalogStore, CourseCatalogEntry};
use crate::{info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the workbook sheet holding university-common courses
pub const UC_SHEET: &str = "uc_courses";

/// Failure to load a catalog source
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet could not be opened or a sheet could not be read
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The file extension is not a supported tabular format
    #[error("Unsupported catalog format: '{0}' (expected .csv, .xlsx, .xls or .ods)")]
    UnsupportedFormat(String),

    /// The source has no sheets or no header row
    #[error("No table found in {0}")]
    EmptySource(String),

    /// A required column is absent from a table header
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn {
        /// Table (sheet or file) name
        table: String,
        /// Column that was expected
        column: String,
    },
}

/// Result type for catalog loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// A header row plus data rows, all cells as trimmed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Table name for error messages (sheet name or file name)
    pub name: String,
    /// Header cells
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Find a column by header, ignoring case and surrounding whitespace
    ///
    /// # Errors
    /// Returns `MissingColumn` if no header matches
    pub fn column(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(header.trim()))
            .ok_or_else(|| LoadError::MissingColumn {
                table: self.name.clone(),
                column: header.to_string(),
            })
    }

    /// Like [`column`](Self::column) but absence is not an error
    #[must_use]
    pub fn optional_column(&self, header: &str) -> Option<usize> {
        self.column(header).ok()
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", |s| s.trim())
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Parse a non-negative whole number from a cell
///
/// Spreadsheet cells often come back as floats, so `3.0` is accepted as `3`.
///
/// # Errors
/// Returns a message describing the bad value
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn parse_count(raw: &str) -> std::result::Result<u32, String> {
    let value = raw.trim();
    if let Ok(n) = value.parse::<u32>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            Ok(f as u32)
        }
        _ => Err(format!("'{value}' is not a non-negative whole number")),
    }
}

/// Map the main course table to catalog entries
///
/// Rows with a blank code or an unparsable number are skipped with a warning.
///
/// # Errors
/// Returns `MissingColumn` if a required column is absent
pub fn courses_from_table(table: &Table) -> Result<Vec<CourseCatalogEntry>> {
    let code_col = table.column("Code")?;
    let name_col = table.column("Course Name")?;
    let ch_col = table.column("CH")?;
    let lct_col = table.column("LCT")?;
    let lab_col = table.column("LAB")?;
    let sem_col = table.column("Semester")?;
    let type_col = table.column("Type")?;
    // An absent prerequisites column means no course has prerequisites
    let prereq_col = table.optional_column("prerequisites");

    let mut entries = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let line = idx + 2;
        let code = cell(row, code_col);
        if code.is_empty() {
            warn!("{}: row {line} has no course code, skipped", table.name);
            continue;
        }

        let hours = parse_count(cell(row, ch_col)).and_then(|ch| {
            Ok((
                ch,
                parse_count(cell(row, lct_col))?,
                parse_count(cell(row, lab_col))?,
                parse_count(cell(row, sem_col))?,
            ))
        });
        let (credit_hours, lecture_hours, practical_hours, semester) = match hours {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("{}: row {line} ({code}) skipped: {e}", table.name);
                continue;
            }
        };

        entries.push(
            CourseCatalogEntry::new(
                code.to_string(),
                cell(row, name_col).to_string(),
                credit_hours,
                semester,
            )
            .with_hours(lecture_hours, practical_hours)
            .with_type(cell(row, type_col))
            .with_prerequisites(
                prereq_col
                    .map(|col| split_codes(cell(row, col)))
                    .unwrap_or_default(),
            ),
        );
    }
    Ok(entries)
}

/// Map the university-common table to catalog entries
///
/// # Errors
/// Returns `MissingColumn` if a required column is absent
pub fn uc_courses_from_table(table: &Table) -> Result<Vec<CourseCatalogEntry>> {
    let code_col = table.column("Course Code")?;
    let name_col = table.column("Course Name")?;
    let ch_col = table.column("CH")?;

    let mut entries = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let line = idx + 2;
        let code = cell(row, code_col);
        if code.is_empty() {
            warn!("{}: row {line} has no course code, skipped", table.name);
            continue;
        }
        match parse_count(cell(row, ch_col)) {
            Ok(credit_hours) => entries.push(CourseCatalogEntry::university_common(
                code.to_string(),
                cell(row, name_col).to_string(),
                credit_hours,
            )),
            Err(e) => warn!("{}: row {line} ({code}) skipped: {e}", table.name),
        }
    }
    Ok(entries)
}

/// Source format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values
    Csv,
    /// Spreadsheet readable by calamine
    Workbook,
}

impl SourceFormat {
    /// Detect the format from a path's extension
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for unknown extensions
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a catalog from a course table and an optional university-common table
///
/// For workbooks, the first sheet is the course table and a `uc_courses` sheet,
/// when present, is merged. `uc_courses_path` adds a separate university-common
/// source (CSV, or the first sheet of a workbook). Course rows are added before
/// university-common rows, so a repeated code keeps the later row.
///
/// # Arguments
/// * `path` - Course table source
/// * `uc_courses_path` - Optional extra university-common source
///
/// # Errors
/// Returns a [`LoadError`] if a file cannot be read, has an unsupported
/// extension, or lacks a required column
pub fn load_catalog(path: &Path, uc_courses_path: Option<&Path>) -> Result<CatalogStore> {
    let (course_table, mut uc_tables) = match SourceFormat::detect(path)? {
        SourceFormat::Csv => (csv_parser::read_table(path)?, Vec::new()),
        SourceFormat::Workbook => {
            let (courses, uc) = workbook::read_catalog_sheets(path)?;
            (courses, uc.into_iter().collect())
        }
    };

    if let Some(uc_path) = uc_courses_path {
        let table = match SourceFormat::detect(uc_path)? {
            SourceFormat::Csv => csv_parser::read_table(uc_path)?,
            SourceFormat::Workbook => workbook::read_first_sheet(uc_path)?,
        };
        uc_tables.push(table);
    }

    let mut catalog = CatalogStore::new();
    for entry in courses_from_table(&course_table)? {
        catalog.add_course(entry);
    }
    for table in &uc_tables {
        for entry in uc_courses_from_table(table)? {
            catalog.add_course(entry);
        }
    }

    info!(
        "Loaded {} course(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
