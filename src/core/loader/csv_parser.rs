//! CSV reader for catalog tables

use super::{LoadError, Result, Table};
use std::fs;
use std::path::Path;

/// Read a CSV file into a [`Table`]
///
/// The first non-empty line is the header. Fields may be wrapped in double
/// quotes so that a comma-separated prerequisite list fits in one cell; a
/// doubled quote inside a quoted field is a literal quote. Quoted fields may
/// not span lines.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns `Io` if the file cannot be read, `EmptySource` if it has no header
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let headers = lines
        .next()
        .map(parse_csv_line)
        .ok_or_else(|| LoadError::EmptySource(path.display().to_string()))?;
    let rows = lines.map(parse_csv_line).collect();

    Ok(Table {
        name: path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string()),
        headers,
        rows,
    })
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line() {
        let line = "CS201,Data Structures,3,2,2,2,Core,CS101";
        let fields = parse_csv_line(line);

        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "CS201");
        assert_eq!(fields[1], "Data Structures");
        assert_eq!(fields[7], "CS101");
    }

    #[test]
    fn test_quoted_field_keeps_commas() {
        let fields = parse_csv_line(r#"CS301, "Algorithms", 3,"CS201, MATH201""#);
        assert_eq!(fields, vec!["CS301", "Algorithms", "3", "CS201, MATH201"]);
    }

    #[test]
    fn test_escaped_quote_and_trailing_empty() {
        let fields = parse_csv_line(r#""The ""Big"" Course",,"#);
        assert_eq!(fields, vec![r#"The "Big" Course"#, "", ""]);
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let fields = parse_csv_line("\u{feff}Code,Course Name");
        assert_eq!(fields[0], "Code");
    }
}
