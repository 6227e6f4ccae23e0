//! Catalog command handler

use super::{normalize_code, write_course_details};
use course_advisor::core::models::CatalogStore;
use std::io::{self, Write};

/// Print every course as `CODE: NAME` in catalog order
///
/// # Errors
/// Returns any error from writing to `out`
pub fn list<W: Write>(catalog: &CatalogStore, out: &mut W) -> io::Result<()> {
    if catalog.is_empty() {
        return writeln!(out, "No courses in the catalog.");
    }
    for course in catalog.courses() {
        writeln!(out, "{}: {}", course.code, course.name)?;
    }
    Ok(())
}

/// Print all attributes of one course
///
/// # Errors
/// Returns any error from writing to `out`
pub fn show<W: Write>(catalog: &CatalogStore, code: &str, out: &mut W) -> io::Result<()> {
    match catalog.resolve(&normalize_code(code)) {
        Ok(course) => write_course_details(out, course),
        Err(_) => writeln!(out, "Course not found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_advisor::core::models::CourseCatalogEntry;

    fn catalog() -> CatalogStore {
        let mut catalog = CatalogStore::new();
        catalog.add_course(CourseCatalogEntry::new(
            "CS101".to_string(),
            "Programming I".to_string(),
            3,
            1,
        ));
        catalog.add_course(CourseCatalogEntry::new(
            "MATH101".to_string(),
            "Calculus I".to_string(),
            3,
            1,
        ));
        catalog
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_in_catalog_order() {
        let text = render(|out| list(&catalog(), out));
        assert_eq!(text, "CS101: Programming I\nMATH101: Calculus I\n");
    }

    #[test]
    fn test_list_empty() {
        let text = render(|out| list(&CatalogStore::new(), out));
        assert_eq!(text, "No courses in the catalog.\n");
    }

    #[test]
    fn test_show_normalizes_code() {
        let text = render(|out| show(&catalog(), " cs101", out));
        assert!(text.starts_with("Course Code: CS101\n"));
    }

    #[test]
    fn test_show_unknown() {
        let text = render(|out| show(&catalog(), "XX1", out));
        assert_eq!(text, "Course not found.\n");
    }
}
