//! Advising engine
//!
//! Builds the candidate list of courses shown to a student for the semester.
//! Prerequisites and the credit cap are enforced at enrollment, not here.

use crate::core::models::{CatalogStore, CourseCatalogEntry, StudentRecord};
use crate::debug;

/// Produce the advising list for a student
///
/// A course is included when it is offered at or below the student's semester
/// and the student has not passed it. Failed courses come first; both groups
/// keep catalog order.
///
/// # Arguments
/// * `student` - The student being advised
/// * `catalog` - Catalog to draw courses from
///
/// # Returns
/// The advised courses, possibly empty
#[must_use]
pub fn advise<'c>(
    student: &StudentRecord<'_>,
    catalog: &'c CatalogStore,
) -> Vec<&'c CourseCatalogEntry> {
    let (failed, others): (Vec<_>, Vec<_>) = catalog
        .courses()
        .filter(|c| c.semester <= student.semester() && !student.has_passed(&c.code))
        .partition(|c| student.has_failed(&c.code));

    debug!(
        "Advising semester {}: {} retake(s), {} other course(s)",
        student.semester(),
        failed.len(),
        others.len()
    );

    let mut advised = failed;
    advised.extend(others);
    advised
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(courses: &[(&str, u32)]) -> CatalogStore {
        let mut catalog = CatalogStore::new();
        for &(code, semester) in courses {
            catalog.add_course(CourseCatalogEntry::new(
                code.to_string(),
                code.to_string(),
                3,
                semester,
            ));
        }
        catalog
    }

    fn codes(list: &[&CourseCatalogEntry]) -> Vec<String> {
        list.iter().map(|c| c.code.clone()).collect()
    }

    #[test]
    fn test_filters_by_semester_and_passed() {
        let catalog = catalog_of(&[("A", 1), ("B", 2), ("C", 3), ("UC", 0)]);
        let mut student = StudentRecord::new();
        student.set_semester(2);
        student.add_passed_course("A");

        assert_eq!(codes(&advise(&student, &catalog)), vec!["B", "UC"]);
    }

    #[test]
    fn test_failed_first_keeps_catalog_order_within_groups() {
        let catalog = catalog_of(&[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1)]);
        let mut student = StudentRecord::new();
        student.set_semester(1);
        student.add_failed_course("D");
        student.add_failed_course("B");

        assert_eq!(
            codes(&advise(&student, &catalog)),
            vec!["B", "D", "A", "C", "E"]
        );
    }

    #[test]
    fn test_everything_passed_gives_empty_list() {
        let catalog = catalog_of(&[("A", 1), ("B", 2), ("LATER", 4)]);
        let mut student = StudentRecord::new();
        student.set_semester(2);
        student.add_passed_course("A");
        student.add_passed_course("B");

        assert!(advise(&student, &catalog).is_empty());
    }

    #[test]
    fn test_registered_courses_stay_in_list() {
        let catalog = catalog_of(&[("A", 1)]);
        let mut student = StudentRecord::new();
        student.set_semester(1);
        student.set_cgpa(2.0);
        let a = catalog.get_course_by_code("A").unwrap();
        assert!(student.enroll(a).is_enrolled());

        assert_eq!(codes(&advise(&student, &catalog)), vec!["A"]);
    }
}
