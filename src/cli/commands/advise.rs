//! Advise command handler

use super::{normalize_code, write_advising, write_registered, StudentProfile};
use course_advisor::core::models::CatalogStore;
use course_advisor::verbose;
use std::io::{self, Write};

/// Advise a student, then attempt each enrollment in order
///
/// # Errors
/// Returns any error from writing to `out`
pub fn run<W: Write>(
    catalog: &CatalogStore,
    profile: &StudentProfile,
    enroll: &[String],
    out: &mut W,
) -> io::Result<()> {
    let mut student = profile.to_record();
    verbose!(
        "Advising semester {} student with CGPA {:.2} (cap {} credit hours)",
        student.semester(),
        student.cgpa(),
        student.max_credit_hours()
    );

    write_advising(out, &student, catalog)?;

    if enroll.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    for raw in enroll {
        let code = normalize_code(raw);
        match catalog.resolve(&code) {
            Ok(course) => writeln!(out, "{code}: {}", student.enroll(course))?,
            Err(_) => writeln!(out, "{code}: Course not found.")?,
        }
    }

    writeln!(out)?;
    write_registered(out, &student)
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
        catalog.add_course(
            CourseCatalogEntry::new("CS201".to_string(), "Data Structures".to_string(), 3, 2)
                .with_prerequisites(["CS101"]),
        );
        catalog
    }

    fn run_to_string(profile: &StudentProfile, enroll: &[&str]) -> String {
        let enroll: Vec<String> = enroll.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        run(&catalog(), profile, &enroll, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_advise_and_enroll() {
        let profile = StudentProfile {
            semester: 2,
            cgpa: 2.0,
            ..Default::default()
        };
        let text = run_to_string(&profile, &["cs201", "CS101", "XX9"]);

        assert!(text.contains("You can enroll in 20 credit hours."));
        assert!(text.contains(
            "  CS101: Programming I - Credit Hours: 3\n  CS201: Data Structures"
        ));
        assert!(text.contains(
            "CS201: You cannot register for this course because you have not passed the following prerequisite(s): CS101"
        ));
        assert!(text.contains("CS101: Enrolled in course: Programming I"));
        assert!(text.contains("XX9: Course not found."));
        assert!(text.contains("Total: 3 of 20 credit hours"));
    }

    #[test]
    fn test_nothing_to_advise() {
        let profile = StudentProfile {
            semester: 2,
            cgpa: 1.0,
            passed: vec!["CS101".to_string(), "CS201".to_string()],
            failed: Vec::new(),
        };
        let text = run_to_string(&profile, &[]);
        assert_eq!(
            text,
            "You can enroll in 13 credit hours.\nNo courses advised for the given semester.\n"
        );
    }
}
