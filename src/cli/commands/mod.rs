//! CLI command handlers for `CourseAdvisor`.
//!
//! Each command is implemented in its own submodule. Handlers write to a
//! caller-supplied `Write` so they can be exercised against in-memory buffers.

pub mod advise;
pub mod catalog;
pub mod config;
pub mod session;

use course_advisor::config::Config;
use course_advisor::core::loader::load_catalog;
use course_advisor::core::models::{CatalogStore, CourseCatalogEntry, StudentRecord};
use std::io::{self, Write};
use std::path::Path;

/// Normalize a presented course code: trimmed and upper-cased
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Split a comma-separated code list and normalize each code
pub fn parse_code_list(raw: &str) -> Vec<String> {
    course_advisor::core::models::split_codes(raw)
        .iter()
        .map(|code| normalize_code(code))
        .collect()
}

/// Parse a CGPA, rejecting non-numeric, non-finite and negative values
///
/// # Errors
/// Returns a message describing why the value is not a usable CGPA
pub fn parse_cgpa(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid CGPA '{}'", raw.trim()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("CGPA must be a non-negative number, got '{}'", raw.trim()));
    }
    Ok(value)
}

/// What a student tells the advisor before a session starts
#[derive(Debug, Clone, Default)]
pub struct StudentProfile {
    /// Current semester
    pub semester: u32,
    /// Cumulative GPA
    pub cgpa: f64,
    /// Passed course codes as typed
    pub passed: Vec<String>,
    /// Failed course codes as typed
    pub failed: Vec<String>,
}

impl StudentProfile {
    /// Build a fresh record from this profile, normalizing every code
    pub fn to_record<'a>(&self) -> StudentRecord<'a> {
        let mut student = StudentRecord::new();
        student.set_semester(self.semester);
        student.set_cgpa(self.cgpa);
        for code in &self.passed {
            student.add_passed_course(normalize_code(code));
        }
        for code in &self.failed {
            student.add_failed_course(normalize_code(code));
        }
        student
    }
}

/// Load the catalog named by `[catalog]` in the configuration
///
/// # Errors
/// Returns a message if no catalog is configured or loading fails
pub fn load_configured_catalog(config: &Config) -> Result<CatalogStore, String> {
    if config.catalog.file.is_empty() {
        return Err(
            "No catalog configured. Use --catalog PATH or `config set catalog_file PATH`."
                .to_string(),
        );
    }
    let uc_path = if config.catalog.uc_courses_file.is_empty() {
        None
    } else {
        Some(Path::new(&config.catalog.uc_courses_file))
    };
    load_catalog(Path::new(&config.catalog.file), uc_path).map_err(|e| e.to_string())
}

/// Print the remaining credit hours and the advising list
///
/// # Errors
/// Returns any error from writing to `out`
pub fn write_advising<W: Write>(
    out: &mut W,
    student: &StudentRecord<'_>,
    catalog: &CatalogStore,
) -> io::Result<()> {
    writeln!(
        out,
        "You can enroll in {} credit hours.",
        student.remaining_credit_hours()
    )?;
    let advised = course_advisor::core::advising::advise(student, catalog);
    if advised.is_empty() {
        return writeln!(out, "No courses advised for the given semester.");
    }
    writeln!(out, "Advised Courses for Registration:")?;
    for course in advised {
        let marker = if student.has_failed(&course.code) {
            " (failed, retake)"
        } else {
            ""
        };
        writeln!(
            out,
            "  {}: {} - Credit Hours: {}{marker}",
            course.code, course.name, course.credit_hours
        )?;
    }
    Ok(())
}

/// Print the registered courses and their total credit hours
///
/// # Errors
/// Returns any error from writing to `out`
pub fn write_registered<W: Write>(out: &mut W, student: &StudentRecord<'_>) -> io::Result<()> {
    let registered = student.registered_courses();
    if registered.is_empty() {
        return writeln!(out, "No courses enrolled.");
    }
    writeln!(out, "Enrolled Courses:")?;
    for course in registered {
        writeln!(
            out,
            "  {}: {} - Credit Hours: {}",
            course.code, course.name, course.credit_hours
        )?;
    }
    writeln!(
        out,
        "Total: {} of {} credit hours",
        student.registered_credit_hours(),
        student.max_credit_hours()
    )
}

/// Print every attribute of a course
///
/// # Errors
/// Returns any error from writing to `out`
pub fn write_course_details<W: Write>(out: &mut W, course: &CourseCatalogEntry) -> io::Result<()> {
    writeln!(out, "Course Code: {}", course.code)?;
    writeln!(out, "Course Name: {}", course.name)?;
    writeln!(out, "Credit Hours: {}", course.credit_hours)?;
    writeln!(out, "Lecture Hours: {}", course.lecture_hours)?;
    writeln!(out, "Practical Hours: {}", course.practical_hours)?;
    writeln!(out, "Semester: {}", course.semester)?;
    writeln!(out, "Type: {}", course.course_type)?;
    let prerequisites = if course.prerequisites.is_empty() {
        "None".to_string()
    } else {
        course.prerequisites.join(", ")
    };
    writeln!(out, "Prerequisites: {prerequisites}")
}
