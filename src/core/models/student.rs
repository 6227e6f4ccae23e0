//! Student record and enrollment rules

use super::outcome::{DropOutcome, EnrollOutcome, Ineligibility};
use super::CourseCatalogEntry;
use crate::debug;
use std::collections::HashSet;

/// CGPA below this carries the half-load cap
const HALF_LOAD_CGPA: f64 = 1.67;
/// CGPA at or above this allows an overload
const OVERLOAD_CGPA: f64 = 3.0;

const HALF_LOAD_CREDITS: u32 = 13;
const FULL_LOAD_CREDITS: u32 = 20;
const OVERLOAD_CREDITS: u32 = 22;

/// A student's academic state for one advising session
///
/// Registered courses borrow from the [`CatalogStore`](super::CatalogStore)
/// that owns them, so a record cannot outlive the catalog it enrolls from.
#[derive(Debug, Clone, Default)]
pub struct StudentRecord<'a> {
    semester: u32,
    cgpa: f64,
    passed_courses: HashSet<String>,
    failed_courses: HashSet<String>,
    registered_courses: Vec<&'a CourseCatalogEntry>,
}

impl<'a> StudentRecord<'a> {
    /// Create a record at semester 0 with CGPA 0.0 and no history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current semester
    pub fn set_semester(&mut self, semester: u32) {
        self.semester = semester;
    }

    /// Set the cumulative GPA
    pub fn set_cgpa(&mut self, cgpa: f64) {
        self.cgpa = cgpa;
    }

    /// Record a passed course code
    pub fn add_passed_course(&mut self, code: impl Into<String>) {
        self.passed_courses.insert(code.into());
    }

    /// Record a failed course code
    pub fn add_failed_course(&mut self, code: impl Into<String>) {
        self.failed_courses.insert(code.into());
    }

    /// Current semester
    #[must_use]
    pub const fn semester(&self) -> u32 {
        self.semester
    }

    /// Cumulative GPA
    #[must_use]
    pub const fn cgpa(&self) -> f64 {
        self.cgpa
    }

    /// Whether the student has passed the given course code
    #[must_use]
    pub fn has_passed(&self, code: &str) -> bool {
        self.passed_courses.contains(code)
    }

    /// Whether the student has failed the given course code
    #[must_use]
    pub fn has_failed(&self, code: &str) -> bool {
        self.failed_courses.contains(code)
    }

    /// Registered courses in enrollment order
    #[must_use]
    pub fn registered_courses(&self) -> &[&'a CourseCatalogEntry] {
        &self.registered_courses
    }

    /// Whether a course with this code is registered
    #[must_use]
    pub fn is_registered(&self, code: &str) -> bool {
        self.registered_courses.iter().any(|c| c.code == code)
    }

    /// Maximum credit hours the student may carry, by CGPA tier
    ///
    /// | CGPA          | Cap |
    /// |---------------|-----|
    /// | < 1.67        | 13  |
    /// | [1.67, 3.0)   | 20  |
    /// | >= 3.0        | 22  |
    #[must_use]
    pub fn max_credit_hours(&self) -> u32 {
        if self.cgpa < HALF_LOAD_CGPA {
            HALF_LOAD_CREDITS
        } else if self.cgpa < OVERLOAD_CGPA {
            FULL_LOAD_CREDITS
        } else {
            OVERLOAD_CREDITS
        }
    }

    /// Sum of credit hours across registered courses
    #[must_use]
    pub fn registered_credit_hours(&self) -> u32 {
        self.registered_courses.iter().map(|c| c.credit_hours).sum()
    }

    /// Credit hours still available under the cap
    #[must_use]
    pub fn remaining_credit_hours(&self) -> u32 {
        self.max_credit_hours()
            .saturating_sub(self.registered_credit_hours())
    }

    /// Check whether the student may register for a course
    ///
    /// Rules are checked in order and the first failure is returned:
    /// semester, then prerequisites, then the credit cap. Duplicate enrollment
    /// is not an eligibility concern; [`enroll`](Self::enroll) handles it.
    ///
    /// # Errors
    /// Returns the first [`Ineligibility`] that applies
    pub fn can_register(&self, course: &CourseCatalogEntry) -> Result<(), Ineligibility> {
        if course.semester > self.semester {
            return Err(Ineligibility::SemesterTooHigh {
                course_semester: course.semester,
                student_semester: self.semester,
            });
        }

        let missing: Vec<String> = course
            .prerequisites
            .iter()
            .filter(|code| !self.passed_courses.contains(*code))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Ineligibility::MissingPrerequisites(missing));
        }

        let cap = self.max_credit_hours();
        if course.credit_hours.saturating_add(self.registered_credit_hours()) > cap {
            return Err(Ineligibility::CreditCapExceeded { cap });
        }

        Ok(())
    }

    /// Enroll in a course if the rules allow it
    ///
    /// Mutates the registered list only on [`EnrollOutcome::Enrolled`].
    pub fn enroll(&mut self, course: &'a CourseCatalogEntry) -> EnrollOutcome {
        if let Err(reason) = self.can_register(course) {
            debug!("Enrollment in {} rejected: {reason:?}", course.code);
            return EnrollOutcome::Rejected(reason);
        }
        if self.is_registered(&course.code) {
            return EnrollOutcome::AlreadyEnrolled;
        }
        self.registered_courses.push(course);
        debug!(
            "Enrolled in {} ({} of {} credit hours used)",
            course.code,
            self.registered_credit_hours(),
            self.max_credit_hours()
        );
        EnrollOutcome::Enrolled(course.name.clone())
    }

    /// Drop a registered course by code
    pub fn drop(&mut self, code: &str) -> DropOutcome {
        match self.registered_courses.iter().position(|c| c.code == code) {
            Some(pos) => {
                let course = self.registered_courses.remove(pos);
                debug!("Dropped {code}");
                DropOutcome::Dropped(course.name.clone())
            }
            None => DropOutcome::NotRegistered,
        }
    }
}
