//! Outcome values returned by catalog and enrollment operations
//!
//! Business-rule violations are ordinary values here, never errors or panics:
//! callers branch on them and the CLI prints their `Display` form.

use std::fmt;

/// Why a student may not register for a course right now
///
/// Produced by [`StudentRecord::can_register`](super::StudentRecord::can_register).
/// Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    /// The course is offered in a higher semester than the student's current one
    SemesterTooHigh {
        /// Earliest semester of the course
        course_semester: u32,
        /// Student's current semester
        student_semester: u32,
    },
    /// Prerequisites the student has not passed, in the course's declared order
    MissingPrerequisites(Vec<String>),
    /// Registering would push the load over the CGPA-based cap
    CreditCapExceeded {
        /// The cap that would be exceeded
        cap: u32,
    },
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SemesterTooHigh { .. } => write!(
                f,
                "You cannot register for this course because it is offered in a higher semester than your current semester."
            ),
            Self::MissingPrerequisites(missing) => write!(
                f,
                "You cannot register for this course because you have not passed the following prerequisite(s): {}",
                missing.join(", ")
            ),
            Self::CreditCapExceeded { cap } => write!(
                f,
                "You cannot register for this course because it would exceed the maximum credit hour limit of {cap} credit hours per semester."
            ),
        }
    }
}

/// Result of [`StudentRecord::enroll`](super::StudentRecord::enroll)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// Course appended to the registered list; carries the course name
    Enrolled(String),
    /// Eligible, but the code is already registered; nothing changed
    AlreadyEnrolled,
    /// Eligibility check failed; nothing changed
    Rejected(Ineligibility),
}

impl EnrollOutcome {
    /// Whether the registered list was changed
    #[must_use]
    pub const fn is_enrolled(&self) -> bool {
        matches!(self, Self::Enrolled(_))
    }
}

impl fmt::Display for EnrollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enrolled(name) => write!(f, "Enrolled in course: {name}"),
            Self::AlreadyEnrolled => write!(f, "You are already enrolled in this course."),
            Self::Rejected(reason) => reason.fmt(f),
        }
    }
}

/// Result of [`StudentRecord::drop`](super::StudentRecord::drop)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Course removed; carries the course name
    Dropped(String),
    /// No registered course had that code
    NotRegistered,
}

impl fmt::Display for DropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dropped(name) => write!(f, "Dropped course: {name}"),
            Self::NotRegistered => write!(f, "Course not found in registered courses."),
        }
    }
}

/// Result of [`CatalogStore::delete_course`](super::CatalogStore::delete_course)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The course existed and was removed
    Deleted,
    /// No course had that code
    NotFound,
}

/// Result of [`CatalogStore::add_prerequisite`](super::CatalogStore::add_prerequisite)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrerequisiteOutcome {
    /// Prerequisite appended to the course
    Added,
    /// The course already listed that prerequisite
    AlreadyPresent,
    /// Either the course or the prerequisite is not in the catalog
    CourseNotFound,
}

impl fmt::Display for PrerequisiteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "Prerequisite added."),
            Self::AlreadyPresent => write!(f, "Prerequisite already listed."),
            Self::CourseNotFound => write!(f, "Course or prerequisite not found."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_message_names_higher_semester() {
        let reason = Ineligibility::SemesterTooHigh {
            course_semester: 5,
            student_semester: 2,
        };
        assert!(reason.to_string().contains("higher semester"));
    }

    #[test]
    fn test_missing_prerequisites_message_keeps_order() {
        let reason =
            Ineligibility::MissingPrerequisites(vec!["MATH201".to_string(), "CS102".to_string()]);
        assert!(reason.to_string().ends_with("MATH201, CS102"));
    }

    #[test]
    fn test_cap_message_carries_cap() {
        let reason = Ineligibility::CreditCapExceeded { cap: 13 };
        assert!(reason.to_string().contains("limit of 13 credit hours"));
    }

    #[test]
    fn test_enroll_outcome_display() {
        assert_eq!(
            EnrollOutcome::Enrolled("Calculus I".to_string()).to_string(),
            "Enrolled in course: Calculus I"
        );
        assert!(!EnrollOutcome::AlreadyEnrolled.is_enrolled());
        assert_eq!(
            DropOutcome::NotRegistered.to_string(),
            "Course not found in registered courses."
        );
    }
}
