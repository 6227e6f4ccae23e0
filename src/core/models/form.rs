//! Typed course-creation form
//!
//! Carries the raw text an advisor typed for each field of a new course and
//! validates it into a [`CourseCatalogEntry`], reporting every bad field.

use super::CourseCatalogEntry;
use std::fmt;
use thiserror::Error;

/// The fields of the course-creation form, in the order they are asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    /// Course code
    Code,
    /// Course name
    Name,
    /// Credit hours
    CreditHours,
    /// Lecture hours
    LectureHours,
    /// Practical hours
    PracticalHours,
    /// Earliest semester
    Semester,
    /// Course type
    Type,
    /// Comma-separated prerequisite codes
    Prerequisites,
}

impl CourseField {
    /// Every field, in prompt order
    pub const ALL: [Self; 8] = [
        Self::Code,
        Self::Name,
        Self::CreditHours,
        Self::LectureHours,
        Self::PracticalHours,
        Self::Semester,
        Self::Type,
        Self::Prerequisites,
    ];

    /// Human-readable label used in prompts and errors
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Name => "Name",
            Self::CreditHours => "Credit Hours",
            Self::LectureHours => "Lecture Hours",
            Self::PracticalHours => "Practical Hours",
            Self::Semester => "Semester",
            Self::Type => "Type",
            Self::Prerequisites => "Prerequisites",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single invalid form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    /// Which field failed
    pub field: CourseField,
    /// What was wrong with it
    pub reason: String,
}

/// Raw text for each course-creation field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credit_hours: String,
    /// Lecture hours
    pub lecture_hours: String,
    /// Practical hours
    pub practical_hours: String,
    /// Earliest semester
    pub semester: String,
    /// Course type
    pub course_type: String,
    /// Comma-separated prerequisite codes
    pub prerequisites: String,
}

impl CourseForm {
    /// Store the raw text for one field
    pub fn set(&mut self, field: CourseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CourseField::Code => self.code = value,
            CourseField::Name => self.name = value,
            CourseField::CreditHours => self.credit_hours = value,
            CourseField::LectureHours => self.lecture_hours = value,
            CourseField::PracticalHours => self.practical_hours = value,
            CourseField::Semester => self.semester = value,
            CourseField::Type => self.course_type = value,
            CourseField::Prerequisites => self.prerequisites = value,
        }
    }

    /// Validate every field and build the entry
    ///
    /// Code and name must be non-blank, the four numeric fields must be
    /// non-negative integers. Prerequisites are split on commas, trimmed, and
    /// empty tokens dropped.
    ///
    /// # Errors
    /// Returns one [`FieldError`] per invalid field
    pub fn validate(&self) -> Result<CourseCatalogEntry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let code = required(CourseField::Code, &self.code, &mut errors);
        let name = required(CourseField::Name, &self.name, &mut errors);
        let credit_hours = hours(CourseField::CreditHours, &self.credit_hours, &mut errors);
        let lecture_hours = hours(CourseField::LectureHours, &self.lecture_hours, &mut errors);
        let practical_hours =
            hours(CourseField::PracticalHours, &self.practical_hours, &mut errors);
        let semester = hours(CourseField::Semester, &self.semester, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CourseCatalogEntry {
            code,
            name,
            credit_hours,
            lecture_hours,
            practical_hours,
            semester,
            course_type: self.course_type.trim().to_string(),
            prerequisites: split_codes(&self.prerequisites),
        })
    }
}

/// Split a comma-separated code list, trimming tokens and dropping empties
#[must_use]
pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn required(field: CourseField, raw: &str, errors: &mut Vec<FieldError>) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    value.to_string()
}

fn hours(field: CourseField, raw: &str, errors: &mut Vec<FieldError>) -> u32 {
    raw.trim().parse::<u32>().unwrap_or_else(|_| {
        errors.push(FieldError {
            field,
            reason: format!("expected a non-negative whole number, got '{}'", raw.trim()),
        });
        0
    })
}
