//! Course catalog entry model

use serde::{Deserialize, Serialize};

/// Represents one course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalogEntry {
    /// Course code, the catalog key (e.g., "CS201")
    pub code: String,

    /// Course name (e.g., "Data Structures")
    pub name: String,

    /// Credit hours counted against the student's load cap
    pub credit_hours: u32,

    /// Weekly lecture hours
    pub lecture_hours: u32,

    /// Weekly practical/lab hours
    pub practical_hours: u32,

    /// Earliest semester the course may be taken (0 = unrestricted)
    pub semester: u32,

    /// Free-form classification (e.g., "Core", "Elective")
    pub course_type: String,

    /// Prerequisite course codes, in declared order
    pub prerequisites: Vec<String>,
}

impl CourseCatalogEntry {
    /// Create a new entry with no prerequisites
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course name
    /// * `credit_hours` - Credit hours
    /// * `semester` - Earliest semester the course is offered in
    #[must_use]
    pub const fn new(code: String, name: String, credit_hours: u32, semester: u32) -> Self {
        Self {
            code,
            name,
            credit_hours,
            lecture_hours: 0,
            practical_hours: 0,
            semester,
            course_type: String::new(),
            prerequisites: Vec::new(),
        }
    }

    /// Create a university-common course entry
    ///
    /// These come from the `uc_courses` sheet, which only carries code, name and
    /// credit hours: no contact hours, no semester restriction, type `"Unknown"`.
    #[must_use]
    pub fn university_common(code: String, name: String, credit_hours: u32) -> Self {
        Self {
            course_type: "Unknown".to_string(),
            ..Self::new(code, name, credit_hours, 0)
        }
    }

    /// Set lecture and practical hours
    #[must_use]
    pub fn with_hours(mut self, lecture_hours: u32, practical_hours: u32) -> Self {
        self.lecture_hours = lecture_hours;
        self.practical_hours = practical_hours;
        self
    }

    /// Set the course type
    #[must_use]
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    /// Replace the prerequisite list
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Add a prerequisite by course code
    ///
    /// # Returns
    /// `false` if the code was already listed
    pub fn add_prerequisite(&mut self, prereq_code: String) -> bool {
        if self.prerequisites.contains(&prereq_code) {
            return false;
        }
        self.prerequisites.push(prereq_code);
        true
    }
}
