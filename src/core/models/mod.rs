//! Data models for `CourseAdvisor`

pub mod catalog;
pub mod course;
pub mod form;
pub mod outcome;
pub mod student;

pub use catalog::{CatalogStore, CourseNotFound};
pub use course::CourseCatalogEntry;
pub use form::{split_codes, CourseField, CourseForm, FieldError};
pub use outcome::{DeleteOutcome, DropOutcome, EnrollOutcome, Ineligibility, PrerequisiteOutcome};
pub use student::StudentRecord;
