//! Course catalog store

use super::outcome::{DeleteOutcome, PrerequisiteOutcome};
use super::CourseCatalogEntry;
use crate::debug;
use std::collections::HashMap;
use thiserror::Error;

/// A presented course code did not resolve in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Course not found: {0}")]
pub struct CourseNotFound(pub String);

/// Owns every known course, keyed by course code
///
/// Entries are kept in insertion order; replacing a code keeps its original
/// position and deleting it removes it from the order. Advising relies on this
/// order when it groups failed courses first.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// Entries in catalog order
    entries: Vec<CourseCatalogEntry>,

    /// Course code -> position in `entries`
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course, replacing any existing entry with the same code
    ///
    /// Prerequisite codes are not checked against the catalog.
    pub fn add_course(&mut self, entry: CourseCatalogEntry) {
        if let Some(&pos) = self.index.get(&entry.code) {
            debug!("Replacing catalog entry {}", entry.code);
            self.entries[pos] = entry;
        } else {
            self.index.insert(entry.code.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Look up a course by exact code
    #[must_use]
    pub fn get_course_by_code(&self, code: &str) -> Option<&CourseCatalogEntry> {
        self.index.get(code).map(|&pos| &self.entries[pos])
    }

    /// Look up a course, turning a miss into [`CourseNotFound`]
    ///
    /// # Errors
    /// Returns `CourseNotFound` carrying the code when no entry matches
    pub fn resolve(&self, code: &str) -> Result<&CourseCatalogEntry, CourseNotFound> {
        self.get_course_by_code(code)
            .ok_or_else(|| CourseNotFound(code.to_string()))
    }

    /// All known course codes, in catalog order
    #[must_use]
    pub fn list_course_codes(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.code.clone()).collect()
    }

    /// Iterate over all entries in catalog order
    pub fn courses(&self) -> impl Iterator<Item = &CourseCatalogEntry> {
        self.entries.iter()
    }

    /// Remove a course by code
    ///
    /// References to the code in other courses' prerequisites are left alone.
    pub fn delete_course(&mut self, code: &str) -> DeleteOutcome {
        let Some(pos) = self.index.remove(code) else {
            return DeleteOutcome::NotFound;
        };
        self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        debug!("Deleted catalog entry {code}");
        DeleteOutcome::Deleted
    }

    /// Append a prerequisite to an existing course
    ///
    /// Both codes must already be in the catalog.
    pub fn add_prerequisite(
        &mut self,
        course_code: &str,
        prereq_code: &str,
    ) -> PrerequisiteOutcome {
        if !self.index.contains_key(prereq_code) {
            return PrerequisiteOutcome::CourseNotFound;
        }
        let Some(&pos) = self.index.get(course_code) else {
            return PrerequisiteOutcome::CourseNotFound;
        };
        if self.entries[pos].add_prerequisite(prereq_code.to_string()) {
            debug!("Added prerequisite {prereq_code} to {course_code}");
            PrerequisiteOutcome::Added
        } else {
            PrerequisiteOutcome::AlreadyPresent
        }
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str) -> CourseCatalogEntry {
        CourseCatalogEntry::new(code.to_string(), name.to_string(), 3, 1)
    }

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = CatalogStore::new();
        catalog.add_course(course("CS101", "Programming I"));

        assert_eq!(
            catalog.get_course_by_code("CS101").map(|c| c.name.as_str()),
            Some("Programming I")
        );
        assert!(catalog.get_course_by_code("cs101").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_readd_overwrites_in_place() {
        let mut catalog = CatalogStore::new();
        catalog.add_course(course("CS101", "Old"));
        catalog.add_course(course("CS102", "Next"));
        catalog.add_course(course("CS101", "New"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_course_codes(), vec!["CS101", "CS102"]);
        assert_eq!(catalog.get_course_by_code("CS101").unwrap().name, "New");
    }

    #[test]
    fn test_delete_keeps_index_consistent() {
        let mut catalog = CatalogStore::new();
        catalog.add_course(course("A1", "a"));
        catalog.add_course(course("B1", "b"));
        catalog.add_course(course("C1", "c"));

        assert_eq!(catalog.delete_course("A1"), DeleteOutcome::Deleted);
        assert_eq!(catalog.delete_course("A1"), DeleteOutcome::NotFound);
        assert_eq!(catalog.list_course_codes(), vec!["B1", "C1"]);
        assert_eq!(catalog.get_course_by_code("C1").unwrap().name, "c");
    }

    #[test]
    fn test_delete_leaves_dangling_prerequisites() {
        let mut catalog = CatalogStore::new();
        catalog.add_course(course("CS101", "Programming I"));
        catalog.add_course(course("CS201", "Data Structures").with_prerequisites(["CS101"]));

        catalog.delete_course("CS101");

        assert_eq!(
            catalog.get_course_by_code("CS201").unwrap().prerequisites,
            vec!["CS101"]
        );
    }

    #[test]
    fn test_resolve_reports_code() {
        let catalog = CatalogStore::new();
        assert_eq!(
            catalog.resolve("XX999").unwrap_err(),
            CourseNotFound("XX999".to_string())
        );
    }

    #[test]
    fn test_add_prerequisite_requires_both_courses() {
        let mut catalog = CatalogStore::new();
        catalog.add_course(course("CS101", "Programming I"));
        catalog.add_course(course("CS201", "Data Structures"));

        assert_eq!(
            catalog.add_prerequisite("CS201", "MATH101"),
            PrerequisiteOutcome::CourseNotFound
        );
        assert_eq!(
            catalog.add_prerequisite("CS999", "CS101"),
            PrerequisiteOutcome::CourseNotFound
        );
        assert_eq!(
            catalog.add_prerequisite("CS201", "CS101"),
            PrerequisiteOutcome::Added
        );
        assert_eq!(
            catalog.add_prerequisite("CS201", "CS101"),
            PrerequisiteOutcome::AlreadyPresent
        );
    }
}
