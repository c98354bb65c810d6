#![allow(dead_code)] // Complete API module, not all methods currently used
//! Course catalog
//!
//! This module provides the fixed set of offered courses for a session:
//! - [`Course`]: a catalog entry with its enrollment roster
//! - [`Catalog`]: insertion-ordered course collection with code lookup
//!
//! # Lookup
//!
//! Course codes are matched case-insensitively. The catalog keeps an
//! `FxHashMap` index keyed by the uppercased code alongside the ordered
//! `Vec`, so lookup is O(1) while listing stays in seed order. When two
//! seeded courses share a code, the first occurrence wins.

pub mod course;

pub use course::Course;

use rustc_hash::FxHashMap;

/// Normalized form of a course code, used as the index key
fn normalize(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// The fixed set of offered courses, ordered as seeded
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered course list
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = FxHashMap::default();
        for (pos, course) in courses.iter().enumerate() {
            index.entry(normalize(course.code())).or_insert(pos);
        }
        Catalog { courses, index }
    }

    /// The startup catalog: six courses, twenty seats each
    pub fn seed() -> Self {
        Catalog::new(vec![
            Course::new(
                "CS101",
                "Introduction to Computer Science",
                "An introductory course to computer science concepts.",
                20,
                "MWF 10:00 AM - 11:00 AM",
            ),
            Course::new(
                "ENG201",
                "English Literature",
                "A study of classic works of English literature.",
                20,
                "TR 1:00 PM - 2:30 PM",
            ),
            Course::new(
                "MATH301",
                "Calculus",
                "An advanced course in calculus.",
                20,
                "MWF 2:00 PM - 3:30 PM",
            ),
            Course::new(
                "PHYS101",
                "Physics",
                "Basic principles of physics.",
                20,
                "TR 10:00 AM - 11:30 AM",
            ),
            Course::new(
                "CHEM201",
                "Chemistry",
                "Introduction to chemical concepts.",
                20,
                "MWF 9:00 AM - 10:30 AM",
            ),
            Course::new(
                "HIST101",
                "World History",
                "A survey of world history from ancient times to the present.",
                20,
                "TR 9:00 AM - 10:30 AM",
            ),
        ])
    }

    /// Case-insensitive lookup. `None` means no such course, which is a
    /// normal outcome the caller handles, not an error.
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.index
            .get(&normalize(code))
            .map(|&pos| &self.courses[pos])
    }

    /// Case-insensitive lookup returning a mutable course
    pub fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Course> {
        match self.index.get(&normalize(code)) {
            Some(&pos) => self.courses.get_mut(pos),
            None => None,
        }
    }

    /// All courses in insertion order (for display)
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::seed();

        assert!(catalog.find_by_code("CS101").is_some());
        assert!(catalog.find_by_code("cs101").is_some());
        assert!(catalog.find_by_code("Cs101").is_some());
        assert_eq!(catalog.find_by_code("cs101").unwrap().code(), "CS101");
    }

    #[test]
    fn test_unknown_code_is_none() {
        let catalog = Catalog::seed();

        assert!(catalog.find_by_code("BIO400").is_none());
        assert!(catalog.find_by_code("").is_none());
    }

    #[test]
    fn test_listing_preserves_seed_order() {
        let catalog = Catalog::seed();
        let codes: Vec<&str> = catalog.courses().iter().map(|c| c.code()).collect();

        assert_eq!(
            codes,
            vec!["CS101", "ENG201", "MATH301", "PHYS101", "CHEM201", "HIST101"]
        );
    }

    #[test]
    fn test_duplicate_code_first_wins() {
        let catalog = Catalog::new(vec![
            Course::new("CS101", "First", "", 10, "MWF"),
            Course::new("cs101", "Second", "", 10, "TR"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_code("CS101").unwrap().title(), "First");
    }

    #[test]
    fn test_seed_capacity_and_vacancy() {
        let catalog = Catalog::seed();

        for course in catalog.courses() {
            assert_eq!(course.capacity(), 20);
            assert_eq!(course.enrolled_count(), 0);
            assert_eq!(course.vacancy(), 20);
            assert!(!course.is_full());
        }
    }

    #[test]
    fn test_roster_line_format() {
        let catalog = Catalog::seed();
        let course = catalog.find_by_code("MATH301").unwrap();

        assert_eq!(course.to_string(), "MATH301 - Calculus (0/20)");
    }
}
