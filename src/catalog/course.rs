#![allow(dead_code)] // Complete API module, not all methods currently used
//! Course records and seat accounting
//!
//! A [`Course`] owns its enrolled-student roster. The roster is private:
//! the only mutations are [`Course::register`], which is gated on capacity,
//! and [`Course::remove`]. Callers that need the duplicate-registration
//! guard must go through the enrollment ledger, which owns that check.

use std::fmt;

/// A single catalog entry with its enrollment roster
#[derive(Debug, Clone)]
pub struct Course {
    code: String,
    title: String,
    description: String,
    capacity: usize,
    schedule: String,
    enrolled: Vec<String>,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: usize,
        schedule: impl Into<String>,
    ) -> Self {
        Course {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            capacity,
            schedule: schedule.into(),
            enrolled: Vec::new(),
        }
    }

    /// The course code in its canonical (declared) casing
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enrolled student IDs in registration order
    pub fn enrolled(&self) -> &[String] {
        &self.enrolled
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Remaining seats: capacity minus current enrollment, never negative
    pub fn vacancy(&self) -> usize {
        self.capacity.saturating_sub(self.enrolled.len())
    }

    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.capacity
    }

    /// Add a student to the roster if a seat is free.
    ///
    /// Returns `false` and makes no change when the course is at capacity.
    /// Does not check whether the student is already enrolled; that guard
    /// lives in [`crate::enrollment::ledger`].
    pub fn register(&mut self, student_id: &str) -> bool {
        if self.enrolled.len() < self.capacity {
            self.enrolled.push(student_id.to_string());
            true
        } else {
            false
        }
    }

    /// Remove the first matching student ID, returning whether one was found
    pub fn remove(&mut self, student_id: &str) -> bool {
        if let Some(pos) = self.enrolled.iter().position(|id| id == student_id) {
            self.enrolled.remove(pos);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}/{})",
            self.code,
            self.title,
            self.enrolled.len(),
            self.capacity
        )
    }
}
