//! Registration error types
//!
//! This module defines [`RegistrationError`], which represents the outcomes
//! of a register or drop request that leave the session unchanged.
//!
//! All registration errors are recoverable - the caller reports the
//! condition and the session continues.

use std::fmt;

/// Recoverable failures of the registration workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// No course in the catalog matches the given code
    UnknownCourse { code: String },

    /// The course has no remaining seats; no mutation was performed
    CourseFull { code: String, capacity: usize },

    /// The student is already registered for this course
    AlreadyRegistered { code: String },

    /// Drop requested for a course the student is not registered in
    NotRegistered { code: String },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::UnknownCourse { code } => {
                write!(f, "No course with code '{}'", code)
            }
            RegistrationError::CourseFull { code, capacity } => {
                write!(f, "Course {} is full ({} seats)", code, capacity)
            }
            RegistrationError::AlreadyRegistered { code } => {
                write!(f, "Already registered for {}", code)
            }
            RegistrationError::NotRegistered { code } => {
                write!(f, "Not registered for {}", code)
            }
        }
    }
}

impl std::error::Error for RegistrationError {}
