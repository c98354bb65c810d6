//! Enrollment bookkeeping between the session's student and the catalog
//!
//! This module provides the registration core:
//! - [`student`]: the session's student with their registered-course list
//! - [`ledger`]: the registration workflow; every register/drop mutation
//!   flows through it so the course and student sides never drift apart
//! - [`errors`]: recoverable registration error types
//!
//! # Consistency
//!
//! A course code appears in the student's registered list if and only if
//! the student's ID appears in that course's roster. Course and student
//! collections are private to their entities, and the ledger is the only
//! place that mutates both, so the invariant cannot be broken from the UI.

pub mod errors;
pub mod ledger;
pub mod student;

pub use errors::RegistrationError;
pub use student::Student;
