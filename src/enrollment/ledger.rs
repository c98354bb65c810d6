//! Registration workflow
//!
//! Stateless operations over the current catalog and student. Each one
//! either updates both sides of the enrollment relationship or neither:
//! the course roster is secured first, and only then is the code appended
//! to the student's list, so a capacity refusal leaves no partial state.
//!
//! Duplicate registrations are rejected here rather than in
//! [`Course::register`], which keeps the entity's contract capacity-only:
//! front ends must route every mutation through this module.
//!
//! [`Course::register`]: crate::catalog::Course::register

use crate::catalog::Catalog;
use crate::enrollment::errors::RegistrationError;
use crate::enrollment::student::Student;

/// A registered course resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCourse {
    pub code: String,
    pub title: String,
}

/// Snapshot of the student's registration status for display
#[derive(Debug, Clone)]
pub struct RegistrationInfo {
    pub name: String,
    pub student_id: String,
    pub courses: Vec<RegisteredCourse>,
}

/// Register the student for the course with the given code.
///
/// Returns the course title on success, for the caller's report.
pub fn register(
    catalog: &mut Catalog,
    student: &mut Student,
    code: &str,
) -> Result<String, RegistrationError> {
    let course = catalog
        .find_by_code_mut(code)
        .ok_or_else(|| RegistrationError::UnknownCourse {
            code: code.to_string(),
        })?;

    // Store the canonical casing so display and drop never depend on how
    // the user typed the code
    let canonical = course.code().to_string();

    if student.is_registered(&canonical) {
        return Err(RegistrationError::AlreadyRegistered { code: canonical });
    }

    if !course.register(student.id()) {
        return Err(RegistrationError::CourseFull {
            code: canonical,
            capacity: course.capacity(),
        });
    }
    student.register_course(&canonical);

    Ok(course.title().to_string())
}

/// Drop the student from the course with the given code.
///
/// Returns the course title on success, for the caller's report.
pub fn drop(
    catalog: &mut Catalog,
    student: &mut Student,
    code: &str,
) -> Result<String, RegistrationError> {
    let course = catalog
        .find_by_code_mut(code)
        .ok_or_else(|| RegistrationError::UnknownCourse {
            code: code.to_string(),
        })?;

    let canonical = course.code().to_string();

    if !student.is_registered(&canonical) {
        return Err(RegistrationError::NotRegistered { code: canonical });
    }

    course.remove(student.id());
    student.drop_course(&canonical);

    Ok(course.title().to_string())
}

/// Resolve the student's registrations for display.
///
/// Codes that no longer resolve against the catalog are skipped silently.
pub fn registration_info(catalog: &Catalog, student: &Student) -> RegistrationInfo {
    let courses = student
        .registered_courses()
        .iter()
        .filter_map(|code| {
            catalog.find_by_code(code).map(|course| RegisteredCourse {
                code: course.code().to_string(),
                title: course.title().to_string(),
            })
        })
        .collect();

    RegistrationInfo {
        name: student.name().to_string(),
        student_id: student.id().to_string(),
        courses,
    }
}
