// Workflow tests for the enrollment ledger

use registrar::catalog::{Catalog, Course};
use registrar::enrollment::ledger;
use registrar::enrollment::{RegistrationError, Student};

/// Small catalog with tight capacities so full-course paths are reachable
fn small_catalog() -> Catalog {
    Catalog::new(vec![
        Course::new("CS101", "Intro to CS", "Basics.", 2, "MWF 10:00"),
        Course::new("ART110", "Drawing", "Figure drawing.", 1, "TR 14:00"),
    ])
}

#[test]
fn test_register_updates_both_sides() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    let result = ledger::register(&mut catalog, &mut student, "CS101");
    assert_eq!(result, Ok("Intro to CS".to_string()));

    let course = catalog.find_by_code("CS101").expect("course exists");
    assert!(student.is_registered("CS101"));
    assert!(course.enrolled().contains(&"S1".to_string()));
    assert_eq!(course.vacancy(), 1);
}

#[test]
fn test_register_unknown_code_changes_nothing() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    let result = ledger::register(&mut catalog, &mut student, "BIO400");
    assert_eq!(
        result,
        Err(RegistrationError::UnknownCourse {
            code: "BIO400".to_string()
        })
    );

    assert!(student.registered_courses().is_empty());
    for course in catalog.courses() {
        assert_eq!(course.enrolled_count(), 0);
    }
}

#[test]
fn test_register_is_case_insensitive_and_stores_canonical_code() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "cs101").expect("registration failed");

    // The stored code uses the course's declared casing, not the user's
    assert_eq!(student.registered_courses(), vec!["CS101".to_string()]);
    assert!(student.is_registered("Cs101"));
}

#[test]
fn test_full_course_rejected_without_partial_mutation() {
    let mut catalog = small_catalog();
    let mut first = Student::new("S1", "Avery");
    let mut second = Student::new("S2", "Blake");

    ledger::register(&mut catalog, &mut first, "ART110").expect("first registration failed");

    let result = ledger::register(&mut catalog, &mut second, "ART110");
    assert_eq!(
        result,
        Err(RegistrationError::CourseFull {
            code: "ART110".to_string(),
            capacity: 1
        })
    );

    let course = catalog.find_by_code("ART110").expect("course exists");
    assert_eq!(course.vacancy(), 0);
    assert_eq!(course.enrolled(), vec!["S1".to_string()]);
    assert!(second.registered_courses().is_empty());
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    let result = ledger::register(&mut catalog, &mut student, "cs101");

    assert_eq!(
        result,
        Err(RegistrationError::AlreadyRegistered {
            code: "CS101".to_string()
        })
    );

    // Neither side double-counted
    let course = catalog.find_by_code("CS101").expect("course exists");
    assert_eq!(course.enrolled_count(), 1);
    assert_eq!(course.vacancy(), 1);
    assert_eq!(student.registered_courses().len(), 1);
}

#[test]
fn test_entity_level_register_has_no_duplicate_guard() {
    // The duplicate guard lives in the ledger, not in the course entity:
    // registering the same ID twice directly inflates the roster, which is
    // why front ends must go through the ledger.
    let mut course = Course::new("CS101", "Intro to CS", "Basics.", 2, "MWF 10:00");

    assert!(course.register("S1"));
    assert!(course.register("S1"));
    assert_eq!(course.enrolled_count(), 2);
    assert_eq!(course.vacancy(), 0);
}

#[test]
fn test_drop_clears_both_sides() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    let result = ledger::drop(&mut catalog, &mut student, "CS101");
    assert_eq!(result, Ok("Intro to CS".to_string()));

    let course = catalog.find_by_code("CS101").expect("course exists");
    assert!(!student.is_registered("CS101"));
    assert!(course.enrolled().is_empty());
    assert_eq!(course.vacancy(), 2);
}

#[test]
fn test_drop_is_case_insensitive() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    ledger::drop(&mut catalog, &mut student, "cs101").expect("drop failed");

    assert!(student.registered_courses().is_empty());
}

#[test]
fn test_drop_not_registered_changes_nothing() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    let result = ledger::drop(&mut catalog, &mut student, "CS101");
    assert_eq!(
        result,
        Err(RegistrationError::NotRegistered {
            code: "CS101".to_string()
        })
    );

    let course = catalog.find_by_code("CS101").expect("course exists");
    assert_eq!(course.enrolled_count(), 0);
}

#[test]
fn test_drop_unknown_code() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    let result = ledger::drop(&mut catalog, &mut student, "BIO400");
    assert_eq!(
        result,
        Err(RegistrationError::UnknownCourse {
            code: "BIO400".to_string()
        })
    );
}

#[test]
fn test_double_drop_fails() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    ledger::drop(&mut catalog, &mut student, "CS101").expect("drop failed");

    let result = ledger::drop(&mut catalog, &mut student, "CS101");
    assert!(matches!(
        result,
        Err(RegistrationError::NotRegistered { .. })
    ));
}

#[test]
fn test_registration_info_resolves_titles_in_order() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "art110").expect("registration failed");
    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");

    let info = ledger::registration_info(&catalog, &student);
    assert_eq!(info.name, "Avery");
    assert_eq!(info.student_id, "S1");

    let titles: Vec<&str> = info.courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Drawing", "Intro to CS"]);
}

#[test]
fn test_registration_info_skips_stale_codes() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    // A code with no catalog entry behind it is skipped, not reported
    student.register_course("GHOST999");

    let info = ledger::registration_info(&catalog, &student);
    assert_eq!(info.courses.len(), 1);
    assert_eq!(info.courses[0].code, "CS101");
}

#[test]
fn test_vacancy_accounting_through_sequence() {
    let mut catalog = small_catalog();
    let mut student = Student::new("S1", "Avery");

    let steps: [(&str, &str); 5] = [
        ("register", "CS101"),
        ("register", "ART110"),
        ("drop", "CS101"),
        ("register", "CS101"),
        ("drop", "ART110"),
    ];

    for (action, code) in steps {
        let _ = match action {
            "register" => ledger::register(&mut catalog, &mut student, code),
            _ => ledger::drop(&mut catalog, &mut student, code),
        };

        // Seat accounting holds after every step
        for course in catalog.courses() {
            assert!(course.enrolled_count() <= course.capacity());
            assert_eq!(
                course.vacancy(),
                course.capacity() - course.enrolled_count()
            );
        }
    }

    assert!(student.is_registered("CS101"));
    assert!(!student.is_registered("ART110"));
}
