// Integration tests over the seeded catalog

use registrar::catalog::Catalog;
use registrar::enrollment::ledger;
use registrar::enrollment::{RegistrationError, Student};
use registrar::session::{ActivityLog, LogKind};

#[test]
fn test_seeded_session_flow() {
    let mut catalog = Catalog::seed();
    let mut student = Student::new("A12345", "Jordan Lee");

    // Register for three courses, mixed casing
    ledger::register(&mut catalog, &mut student, "cs101").expect("registration failed");
    ledger::register(&mut catalog, &mut student, "ENG201").expect("registration failed");
    ledger::register(&mut catalog, &mut student, "hist101").expect("registration failed");

    let cs101 = catalog.find_by_code("CS101").expect("course exists");
    assert_eq!(cs101.vacancy(), 19);

    let info = ledger::registration_info(&catalog, &student);
    let titles: Vec<&str> = info.courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Introduction to Computer Science",
            "English Literature",
            "World History"
        ]
    );

    // Drop one and verify both sides
    ledger::drop(&mut catalog, &mut student, "ENG201").expect("drop failed");

    let eng201 = catalog.find_by_code("ENG201").expect("course exists");
    assert_eq!(eng201.vacancy(), 20);
    assert!(!student.is_registered("ENG201"));
    assert_eq!(student.registered_courses().len(), 2);
}

#[test]
fn test_fill_course_to_capacity() {
    let mut catalog = Catalog::seed();

    // Twenty distinct students take every seat in CS101
    for i in 0..20 {
        let mut student = Student::new(format!("S{:02}", i), format!("Student {}", i));
        ledger::register(&mut catalog, &mut student, "CS101").expect("registration failed");
    }

    let course = catalog.find_by_code("CS101").expect("course exists");
    assert_eq!(course.vacancy(), 0);
    assert!(course.is_full());
    assert_eq!(course.enrolled_count(), course.capacity());

    // The twenty-first is turned away with no partial mutation
    let mut late = Student::new("S99", "Late Arrival");
    let result = ledger::register(&mut catalog, &mut late, "CS101");
    assert!(matches!(result, Err(RegistrationError::CourseFull { .. })));

    let course = catalog.find_by_code("CS101").expect("course exists");
    assert_eq!(course.vacancy(), 0);
    assert_eq!(course.enrolled_count(), 20);
    assert!(late.registered_courses().is_empty());

    // Other courses are untouched
    let other = catalog.find_by_code("PHYS101").expect("course exists");
    assert_eq!(other.vacancy(), 20);
}

#[test]
fn test_seat_freed_by_drop_is_reusable() {
    let mut catalog = Catalog::seed();
    let mut first = Student::new("S1", "Avery");
    let mut second = Student::new("S2", "Blake");

    ledger::register(&mut catalog, &mut first, "MATH301").expect("registration failed");
    ledger::drop(&mut catalog, &mut first, "MATH301").expect("drop failed");

    // The freed seat is available to the next student
    ledger::register(&mut catalog, &mut second, "MATH301").expect("registration failed");

    let course = catalog.find_by_code("MATH301").expect("course exists");
    assert_eq!(course.enrolled(), vec!["S2".to_string()]);
    assert_eq!(course.vacancy(), 19);
}

#[test]
fn test_activity_log_records_session() {
    let mut log = ActivityLog::new();
    assert!(log.is_empty());

    log.info("Welcome, Jordan Lee (A12345)");
    log.success("Successfully registered for Calculus");
    log.error("Course is full. Please select another course.");

    assert_eq!(log.len(), 3);
    assert_eq!(log.lines()[0].kind, LogKind::Info);
    assert_eq!(log.lines()[1].kind, LogKind::Success);
    assert_eq!(log.lines()[2].kind, LogKind::Error);
    assert_eq!(
        log.lines()[1].text,
        "Successfully registered for Calculus"
    );
}

#[test]
fn test_error_messages_name_the_course() {
    let mut catalog = Catalog::seed();
    let mut student = Student::new("S1", "Avery");

    let err = ledger::register(&mut catalog, &mut student, "BIO400").unwrap_err();
    assert_eq!(err.to_string(), "No course with code 'BIO400'");

    let err = ledger::drop(&mut catalog, &mut student, "chem201").unwrap_err();
    assert_eq!(err.to_string(), "Not registered for CHEM201");
}
