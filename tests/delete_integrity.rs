use chrono::NaiveDate;
use gradebook_core::{
    Assignment, CatalogService, Grade, MemoryRepository, Student,
};
use std::cell::RefCell;
use std::rc::Rc;

type MemoryService = CatalogService<
    MemoryRepository<Student>,
    MemoryRepository<Assignment>,
    MemoryRepository<Grade>,
>;

fn memory_service() -> MemoryService {
    CatalogService::new(
        Rc::new(RefCell::new(MemoryRepository::new())),
        Rc::new(RefCell::new(MemoryRepository::new())),
        Rc::new(RefCell::new(MemoryRepository::new())),
    )
}

fn graded_service() -> MemoryService {
    let service = memory_service();
    service
        .add_student(Student::new("1", "Ana", 931, "ana@gmail.com"))
        .unwrap();
    service
        .add_assignment(Assignment::new("1", "s", 5, 4))
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    service
        .add_grade(Grade::new("1", "1", "1", 5.0, date), "good job")
        .unwrap();
    service
}

#[test]
fn deleting_missing_ids_is_an_idempotent_noop() {
    let service = graded_service();

    assert_eq!(service.delete_student("404").unwrap(), None);
    assert_eq!(service.delete_assignment("404").unwrap(), None);
    assert_eq!(service.delete_grade("404").unwrap(), None);

    assert_eq!(service.get_all_students().len(), 1);
    assert_eq!(service.get_all_assignments().len(), 1);
    assert_eq!(service.get_all_grades().len(), 1);
}

// Known gap, preserved deliberately: removing a student or assignment does
// not cascade to grades that reference it, and nothing blocks the delete.
// The grade collection is left with dangling references until product
// intent says otherwise.
#[test]
fn deleting_student_orphans_its_grades_known_gap() {
    let service = graded_service();

    assert!(service.delete_student("1").unwrap().is_some());

    let grades = service.get_all_grades();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].student_id.as_deref(), Some("1"));
    assert!(service.get_all_students().is_empty());
}

#[test]
fn deleting_assignment_orphans_its_grades_known_gap() {
    let service = graded_service();

    assert!(service.delete_assignment("1").unwrap().is_some());

    let grades = service.get_all_grades();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].assignment_id.as_deref(), Some("1"));
}

#[test]
fn new_grades_against_deleted_student_are_rejected() {
    // The referential check runs against live state, so a dangling
    // reference cannot be re-created after the delete.
    let service = graded_service();
    service.delete_student("1").unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    assert!(service
        .add_grade(Grade::new("2", "1", "1", 7.0, date), "")
        .is_err());
}
