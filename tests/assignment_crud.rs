use gradebook_core::{
    Assignment, CatalogError, CatalogService, MemoryRepository, ValidationError,
};
use std::cell::RefCell;
use std::rc::Rc;

type MemoryService = CatalogService<
    MemoryRepository<gradebook_core::Student>,
    MemoryRepository<Assignment>,
    MemoryRepository<gradebook_core::Grade>,
>;

fn memory_service() -> MemoryService {
    CatalogService::new(
        Rc::new(RefCell::new(MemoryRepository::new())),
        Rc::new(RefCell::new(MemoryRepository::new())),
        Rc::new(RefCell::new(MemoryRepository::new())),
    )
}

#[test]
fn add_assignment_then_list_contains_it() {
    let service = memory_service();
    let assignment = Assignment::new("1", "tema1", 5, 3);

    assert!(service.add_assignment(assignment.clone()).unwrap().is_inserted());
    assert_eq!(service.get_all_assignments(), vec![assignment]);
}

#[test]
fn empty_id_is_rejected() {
    let service = memory_service();
    let assignment = Assignment::new("", "tema1", 5, 3);
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Validation(ValidationError::EmptyField {
            entity: "assignment",
            field: "id",
        }))
    ));
    assert!(service.get_all_assignments().is_empty());
}

#[test]
fn empty_description_is_rejected() {
    let service = memory_service();
    let assignment = Assignment::new("1", "", 5, 3);
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Validation(ValidationError::EmptyField {
            entity: "assignment",
            field: "description",
        }))
    ));
}

#[test]
fn oversized_deadline_is_rejected() {
    let service = memory_service();
    let assignment = Assignment::new("1", "s", 99999, 3);
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Validation(ValidationError::WeekOutOfRange {
            field: "deadline_week",
            week: 99999,
        }))
    ));
}

#[test]
fn start_week_zero_is_rejected() {
    let service = memory_service();
    let assignment = Assignment::new("1", "s", 5, 0);
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Validation(ValidationError::WeekOutOfRange {
            field: "start_week",
            week: 0,
        }))
    ));
}

#[test]
fn start_after_deadline_is_rejected() {
    let service = memory_service();
    let assignment = Assignment::new("1", "s", 5, 6);
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Validation(ValidationError::StartAfterDeadline {
            start_week: 6,
            deadline_week: 5,
        }))
    ));
}

#[test]
fn week_window_boundaries_are_inclusive() {
    let service = memory_service();
    assert!(service
        .add_assignment(Assignment::new("1", "full semester", 14, 1))
        .unwrap()
        .is_inserted());
    assert!(service
        .add_assignment(Assignment::new("2", "single week", 7, 7))
        .unwrap()
        .is_inserted());
}

#[test]
fn absent_id_is_a_contract_violation() {
    let service = memory_service();
    let assignment = Assignment {
        id: None,
        ..Assignment::new("1", "s", 5, 3)
    };
    assert!(matches!(
        service.add_assignment(assignment),
        Err(CatalogError::Contract {
            entity: "assignment"
        })
    ));
}

#[test]
fn delete_assignment_returns_removed_entity() {
    let service = memory_service();
    let assignment = Assignment::new("1", "tema1", 5, 3);
    service.add_assignment(assignment.clone()).unwrap();

    assert_eq!(service.delete_assignment("1").unwrap(), Some(assignment));
    assert!(service.get_all_assignments().is_empty());
}
