use paysheet::core::access::{RecordScope, scope_for};
use paysheet::errors::AppError;
use paysheet::models::role::{Caller, Role};

mod common;
use common::sample_record;

#[test]
fn admin_sees_everything() {
    let scope = scope_for(&Caller::new(Role::Admin, None, "boss")).expect("scope");
    assert_eq!(scope, RecordScope::All);
    assert!(scope.matches(&sample_record("E1", "ops")));
    assert!(scope.matches(&sample_record("E2", "finance")));
}

#[test]
fn supervisor_sees_own_group_only() {
    let caller = Caller::new(Role::Supervisor, Some("ops".into()), "S1");
    let scope = scope_for(&caller).expect("scope");
    assert!(scope.matches(&sample_record("E1", "ops")));
    assert!(!scope.matches(&sample_record("E2", "finance")));
}

#[test]
fn supervisor_without_group_is_an_error_not_an_empty_result() {
    for group in [None, Some("   ".to_string())] {
        let caller = Caller::new(Role::Supervisor, group, "S1");
        match scope_for(&caller) {
            Err(AppError::MissingGroup(who)) => assert_eq!(who, "S1"),
            other => panic!("expected MissingGroup, got {other:?}"),
        }
    }
}

#[test]
fn employee_sees_own_records_only() {
    let scope = scope_for(&Caller::new(Role::Employee, None, "E1")).expect("scope");
    assert!(scope.matches(&sample_record("E1", "ops")));
    assert!(!scope.matches(&sample_record("E2", "ops")));
}

#[test]
fn employee_identity_is_trimmed() {
    let scope = scope_for(&Caller::new(Role::Employee, None, " E1 ")).expect("scope");
    assert_eq!(scope, RecordScope::Employee("E1".into()));
    assert!(scope.matches(&sample_record("E1", "ops")));
}

#[test]
fn predicate_filters_collections() {
    let records = vec![
        sample_record("E1", "ops"),
        sample_record("E2", "finance"),
        sample_record("E3", "ops"),
    ];
    let pred = RecordScope::Group("ops".into()).into_predicate();
    let visible: Vec<_> = records.iter().filter(|r| pred(r)).collect();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|r| r.group() == Some("ops")));
}
