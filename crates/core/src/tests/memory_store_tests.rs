// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_roster_domain::{
    AreaId, Assignment, AssignmentId, AssignmentStatus, NewAssignment, NewTradeRequest, Person,
    PersonId, ScheduleId, TradeRequest, TradeStatus,
};

use crate::{
    AreaProvider, AssignmentFilter, AssignmentStore, InMemoryStore, RosterProvider,
    ScheduleProvider, Store, StoreError, TradeFilter, TradeStore,
};

use super::helpers::{area, create_test_store, inactive_person, insert_assignment, person, schedule};

#[test]
fn test_assignment_ids_are_sequential() {
    let mut store: InMemoryStore = create_test_store(&[person(1, 1)], &[area(1, 1, &[1])], 2);

    let first: Assignment = insert_assignment(&mut store, 1, 1, 1, AssignmentStatus::Assigned);
    let second: Assignment = insert_assignment(&mut store, 2, 1, 1, AssignmentStatus::Assigned);

    assert_eq!(first.id, AssignmentId::new(1));
    assert_eq!(second.id, AssignmentId::new(2));
}

#[test]
fn test_new_assignments_start_assigned() {
    let mut store: InMemoryStore = create_test_store(&[person(1, 1)], &[area(1, 1, &[1])], 1);

    let created: Assignment = store
        .create_assignment(NewAssignment {
            schedule_id: ScheduleId::new(1),
            person_id: PersonId::new(1),
            area_id: AreaId::new(1),
        })
        .unwrap();

    assert_eq!(created.status, AssignmentStatus::Assigned);
}

#[test]
fn test_list_active_persons_skips_inactive() {
    let mut store: InMemoryStore =
        create_test_store(&[person(2, 1), inactive_person(1, 1), person(3, 2)], &[], 0);

    let active: Vec<PersonId> = store
        .list_active_persons()
        .unwrap()
        .iter()
        .map(|p: &Person| p.id)
        .collect();

    assert_eq!(active, vec![PersonId::new(2), PersonId::new(3)]);
}

#[test]
fn test_providers_list_in_identity_order() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.insert_area(area(3, 1, &[1]));
    store.insert_area(area(1, 1, &[1]));
    store.insert_schedule(schedule(2));
    store.insert_schedule(schedule(1));

    let areas: Vec<AreaId> = store.list_areas().unwrap().iter().map(|a| a.id).collect();
    let schedules: Vec<ScheduleId> = store
        .list_schedules()
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(areas, vec![AreaId::new(1), AreaId::new(3)]);
    assert_eq!(schedules, vec![ScheduleId::new(1), ScheduleId::new(2)]);
    assert!(store.get_area(AreaId::new(2)).unwrap().is_none());
    assert!(store.get_schedule(ScheduleId::new(2)).unwrap().is_some());
}

#[test]
fn test_assignment_filter_combines_fields() {
    let mut store: InMemoryStore = create_test_store(
        &[person(1, 1), person(2, 1)],
        &[area(1, 2, &[1]), area(2, 2, &[1])],
        2,
    );
    insert_assignment(&mut store, 1, 1, 1, AssignmentStatus::Assigned);
    insert_assignment(&mut store, 1, 2, 2, AssignmentStatus::Canceled);
    insert_assignment(&mut store, 2, 1, 2, AssignmentStatus::Done);

    let on_first: Vec<Assignment> = store
        .list_assignments(&AssignmentFilter::for_schedule(ScheduleId::new(1)))
        .unwrap();
    let canceled_in_area_two: Vec<Assignment> = store
        .list_assignments(&AssignmentFilter {
            area_id: Some(AreaId::new(2)),
            status: Some(AssignmentStatus::Canceled),
            ..AssignmentFilter::default()
        })
        .unwrap();
    let active_on_first: Vec<Assignment> =
        store.list_active_for_schedule(ScheduleId::new(1)).unwrap();

    assert_eq!(on_first.len(), 2);
    assert_eq!(canceled_in_area_two.len(), 1);
    assert_eq!(canceled_in_area_two[0].person_id, PersonId::new(2));
    assert_eq!(active_on_first.len(), 1);
    assert_eq!(active_on_first[0].person_id, PersonId::new(1));
}

#[test]
fn test_update_of_missing_record_fails() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let ghost: Assignment = Assignment {
        id: AssignmentId::new(8),
        schedule_id: ScheduleId::new(1),
        person_id: PersonId::new(1),
        area_id: AreaId::new(1),
        status: AssignmentStatus::Assigned,
    };

    assert!(store.update_assignment(&ghost).is_err());
}

#[test]
fn test_trade_filter_by_side() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let trade: TradeRequest = store
        .create_trade(NewTradeRequest {
            requester_assignment_id: AssignmentId::new(1),
            target_assignment_id: AssignmentId::new(2),
        })
        .unwrap();
    store
        .update_trade(&trade.with_status(TradeStatus::Rejected))
        .unwrap();
    store
        .create_trade(NewTradeRequest {
            requester_assignment_id: AssignmentId::new(2),
            target_assignment_id: AssignmentId::new(3),
        })
        .unwrap();

    let pending: Vec<TradeRequest> = store.list_trades(&TradeFilter::pending()).unwrap();
    let from_one: Vec<TradeRequest> = store
        .list_trades(&TradeFilter {
            requester_assignment_id: Some(AssignmentId::new(1)),
            ..TradeFilter::default()
        })
        .unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].requester_assignment_id, AssignmentId::new(2));
    assert_eq!(from_one.len(), 1);
    assert_eq!(from_one[0].status, TradeStatus::Rejected);
}

#[test]
fn test_atomically_rolls_back_on_error() {
    let mut store: InMemoryStore = create_test_store(&[person(1, 1)], &[area(1, 1, &[1])], 1);
    let before: InMemoryStore = store.clone();

    let result: Result<(), StoreError> = store.atomically(|s: &mut InMemoryStore| {
        s.create_assignment(NewAssignment {
            schedule_id: ScheduleId::new(1),
            person_id: PersonId::new(1),
            area_id: AreaId::new(1),
        })?;
        s.create_trade(NewTradeRequest {
            requester_assignment_id: AssignmentId::new(1),
            target_assignment_id: AssignmentId::new(2),
        })?;
        Err(StoreError::new("boom"))
    });

    assert!(result.is_err());
    assert_eq!(store, before);
}

#[test]
fn test_atomically_keeps_writes_on_success() {
    let mut store: InMemoryStore = create_test_store(&[person(1, 1)], &[area(1, 1, &[1])], 1);

    let created: Assignment = store
        .atomically(|s: &mut InMemoryStore| {
            s.create_assignment(NewAssignment {
                schedule_id: ScheduleId::new(1),
                person_id: PersonId::new(1),
                area_id: AreaId::new(1),
            })
        })
        .unwrap();

    assert_eq!(store.assignments().count(), 1);
    assert_eq!(store.get_assignment(created.id).unwrap(), Some(created));
}
