// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The engines run against `SQLite` exactly as they do in memory.

use std::collections::HashSet;

use duty_roster::{
    AllocationSummary, AssignmentFilter, AssignmentStore, CoreError, DutyRoster, ErrorKind,
    RandomTieBreaker, Reassignment, TradeFilter, TradeStore,
};
use duty_roster_domain::{
    AreaId, Assignment, AssignmentStatus, NewAssignment, PersonId, ScheduleId, TradeRequest,
    TradeStatus,
};

use super::{area, create_test_persistence, person};
use crate::Persistence;

fn create_roster(persistence: Persistence) -> DutyRoster<Persistence, RandomTieBreaker> {
    DutyRoster::with_tie_breaker(persistence, RandomTieBreaker::seeded(7))
}

#[test]
fn test_allocate_all_persists_placements() {
    let persons: Vec<_> = (1..=6).map(|id| person(id, 1)).collect();
    let roster: DutyRoster<Persistence> = create_roster(create_test_persistence(
        &persons,
        &[area(1, 2, &[1]), area(2, 1, &[1])],
        3,
    ));

    let summary: AllocationSummary = roster.allocate_all().unwrap();
    assert_eq!(summary.total_placed, 9);

    let mut persistence: Persistence = roster.into_store().unwrap();
    for schedule_id in 1..=3 {
        let on_schedule: Vec<Assignment> = persistence
            .list_active_for_schedule(ScheduleId::new(schedule_id))
            .unwrap();
        let distinct: HashSet<PersonId> = on_schedule.iter().map(|a| a.person_id).collect();
        assert_eq!(on_schedule.len(), 3);
        assert_eq!(distinct.len(), 3);
    }
}

#[test]
fn test_failed_batch_writes_nothing() {
    let persistence: Persistence = create_test_persistence(&[person(1, 2)], &[area(1, 1, &[1])], 2);
    let roster: DutyRoster<Persistence> = create_roster(persistence);

    let err: CoreError = roster.allocate_all().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Exhausted);
    let stored: usize = roster
        .inspect(|store| store.list_assignments(&AssignmentFilter::default()))
        .unwrap()
        .unwrap()
        .len();
    assert_eq!(stored, 0);
}

#[test]
fn test_cancel_then_reassign_persists_replacement() {
    let roster: DutyRoster<Persistence> = create_roster(create_test_persistence(
        &[person(1, 1), person(2, 1), person(3, 1)],
        &[area(1, 1, &[1])],
        1,
    ));
    let placed: Assignment = roster.allocate(ScheduleId::new(1)).unwrap().placed[0];

    roster
        .set_assignment_status(placed.id, AssignmentStatus::Canceled)
        .unwrap();
    let refilled: Reassignment = roster.reassign(placed.id).unwrap();

    assert_eq!(refilled.previous_person_id, placed.person_id);
    // Canceled slots do not count, so everyone is at zero and the lowest
    // identity wins, even if that is the previous occupant.
    assert_eq!(refilled.assignment.person_id, PersonId::new(1));
    assert_eq!(refilled.fairness_count, 1);

    let stored: Option<Assignment> = roster
        .inspect(|store| store.get_assignment(placed.id))
        .unwrap()
        .unwrap();
    assert_eq!(stored, Some(refilled.assignment));
}

#[test]
fn test_trade_round_trip_against_sqlite() {
    let mut persistence: Persistence =
        create_test_persistence(&[person(1, 1), person(2, 1)], &[area(1, 1, &[1])], 2);
    let a: Assignment = persistence
        .create_assignment(NewAssignment {
            schedule_id: ScheduleId::new(1),
            person_id: PersonId::new(1),
            area_id: AreaId::new(1),
        })
        .unwrap();
    let b: Assignment = persistence
        .create_assignment(NewAssignment {
            schedule_id: ScheduleId::new(2),
            person_id: PersonId::new(2),
            area_id: AreaId::new(1),
        })
        .unwrap();
    let roster: DutyRoster<Persistence> = create_roster(persistence);

    let trade: TradeRequest = roster.propose_trade(a.id, b.id).unwrap();
    let duplicate: CoreError = roster.propose_trade(b.id, a.id).unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::Conflict);

    roster
        .resolve_trade(trade.id, TradeStatus::Accepted)
        .unwrap();

    let mut persistence: Persistence = roster.into_store().unwrap();
    assert_eq!(
        persistence
            .get_assignment(a.id)
            .unwrap()
            .map(|x| x.person_id),
        Some(PersonId::new(2))
    );
    assert_eq!(
        persistence
            .get_assignment(b.id)
            .unwrap()
            .map(|x| x.person_id),
        Some(PersonId::new(1))
    );
    let pending: Vec<TradeRequest> = persistence.list_trades(&TradeFilter::pending()).unwrap();
    assert!(pending.is_empty());
}

#[test]
fn test_refused_proposal_leaves_database_untouched() {
    let roster: DutyRoster<Persistence> = create_roster(create_test_persistence(
        &[person(1, 1), person(2, 1)],
        &[area(1, 1, &[1]), area(2, 1, &[1])],
        2,
    ));
    roster.allocate(ScheduleId::new(1)).unwrap();
    roster.allocate(ScheduleId::new(2)).unwrap();

    let slots: Vec<Assignment> = roster
        .inspect(|store| store.list_assignments(&AssignmentFilter::default()))
        .unwrap()
        .unwrap();
    // Both people work both schedules, so any swap across schedules
    // double-books someone.
    let first: Assignment = slots[0];
    let second: Assignment = slots
        .iter()
        .copied()
        .find(|s| s.schedule_id != first.schedule_id && s.person_id != first.person_id)
        .unwrap();
    let err: CoreError = roster.propose_trade(first.id, second.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let after: Vec<Assignment> = roster
        .inspect(|store| store.list_assignments(&AssignmentFilter::default()))
        .unwrap()
        .unwrap();
    assert_eq!(after, slots);
    let trades: usize = roster
        .inspect(|store| store.list_trades(&TradeFilter::default()))
        .unwrap()
        .unwrap()
        .len();
    assert_eq!(trades, 0);
}
