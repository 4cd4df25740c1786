// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_roster_domain::{
    Area, AreaId, Assignment, AssignmentId, AssignmentStatus, EnrollmentStatus, NewAssignment,
    Person, PersonId, Schedule, ScheduleId,
};
use time::Date;

use crate::{AssignmentStore, InMemoryStore, RandomTieBreaker};

pub const TEST_SEED: u64 = 0x5eed;

pub fn create_test_tie_breaker() -> RandomTieBreaker {
    RandomTieBreaker::seeded(TEST_SEED)
}

/// Returns the `n`-th Friday of 2026, starting at January 2nd.
pub fn duty_date(n: i64) -> Date {
    Date::from_calendar_date(2026, time::Month::January, 2).unwrap() + time::Duration::weeks(n)
}

pub fn person(id: i64, grade: u8) -> Person {
    Person::new(PersonId::new(id), &format!("Person {id}"), grade)
}

pub fn inactive_person(id: i64, grade: u8) -> Person {
    person(id, grade).with_status(EnrollmentStatus::Inactive)
}

pub fn area(id: i64, required_headcount: u32, grades: &[u8]) -> Area {
    Area::new(
        AreaId::new(id),
        &format!("Area {id}"),
        required_headcount,
        grades.iter().copied(),
    )
}

pub fn schedule(id: i64) -> Schedule {
    Schedule::new(ScheduleId::new(id), duty_date(id))
}

/// Builds a store from the given records.
pub fn create_test_store(persons: &[Person], areas: &[Area], schedule_count: i64) -> InMemoryStore {
    let mut store: InMemoryStore = InMemoryStore::new();
    for p in persons {
        store.insert_person(p.clone());
    }
    for a in areas {
        store.insert_area(a.clone());
    }
    for id in 1..=schedule_count {
        store.insert_schedule(schedule(id));
    }
    store
}

/// A roster shaped like a school year: ten people per grade in three
/// grades, one of the first grade on leave, and four areas.
pub fn create_school_store(schedule_count: i64) -> InMemoryStore {
    let mut persons: Vec<Person> = Vec::new();
    for grade in 1..=3u8 {
        for n in 1..=10i64 {
            let id: i64 = i64::from(grade - 1) * 10 + n;
            if id == 5 {
                persons.push(inactive_person(id, grade));
            } else {
                persons.push(person(id, grade));
            }
        }
    }
    let areas: Vec<Area> = vec![
        area(1, 2, &[1]),
        area(2, 2, &[2]),
        area(3, 2, &[3]),
        area(4, 1, &[3]),
    ];
    create_test_store(&persons, &areas, schedule_count)
}

/// Stores an assignment directly, bypassing the engines.
pub fn insert_assignment(
    store: &mut InMemoryStore,
    schedule_id: i64,
    person_id: i64,
    area_id: i64,
    status: AssignmentStatus,
) -> Assignment {
    let created: Assignment = store
        .create_assignment(NewAssignment {
            schedule_id: ScheduleId::new(schedule_id),
            person_id: PersonId::new(person_id),
            area_id: AreaId::new(area_id),
        })
        .unwrap();
    let stored: Assignment = created.with_status(status);
    store.update_assignment(&stored).unwrap();
    stored
}

pub fn get_assignment(store: &mut InMemoryStore, id: AssignmentId) -> Assignment {
    store.get_assignment(id).unwrap().unwrap()
}
