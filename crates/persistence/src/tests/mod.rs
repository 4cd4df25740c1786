// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod engine_tests;

use duty_roster_domain::{Area, AreaId, Person, PersonId, Schedule, ScheduleId};
use time::Date;

use crate::Persistence;

/// Returns the `n`-th Friday of 2026, starting at January 2nd.
pub fn duty_date(n: i64) -> Date {
    Date::from_calendar_date(2026, time::Month::January, 2).unwrap() + time::Duration::weeks(n)
}

pub fn person(id: i64, grade: u8) -> Person {
    Person::new(PersonId::new(id), &format!("Person {id}"), grade)
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

/// Opens an in-memory database and seeds it with the given records.
pub fn create_test_persistence(
    persons: &[Person],
    areas: &[Area],
    schedule_count: i64,
) -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    for p in persons {
        persistence.insert_person(p).unwrap();
    }
    for a in areas {
        persistence.insert_area(a).unwrap();
    }
    for id in 1..=schedule_count {
        persistence.insert_schedule(&schedule(id)).unwrap();
    }
    persistence
}
