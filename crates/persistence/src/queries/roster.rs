// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Person, area and schedule queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{Area, AreaId, EnrollmentStatus, Person, Schedule, ScheduleId};
use tracing::debug;

use crate::data_models::{AreaGradeRow, AreaRow, PersonRow, ScheduleRow};
use crate::diesel_schema::{area_grades, areas, persons, schedules};
use crate::error::PersistenceError;

/// Lists enrolled persons.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_active_persons(conn: &mut SqliteConnection) -> Result<Vec<Person>, PersistenceError> {
    let rows: Vec<PersonRow> = persons::table
        .filter(persons::status.eq(EnrollmentStatus::Active.as_str()))
        .order(persons::person_id.asc())
        .select(PersonRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded active persons");
    rows.into_iter().map(PersonRow::into_domain).collect()
}

/// Lists every person, enrolled or not.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_persons(conn: &mut SqliteConnection) -> Result<Vec<Person>, PersistenceError> {
    let rows: Vec<PersonRow> = persons::table
        .order(persons::person_id.asc())
        .select(PersonRow::as_select())
        .load(conn)?;
    rows.into_iter().map(PersonRow::into_domain).collect()
}

/// Lists every area with its eligible grades.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_areas(conn: &mut SqliteConnection) -> Result<Vec<Area>, PersistenceError> {
    let rows: Vec<AreaRow> = areas::table
        .order(areas::area_id.asc())
        .select(AreaRow::as_select())
        .load(conn)?;

    let mut grades: HashMap<i64, Vec<i32>> = HashMap::new();
    for grade_row in area_grades::table
        .select(AreaGradeRow::as_select())
        .load::<AreaGradeRow>(conn)?
    {
        grades
            .entry(grade_row.area_id)
            .or_default()
            .push(grade_row.grade);
    }

    debug!(count = rows.len(), "Loaded areas");
    rows.into_iter()
        .map(|row| {
            let grade_values: Vec<i32> = grades.remove(&row.area_id).unwrap_or_default();
            row.into_domain(&grade_values)
        })
        .collect()
}

/// Retrieves an area by identity.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
/// Returns `Ok(None)` if the area is not found.
pub fn get_area(
    conn: &mut SqliteConnection,
    area_id: AreaId,
) -> Result<Option<Area>, PersistenceError> {
    let row: Option<AreaRow> = areas::table
        .filter(areas::area_id.eq(area_id.value()))
        .select(AreaRow::as_select())
        .first(conn)
        .optional()?;

    let Some(row) = row else {
        return Ok(None);
    };

    let grades: Vec<i32> = area_grades::table
        .filter(area_grades::area_id.eq(area_id.value()))
        .select(area_grades::grade)
        .load(conn)?;

    row.into_domain(&grades).map(Some)
}

/// Lists every schedule.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_schedules(conn: &mut SqliteConnection) -> Result<Vec<Schedule>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedules::table
        .order(schedules::schedule_id.asc())
        .select(ScheduleRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded schedules");
    rows.into_iter().map(ScheduleRow::into_domain).collect()
}

/// Retrieves a schedule by identity.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
/// Returns `Ok(None)` if the schedule is not found.
pub fn get_schedule(
    conn: &mut SqliteConnection,
    schedule_id: ScheduleId,
) -> Result<Option<Schedule>, PersistenceError> {
    schedules::table
        .filter(schedules::schedule_id.eq(schedule_id.value()))
        .select(ScheduleRow::as_select())
        .first(conn)
        .optional()?
        .map(ScheduleRow::into_domain)
        .transpose()
}
