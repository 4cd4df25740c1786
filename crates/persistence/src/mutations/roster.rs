// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed inserts for persons, areas and schedules.
//!
//! These records belong to the roster, area and schedule collaborators.
//! The engines never write them; these functions let an operator load them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{Area, Person, Schedule};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::{AreaGradeRow, NewAreaRow, NewPersonRow, NewScheduleRow, format_duty_date};
use crate::diesel_schema::{area_grades, areas, persons, schedules};
use crate::error::PersistenceError;

/// Inserts or replaces a person.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_person(conn: &mut SqliteConnection, person: &Person) -> Result<(), PersistenceError> {
    let row: NewPersonRow<'_> = NewPersonRow::from(person);
    diesel::insert_into(persons::table)
        .values(&row)
        .on_conflict(persons::person_id)
        .do_update()
        .set((
            persons::name.eq(row.name),
            persons::grade.eq(row.grade),
            persons::status.eq(row.status),
            persons::role.eq(row.role),
        ))
        .execute(conn)?;

    debug!(
        person_id = person.id.value(),
        grade = person.grade,
        "Stored person"
    );
    Ok(())
}

/// Inserts or replaces an area together with its eligible grades.
///
/// # Errors
///
/// Returns an error if the headcount does not fit its column or the
/// database write fails.
pub fn upsert_area(conn: &mut SqliteConnection, area: &Area) -> Result<(), PersistenceError> {
    let required_headcount: i32 = area.required_headcount.to_i32().ok_or_else(|| {
        PersistenceError::OutOfRange(format!("required headcount {}", area.required_headcount))
    })?;
    let area_id: i64 = area.id.value();

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let exists: bool = diesel::select(diesel::dsl::exists(
            areas::table.filter(areas::area_id.eq(area_id)),
        ))
        .get_result(conn)?;

        if exists {
            diesel::update(areas::table.filter(areas::area_id.eq(area_id)))
                .set((
                    areas::name.eq(&area.name),
                    areas::required_headcount.eq(required_headcount),
                ))
                .execute(conn)?;
            diesel::delete(area_grades::table.filter(area_grades::area_id.eq(area_id)))
                .execute(conn)?;
        } else {
            diesel::insert_into(areas::table)
                .values(NewAreaRow {
                    area_id,
                    name: &area.name,
                    required_headcount,
                })
                .execute(conn)?;
        }

        let grade_rows: Vec<AreaGradeRow> = area
            .eligible_grades
            .iter()
            .map(|grade| AreaGradeRow {
                area_id,
                grade: i32::from(*grade),
            })
            .collect();
        diesel::insert_into(area_grades::table)
            .values(&grade_rows)
            .execute(conn)?;
        Ok(())
    })?;

    debug!(
        area_id = area.id.value(),
        required_headcount = area.required_headcount,
        grades = area.eligible_grades.len(),
        "Stored area"
    );
    Ok(())
}

/// Inserts or replaces a schedule.
///
/// # Errors
///
/// Returns an error if the database write fails, including when another
/// schedule already holds the same date.
pub fn upsert_schedule(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
) -> Result<(), PersistenceError> {
    let row: NewScheduleRow = NewScheduleRow {
        schedule_id: schedule.id.value(),
        duty_date: format_duty_date(schedule.duty_date)?,
    };

    diesel::insert_into(schedules::table)
        .values(&row)
        .on_conflict(schedules::schedule_id)
        .do_update()
        .set(schedules::duty_date.eq(&row.duty_date))
        .execute(conn)?;

    debug!(
        schedule_id = schedule.id.value(),
        duty_date = %row.duty_date,
        "Stored schedule"
    );
    Ok(())
}
