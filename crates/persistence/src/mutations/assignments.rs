// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{Assignment, AssignmentId, AssignmentStatus, NewAssignment};
use tracing::debug;

use crate::backend::last_insert_rowid;
use crate::data_models::NewAssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Inserts an assignment in the assigned status.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the schedule,
/// person or area does not exist.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    new: NewAssignment,
) -> Result<Assignment, PersistenceError> {
    let status: AssignmentStatus = AssignmentStatus::Assigned;
    diesel::insert_into(assignments::table)
        .values(NewAssignmentRow {
            schedule_id: new.schedule_id.value(),
            person_id: new.person_id.value(),
            area_id: new.area_id.value(),
            status: status.as_str(),
        })
        .execute(conn)?;

    let assignment_id: i64 = last_insert_rowid(conn)?;
    debug!(
        assignment_id,
        schedule_id = new.schedule_id.value(),
        person_id = new.person_id.value(),
        area_id = new.area_id.value(),
        "Inserted assignment"
    );

    Ok(Assignment {
        id: AssignmentId::new(assignment_id),
        schedule_id: new.schedule_id,
        person_id: new.person_id,
        area_id: new.area_id,
        status,
    })
}

/// Replaces every column of an existing assignment.
///
/// # Errors
///
/// Returns an error if the assignment does not exist or the update fails.
pub fn update_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        assignments::table.filter(assignments::assignment_id.eq(assignment.id.value())),
    )
    .set((
        assignments::schedule_id.eq(assignment.schedule_id.value()),
        assignments::person_id.eq(assignment.person_id.value()),
        assignments::area_id.eq(assignment.area_id.value()),
        assignments::status.eq(assignment.status.as_str()),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(assignment.id.to_string()));
    }
    Ok(())
}
