// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster::AssignmentFilter;
use duty_roster_domain::{Assignment, AssignmentId};

use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Lists assignments matching every set field of `filter`.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    filter: &AssignmentFilter,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query = assignments::table
        .select(AssignmentRow::as_select())
        .into_boxed();

    if let Some(schedule_id) = filter.schedule_id {
        query = query.filter(assignments::schedule_id.eq(schedule_id.value()));
    }
    if let Some(person_id) = filter.person_id {
        query = query.filter(assignments::person_id.eq(person_id.value()));
    }
    if let Some(area_id) = filter.area_id {
        query = query.filter(assignments::area_id.eq(area_id.value()));
    }
    if let Some(status) = filter.status {
        query = query.filter(assignments::status.eq(status.as_str()));
    }

    let rows: Vec<AssignmentRow> = query.order(assignments::assignment_id.asc()).load(conn)?;
    rows.into_iter().map(AssignmentRow::into_domain).collect()
}

/// Retrieves an assignment by identity.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: AssignmentId,
) -> Result<Option<Assignment>, PersistenceError> {
    assignments::table
        .filter(assignments::assignment_id.eq(assignment_id.value()))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(AssignmentRow::into_domain)
        .transpose()
}
