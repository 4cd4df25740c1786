// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_roster_domain::{Assignment, AssignmentId, AssignmentStatus};
use tracing::info;

use crate::coverage::ensure_not_double_booked;
use crate::error::CoreError;
use crate::store::Store;

/// Records completion, cancellation or delinquency of an assignment.
///
/// Any status may follow any other. Bringing a canceled assignment back to
/// an active status re-checks that its occupant is not already busy on the
/// same schedule.
///
/// # Errors
///
/// Returns an error if:
/// - The assignment does not exist
/// - Reactivating it would double-book its occupant
/// - The store fails
pub fn set_assignment_status<S: Store>(
    store: &mut S,
    assignment_id: AssignmentId,
    status: AssignmentStatus,
) -> Result<Assignment, CoreError> {
    store.atomically(|store: &mut S| {
        let assignment: Assignment = store
            .get_assignment(assignment_id)?
            .ok_or(CoreError::AssignmentNotFound(assignment_id))?;

        if assignment.status == status {
            return Ok(assignment);
        }

        if !assignment.is_active() && status.is_active() {
            ensure_not_double_booked(
                store,
                assignment.schedule_id,
                assignment.person_id,
                &[assignment.id],
            )?;
        }

        let updated: Assignment = assignment.with_status(status);
        store.update_assignment(&updated)?;

        info!(
            assignment_id = assignment_id.value(),
            from = %assignment.status,
            to = %status,
            "Assignment status updated"
        );
        Ok(updated)
    })
}
