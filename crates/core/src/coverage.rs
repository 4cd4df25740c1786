// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duplicate-coverage checks shared by the trade and status operations.

use duty_roster_domain::{AssignmentId, PersonId, ScheduleId};

use crate::error::CoreError;
use crate::store::AssignmentStore;

/// Fails if `person_id` holds an active assignment on `schedule_id` other
/// than the ones listed in `excluded`.
///
/// # Errors
///
/// Returns `CoreError::DuplicateCoverage` on a clash, or a store error.
pub(crate) fn ensure_not_double_booked<S: AssignmentStore>(
    store: &mut S,
    schedule_id: ScheduleId,
    person_id: PersonId,
    excluded: &[AssignmentId],
) -> Result<(), CoreError> {
    let clash: bool = store
        .list_active_for_schedule(schedule_id)?
        .iter()
        .any(|a| a.person_id == person_id && !excluded.contains(&a.id));

    if clash {
        return Err(CoreError::DuplicateCoverage {
            schedule_id,
            person_id,
        });
    }
    Ok(())
}
