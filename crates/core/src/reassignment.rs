// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Refilling a canceled slot.
//!
//! Unlike batch allocation, reassignment is deterministic: the replacement is
//! the eligible person with the lowest fairness count, then the lowest
//! identity. Repeating the call on the same store state picks the same
//! person.

use std::collections::HashSet;

use duty_roster_domain::{Area, Assignment, AssignmentId, AssignmentStatus, Person, PersonId};
use serde::Serialize;
use tracing::info;

use crate::eligibility::eligible;
use crate::error::CoreError;
use crate::fairness::{FairnessLedger, count_for};
use crate::store::{AssignmentFilter, Store};

/// Outcome of a reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reassignment {
    /// The slot, now held by the replacement with status `Assigned`.
    pub assignment: Assignment,
    /// Who held the slot before it was canceled.
    pub previous_person_id: PersonId,
    /// The replacement's fairness count including this slot.
    pub fairness_count: u32,
}

/// Refills a canceled assignment in place.
///
/// # Errors
///
/// Returns an error if:
/// - The assignment does not exist
/// - The assignment is not canceled
/// - Its schedule or area no longer exists
/// - Nobody eligible is left
/// - The store fails
///
/// Nothing is written unless a replacement is found.
pub fn reassign<S: Store>(
    store: &mut S,
    assignment_id: AssignmentId,
) -> Result<Reassignment, CoreError> {
    store.atomically(|store: &mut S| {
        let assignment: Assignment = store
            .get_assignment(assignment_id)?
            .ok_or(CoreError::AssignmentNotFound(assignment_id))?;

        if assignment.status != AssignmentStatus::Canceled {
            return Err(CoreError::AssignmentNotCanceled(assignment_id));
        }

        if store.get_schedule(assignment.schedule_id)?.is_none() {
            return Err(CoreError::ScheduleNotFound(assignment.schedule_id));
        }

        let area: Area = store
            .get_area(assignment.area_id)?
            .ok_or(CoreError::AreaNotFound(assignment.area_id))?;

        // People already busy on this date, not counting the vacated slot.
        let busy: HashSet<PersonId> = store
            .list_active_for_schedule(assignment.schedule_id)?
            .iter()
            .filter(|a| a.id != assignment.id)
            .map(|a| a.person_id)
            .collect();

        let roster: Vec<Person> = store.list_active_persons()?;
        let history: Vec<Assignment> = store.list_assignments(&AssignmentFilter::default())?;
        let ledger: FairnessLedger = FairnessLedger::seed(&roster, &history);

        let replacement: PersonId = eligible(&roster, &area, &busy)
            .into_iter()
            .min_by_key(|p| (ledger.count_for(p.id), p.id))
            .map(|p| p.id)
            .ok_or(CoreError::NoEligibleCandidate {
                assignment_id,
                area_id: area.id,
            })?;

        let updated: Assignment = assignment.reassigned_to(replacement);
        store.update_assignment(&updated)?;
        let fairness_count: u32 = count_for(store, replacement)?;

        info!(
            assignment_id = assignment_id.value(),
            previous_person_id = assignment.person_id.value(),
            person_id = replacement.value(),
            fairness_count,
            "Reassigned canceled slot"
        );

        Ok(Reassignment {
            assignment: updated,
            previous_person_id: assignment.person_id,
            fairness_count,
        })
    })
}
